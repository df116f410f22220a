// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Scene editor: hosts an [`xyz::Scene`](crate::xyz::Scene) inside a body.
//!
//! The editor is shared (`Arc`) between the UI, which draws it, and
//! background tasks such as animators, which mutate the scene and
//! request redraws. Background tasks should hold it weakly so that
//! closing the window ends them.

use crate::base::Result;
use crate::core::{Body, RedrawSignal, Renderer, Widget, WidgetBase};
use crate::events::{Event, Rect, Size};
use crate::tree::NodeId;
use crate::xyz::{Node, Scene};
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Smallest marker drawn for a solid, in pixels.
const MIN_MARKER: f32 = 3.0;

/// How clicks in the scene view are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Clicks are ignored.
    #[default]
    NotSelectable,
    /// Clicks select the solid under the pointer.
    Selectable,
    /// Clicks select, and the selection can be moved by tools.
    Manipulable,
}

/// The display surface of a scene editor.
#[derive(Debug)]
pub struct SceneWidget {
    selection_mode: RwLock<SelectionMode>,
    selected: Mutex<Option<NodeId>>,
    updates: AtomicU64,
    redraw: Arc<RedrawSignal>,
}

impl SceneWidget {
    fn new(redraw: Arc<RedrawSignal>) -> Self {
        Self {
            selection_mode: RwLock::new(SelectionMode::default()),
            selected: Mutex::new(None),
            updates: AtomicU64::new(0),
            redraw,
        }
    }

    /// Requests that the scene be redrawn.
    pub fn update_widget(&self) {
        self.updates.fetch_add(1, Ordering::Release);
        self.redraw.request();
    }

    /// Returns how many redraws have been requested so far.
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::Acquire)
    }

    /// Returns the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        *self.selection_mode.read()
    }

    /// Sets the selection mode; leaving selection clears the current selection.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        *self.selection_mode.write() = mode;
        if mode == SelectionMode::NotSelectable {
            *self.selected.lock() = None;
        }
    }

    /// Returns the selected node.
    pub fn selected(&self) -> Option<NodeId> {
        *self.selected.lock()
    }
}

/// A scene plus the widget that shows it.
#[derive(Debug)]
pub struct SceneEditor {
    scene: RwLock<Scene>,
    widget: SceneWidget,
}

impl SceneEditor {
    /// Creates an editor and adds its view to `body`.
    pub fn new(body: &mut Body) -> Arc<Self> {
        let editor = Arc::new(Self::with_signal(body.redraw_signal()));
        body.add(SceneView::new(editor.clone()));
        editor
    }

    /// Creates an editor that is not shown in any body.
    pub fn detached() -> Arc<Self> {
        Arc::new(Self::with_signal(Arc::new(RedrawSignal::default())))
    }

    fn with_signal(redraw: Arc<RedrawSignal>) -> Self {
        Self {
            scene: RwLock::new(Scene::new()),
            widget: SceneWidget::new(redraw),
        }
    }

    /// Returns read access to the scene.
    pub fn scene_xyz(&self) -> RwLockReadGuard<'_, Scene> {
        self.scene.read()
    }

    /// Returns write access to the scene.
    pub fn scene_xyz_mut(&self) -> RwLockWriteGuard<'_, Scene> {
        self.scene.write()
    }

    /// Returns the display surface.
    pub fn scene_widget(&self) -> &SceneWidget {
        &self.widget
    }
}

/// A drawn marker: where a node landed on screen.
struct Marker {
    id: NodeId,
    rect: Rect,
    depth: f32,
    color: crate::colors::Color,
}

/// The body child that draws a [`SceneEditor`].
///
/// Solids are drawn as flat markers at their projected positions; there
/// is no mesh rasterization.
pub struct SceneView {
    base: WidgetBase,
    editor: Arc<SceneEditor>,
}

impl SceneView {
    fn new(editor: Arc<SceneEditor>) -> Self {
        Self {
            base: WidgetBase::new("scene"),
            editor,
        }
    }

    fn markers(&self, viewport: Rect) -> Vec<Marker> {
        let scene = self.editor.scene_xyz();
        let camera = scene.camera;
        let mut markers: Vec<Marker> = scene
            .nodes()
            .filter_map(|(id, _, node)| {
                let Node::Solid(solid) = node else {
                    return None;
                };
                let pos = solid.pose.pos;
                let center = camera.project(pos, viewport)?;
                let radius = scene
                    .mesh(&solid.mesh)
                    .map_or(0.5, |mesh| mesh.bounding_radius() * solid.pose.scale.max());
                let half = camera
                    .projected_radius(pos, radius, viewport)
                    .max(MIN_MARKER) as i32;
                Some(Marker {
                    id,
                    rect: Rect::new(
                        center.x - half,
                        center.y - half,
                        2 * half as u32,
                        2 * half as u32,
                    ),
                    depth: (pos - camera.pose.pos).norm(),
                    color: solid.color,
                })
            })
            .collect();
        markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        markers
    }
}

impl Widget for SceneView {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn style(&mut self) {
        let style = self.base.style_mut();
        style.grow_x = true;
        style.grow_y = 1.0;
        style.min_size = Size::new(200, 200);
    }

    fn size_up(&mut self) {
        let min = self.base.style().min_size;
        self.base.set_actual_size(min);
    }

    fn render(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let viewport = self.base.bbox();
        renderer.draw_rect(viewport, self.editor.scene_xyz().background)?;
        for marker in self.markers(viewport) {
            if let Some(clipped) = clip(marker.rect, viewport) {
                renderer.draw_rect(clipped, marker.color)?;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        let widget = self.editor.scene_widget();
        if !event.is_primary_click() || widget.selection_mode() == SelectionMode::NotSelectable {
            return false;
        }
        let hit = self
            .markers(self.base.bbox())
            .into_iter()
            .rev()
            .find(|marker| marker.rect.contains(event.position))
            .map(|marker| marker.id);
        *widget.selected.lock() = hit;
        tracing::debug!(?hit, "scene selection");
        widget.update_widget();
        true
    }
}

fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let x0 = rect.x.max(bounds.x);
    let y0 = rect.y.max(bounds.y);
    let x1 = (rect.x + rect.width as i32).min(bounds.x + bounds.width as i32);
    let y1 = (rect.y + rect.height as i32).min(bounds.y + bounds.height as i32);
    (x1 > x0 && y1 > y0).then(|| Rect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{MouseButton, Point};
    use crate::xyz::{vec3, Mesh, Solid};

    fn editor_in_body() -> (Body, Arc<SceneEditor>, NodeId) {
        let mut body = Body::new("scene");
        let editor = SceneEditor::new(&mut body);
        let cube = {
            let mut scene = editor.scene_xyz_mut();
            scene.camera.pose.pos = vec3(0.0, 3.0, 8.0);
            scene.camera.look_at(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
            let mesh = scene.add_mesh(
                "cube-mesh",
                Mesh::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
            );
            scene.add_solid("animated-cube", Solid::new(mesh))
        };
        body.layout(Size::new(800, 600));
        (body, editor, cube)
    }

    #[test]
    fn update_widget_counts_and_signals() {
        let (body, editor, _) = editor_in_body();
        let hits = Arc::new(AtomicU64::new(0));
        let counter = hits.clone();
        body.redraw_signal().set_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        editor.scene_widget().update_widget();
        editor.scene_widget().update_widget();
        assert_eq!(editor.scene_widget().update_count(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clicking_a_solid_selects_it_when_selectable() {
        let (mut body, editor, cube) = editor_in_body();
        let view = body.child(0).unwrap().widget_base().bbox();
        let camera = editor.scene_xyz().camera;
        let at = camera.project(vec3(0.0, 0.0, 0.0), view).unwrap();
        let click = Event::click(at, MouseButton::Left);

        assert!(!body.handle_event(&click));
        assert_eq!(editor.scene_widget().selected(), None);

        editor.scene_widget().set_selection_mode(SelectionMode::Manipulable);
        assert!(body.handle_event(&click));
        assert_eq!(editor.scene_widget().selected(), Some(cube));

        let corner = Point::new(view.x + 1, view.y + 1);
        body.handle_event(&Event::click(corner, MouseButton::Left));
        assert_eq!(editor.scene_widget().selected(), None);
    }

    #[test]
    fn clip_trims_to_bounds() {
        let bounds = Rect::new(0, 0, 10, 10);
        assert_eq!(clip(Rect::new(-5, 5, 10, 10), bounds), Some(Rect::new(0, 5, 5, 5)));
        assert_eq!(clip(Rect::new(20, 20, 5, 5), bounds), None);
    }
}
