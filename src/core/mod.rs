// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Core widget system and window body management.

use crate::base::Result;
use crate::colors::{Color, SCHEME};
use crate::events::{Event, Point, Rect, Size};
use crate::styles::Style;
use crate::widgets::Snackbars;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Outer margin of the body, in pixels.
const BODY_PADDING: u32 = 16;
/// Vertical gap between children, in pixels.
const CHILD_SPACING: u32 = 12;

/// A widget in the UI hierarchy.
pub trait Widget: Send {
    /// Returns the widget base for this widget.
    fn widget_base(&self) -> &WidgetBase;

    /// Returns a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Updates the style properties of the widget.
    fn style(&mut self) {}

    /// Calculates the size requirements of the widget.
    fn size_up(&mut self) {}

    /// Renders the widget.
    fn render(&mut self, _renderer: &mut dyn Renderer) -> Result<()> {
        Ok(())
    }

    /// Handles an event.
    /// Returns true if the event was handled.
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

type ClickHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Base implementation for widgets.
pub struct WidgetBase {
    name: String,
    style: Style,
    actual_size: Size,
    bbox: Rect,
    on_click: Option<ClickHandler>,
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("actual_size", &self.actual_size)
            .field("bbox", &self.bbox)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl WidgetBase {
    /// Creates a new widget base.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            actual_size: Size::zero(),
            bbox: Rect::new(0, 0, 0, 0),
            on_click: None,
        }
    }

    /// Returns the name of the widget.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns a mutable reference to the style.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Returns the size the widget asked for in `size_up`.
    pub fn actual_size(&self) -> Size {
        self.actual_size
    }

    /// Sets the actual size.
    pub fn set_actual_size(&mut self, size: Size) {
        self.actual_size = size;
    }

    /// Returns the bounding box assigned by layout.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Sets the bounding box.
    pub fn set_bbox(&mut self, bbox: Rect) {
        self.bbox = bbox;
    }

    /// Sets the click handler.
    pub fn set_on_click<F>(&mut self, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Box::new(handler));
    }

    /// Calls the click handler if set. Returns true if there was one.
    pub fn call_on_click(&self, event: &Event) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

/// A renderer for drawing widgets.
pub trait Renderer {
    /// Fills a rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draws text at the given position.
    fn draw_text(&mut self, text: &str, position: Point, color: Color) -> Result<()>;

    /// Clears the render target.
    fn clear(&mut self, color: Color) -> Result<()>;
}

/// Shared redraw request slot.
///
/// Anything that changes what a body shows off the UI thread calls
/// [`RedrawSignal::request`]; the window installs a hook to wake up.
#[derive(Default)]
pub struct RedrawSignal {
    hook: RwLock<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl std::fmt::Debug for RedrawSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawSignal")
            .field("hooked", &self.hook.read().is_some())
            .finish()
    }
}

impl RedrawSignal {
    /// Installs the function called on every request.
    pub fn set_hook<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.hook.write() = Some(Box::new(hook));
    }

    /// Requests a redraw.
    pub fn request(&self) {
        if let Some(hook) = self.hook.read().as_ref() {
            hook();
        }
    }
}

/// The content of a window: a titled column of widgets plus snackbars.
pub struct Body {
    title: String,
    children: Vec<Box<dyn Widget>>,
    snackbars: Snackbars,
    redraw: Arc<RedrawSignal>,
    size: Size,
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("title", &self.title)
            .field("num_children", &self.children.len())
            .field("size", &self.size)
            .finish()
    }
}

impl Body {
    /// Creates an empty body with a window title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            snackbars: Snackbars::default(),
            redraw: Arc::new(RedrawSignal::default()),
            size: Size::zero(),
        }
    }

    /// Returns the window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a widget and returns its index.
    pub fn add(&mut self, widget: impl Widget + 'static) -> usize {
        self.children.push(Box::new(widget));
        self.children.len() - 1
    }

    /// Inserts a widget at `index`, shifting later children down.
    pub fn insert(&mut self, index: usize, widget: impl Widget + 'static) {
        let index = index.min(self.children.len());
        self.children.insert(index, Box::new(widget));
    }

    /// Returns a child widget.
    pub fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|w| w.as_ref())
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns a handle for queueing snackbars on this body.
    pub fn snackbars(&self) -> Snackbars {
        self.snackbars.clone()
    }

    /// Returns the redraw signal of this body.
    pub fn redraw_signal(&self) -> Arc<RedrawSignal> {
        self.redraw.clone()
    }

    /// Stacks the children vertically inside `size`.
    ///
    /// Fixed-height children get their requested height; the remaining
    /// height is shared among children with a positive `grow_y`.
    pub fn layout(&mut self, size: Size) {
        self.size = size;
        let content_width = size.width.saturating_sub(2 * BODY_PADDING);
        let visible: Vec<usize> = (0..self.children.len())
            .filter(|&i| self.children[i].widget_base().style().visible)
            .collect();

        let mut fixed = 0u32;
        let mut grow_total = 0.0f32;
        for &i in &visible {
            let child = &mut self.children[i];
            child.style();
            child.size_up();
            let style = child.widget_base().style();
            if style.grow_y > 0.0 {
                grow_total += style.grow_y;
                fixed += style.min_size.height;
            } else {
                fixed += child.widget_base().actual_size().height;
            }
        }
        let gaps = CHILD_SPACING * visible.len().saturating_sub(1) as u32;
        let leftover = size
            .height
            .saturating_sub(2 * BODY_PADDING + gaps + fixed) as f32;

        let mut y = BODY_PADDING as i32;
        for &i in &visible {
            let base = self.children[i].widget_base_mut();
            let style = base.style();
            let height = if style.grow_y > 0.0 {
                style.min_size.height + (leftover * style.grow_y / grow_total) as u32
            } else {
                base.actual_size().height
            };
            let width = if style.grow_x {
                content_width
            } else {
                base.actual_size().width.min(content_width)
            };
            base.set_bbox(Rect::new(BODY_PADDING as i32, y, width, height));
            y += (height + CHILD_SPACING) as i32;
        }
    }

    /// Dispatches an event to the topmost visible child under its position.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.children
            .iter_mut()
            .rev()
            .filter(|child| child.widget_base().style().visible)
            .find(|child| child.widget_base().bbox().contains(event.position))
            .map(|child| child.handle_event(event))
            .unwrap_or(false)
    }

    /// Draws the background, all visible children, and the active snackbar.
    pub fn render(&mut self, renderer: &mut dyn Renderer, now: Instant) -> Result<()> {
        renderer.clear(SCHEME.background)?;
        for child in self.children.iter_mut() {
            if child.widget_base().style().visible {
                child.render(renderer)?;
            }
        }
        if let Some(snackbar) = self.snackbars.current(now) {
            snackbar.render(renderer, self.size)?;
        }
        Ok(())
    }

    /// Returns when the body next needs repainting without outside input.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.snackbars.next_deadline(now)
    }
}
