// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Fixed-rate pose animation of two scene solids.
//!
//! A [`PeriodicPoseAnimator`] moves a primary solid around a circle in
//! the XZ plane, moves a secondary solid along a smaller circle in
//! opposite phase, and spins the primary about +Y. Positions are always
//! computed from the positions captured at configuration time, so only
//! the angle accumulates.
//!
//! The run flag can be toggled from any thread. The tick loop stops for
//! good when [`PeriodicPoseAnimator::stop`] is called or when the
//! [`SceneEditor`] it animates is dropped.

pub mod config;

pub use config::AnimConfig;

use crate::tree::NodeId;
use crate::xyz::Vec3;
use crate::xyzcore::SceneEditor;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// A solid whose position is driven by the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedObject {
    /// The solid in the scene.
    pub handle: NodeId,
    /// Where the solid was when it was registered.
    pub original_position: Vec3,
}

/// The two animated roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Circles at full radius and spins.
    Primary,
    /// Circles at a fraction of the radius in opposite phase.
    Secondary,
}

/// A snapshot of the animator's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Whether ticks currently move the objects.
    pub running: bool,
    /// Radians added to `angle` after each applied tick.
    pub speed_per_tick: f32,
    /// Current phase in radians; never wrapped.
    pub angle: f32,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Poses were written and a redraw was requested.
    Updated,
    /// Nothing changed: paused, or a tracked object is missing.
    Skipped,
    /// The animator was stopped or its scene is gone.
    Terminated,
}

#[derive(Debug)]
struct Motion {
    speed: f32,
    angle: f32,
}

#[derive(Debug)]
struct Shared {
    editor: Weak<SceneEditor>,
    config: AnimConfig,
    running: AtomicBool,
    motion: Mutex<Motion>,
    primary: Option<TrackedObject>,
    secondary: Option<TrackedObject>,
}

/// Drives two solids of a scene editor on a fixed timer.
///
/// Cloning gives another handle to the same animator.
#[derive(Debug, Clone)]
pub struct PeriodicPoseAnimator {
    shared: Arc<Shared>,
    cancel: CancellationToken,
}

impl PeriodicPoseAnimator {
    /// Configures an animator with default settings and starts its tick loop.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(editor: &Arc<SceneEditor>, initially_running: bool) -> Self {
        let config = AnimConfig {
            initially_running,
            ..AnimConfig::default()
        };
        let animator = Self::new(editor, config);
        animator.spawn();
        animator
    }

    /// Configures an animator without starting its tick loop.
    ///
    /// Both tracked objects are looked up by name now and never again. A
    /// missing object is logged and left unset; while either is unset every
    /// tick is skipped.
    pub fn new(editor: &Arc<SceneEditor>, config: AnimConfig) -> Self {
        let (primary, secondary) = {
            let scene = editor.scene_xyz();
            let track = |role: Role, name: &str| match scene.solid_by_name(name) {
                Ok(handle) => scene.solid(handle).map(|solid| TrackedObject {
                    handle,
                    original_position: solid.pose.pos,
                }),
                Err(err) => {
                    warn!(?role, %err, "couldn't find object to animate");
                    None
                }
            };
            (
                track(Role::Primary, &config.primary),
                track(Role::Secondary, &config.secondary),
            )
        };
        debug!(
            speed = config.speed,
            running = config.initially_running,
            primary = ?primary.map(|t| t.handle),
            secondary = ?secondary.map(|t| t.handle),
            "configured animator"
        );

        Self {
            shared: Arc::new(Shared {
                editor: Arc::downgrade(editor),
                running: AtomicBool::new(config.initially_running),
                motion: Mutex::new(Motion {
                    speed: config.speed,
                    angle: 0.0,
                }),
                primary,
                secondary,
                config,
            }),
            cancel: CancellationToken::new(),
        }
    }

    /// Launches the tick loop on the current tokio runtime.
    pub fn spawn(&self) -> JoinHandle<()> {
        let animator = self.clone();
        tokio::spawn(async move { animator.run().await })
    }

    /// Runs the tick loop until stopped or until the scene editor is dropped.
    pub async fn run(self) {
        let period = self.shared.config.period();
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            if self.is_terminated() {
                break;
            }
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }
            if self.on_tick() == TickOutcome::Terminated {
                break;
            }
        }
        info!(angle = self.state().angle, "animation loop stopped");
    }

    /// Performs one tick.
    pub fn on_tick(&self) -> TickOutcome {
        if self.cancel.is_cancelled() {
            return TickOutcome::Terminated;
        }
        let Some(editor) = self.shared.editor.upgrade() else {
            return TickOutcome::Terminated;
        };
        let (Some(primary), Some(secondary)) = (self.shared.primary, self.shared.secondary) else {
            return TickOutcome::Skipped;
        };
        if !self.is_running() {
            return TickOutcome::Skipped;
        }

        let config = &self.shared.config;
        let mut motion = self.shared.motion.lock();
        let angle = motion.angle;
        let offset = Vec3::new(angle.cos(), 0.0, angle.sin()) * config.radius;
        {
            let mut scene = editor.scene_xyz_mut();
            if let Some(solid) = scene.solid_mut(primary.handle) {
                solid.set_pose_pos(primary.original_position + offset);
            }
            if let Some(solid) = scene.solid_mut(secondary.handle) {
                solid.set_pose_pos(secondary.original_position - offset * config.secondary_factor);
            }
            if let Some(solid) = scene.solid_mut(primary.handle) {
                solid.pose.set_axis_rotation(0.0, 1.0, 0.0, angle.to_degrees());
            }
        }
        editor.scene_widget().update_widget();
        motion.angle += motion.speed;
        trace!(angle, "animation tick");
        TickOutcome::Updated
    }

    /// Flips the run flag and returns the new value.
    pub fn toggle_running(&self) -> bool {
        !self.shared.running.fetch_xor(true, Ordering::AcqRel)
    }

    /// Sets the run flag.
    pub fn set_running(&self, running: bool) {
        self.shared.running.store(running, Ordering::Release);
    }

    /// Returns the run flag.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Changes the angle advance per tick.
    pub fn set_speed(&self, speed: f32) {
        self.shared.motion.lock().speed = speed;
    }

    /// Returns the tracked object for a role, if it was found.
    pub fn tracked(&self, role: Role) -> Option<TrackedObject> {
        match role {
            Role::Primary => self.shared.primary,
            Role::Secondary => self.shared.secondary,
        }
    }

    /// Returns a snapshot of the run flag, speed and angle.
    pub fn state(&self) -> AnimationState {
        let motion = self.shared.motion.lock();
        AnimationState {
            running: self.is_running(),
            speed_per_tick: motion.speed,
            angle: motion.angle,
        }
    }

    /// Stops the tick loop permanently.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Returns true once the loop can no longer make progress.
    pub fn is_terminated(&self) -> bool {
        self.cancel.is_cancelled() || self.shared.editor.strong_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xyz::{vec3, Mesh, Solid};
    use std::f32::consts::PI;
    use std::time::Duration;

    fn cube_origin() -> Vec3 {
        vec3(-1.5, 0.0, 0.0)
    }

    fn sphere_origin() -> Vec3 {
        vec3(1.5, 0.0, 0.0)
    }

    fn editor_with(cube: bool, sphere: bool) -> (Arc<SceneEditor>, NodeId, NodeId) {
        let editor = SceneEditor::detached();
        let (cube_id, sphere_id) = {
            let mut scene = editor.scene_xyz_mut();
            let cube_mesh = scene.add_mesh(
                "cube-mesh",
                Mesh::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
            );
            let sphere_mesh = scene.add_mesh(
                "sphere-mesh",
                Mesh::Sphere {
                    radius: 0.5,
                    segments: 32,
                },
            );
            let cube_name = if cube { "animated-cube" } else { "cube" };
            let sphere_name = if sphere { "animated-sphere" } else { "sphere" };
            let c = scene.add_solid(cube_name, Solid::new(cube_mesh).with_pos(-1.5, 0.0, 0.0));
            let s = scene.add_solid(sphere_name, Solid::new(sphere_mesh).with_pos(1.5, 0.0, 0.0));
            (c, s)
        };
        (editor, cube_id, sphere_id)
    }

    fn running_config() -> AnimConfig {
        AnimConfig {
            initially_running: true,
            ..AnimConfig::default()
        }
    }

    fn pos(editor: &SceneEditor, id: NodeId) -> Vec3 {
        editor.scene_xyz().solid(id).unwrap().pose.pos
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1e-4
    }

    #[test]
    fn positions_follow_the_circle_from_originals() {
        let (editor, cube, sphere) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());

        for n in 0..50 {
            assert_eq!(anim.on_tick(), TickOutcome::Updated);
            let theta = n as f32 * 0.05;
            let offset = vec3(0.5 * theta.cos(), 0.0, 0.5 * theta.sin());
            assert!(close(pos(&editor, cube), cube_origin() + offset), "tick {n}");
            assert!(close(pos(&editor, sphere), sphere_origin() - offset * 0.5), "tick {n}");
        }
        assert_eq!(editor.scene_widget().update_count(), 50);
    }

    #[test]
    fn secondary_offset_is_minus_half_of_primary() {
        let (editor, cube, sphere) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        for _ in 0..17 {
            anim.on_tick();
            let primary = pos(&editor, cube) - cube_origin();
            let secondary = pos(&editor, sphere) - sphere_origin();
            assert!(close(secondary, primary * -0.5));
        }
    }

    #[test]
    fn twenty_ticks_reach_one_radian() {
        let (editor, cube, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        for _ in 0..20 {
            anim.on_tick();
        }
        assert!((anim.state().angle - 1.0).abs() < 1e-5);

        // The next tick writes the pose for angle 1.0.
        anim.on_tick();
        let offset = pos(&editor, cube) - cube_origin();
        assert!((offset.x - 0.2702).abs() < 1e-4);
        assert!((offset.z - 0.4207).abs() < 1e-4);

        let scene = editor.scene_xyz();
        let quat = scene.solid(cube).unwrap().pose.quat;
        assert!((quat.angle().to_degrees() - 57.30).abs() < 0.01);
        let axis = quat.axis().unwrap();
        assert!(close(axis.into_inner(), Vec3::y()));
    }

    #[test]
    fn rotation_is_absolute_not_incremental() {
        let (editor, cube, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        anim.set_speed(PI / 4.0);
        for _ in 0..3 {
            anim.on_tick();
        }
        let quat = editor.scene_xyz().solid(cube).unwrap().pose.quat;
        assert!((quat.angle() - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn paused_ticks_change_nothing() {
        let (editor, cube, sphere) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        anim.on_tick();
        anim.on_tick();
        anim.set_running(false);
        let before = (pos(&editor, cube), pos(&editor, sphere), anim.state());
        let quat = editor.scene_xyz().solid(cube).unwrap().pose.quat;

        for _ in 0..10 {
            assert_eq!(anim.on_tick(), TickOutcome::Skipped);
        }
        assert_eq!((pos(&editor, cube), pos(&editor, sphere), anim.state()), before);
        assert_eq!(editor.scene_xyz().solid(cube).unwrap().pose.quat, quat);
        assert_eq!(editor.scene_widget().update_count(), 2);
    }

    #[test]
    fn double_toggle_without_ticks_is_a_no_op() {
        let (editor, cube, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, AnimConfig::default());
        assert!(!anim.is_running());
        let before = (pos(&editor, cube), anim.state());

        assert!(anim.toggle_running());
        assert!(!anim.toggle_running());
        assert_eq!((pos(&editor, cube), anim.state()), before);
    }

    #[test]
    fn missing_primary_skips_both_objects() {
        let (editor, cube, sphere) = editor_with(false, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        assert!(anim.tracked(Role::Primary).is_none());
        assert_eq!(
            anim.tracked(Role::Secondary).map(|t| t.original_position),
            Some(sphere_origin())
        );

        for _ in 0..10 {
            assert_eq!(anim.on_tick(), TickOutcome::Skipped);
            anim.toggle_running();
        }
        assert_eq!(pos(&editor, cube), cube_origin());
        assert_eq!(pos(&editor, sphere), sphere_origin());
        assert_eq!(anim.state().angle, 0.0);
        assert_eq!(editor.scene_widget().update_count(), 0);
    }

    #[test]
    fn missing_secondary_skips_both_objects() {
        let (editor, cube, _) = editor_with(true, false);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        assert_eq!(anim.on_tick(), TickOutcome::Skipped);
        assert_eq!(pos(&editor, cube), cube_origin());
    }

    #[test]
    fn stop_and_dropped_scene_terminate() {
        let (editor, _, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        anim.stop();
        assert!(anim.is_terminated());
        assert_eq!(anim.on_tick(), TickOutcome::Terminated);

        let (editor, _, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        drop(editor);
        assert!(anim.is_terminated());
        assert_eq!(anim.on_tick(), TickOutcome::Terminated);
    }

    #[tokio::test(start_paused = true)]
    async fn loop_ticks_at_the_configured_rate() {
        let (editor, _, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, running_config());
        let task = anim.spawn();

        // No tick fires before the first period elapses.
        tokio::task::yield_now().await;
        assert_eq!(editor.scene_widget().update_count(), 0);

        time::sleep(Duration::from_millis(340)).await;
        let ticks = editor.scene_widget().update_count();
        assert!((9..=11).contains(&ticks), "got {ticks} ticks");

        anim.stop();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn start_runs_a_detached_loop() {
        let (editor, _, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::start(&editor, true);
        time::sleep(Duration::from_millis(100)).await;
        assert!(editor.scene_widget().update_count() > 0);
        assert!(anim.state().angle > 0.0);
        anim.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn loop_exits_when_editor_is_dropped() {
        let (editor, _, _) = editor_with(true, true);
        let anim = PeriodicPoseAnimator::new(&editor, AnimConfig::default());
        let task = anim.spawn();
        assert!(anim.toggle_running());

        drop(editor);
        time::timeout(Duration::from_secs(1), task)
            .await
            .expect("loop should end once the editor is gone")
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn unvalidated_fast_tick_rate_still_runs() {
        let (editor, _, _) = editor_with(true, true);
        let config = AnimConfig {
            tick_rate: 2_000_000_000,
            ..running_config()
        };
        let anim = PeriodicPoseAnimator::new(&editor, config);
        let task = anim.spawn();

        time::sleep(Duration::from_millis(5)).await;
        assert!(editor.scene_widget().update_count() > 0);

        anim.stop();
        task.await.unwrap();
    }
}
