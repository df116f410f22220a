// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Position, rotation and scale of a scene node.

use super::Vec3;
use nalgebra::{Matrix4, Translation3, Unit, UnitQuaternion};

/// The placement of a node relative to the scene origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position.
    pub pos: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Orientation.
    pub quat: UnitQuaternion<f32>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            pos: Vec3::zeros(),
            scale: Vec3::repeat(1.0),
            quat: UnitQuaternion::identity(),
        }
    }
}

impl Pose {
    /// Replaces the rotation with `degrees` about the axis `(x, y, z)`.
    ///
    /// A zero axis resets the rotation to identity.
    pub fn set_axis_rotation(&mut self, x: f32, y: f32, z: f32, degrees: f32) {
        self.quat = match Unit::try_new(Vec3::new(x, y, z), f32::EPSILON) {
            Some(axis) => UnitQuaternion::from_axis_angle(&axis, degrees.to_radians()),
            None => UnitQuaternion::identity(),
        };
    }

    /// Orients the pose so its -Z axis points at `target`, with `up` as the up hint.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let back = self.pos - target;
        if back.norm_squared() > f32::EPSILON {
            self.quat = UnitQuaternion::face_towards(&back, &up);
        }
    }

    /// Sets a uniform scale.
    pub fn set_scale_scalar(&mut self, scale: f32) {
        self.scale = Vec3::repeat(scale);
    }

    /// Returns the model matrix: translate, then rotate, then scale.
    pub fn matrix(&self) -> Matrix4<f32> {
        Translation3::from(self.pos).to_homogeneous()
            * self.quat.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}
