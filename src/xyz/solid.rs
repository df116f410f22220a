// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Solids: a mesh instance with a material and a pose.

use super::{Pose, Vec3};
use crate::colors::Color;

/// A renderable object that draws a library mesh with a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// Name of the mesh in the scene library.
    pub mesh: String,
    /// Base color; alpha below 255 is translucent.
    pub color: Color,
    /// Specular shininess exponent.
    pub shiny: f32,
    /// Placement in the scene.
    pub pose: Pose,
}

impl Solid {
    /// Creates a white solid drawing the named mesh.
    pub fn new(mesh: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            color: Color::WHITE,
            shiny: 30.0,
            pose: Pose::default(),
        }
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the shininess.
    pub fn with_shiny(mut self, shiny: f32) -> Self {
        self.shiny = shiny;
        self
    }

    /// Sets the position.
    pub fn with_pos(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pose.pos = Vec3::new(x, y, z);
        self
    }

    /// Sets the rotation about an axis, in degrees.
    pub fn with_axis_rotation(mut self, x: f32, y: f32, z: f32, degrees: f32) -> Self {
        self.pose.set_axis_rotation(x, y, z, degrees);
        self
    }

    /// Moves the solid to `pos`.
    pub fn set_pose_pos(&mut self, pos: Vec3) {
        self.pose.pos = pos;
    }
}
