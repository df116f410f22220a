// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A small 3D scene graph: meshes, solids, lights, text labels and a camera.

pub mod camera;
pub mod demo;
pub mod light;
pub mod mesh;
pub mod pose;
pub mod scene;
pub mod solid;

pub use camera::Camera;
pub use demo::build_demo_scene;
pub use light::{Light, LightColor};
pub use mesh::{ArrowHeads, Mesh};
pub use pose::Pose;
pub use scene::{Node, Scene, Text2D};
pub use solid::Solid;

/// A 3D vector in scene units.
pub type Vec3 = nalgebra::Vector3<f32>;

/// A 2D vector in scene units.
pub type Vec2 = nalgebra::Vector2<f32>;

/// Shorthand for building a [`Vec3`].
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}
