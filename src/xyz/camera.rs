// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Perspective camera.

use super::{Pose, Vec3};
use crate::events::{Point, Rect};
use nalgebra::{Isometry3, Perspective3, Point3, Translation3};

/// A perspective camera looking down its local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera placement.
    pub pose: Pose,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping distance.
    pub near: f32,
    /// Far clipping distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let mut pose = Pose {
            pos: Vec3::new(0.0, 0.0, 10.0),
            ..Pose::default()
        };
        pose.look_at(Vec3::zeros(), Vec3::y());
        Self {
            pose,
            fov: 30.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Points the camera at `target`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.pose.look_at(target, up);
    }

    /// Projects a world position into `viewport` pixel coordinates.
    ///
    /// Returns `None` for points behind the camera or outside the clip range.
    pub fn project(&self, world: Vec3, viewport: Rect) -> Option<Point> {
        if viewport.width == 0 || viewport.height == 0 {
            return None;
        }
        let view = Isometry3::from_parts(Translation3::from(self.pose.pos), self.pose.quat).inverse();
        let eye = view * Point3::from(world);
        if -eye.z < self.near || -eye.z > self.far {
            return None;
        }
        let aspect = viewport.width as f32 / viewport.height as f32;
        let projection = Perspective3::new(aspect, self.fov.to_radians(), self.near, self.far);
        let ndc = projection.project_point(&eye);
        let x = viewport.x as f32 + (ndc.x + 1.0) * 0.5 * viewport.width as f32;
        let y = viewport.y as f32 + (1.0 - ndc.y) * 0.5 * viewport.height as f32;
        Some(Point::new(x.round() as i32, y.round() as i32))
    }

    /// Returns the on-screen radius in pixels of a sphere of `radius` at `world`.
    pub fn projected_radius(&self, world: Vec3, radius: f32, viewport: Rect) -> f32 {
        let distance = (world - self.pose.pos).norm().max(self.near);
        let half_fov = (self.fov.to_radians() * 0.5).tan();
        radius / (distance * half_fov) * 0.5 * viewport.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_viewport_center() {
        let mut camera = Camera::default();
        camera.pose.pos = Vec3::new(0.0, 3.0, 8.0);
        camera.look_at(Vec3::zeros(), Vec3::y());
        let viewport = Rect::new(0, 100, 800, 400);

        assert_eq!(camera.project(Vec3::zeros(), viewport), Some(Point::new(400, 300)));
        let right = camera.project(Vec3::new(1.0, 0.0, 0.0), viewport).unwrap();
        assert!(right.x > 400);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = Camera::default();
        let viewport = Rect::new(0, 0, 100, 100);
        assert_eq!(camera.project(Vec3::new(0.0, 0.0, 20.0), viewport), None);
    }
}
