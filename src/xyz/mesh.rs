// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Parametric mesh descriptions.
//!
//! Meshes are stored once in the [`Scene`](super::Scene) library under a
//! name and shared by any number of solids.

use super::{Vec2, Vec3};
use smallvec::SmallVec;

/// Which ends of an arrow carry a head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrowHeads {
    /// Head at the start point.
    pub start: bool,
    /// Head at the end point.
    pub end: bool,
}

/// A parametric mesh shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    /// A flat rectangle in the XZ plane.
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Z.
        height: f32,
    },
    /// An axis-aligned box.
    Box {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
        /// Extent along Z.
        depth: f32,
    },
    /// A UV sphere.
    Sphere {
        /// Sphere radius.
        radius: f32,
        /// Segments around and from pole to pole.
        segments: u32,
    },
    /// A Y-aligned cylinder, optionally capped.
    Cylinder {
        /// Extent along Y.
        height: f32,
        /// Cylinder radius.
        radius: f32,
        /// Segments around the axis.
        radial_segments: u32,
        /// Segments along the axis.
        height_segments: u32,
        /// Whether the top is capped.
        top: bool,
        /// Whether the bottom is capped.
        bottom: bool,
    },
    /// A torus around the Y axis.
    Torus {
        /// Distance from the center to the middle of the tube.
        radius: f32,
        /// Radius of the tube.
        tube_radius: f32,
        /// Segments around the ring and the tube.
        segments: u32,
    },
    /// A thick polyline.
    Lines {
        /// Points the line passes through, in order.
        points: SmallVec<[Vec3; 4]>,
        /// Line width and height.
        width: Vec2,
        /// Whether the last point joins back to the first.
        closed: bool,
    },
    /// An X-aligned shaft with optional cone heads.
    Arrow {
        /// Shaft length.
        length: f32,
        /// Shaft width.
        width: f32,
        /// Which ends carry a head.
        heads: ArrowHeads,
        /// Length of each head.
        head_size: f32,
        /// Width of each head at its base.
        head_width: f32,
        /// Segments around the shaft.
        segments: u32,
    },
}

impl Mesh {
    /// Returns the kind of mesh as a short name.
    pub fn kind(&self) -> &'static str {
        match self {
            Mesh::Plane { .. } => "plane",
            Mesh::Box { .. } => "box",
            Mesh::Sphere { .. } => "sphere",
            Mesh::Cylinder { .. } => "cylinder",
            Mesh::Torus { .. } => "torus",
            Mesh::Lines { .. } => "lines",
            Mesh::Arrow { .. } => "arrow",
        }
    }

    /// Returns the radius of a sphere around the mesh origin that encloses the mesh.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Mesh::Plane { width, height } => 0.5 * width.hypot(*height),
            Mesh::Box {
                width,
                height,
                depth,
            } => 0.5 * Vec3::new(*width, *height, *depth).norm(),
            Mesh::Sphere { radius, .. } => *radius,
            Mesh::Cylinder { height, radius, .. } => (0.5 * height).hypot(*radius),
            Mesh::Torus {
                radius,
                tube_radius,
                ..
            } => radius + tube_radius,
            Mesh::Lines { points, width, .. } => {
                let extent = points.iter().map(|p| p.norm()).fold(0.0_f32, f32::max);
                extent + 0.5 * width.x.max(width.y)
            }
            Mesh::Arrow {
                length,
                head_width,
                width,
                ..
            } => (0.5 * length).hypot(0.5 * head_width.max(*width)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn bounding_radius_covers_extent() {
        let cube = Mesh::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        };
        assert!((cube.bounding_radius() - 3.0_f32.sqrt() / 2.0).abs() < 1e-6);

        let lines = Mesh::Lines {
            points: smallvec![Vec3::new(-2.0, -0.5, 2.0), Vec3::new(0.0, 1.0, 2.0)],
            width: Vec2::new(0.1, 0.05),
            closed: true,
        };
        assert!(lines.bounding_radius() > Vec3::new(-2.0, -0.5, 2.0).norm());
        assert_eq!(lines.kind(), "lines");
    }
}
