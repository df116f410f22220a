// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The scene: a mesh library plus a named list of nodes.

use super::{ArrowHeads, Camera, Light, Mesh, Pose, Solid, Vec3};
use crate::base::{Error, Result};
use crate::colors::Color;
use crate::styles::TextStyle;
use crate::tree::{NodeId, Tree};
use ahash::AHashMap;
use nalgebra::UnitQuaternion;

/// A text label placed in 3D space.
#[derive(Debug, Clone, PartialEq)]
pub struct Text2D {
    /// The label text.
    pub text: String,
    /// Text styling.
    pub style: TextStyle,
    /// Placement in the scene.
    pub pose: Pose,
}

impl Text2D {
    /// Creates a label at the origin.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            pose: Pose::default(),
        }
    }
}

/// A node in the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A mesh with material and pose.
    Solid(Solid),
    /// Text placed in 3D.
    Text2D(Text2D),
    /// A light source.
    Light(Light),
}

impl Node {
    /// Returns the kind of node as a short name.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Solid(_) => "solid",
            Node::Text2D(_) => "text2d",
            Node::Light(_) => "light",
        }
    }
}

/// A 3D scene.
#[derive(Debug)]
pub struct Scene {
    /// The viewing camera.
    pub camera: Camera,
    /// Color behind all nodes.
    pub background: Color,
    meshes: AHashMap<String, Mesh>,
    nodes: Tree<Node>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            background: Color::BLACK,
            meshes: AHashMap::new(),
            nodes: Tree::new(),
        }
    }

    /// Adds a mesh to the library, replacing any mesh with the same name.
    /// Returns the name for use in [`Solid::new`].
    pub fn add_mesh(&mut self, name: impl Into<String>, mesh: Mesh) -> String {
        let name = name.into();
        self.meshes.insert(name.clone(), mesh);
        name
    }

    /// Returns a library mesh.
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.get(name)
    }

    /// Adds a node. An empty name is replaced by `<kind>-<index>`.
    pub fn add(&mut self, name: &str, node: Node) -> NodeId {
        let name = if name.is_empty() {
            format!("{}-{}", node.kind(), self.nodes.len())
        } else {
            name.to_string()
        };
        self.nodes.add_child(name, node)
    }

    /// Adds a solid.
    pub fn add_solid(&mut self, name: &str, solid: Solid) -> NodeId {
        self.add(name, Node::Solid(solid))
    }

    /// Adds a text label.
    pub fn add_text2d(&mut self, name: &str, text: Text2D) -> NodeId {
        self.add(name, Node::Text2D(text))
    }

    /// Adds a light.
    pub fn add_light(&mut self, name: &str, light: Light) -> NodeId {
        self.add(name, Node::Light(light))
    }

    /// Adds an arrow from `start` to `end` as a solid with its own mesh named `name`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_arrow(
        &mut self,
        name: &str,
        start: Vec3,
        end: Vec3,
        width: f32,
        color: Color,
        heads: ArrowHeads,
        head_size: f32,
        head_width: f32,
        segments: u32,
    ) -> NodeId {
        let span = end - start;
        let mesh = self.add_mesh(
            name,
            Mesh::Arrow {
                length: span.norm(),
                width,
                heads,
                head_size: head_size * width,
                head_width: head_width * head_size * width,
                segments,
            },
        );
        let quat = UnitQuaternion::rotation_between(&Vec3::x(), &span)
            .unwrap_or_else(UnitQuaternion::identity);
        let mut solid = Solid::new(mesh).with_color(color);
        solid.pose.pos = start + span * 0.5;
        solid.pose.quat = quat;
        self.add_solid(name, solid)
    }

    /// Renames a node.
    pub fn set_name(&mut self, id: NodeId, name: &str) {
        self.nodes.set_name(id, name);
    }

    /// Returns the first node named `name` at or after `start_index`.
    pub fn child_by_name(&self, name: &str, start_index: usize) -> Option<NodeId> {
        self.nodes.child_by_name(name, start_index)
    }

    /// Looks up a solid by name.
    pub fn solid_by_name(&self, name: &str) -> Result<NodeId> {
        let id = self
            .child_by_name(name, 0)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))?;
        match self.nodes.get(id) {
            Some(Node::Solid(_)) => Ok(id),
            Some(other) => Err(Error::NodeKind {
                name: name.to_string(),
                expected: "solid",
                actual: other.kind(),
            }),
            None => Err(Error::NodeNotFound(name.to_string())),
        }
    }

    /// Returns a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Returns a solid.
    pub fn solid(&self, id: NodeId) -> Option<&Solid> {
        match self.nodes.get(id) {
            Some(Node::Solid(solid)) => Some(solid),
            _ => None,
        }
    }

    /// Returns a solid mutably.
    pub fn solid_mut(&mut self, id: NodeId) -> Option<&mut Solid> {
        match self.nodes.get_mut(id) {
            Some(Node::Solid(solid)) => Some(solid),
            _ => None,
        }
    }

    /// Iterates over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str, &Node)> {
        self.nodes.iter()
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
