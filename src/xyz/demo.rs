// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The scene shown by the `xyz_demo` program.

use super::{vec3, ArrowHeads, Light, LightColor, Mesh, Scene, Solid, Text2D, Vec2};
use crate::colors::{Color, SCHEME};
use crate::styles::TextAlign;
use smallvec::smallvec;

/// Fills `scene` with the demo contents: camera, lights, a floor, a title,
/// the two animated solids (`animated-cube` at (-1.5, 0, 0) and
/// `animated-sphere` at (1.5, 0, 0)) and a few static shapes.
pub fn build_demo_scene(scene: &mut Scene) {
    scene.camera.pose.pos = vec3(0.0, 3.0, 8.0);
    scene.camera.look_at(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
    scene.background = SCHEME.select_container;

    scene.add_light("ambient", Light::ambient(0.3, LightColor::DirectSun));
    scene.add_light(
        "directional",
        Light::directional(1.0, LightColor::DirectSun).with_pos(0.0, 2.0, 1.0),
    );

    let floor = scene.add_mesh(
        "floor-plane",
        Mesh::Plane {
            width: 10.0,
            height: 10.0,
        },
    );
    scene.add_solid(
        "floor",
        Solid::new(floor).with_color(Color::TAN).with_pos(0.0, -1.0, 0.0),
    );

    let mut title = Text2D::new("XYZ 3D Demo");
    title.style.align = TextAlign::Center;
    title.pose.set_scale_scalar(0.2);
    title.pose.pos = vec3(0.0, 2.0, 0.0);
    scene.add_text2d("", title);

    let cube = scene.add_mesh(
        "cube-mesh",
        Mesh::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        },
    );
    scene.add_solid(
        "animated-cube",
        Solid::new(cube)
            .with_color(Color::BLUE)
            .with_shiny(20.0)
            .with_pos(-1.5, 0.0, 0.0),
    );

    let sphere = scene.add_mesh(
        "sphere-mesh",
        Mesh::Sphere {
            radius: 0.5,
            segments: 32,
        },
    );
    scene.add_solid(
        "animated-sphere",
        Solid::new(sphere)
            .with_color(Color::ORANGE)
            .with_pos(1.5, 0.0, 0.0),
    );

    let cylinder = scene.add_mesh(
        "cylinder-mesh",
        Mesh::Cylinder {
            height: 1.5,
            radius: 0.3,
            radial_segments: 32,
            height_segments: 1,
            top: true,
            bottom: true,
        },
    );
    scene.add_solid(
        "",
        Solid::new(cylinder)
            .with_color(Color::GREEN)
            .with_pos(0.0, 0.0, -2.0)
            .with_axis_rotation(1.0, 0.0, 0.0, 90.0),
    );

    let torus = scene.add_mesh(
        "torus-mesh",
        Mesh::Torus {
            radius: 0.7,
            tube_radius: 0.1,
            segments: 32,
        },
    );
    scene.add_solid(
        "",
        Solid::new(torus)
            .with_color(Color::rgba(255, 0, 255, 150))
            .with_pos(0.0, 1.5, 0.0)
            .with_axis_rotation(1.0, 0.0, 0.0, 45.0),
    );

    let lines = scene.add_mesh(
        "lines",
        Mesh::Lines {
            points: smallvec![vec3(-2.0, -0.5, 2.0), vec3(0.0, 1.0, 2.0), vec3(2.0, -0.5, 2.0)],
            width: Vec2::new(0.1, 0.05),
            closed: true,
        },
    );
    scene.add_solid("", Solid::new(lines).with_color(Color::YELLOW));

    scene.add_arrow(
        "arrow",
        vec3(-2.0, 0.0, 0.0),
        vec3(2.0, 0.0, 0.0),
        0.05,
        Color::RED,
        ArrowHeads {
            start: true,
            end: true,
        },
        4.0,
        0.5,
        8,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{AnimConfig, PeriodicPoseAnimator, Role};
    use crate::xyz::{Node, Vec3};
    use crate::xyzcore::SceneEditor;

    fn solid_pos(scene: &Scene, name: &str) -> Vec3 {
        let id = scene.solid_by_name(name).unwrap();
        scene.solid(id).unwrap().pose.pos
    }

    #[test]
    fn animated_solids_start_at_their_marks() {
        let mut scene = Scene::new();
        build_demo_scene(&mut scene);

        assert_eq!(solid_pos(&scene, "animated-cube"), vec3(-1.5, 0.0, 0.0));
        assert_eq!(solid_pos(&scene, "animated-sphere"), vec3(1.5, 0.0, 0.0));
        assert_eq!(solid_pos(&scene, "floor"), vec3(0.0, -1.0, 0.0));

        let cube = scene.solid(scene.solid_by_name("animated-cube").unwrap()).unwrap();
        assert_eq!(cube.color, Color::BLUE);
        assert_eq!(cube.shiny, 20.0);
        assert!(matches!(scene.mesh(&cube.mesh), Some(Mesh::Box { .. })));
    }

    #[test]
    fn demo_scene_has_lights_and_title() {
        let mut scene = Scene::new();
        build_demo_scene(&mut scene);

        let lights = scene.nodes().filter(|(_, _, node)| matches!(node, Node::Light(_))).count();
        let titles = scene.nodes().filter(|(_, _, node)| matches!(node, Node::Text2D(_))).count();
        assert_eq!(lights, 2);
        assert_eq!(titles, 1);
        assert_eq!(scene.camera.pose.pos, vec3(0.0, 3.0, 8.0));
    }

    #[test]
    fn animator_tracks_both_demo_solids() {
        let editor = SceneEditor::detached();
        build_demo_scene(&mut editor.scene_xyz_mut());
        let animator = PeriodicPoseAnimator::new(&editor, AnimConfig::default());

        let primary = animator.tracked(Role::Primary).unwrap();
        let secondary = animator.tracked(Role::Secondary).unwrap();
        assert_eq!(primary.original_position, vec3(-1.5, 0.0, 0.0));
        assert_eq!(secondary.original_position, vec3(1.5, 0.0, 0.0));
    }
}
