// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use cogent_xyz_demos::anim::{AnimConfig, PeriodicPoseAnimator};
use cogent_xyz_demos::xyz::{Mesh, Solid};
use cogent_xyz_demos::SceneEditor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn animated_editor() -> std::sync::Arc<SceneEditor> {
    let editor = SceneEditor::detached();
    {
        let mut scene = editor.scene_xyz_mut();
        let cube = scene.add_mesh(
            "cube-mesh",
            Mesh::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
        );
        let sphere = scene.add_mesh(
            "sphere-mesh",
            Mesh::Sphere {
                radius: 0.5,
                segments: 32,
            },
        );
        for i in 0..64 {
            scene.add_solid("", Solid::new(cube.clone()).with_pos(i as f32, 0.0, 0.0));
        }
        scene.add_solid("animated-cube", Solid::new(cube).with_pos(-1.5, 0.0, 0.0));
        scene.add_solid("animated-sphere", Solid::new(sphere).with_pos(1.5, 0.0, 0.0));
    }
    editor
}

fn bench_tick(c: &mut Criterion) {
    let editor = animated_editor();
    let config = AnimConfig {
        initially_running: true,
        ..AnimConfig::default()
    };
    let animator = PeriodicPoseAnimator::new(&editor, config);

    c.bench_function("on_tick running", |b| b.iter(|| black_box(animator.on_tick())));

    animator.set_running(false);
    c.bench_function("on_tick paused", |b| b.iter(|| black_box(animator.on_tick())));
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
