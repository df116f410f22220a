// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A 3D scene with a cube and sphere that orbit their starting points.
//!
//! Animation settings are read from `xyz_demo.toml` in the working
//! directory when it exists.

use anyhow::Context;
use cogent_xyz_demos::anim::{AnimConfig, PeriodicPoseAnimator};
use cogent_xyz_demos::app::{self, App};
use cogent_xyz_demos::styles::TextAlign;
use cogent_xyz_demos::widgets::{Button, Text, TextType};
use cogent_xyz_demos::xyz::build_demo_scene;
use cogent_xyz_demos::xyzcore::{SceneEditor, SelectionMode};
use cogent_xyz_demos::Body;

const CONFIG_PATH: &str = "xyz_demo.toml";

fn main() -> anyhow::Result<()> {
    app::init_logging();
    let config = AnimConfig::load_or_default(CONFIG_PATH)
        .with_context(|| format!("reading {CONFIG_PATH}"))?;

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let _guard = runtime.enter();

    let mut body = Body::new("Simple XYZ Demo");
    body.add(
        Text::new("Simple XYZ 3D Demo")
            .with_type(TextType::HeadlineSmall)
            .with_align(TextAlign::Center),
    );

    let mut anim_button = Button::new(if config.initially_running {
        "Stop Animation"
    } else {
        "Start Animation"
    });

    let editor = SceneEditor::new(&mut body);
    editor
        .scene_widget()
        .set_selection_mode(SelectionMode::Manipulable);
    build_demo_scene(&mut editor.scene_xyz_mut());
    editor.scene_widget().update_widget();

    let animator = PeriodicPoseAnimator::new(&editor, config);
    animator.spawn();

    let label = anim_button.label();
    let toggle = animator.clone();
    anim_button.on_click(move |_| {
        let running = toggle.toggle_running();
        label.set(if running {
            "Stop Animation"
        } else {
            "Start Animation"
        });
    });
    body.insert(1, anim_button);

    let result = App::run_main_window(body).context("running xyz window");
    animator.stop();
    result
}
