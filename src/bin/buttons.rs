// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A button that shows a snackbar each time it is clicked.

use anyhow::Context;
use cogent_xyz_demos::app::{self, App};
use cogent_xyz_demos::styles::TextAlign;
use cogent_xyz_demos::widgets::{Button, Text, TextType};
use cogent_xyz_demos::Body;
use std::sync::atomic::{AtomicUsize, Ordering};

fn main() -> anyhow::Result<()> {
    app::init_logging();

    let mut body = Body::new("Buttons");
    body.add(
        Text::new("Buttons and snackbars")
            .with_type(TextType::HeadlineSmall)
            .with_align(TextAlign::Center),
    );

    let snackbars = body.snackbars();
    let clicks = AtomicUsize::new(0);
    let mut button = Button::new("Send");
    button.on_click(move |_| {
        let n = clicks.fetch_add(1, Ordering::Relaxed) + 1;
        let times = if n == 1 { "time" } else { "times" };
        snackbars.message(format!("Button clicked {n} {times}"));
    });
    body.add(button);

    App::run_main_window(body).context("running buttons window")
}
