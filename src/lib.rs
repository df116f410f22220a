// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Demos for Cogent Core: a button and snackbar window, and a 3D scene
//! whose cube and sphere orbit their starting points on a fixed timer.
//!
//! The [`anim`] module holds the timer-driven animator; the other
//! modules provide the small widget, window and scene layer it runs on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod anim;
pub mod app;
pub mod base;
pub mod colors;
pub mod core;
pub mod events;
pub mod styles;
pub mod tree;
pub mod widgets;
pub mod xyz;
pub mod xyzcore;

pub use anim::{AnimConfig, PeriodicPoseAnimator};
pub use app::App;
pub use crate::core::{Body, Renderer, Widget, WidgetBase};
pub use widgets::{Button, Snackbars, Text};
pub use xyzcore::SceneEditor;
