// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Standard widgets.

pub mod button;
pub mod snackbar;
pub mod text;

pub use button::{Button, ButtonType, Label};
pub use snackbar::{Snackbar, Snackbars};
pub use text::{Text, TextType};

/// Approximate advance of one glyph at a 16px font size.
pub(crate) const GLYPH_WIDTH: u32 = 8;
