// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Styling system for widgets.

use crate::colors::Color;
use crate::events::Size;

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Flush with the leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Flush with the trailing edge.
    End,
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            align: TextAlign::Start,
            size: 16.0,
        }
    }
}

/// A style configuration for a widget.
#[derive(Debug, Clone)]
pub struct Style {
    /// The background color.
    pub background: Option<Color>,
    /// The foreground (text) color.
    pub foreground: Option<Color>,
    /// The border color.
    pub border_color: Option<Color>,
    /// The border width in pixels.
    pub border_width: f32,
    /// The padding around the content.
    pub padding: Padding,
    /// The minimum size.
    pub min_size: Size,
    /// Whether the widget fills the available width.
    pub grow_x: bool,
    /// Share of leftover vertical space the widget takes in its parent.
    pub grow_y: f32,
    /// Text styling.
    pub text: TextStyle,
    /// Whether the widget is visible.
    pub visible: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            border_color: None,
            border_width: 0.0,
            padding: Padding::default(),
            min_size: Size::zero(),
            grow_x: false,
            grow_y: 0.0,
            text: TextStyle::default(),
            visible: true,
        }
    }
}

/// Padding around content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Space above, in pixels.
    pub top: f32,
    /// Space on the right, in pixels.
    pub right: f32,
    /// Space below, in pixels.
    pub bottom: f32,
    /// Space on the left, in pixels.
    pub left: f32,
}

impl Padding {
    /// Creates uniform padding.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates padding with different horizontal and vertical values.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
