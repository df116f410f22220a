// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Color types and utilities.

use std::fmt;

/// A color in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255).
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new color from RGB components (alpha defaults to 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Returns the color packed as `0xAARRGGBB`, the layout pixel buffers expect.
    pub fn as_argb(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Returns the color as an f32 array (RGBA, 0.0-1.0).
    pub fn as_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Composites this color over an opaque `0x00RRGGBB` background pixel.
    pub fn blend_over(&self, background: u32) -> u32 {
        if self.a == 255 {
            return self.as_argb();
        }
        let alpha = self.a as u32;
        let mix = |fg: u8, shift: u32| {
            let bg = (background >> shift) & 0xFF;
            ((fg as u32 * alpha + bg * (255 - alpha)) / 255) << shift
        };
        0xFF00_0000 | mix(self.r, 16) | mix(self.g, 8) | mix(self.b, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Common colors.
impl Color {
    /// White color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Black color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Red color.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green color.
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// Blue color.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Orange color.
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    /// Yellow color.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Tan color.
    pub const TAN: Self = Self::rgb(210, 180, 140);
    /// Transparent color (fully transparent).
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// The light color scheme used by the demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    /// Window background.
    pub background: Color,
    /// Primary accent, used for filled buttons.
    pub primary: Color,
    /// Text on top of `primary`.
    pub on_primary: Color,
    /// Container color for selected surfaces.
    pub select_container: Color,
    /// Inverse surface, used for snackbars.
    pub inverse_surface: Color,
}

/// The active color scheme.
pub const SCHEME: Scheme = Scheme {
    background: Color::rgb(0xF5, 0xF5, 0xF5),
    primary: Color::rgb(0x42, 0x85, 0xF4),
    on_primary: Color::WHITE,
    select_container: Color::rgb(0xE8, 0xF0, 0xFE),
    inverse_surface: Color::rgb(0x31, 0x30, 0x33),
};
