// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Scene lights.

use super::Vec3;
use crate::colors::Color;

/// Standard light colors, named after their sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightColor {
    /// Direct sunlight.
    DirectSun,
    /// Overcast daylight.
    Overcast,
    /// Incandescent bulb.
    Incandescent,
}

impl LightColor {
    /// Returns the RGB value of the light.
    pub fn color(self) -> Color {
        match self {
            LightColor::DirectSun => Color::rgb(255, 255, 255),
            LightColor::Overcast => Color::rgb(201, 226, 255),
            LightColor::Incandescent => Color::rgb(255, 214, 170),
        }
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light from all directions.
    Ambient {
        /// Light color.
        color: LightColor,
        /// Intensity multiplier.
        brightness: f32,
    },
    /// Parallel light coming from `pos` towards the origin.
    Directional {
        /// Light color.
        color: LightColor,
        /// Intensity multiplier.
        brightness: f32,
        /// Position the light shines from.
        pos: Vec3,
    },
}

impl Light {
    /// Creates an ambient light.
    pub fn ambient(brightness: f32, color: LightColor) -> Self {
        Light::Ambient { color, brightness }
    }

    /// Creates a directional light shining from straight above.
    pub fn directional(brightness: f32, color: LightColor) -> Self {
        Light::Directional {
            color,
            brightness,
            pos: Vec3::y(),
        }
    }

    /// Sets the position a directional light shines from; no effect on ambient lights.
    pub fn with_pos(mut self, x: f32, y: f32, z: f32) -> Self {
        if let Light::Directional { pos, .. } = &mut self {
            *pos = Vec3::new(x, y, z);
        }
        self
    }
}
