// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Animator settings, loadable from TOML.

use crate::base::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Highest accepted tick rate, in ticks per second.
pub const MAX_TICK_RATE: u32 = 1000;

/// Settings for a [`PeriodicPoseAnimator`](super::PeriodicPoseAnimator).
///
/// Every field is optional in TOML:
///
/// ```toml
/// speed = 0.1
/// tick_rate = 60
/// initially_running = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimConfig {
    /// Angle advance per tick, in radians.
    pub speed: f32,
    /// Radius of the primary object's circle.
    pub radius: f32,
    /// Scale of the secondary object's counter-motion relative to the primary.
    pub secondary_factor: f32,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Scene name of the primary object.
    pub primary: String,
    /// Scene name of the secondary object.
    pub secondary: String,
    /// Whether the animation runs from the first tick.
    pub initially_running: bool,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            speed: 0.05,
            radius: 0.5,
            secondary_factor: 0.5,
            tick_rate: 30,
            primary: "animated-cube".to_string(),
            secondary: "animated-sphere".to_string(),
            initially_running: false,
        }
    }
}

impl AnimConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reads a TOML file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loading animation config");
                Self::from_toml_str(&text)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(Error::Config(format!("speed must be positive, got {}", self.speed)));
        }
        if !self.radius.is_finite() || !self.secondary_factor.is_finite() {
            return Err(Error::Config("radius and secondary_factor must be finite".into()));
        }
        if !(1..=MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(Error::Config(format!(
                "tick_rate must be between 1 and {MAX_TICK_RATE}, got {}",
                self.tick_rate
            )));
        }
        Ok(())
    }

    /// Returns the time between ticks.
    ///
    /// Out-of-range rates are clamped, so the period is never zero.
    pub fn period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.clamp(1, MAX_TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AnimConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnimConfig::default());
        assert_eq!(config.period(), Duration::from_nanos(33_333_333));
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = AnimConfig::from_toml_str("speed = 0.1\ninitially_running = true").unwrap();
        assert_eq!(config.speed, 0.1);
        assert!(config.initially_running);
        assert_eq!(config.primary, "animated-cube");
    }

    #[test]
    fn rejects_bad_values_and_unknown_keys() {
        assert!(matches!(
            AnimConfig::from_toml_str("speed = 0.0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnimConfig::from_toml_str("tick_rate = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnimConfig::from_toml_str("sped = 1.0"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn rejects_tick_rates_too_fast_for_a_timer() {
        let fastest = AnimConfig::from_toml_str(&format!("tick_rate = {MAX_TICK_RATE}")).unwrap();
        assert_eq!(fastest.period(), Duration::from_millis(1));

        assert!(matches!(
            AnimConfig::from_toml_str("tick_rate = 2000000000\ninitially_running = true"),
            Err(Error::Config(_))
        ));

        let unchecked = AnimConfig {
            tick_rate: u32::MAX,
            ..AnimConfig::default()
        };
        assert!(unchecked.validate().is_err());
        assert_eq!(unchecked.period(), Duration::from_millis(1));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("cogent-xyz-demos-no-such-config.toml");
        assert_eq!(AnimConfig::load_or_default(&path).unwrap(), AnimConfig::default());
        assert!(matches!(AnimConfig::load(&path), Err(Error::Io(_))));
    }
}
