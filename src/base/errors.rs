// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for the demos.

/// A result type alias for demo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("Invalid config: {0}")]
    Config(String),

    /// No scene node with the given name exists.
    #[error("No scene node named {0:?}")]
    NodeNotFound(String),

    /// A scene node exists but is not of the requested kind.
    #[error("Scene node {name:?} is a {actual}, not a {expected}")]
    NodeKind {
        /// The name that was looked up.
        name: String,
        /// The kind that was requested.
        expected: &'static str,
        /// The kind that was found.
        actual: &'static str,
    },

    /// A rendering error occurred.
    #[error("Rendering error: {0}")]
    Rendering(String),
}
