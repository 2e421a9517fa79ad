// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for the I/O edges of the crate
//!
//! Building and rendering trees cannot fail. Only loading, saving and handing
//! text to other programs can.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid node tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("environment variable {var} has invalid value `{value}`")]
    InvalidEnv { var: &'static str, value: String },

    #[error("no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel, clip)")]
    NoClipboard,

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },
}

/// Result type alias for fallible scadkit operations.
pub type Result<T> = std::result::Result<T, Error>;
