// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `.scad` file exporter

use crate::ast::Node;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::scad::render_with;
use std::path::Path;

/// Render `node` and write it to `path`, ending with a newline
pub fn export_scad(node: &Node, path: impl AsRef<Path>, config: &Config) -> Result<()> {
    write_scad(&render_with(node, config), path)
}

/// Write already rendered SCAD text to `path`, ending with a newline
pub fn write_scad(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut content = String::with_capacity(text.len() + 1);
    content.push_str(text);
    content.push('\n');

    std::fs::write(path, &content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
