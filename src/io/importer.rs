// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node tree import/export as JSON

use crate::ast::Node;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a JSON-serialized node tree
pub fn parse_tree(source: &str) -> Result<Node> {
    Ok(serde_json::from_str(source)?)
}

/// Load a JSON-serialized node tree from disk
pub fn load_tree(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let node = parse_tree(&source)?;
    log::debug!(
        "loaded tree with {} nodes from {}",
        node.node_count(),
        path.display()
    );
    Ok(node)
}

/// Write a node tree to disk as pretty JSON
pub fn save_tree(node: &Node, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(node)?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
