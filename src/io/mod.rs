// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - tree files, `.scad` export, and output sinks

mod exporter;
mod importer;
mod sink;

pub use exporter::{export_scad, write_scad};
pub use importer::{load_tree, parse_tree, save_tree};
pub use sink::{copy_to_clipboard, open_in_editor, print, write_to};
