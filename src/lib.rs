// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadkit
//!
//! Build OpenSCAD models as Rust values and render them to script text.
//!
//! ```
//! use scadkit::ast::{cube, sphere};
//!
//! let model = cube(10.0, true) - sphere(6.0).translated(0.0, 0.0, 5.0);
//! let text = scadkit::render(&model);
//! assert!(text.starts_with("difference() {"));
//! ```

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod scad;
pub mod utils;

pub use ast::{Face, Node, Point, Rgba, TransformOp, Vec3};
pub use config::Config;
pub use error::{Error, Result};
pub use scad::render_with;

/// Render a node tree with the process-wide configuration
pub fn render(node: &Node) -> String {
    render_with(node, &config::global())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cube() {
        let text = render(&ast::cube(10.0, false));
        assert_eq!(text, "cube([10, 10, 10], false);");
    }
}
