// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Sample model printed by `scadkit demo`

use crate::ast::{cube, sphere, union, Node};

/// A 5 mm centered cube united with a sphere shifted 10 mm along x
pub fn demo_model() -> Node {
    union(cube(5.0, true), [sphere(5.0).translated(10.0, 0.0, 0.0)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_with, Config};

    #[test]
    fn test_demo_renders() {
        assert_eq!(
            render_with(&demo_model(), &Config::default()),
            "union() {\n    cube([5, 5, 5], true);\n    translate([10, 0, 0]) {\n        sphere(5, $fn=50);\n    };\n};"
        );
    }
}
