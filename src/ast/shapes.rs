// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedron shortcuts built from matching top and bottom outlines
//!
//! Face windings are fixed so normals point outward under OpenSCAD's
//! `polyhedron` winding convention. Reordering them flips faces. Scaling the top
//! outline gives a taper, shifting it gives a shear, and collapsing it to a
//! single point gives a pyramid.

use super::builder::polyhedron;
use super::node::{Face, Node, Point};

/// Three-sided prism from corresponding `bottom` and `top` corners
pub fn triangular_prism(bottom: [Point; 3], top: [Point; 3]) -> Node {
    let [ba, bb, bc] = bottom;
    let [ta, tb, tc] = top;

    polyhedron([
        Face::from([ba, bc, bb]),
        Face::from([ta, tb, tc]),
        Face::from([tb, ta, ba, bb]),
        Face::from([ta, tc, bc, ba]),
        Face::from([tc, tb, bb, bc]),
    ])
}

/// Six-faced solid from corresponding `bottom` and `top` quads
pub fn hexahedron(bottom: [Point; 4], top: [Point; 4]) -> Node {
    let [ba, bb, bc, bd] = bottom;
    let [ta, tb, tc, td] = top;

    polyhedron([
        Face::from([ta, tb, tc, td]),
        Face::from([ta, td, bd, ba]),
        Face::from([tb, ta, ba, bb]),
        Face::from([tc, tb, bb, bc]),
        Face::from([td, tc, bc, bd]),
        Face::from([ba, bd, bc, bb]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(node: Node) -> Vec<Face> {
        match node {
            Node::Polyhedron(faces) => faces,
            other => panic!("expected polyhedron, got {:?}", other),
        }
    }

    #[test]
    fn test_triangular_prism_winding() {
        let b = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ];
        let t = b.map(|p| p.offset(0.0, 0.0, 5.0));

        let faces = faces(triangular_prism(b, t));
        assert_eq!(faces.len(), 5);
        assert_eq!(faces[0].points, vec![b[0], b[2], b[1]]);
        assert_eq!(faces[1].points, vec![t[0], t[1], t[2]]);
        assert_eq!(faces[2].points, vec![t[1], t[0], b[0], b[1]]);
        assert_eq!(faces[3].points, vec![t[0], t[2], b[2], b[0]]);
        assert_eq!(faces[4].points, vec![t[2], t[1], b[1], b[2]]);
    }

    #[test]
    fn test_hexahedron_winding() {
        let b = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ];
        let t = b.map(|p| p.offset(0.0, 0.0, 1.0));

        let faces = faces(hexahedron(b, t));
        assert_eq!(faces.len(), 6);
        assert_eq!(faces[0].points, vec![t[0], t[1], t[2], t[3]]);
        assert_eq!(faces[1].points, vec![t[0], t[3], b[3], b[0]]);
        assert_eq!(faces[2].points, vec![t[1], t[0], b[0], b[1]]);
        assert_eq!(faces[3].points, vec![t[2], t[1], b[1], b[2]]);
        assert_eq!(faces[4].points, vec![t[3], t[2], b[2], b[3]]);
        assert_eq!(faces[5].points, vec![b[0], b[3], b[2], b[1]]);
    }
}
