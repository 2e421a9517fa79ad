// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Constructors and chaining helpers for building node trees
//!
//! Every function here is a plain constructor: no validation, no I/O, no
//! failure. Negative or non-finite dimensions are passed through untouched.

use super::node::{Face, Node, Rgba, TransformOp, Vec3};
use std::ops::{Add, Sub};
use std::path::{Path, PathBuf};

// Primitives

/// Cube with equal sides
pub fn cube(side: f64, center: bool) -> Node {
    cuboid(side, side, side, center)
}

/// Rectangular prism. Emitted as `cube([width, depth, height], center)`.
pub fn cuboid(height: f64, width: f64, depth: f64, center: bool) -> Node {
    Node::Cube {
        size: Vec3::new(width, depth, height),
        center,
    }
}

/// Alias of [`cuboid`]
pub fn rectangular_prism(height: f64, width: f64, depth: f64, center: bool) -> Node {
    cuboid(height, width, depth, center)
}

pub fn sphere(r: f64) -> Node {
    Node::Sphere { r }
}

pub fn cylinder(height: f64, top_radius: f64, bottom_radius: f64, center: bool) -> Node {
    Node::Cylinder {
        h: height,
        r_top: top_radius,
        r_bottom: bottom_radius,
        center,
    }
}

pub fn polyhedron(faces: impl IntoIterator<Item = Face>) -> Node {
    Node::Polyhedron(faces.into_iter().collect())
}

/// Raw OpenSCAD text
pub fn literal(text: impl Into<String>) -> Node {
    Node::Literal(text.into())
}

pub fn list(children: impl IntoIterator<Item = Node>) -> Node {
    Node::List(children.into_iter().collect())
}

// Boolean operations

pub fn union(parent: Node, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Union(std::iter::once(parent).chain(children).collect())
}

/// `parent` minus every child
pub fn difference(parent: Node, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Difference {
        parent: Box::new(parent),
        children: children.into_iter().collect(),
    }
}

/// `from` minus `removed`, spelled in reading order
pub fn subtract(removed: Node, from: Node) -> Node {
    difference(from, [removed])
}

pub fn intersection(parent: Node, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Intersection(std::iter::once(parent).chain(children).collect())
}

// Transformations

pub fn scale(x: f64, y: f64, z: f64, subjects: impl IntoIterator<Item = Node>) -> Node {
    wrap(TransformOp::Scale(Vec3::new(x, y, z)), subjects)
}

pub fn resize(x: f64, y: f64, z: f64, subjects: impl IntoIterator<Item = Node>) -> Node {
    wrap(TransformOp::Resize(Vec3::new(x, y, z)), subjects)
}

/// Rotation in degrees about x, then y, then z
pub fn rotate(x: f64, y: f64, z: f64, subjects: impl IntoIterator<Item = Node>) -> Node {
    wrap(TransformOp::Rotate(Vec3::new(x, y, z)), subjects)
}

pub fn translate(x: f64, y: f64, z: f64, subjects: impl IntoIterator<Item = Node>) -> Node {
    wrap(TransformOp::Translate(Vec3::new(x, y, z)), subjects)
}

/// Mirror across the plane through the origin with normal `(x, y, z)`
pub fn mirror(x: f64, y: f64, z: f64, subjects: impl IntoIterator<Item = Node>) -> Node {
    wrap(TransformOp::Mirror(Vec3::new(x, y, z)), subjects)
}

pub fn color(r: f64, g: f64, b: f64, a: f64, subjects: impl IntoIterator<Item = Node>) -> Node {
    wrap(TransformOp::Color(Rgba::new(r, g, b, a)), subjects)
}

/// A single subject is wrapped directly, anything else goes through a `List`.
fn wrap(op: TransformOp, subjects: impl IntoIterator<Item = Node>) -> Node {
    let mut subjects: Vec<Node> = subjects.into_iter().collect();
    let content = if subjects.len() == 1 {
        subjects.remove(0)
    } else {
        Node::List(subjects)
    };

    Node::Transform {
        op,
        content: Box::new(content),
    }
}

// Import

/// Reference an external mesh file.
///
/// The path is made absolute against the current directory and normalized
/// lexically. Whether the file exists is left to OpenSCAD.
pub fn import(path: impl AsRef<Path>) -> Node {
    Node::Import(crate::utils::absolute_path(path.as_ref()))
}

/// Reference an external mesh file by exact path, skipping resolution
pub fn import_exact(path: impl Into<PathBuf>) -> Node {
    Node::Import(path.into())
}

// Chaining

impl Node {
    pub fn unioned_with(self, other: Node) -> Node {
        union(self, [other])
    }

    /// `self - other`: `self` stays the parent of the difference.
    pub fn subtracted_from(self, other: Node) -> Node {
        difference(self, [other])
    }

    /// Same as [`Node::subtracted_from`].
    pub fn subtracting(self, other: Node) -> Node {
        self.subtracted_from(other)
    }

    pub fn intersected_with(self, other: Node) -> Node {
        intersection(self, [other])
    }

    pub fn scaled(self, x: f64, y: f64, z: f64) -> Node {
        scale(x, y, z, [self])
    }

    pub fn resized(self, x: f64, y: f64, z: f64) -> Node {
        resize(x, y, z, [self])
    }

    pub fn rotated(self, x: f64, y: f64, z: f64) -> Node {
        rotate(x, y, z, [self])
    }

    pub fn translated(self, x: f64, y: f64, z: f64) -> Node {
        translate(x, y, z, [self])
    }

    pub fn mirrored(self, x: f64, y: f64, z: f64) -> Node {
        mirror(x, y, z, [self])
    }

    pub fn colored(self, r: f64, g: f64, b: f64, a: f64) -> Node {
        color(r, g, b, a, [self])
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        self.unioned_with(rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Node) -> Node {
        self.subtracted_from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_field_order() {
        match cuboid(2.0, 3.0, 4.0, false) {
            Node::Cube { size, center } => {
                assert_eq!(size, Vec3::new(3.0, 4.0, 2.0));
                assert!(!center);
            }
            other => panic!("expected cube, got {:?}", other),
        }
    }

    #[test]
    fn test_center_flag_is_kept() {
        assert_eq!(
            cube(1.0, false),
            Node::Cube {
                size: Vec3::new(1.0, 1.0, 1.0),
                center: false
            }
        );
    }

    #[test]
    fn test_negative_dimensions_pass_through() {
        assert_eq!(sphere(-3.0), Node::Sphere { r: -3.0 });
    }

    #[test]
    fn test_static_and_chained_transforms_match() {
        assert_eq!(
            translate(1.0, 2.0, 3.0, [sphere(1.0)]),
            sphere(1.0).translated(1.0, 2.0, 3.0)
        );
        assert_eq!(
            color(1.0, 0.0, 0.0, 0.5, [cube(1.0, true)]),
            cube(1.0, true).colored(1.0, 0.0, 0.0, 0.5)
        );
    }

    #[test]
    fn test_multiple_subjects_are_listed() {
        let node = rotate(0.0, 0.0, 90.0, [sphere(1.0), sphere(2.0)]);
        match node {
            Node::Transform { content, .. } => {
                assert_eq!(*content, list([sphere(1.0), sphere(2.0)]));
            }
            other => panic!("expected transform, got {:?}", other),
        }
    }

    #[test]
    fn test_difference_direction() {
        let x = cube(10.0, true);
        let y = sphere(6.0);
        let expected = difference(x.clone(), [y.clone()]);

        assert_eq!(subtract(y.clone(), x.clone()), expected);
        assert_eq!(x.clone().subtracted_from(y.clone()), expected);
        assert_eq!(x.clone().subtracting(y.clone()), expected);
        assert_eq!(x - y, expected);
    }

    #[test]
    fn test_union_operator() {
        let a = cube(1.0, false);
        let b = sphere(1.0);
        assert_eq!(a.clone() + b.clone(), union(a, [b]));
    }

    #[test]
    fn test_import_exact_keeps_path() {
        assert_eq!(
            import_exact("relative/part.stl"),
            Node::Import(PathBuf::from("relative/part.stl"))
        );
    }
}
