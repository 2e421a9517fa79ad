// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! AST Node definitions

use serde::{Deserialize, Serialize};

/// 3D Vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// A single OpenSCAD expression.
///
/// Trees are plain values: building a bigger model moves the smaller ones in,
/// nothing is shared or mutated behind the caller's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Raw text, emitted verbatim. Validity is the caller's problem.
    Literal(String),
    /// Sequential composition without any wrapping syntax.
    List(Vec<Node>),

    // Primitives
    /// `size` is (width, depth, height).
    Cube {
        size: Vec3,
        center: bool,
    },
    Sphere {
        r: f64,
    },
    Cylinder {
        h: f64,
        r_top: f64,
        r_bottom: f64,
        center: bool,
    },
    Polyhedron(Vec<Face>),

    // Boolean operations
    Union(Vec<Node>),
    Difference {
        parent: Box<Node>,
        children: Vec<Node>,
    },
    Intersection(Vec<Node>),

    // Transformations
    Transform {
        op: TransformOp,
        content: Box<Node>,
    },

    /// External mesh file, already resolved to an absolute path.
    Import(std::path::PathBuf),
}

impl Node {
    /// Direct child nodes, in render order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::List(children) | Node::Union(children) | Node::Intersection(children) => {
                children.iter().collect()
            }
            Node::Difference { parent, children } => std::iter::once(parent.as_ref())
                .chain(children.iter())
                .collect(),
            Node::Transform { content, .. } => vec![content.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Number of nodes in this tree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::node_count)
            .sum::<usize>()
    }

    /// Replace the held value with `f(old)`.
    ///
    /// Lets a `let mut model` binding grow step by step without cloning.
    pub fn apply(&mut self, f: impl FnOnce(Node) -> Node) {
        let old = std::mem::take(self);
        *self = f(old);
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::List(Vec::new())
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Literal(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Literal(text)
    }
}

/// Block operations that wrap exactly one sub-tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    Scale(Vec3),
    Resize(Vec3),
    Rotate(Vec3),
    Translate(Vec3),
    Mirror(Vec3),
    Color(Rgba),
}

impl TransformOp {
    /// OpenSCAD module name for this operation
    pub fn keyword(&self) -> &'static str {
        match self {
            TransformOp::Scale(_) => "scale",
            TransformOp::Resize(_) => "resize",
            TransformOp::Rotate(_) => "rotate",
            TransformOp::Translate(_) => "translate",
            TransformOp::Mirror(_) => "mirror",
            TransformOp::Color(_) => "color",
        }
    }
}

/// Color with components in `[0, 1]` (not enforced)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Polyhedron vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Copy of this point moved by `(dx, dy, dz)`
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<nalgebra::Point3<f64>> for Point {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point> for nalgebra::Point3<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

/// One boundary surface of a polyhedron. Point order sets the face normal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Face {
    pub points: Vec<Point>,
}

impl Face {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Point; N]> for Face {
    fn from(points: [Point; N]) -> Self {
        Self::new(points)
    }
}
