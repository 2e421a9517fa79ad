// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Abstract Syntax Tree module
//!
//! Defines the node tree for OpenSCAD constructs and the helpers that build it

mod node;
mod builder;
mod shapes;

pub use node::{Face, Node, Point, Rgba, TransformOp, Vec3};
pub use builder::{
    color, cube, cuboid, cylinder, difference, import, import_exact, intersection, list, literal,
    mirror, polyhedron, rectangular_prism, resize, rotate, scale, sphere, subtract, translate,
    union,
};
pub use shapes::{hexahedron, triangular_prism};
