// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD serializer

mod points;
mod writer;

pub use points::{index_faces, IndexedFaces, PointIndex};
pub use writer::{escape_string, render_with, INDENT};
