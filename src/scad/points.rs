// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedron point indexing
//!
//! Faces are authored with points by value. OpenSCAD wants one shared point
//! list plus faces made of indices into it. Indices are assigned in
//! first-occurrence order while walking faces in order, so the result depends
//! only on face order and never on hash iteration order.

use crate::ast::{Face, Point};
use ahash::AHashMap;

/// Bit-level identity of a point.
///
/// `-0.0` is folded into `0.0` so value-equal points share a key. NaN
/// coordinates compare by bit pattern, which keeps their indices stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PointKey([u64; 3]);

impl PointKey {
    fn new(point: &Point) -> Self {
        Self([bits(point.x), bits(point.y), bits(point.z)])
    }
}

fn bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// Insertion-ordered set of unique points
#[derive(Debug, Default, Clone)]
pub struct PointIndex {
    points: Vec<Point>,
    lookup: AHashMap<PointKey, usize>,
}

impl PointIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `point`, adding it at the end if it has not been seen
    pub fn insert(&mut self, point: Point) -> usize {
        let next = self.points.len();
        let index = *self.lookup.entry(PointKey::new(&point)).or_insert(next);
        if index == next {
            self.points.push(point);
        }
        index
    }

    pub fn get(&self, point: &Point) -> Option<usize> {
        self.lookup.get(&PointKey::new(point)).copied()
    }

    /// Unique points in first-occurrence order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Faces rewritten as indices into a deduplicated point list
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedFaces {
    pub points: Vec<Point>,
    pub faces: Vec<Vec<usize>>,
}

/// Deduplicate every point across `faces` and map each face to indices
pub fn index_faces(faces: &[Face]) -> IndexedFaces {
    let mut index = PointIndex::new();
    let indexed: Vec<Vec<usize>> = faces
        .iter()
        .map(|face| face.points.iter().map(|p| index.insert(*p)).collect())
        .collect();

    log::trace!(
        "indexed {} faces: {} point references, {} unique points",
        faces.len(),
        faces.iter().map(|f| f.points.len()).sum::<usize>(),
        index.len()
    );

    IndexedFaces {
        points: index.points,
        faces: indexed,
    }
}
