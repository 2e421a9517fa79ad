// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Utility functions

mod path;

pub use path::{absolute_path, normalize_path};
