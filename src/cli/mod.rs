// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for scadkit

pub mod demo;
pub mod logging;
pub mod reporter;

pub use demo::demo_model;
pub use logging::init_logging;
pub use reporter::{RenderSummary, Reporter};
