// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting
//!
//! Everything goes to stderr so rendered SCAD on stdout stays pipeable.

use crate::ast::Node;
use colored::*;
use std::time::Duration;

/// Size figures for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub nodes: usize,
    pub lines: usize,
    pub bytes: usize,
}

impl RenderSummary {
    pub fn new(node: &Node, text: &str) -> Self {
        Self {
            nodes: node.node_count(),
            lines: text.lines().count(),
            bytes: text.len(),
        }
    }
}

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report simple render result
    pub fn report_render(
        source: &str,
        summary: &RenderSummary,
        resolution: u32,
        duration: Duration,
    ) {
        eprintln!("\n{}", "━".repeat(80).bright_black());
        eprintln!("{} {}", "Rendered:".bold(), source.cyan());
        eprintln!("{}", "━".repeat(80).bright_black());
        Self::print_metric("Nodes", summary.nodes);
        Self::print_metric("Lines", summary.lines);
        Self::print_metric("Bytes", summary.bytes);
        eprintln!(
            "  {} {}",
            "$fn:".bright_black(),
            resolution.to_string().cyan()
        );
        eprintln!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        eprintln!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        eprintln!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        eprintln!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Report the outcome of an optional output step. A failure becomes a
    /// warning and yields `None`.
    pub fn report_step<T>(result: crate::Result<T>, step: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{} failed: {}", step, err);
                Self::report_warning(&format!("{} failed: {}", step, err));
                None
            }
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✅".green(), message.green());
    }

    fn print_metric(name: &str, value: usize) {
        eprintln!(
            "  {} {}",
            format!("{}:", name).bright_black(),
            value.to_string().cyan()
        );
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
