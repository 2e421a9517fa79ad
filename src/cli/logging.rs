// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Logger setup for the command-line tools
//!
//! Logs from this crate are shown at `warn` by default and at `info` with
//! `--verbose`. Setting `RUST_LOG` overrides both:
//!
//! ```sh
//! $> RUST_LOG=scadkit=trace scadkit render model.json
//! ```

use log::LevelFilter;

/// Initialize `env_logger` for the given crates. Safe to call more than once.
pub fn init_logging(crates: &[&str], verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let filter = default_filter(crates, level);
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}

/// `RUST_LOG`-style filter string, e.g. `scadkit=warn`
fn default_filter(crates: &[&str], level: LevelFilter) -> String {
    let level = level.as_str().to_lowercase();
    crates
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter(&["scadkit"], LevelFilter::Warn),
            "scadkit=warn"
        );
        assert_eq!(
            default_filter(&["scadkit", "other"], LevelFilter::Info),
            "scadkit=info,other=info"
        );
    }
}
