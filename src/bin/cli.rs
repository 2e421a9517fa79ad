// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadkit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scadkit::cli::{demo_model, init_logging, RenderSummary, Reporter};
use scadkit::{io, render_with, Config};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "scadkit")]
#[command(about = "Render JSON node trees to OpenSCAD scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./scadkit.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON node tree to OpenSCAD
    Render {
        /// Input JSON tree
        input: PathBuf,

        /// Output .scad file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Override $fn for spheres and cylinders
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Also copy the result to the clipboard
        #[arg(long)]
        clipboard: bool,

        /// Also open the result in OpenSCAD
        #[arg(long)]
        open: bool,
    },

    /// Print the sample model
    Demo {
        /// Print the JSON tree instead of OpenSCAD
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&["scadkit"], cli.verbose);

    if let Err(err) = run(cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            input,
            output,
            resolution,
            clipboard,
            open,
        } => {
            let mut config = config;
            if let Some(resolution) = resolution {
                config.resolution = resolution;
            }
            render_command(&input, output.as_deref(), &config, clipboard, open, cli.verbose)?;
        }
        Commands::Demo { json } => {
            let model = demo_model();
            if json {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else {
                println!("{}", render_with(&model, &config));
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
        Commands::Version => {
            println!("scadkit v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            config.apply_env()?;
            Ok(config)
        }
        None => Config::load().context("Failed to load configuration"),
    }
}

fn render_command(
    input: &Path,
    output: Option<&Path>,
    config: &Config,
    clipboard: bool,
    open: bool,
    verbose: bool,
) -> Result<()> {
    let tree = io::load_tree(input)
        .with_context(|| format!("Failed to load tree: {}", input.display()))?;

    let start = std::time::Instant::now();
    let text = render_with(&tree, config);
    let render_time = start.elapsed();

    if verbose {
        let summary = RenderSummary::new(&tree, &text);
        Reporter::report_render(
            &input.display().to_string(),
            &summary,
            config.resolution,
            render_time,
        );
    }

    match output {
        Some(path) => {
            io::write_scad(&text, path)?;
            if verbose {
                Reporter::success(&format!("Wrote {}", path.display()));
            }
        }
        None => println!("{}", text),
    }

    // The rendered text is already delivered; extra sinks only warn
    if clipboard {
        let copied = Reporter::report_step(io::copy_to_clipboard(&text), "Copy to clipboard");
        if copied.is_some() && verbose {
            Reporter::report_info("Copied to clipboard");
        }
    }

    if open {
        let opened = Reporter::report_step(io::open_in_editor(&text), "Open in OpenSCAD");
        match opened {
            Some(path) if verbose => {
                Reporter::report_info(&format!("Opened {} in OpenSCAD", path.display()));
            }
            _ => {}
        }
    }

    Ok(())
}
