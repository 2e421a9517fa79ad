// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Output sinks for rendered text: stdout, clipboard, OpenSCAD

use crate::ast::Node;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::scad::render_with;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Clipboard programs tried in order, with the arguments that make them read stdin
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Render `node` with the process-wide config and print it to stdout
pub fn print(node: &Node) {
    println!("{}", node);
}

/// Render `node` followed by a newline into any writer
pub fn write_to(node: &Node, config: &Config, mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", render_with(node, config))
}

/// Copy `text` to the system clipboard using the first tool that is installed
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for (program, args) in CLIPBOARD_TOOLS {
        let spawned = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == ErrorKind::NotFound => continue,
            Err(source) => return Err(spawn_error(program, source)),
        };

        // Dropping stdin closes the pipe so the tool sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| spawn_error(program, source))?;
        }

        let status = child.wait().map_err(|source| spawn_error(program, source))?;
        if !status.success() {
            return Err(Error::ExitStatus {
                program: program.to_string(),
                status,
            });
        }

        log::debug!("copied {} bytes to clipboard with {}", text.len(), program);
        return Ok(());
    }

    Err(Error::NoClipboard)
}

/// Write `text` to a kept temporary `.scad` file and open it in OpenSCAD.
///
/// `OPENSCAD_PATH` overrides the executable. Returns the file path; the
/// editor is not waited on.
pub fn open_in_editor(text: &str) -> Result<PathBuf> {
    let program = openscad_program();
    let temp_dir = std::env::temp_dir();
    let io_error = |source| Error::Io {
        path: temp_dir.clone(),
        source,
    };

    let mut file = tempfile::Builder::new()
        .prefix("scadkit-")
        .suffix(".scad")
        .tempfile()
        .map_err(io_error)?;
    file.write_all(text.as_bytes()).map_err(io_error)?;
    let (_, path) = file.keep().map_err(|err| io_error(err.error))?;

    Command::new(&program)
        .arg(&path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| spawn_error(&program, source))?;

    log::debug!("opened {} in {}", path.display(), program);
    Ok(path)
}

fn openscad_program() -> String {
    std::env::var("OPENSCAD_PATH").unwrap_or_else(|_| "openscad".to_string())
}

fn spawn_error(program: &str, source: std::io::Error) -> Error {
    Error::Spawn {
        program: program.to_string(),
        source,
    }
}
