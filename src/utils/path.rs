// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Path utilities

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the current directory and normalize it.
///
/// Falls back to the normalized input when the current directory is unreadable.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }

    match std::env::current_dir() {
        Ok(cwd) => normalize_path(&cwd.join(path)),
        Err(err) => {
            log::warn!(
                "cannot read current directory, keeping relative path {}: {}",
                path.display(),
                err
            );
            normalize_path(path)
        }
    }
}

/// Remove `.` components and fold `..` into its parent without touching the
/// filesystem. Symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root is the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }

    out
}
