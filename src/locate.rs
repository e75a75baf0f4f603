//! Catalog file discovery.
//!
//! The catalog is looked up by file name anywhere in the project tree.
//! When several candidates exist, the conventional resources layout
//! wins: `src/main/resources/` first, any other `resources/` directory
//! second, everything else last.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories never descended into while searching for the catalog
fn ignored_dirs() -> HashSet<&'static str> {
    [
        "node_modules",
        "target",
        ".git",
        ".hg",
        ".svn",
        ".idea",
        ".gradle",
        "build",
        "dist",
        "out",
        ".venv",
        "__pycache__",
        "vendor",
    ]
    .into_iter()
    .collect()
}

/// Rank of a candidate path; lower is preferred.
fn resource_priority(path: &Path) -> u8 {
    let segments: Vec<&str> = path.iter().filter_map(|c| c.to_str()).collect();
    if segments.windows(3).any(|w| w == ["src", "main", "resources"]) {
        0
    } else if segments.contains(&"resources") {
        1
    } else {
        2
    }
}

/// Find the catalog file named `file_name` under `root`.
///
/// Returns `None` when no such file exists outside the ignored
/// directories. Ties at the same priority resolve to the first match in
/// walk order.
#[must_use]
pub fn find_catalog(root: &Path, file_name: &str) -> Option<PathBuf> {
    let ignored = ignored_dirs();

    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !ignored.contains(name))
        })
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry.file_type().is_file() && entry.file_name().to_str() == Some(file_name)
        })
        .map(walkdir::DirEntry::into_path)
        .min_by_key(|path| resource_priority(path))
}
