//! Route discovery
//!
//! Scans a directory for GPX files and derives the human-readable name each
//! route is listed under.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension recognized as a route track
pub const ROUTE_EXTENSION: &str = "gpx";

/// A discovered route file with its display name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteFile {
    pub path: PathBuf,
    pub name: String,
}

fn is_route_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(ROUTE_EXTENSION))
        .unwrap_or(false)
}

/// Display name for a route file: the file stem with underscores replaced by
/// spaces.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unnamed route")
        .replace('_', " ")
}

/// Scan a directory for route files, sorted by file name.
///
/// Only the directory itself is scanned, not subdirectories.
pub fn scan(dir: &Path) -> Result<Vec<RouteFile>> {
    let mut routes = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("failed to scan routes directory {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && is_route_file(path) {
            routes.push(RouteFile {
                path: path.to_path_buf(),
                name: display_name(path),
            });
        }
    }

    tracing::debug!("Discovered {} route files in {}", routes.len(), dir.display());
    Ok(routes)
}
