//! High-level route browsing
//!
//! Ties together discovery, caching and loading. Batch loads parse files in
//! parallel (each file is an independent, pure pipeline) and then fill the
//! cache sequentially.

use crate::cache::{self, RouteData, SummaryCache};
use crate::catalog::{self, RouteFile};
use anyhow::{Result, anyhow};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

pub struct RouteBrowser {
    routes_dir: PathBuf,
    cache: SummaryCache,
}

impl RouteBrowser {
    pub fn new(routes_dir: PathBuf, cache_size: usize) -> Self {
        Self {
            routes_dir,
            cache: SummaryCache::new(cache_size),
        }
    }

    /// All route files currently in the routes directory, sorted by file name
    pub fn routes(&self) -> Result<Vec<RouteFile>> {
        catalog::scan(&self.routes_dir)
    }

    /// Resolve a route by display name or file name (case-insensitive)
    pub fn find(&self, name: &str) -> Result<RouteFile> {
        let needle = name.to_lowercase();
        self.routes()?
            .into_iter()
            .find(|route| {
                route.name.to_lowercase() == needle
                    || route
                        .path
                        .file_name()
                        .and_then(|file| file.to_str())
                        .map(|file| file.eq_ignore_ascii_case(name))
                        .unwrap_or(false)
            })
            .ok_or_else(|| {
                anyhow!(
                    "no route named {:?} in {}",
                    name,
                    self.routes_dir.display()
                )
            })
    }

    /// Load one route through the cache
    pub fn load(&mut self, file: &RouteFile) -> Result<Arc<RouteData>> {
        self.cache.get_or_load(&file.path)
    }

    /// Load every discovered route, in catalog order.
    ///
    /// Stale or missing entries are parsed in parallel before the cache is
    /// filled sequentially. Per-file failures are returned as values so one
    /// bad file cannot hide the rest; a failed parallel load is re-surfaced
    /// by the sequential pass.
    pub fn load_all(&mut self) -> Result<Vec<(RouteFile, Result<Arc<RouteData>>)>> {
        let files = self.routes()?;

        let cold: Vec<PathBuf> = files
            .iter()
            .map(|file| file.path.clone())
            .filter(|path| !self.cache.contains_fresh(path))
            .collect();
        tracing::debug!("Loading {} of {} routes from disk", cold.len(), files.len());

        let loaded: Vec<(PathBuf, Result<RouteData>)> = cold
            .into_par_iter()
            .map(|path| {
                let data = cache::load_route(&path);
                (path, data)
            })
            .collect();

        for (path, data) in loaded {
            if let Ok(data) = data {
                self.cache.insert(path, Arc::new(data));
            }
        }

        Ok(files
            .into_iter()
            .map(|file| {
                let data = self.cache.get_or_load(&file.path);
                (file, data)
            })
            .collect())
    }
}
