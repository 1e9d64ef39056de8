//! Parsed-route cache
//!
//! The metrics pipeline itself is pure; this collaborator owns caching so
//! that repeated browsing does not re-parse unchanged files. Entries are
//! keyed on the file path and stamped with the file's modification time: a
//! changed file is reloaded transparently, and callers can also invalidate
//! explicitly.

use anyhow::{Context, Result};
use lru::LruCache;
use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use trail_metrics_lib::{Track, TrackSummary};

/// A parsed route together with its derived summary
#[derive(Clone, Debug)]
pub struct RouteData {
    pub track: Track,
    pub summary: TrackSummary,
}

/// Parse and summarize one route file.
///
/// Pure apart from reading the file; failures carry the file path as
/// context and the underlying error kind for callers that branch on it.
pub fn load_route(path: &Path) -> Result<RouteData> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let track = Track::parse(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let summary = TrackSummary::new(&track)?;
    Ok(RouteData { track, summary })
}

struct CacheEntry {
    modified: SystemTime,
    data: Arc<RouteData>,
}

/// LRU cache of parsed routes with modification-time invalidation
pub struct SummaryCache {
    entries: LruCache<PathBuf, CacheEntry>,
}

impl SummaryCache {
    /// Create a cache holding at most `capacity` routes (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }

    /// Whether a fresh entry (same modification time) exists for this path
    pub fn contains_fresh(&self, path: &Path) -> bool {
        match (self.entries.peek(path), Self::modified_time(path)) {
            (Some(entry), Some(modified)) => entry.modified == modified,
            _ => false,
        }
    }

    /// Get the cached route for `path`, loading it when stale or absent.
    ///
    /// Failed loads are not cached; they surface the same error on every
    /// call until the file is fixed.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<RouteData>> {
        let modified = Self::modified_time(path);
        if let (Some(entry), Some(modified)) = (self.entries.get(path), modified) {
            if entry.modified == modified {
                tracing::trace!("Cache hit for {}", path.display());
                return Ok(entry.data.clone());
            }
            tracing::debug!("Cache entry for {} is stale, reloading", path.display());
        }

        let data = Arc::new(load_route(path)?);
        self.insert(path.to_path_buf(), data.clone());
        Ok(data)
    }

    /// Insert freshly loaded data, stamping it with the file's current
    /// modification time. Files whose metadata cannot be read are not
    /// cached.
    pub fn insert(&mut self, path: PathBuf, data: Arc<RouteData>) {
        let Some(modified) = Self::modified_time(&path) else {
            return;
        };
        self.entries.put(path, CacheEntry { modified, data });
    }

    /// Drop the cached entry for one path. Returns whether one existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.pop(path).is_some()
    }

    /// Drop every cached entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use trail_metrics_lib::TrackError;

    const SAMPLE_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="39.9755" lon="-0.5105"><ele>600</ele></trkpt>
      <trkpt lat="39.9760" lon="-0.5100"><ele>612</ele></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

    const EMPTY_GPX: &str = r#"<?xml version="1.0"?>
<gpx version="1.1" creator="test">
  <trk><trkseg></trkseg></trk>
</gpx>"#;

    fn write_route(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_route() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_route(dir.path(), "cueva.gpx", SAMPLE_GPX);

        let data = load_route(&path).unwrap();
        assert_eq!(data.track.len(), 2);
        assert!((data.summary.ascent_m() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_route_empty_track_is_distinguishable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_route(dir.path(), "vacio.gpx", EMPTY_GPX);

        let err = load_route(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackError>(),
            Some(TrackError::EmptyTrack)
        ));
    }

    #[test]
    fn test_load_route_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_route(dir.path(), "roto.gpx", "<gpx version=\"1.1\"><trk>");

        let err = load_route(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackError>(),
            Some(TrackError::Parse(_))
        ));
    }

    #[test]
    fn test_cache_hit_returns_same_arc() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_route(dir.path(), "cueva.gpx", SAMPLE_GPX);
        let mut cache = SummaryCache::new(4);

        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_fresh(&path));
    }

    #[test]
    fn test_modified_file_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_route(dir.path(), "cueva.gpx", SAMPLE_GPX);
        let mut cache = SummaryCache::new(4);

        let first = cache.get_or_load(&path).unwrap();

        // Rewrite the file and push its modification time clearly forward
        fs::write(&path, EMPTY_GPX).unwrap();
        let file = File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(10))
            .unwrap();

        assert!(!cache.contains_fresh(&path));
        let err = cache.get_or_load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackError>(),
            Some(TrackError::EmptyTrack)
        ));
        // The stale entry was not silently reused
        assert_eq!(first.track.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_route(dir.path(), "cueva.gpx", SAMPLE_GPX);
        let mut cache = SummaryCache::new(4);

        let first = cache.get_or_load(&path).unwrap();
        assert!(cache.invalidate(&path));
        assert!(cache.is_empty());

        let second = cache.get_or_load(&path).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_route(dir.path(), "a.gpx", SAMPLE_GPX);
        let b = write_route(dir.path(), "b.gpx", SAMPLE_GPX);
        let mut cache = SummaryCache::new(1);

        cache.get_or_load(&a).unwrap();
        cache.get_or_load(&b).unwrap();

        assert_eq!(cache.len(), 1);
        assert!(!cache.contains_fresh(&a));
        assert!(cache.contains_fresh(&b));
    }

    #[test]
    fn test_missing_file_fails_and_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.gpx");
        let mut cache = SummaryCache::new(4);

        assert!(cache.get_or_load(&missing).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = SummaryCache::new(0);
        assert!(cache.is_empty());
    }
}
