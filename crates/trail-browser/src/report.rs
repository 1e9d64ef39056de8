//! Rendering of route summaries
//!
//! Text tables for the terminal and serde_json records for machine
//! consumption. A parse failure renders as "unusable" and an empty track as
//! "no data"; neither aborts a listing.

use crate::cache::RouteData;
use crate::catalog::RouteFile;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use trail_metrics_lib::{Difficulty, ProfilePoint, TrackError};

/// Profile rows shown by `show` before sampling kicks in
pub const PROFILE_SAMPLE_ROWS: usize = 20;

/// Format a distance given in kilometers
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else if km < 100.0 {
        format!("{:.2} km", km)
    } else {
        format!("{:.0} km", km)
    }
}

/// Format an ascent given in meters
pub fn format_ascent(m: f64) -> String {
    format!("{:.0} m", m)
}

/// Short status for a failed route, suitable for a table cell
pub fn describe_error(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<TrackError>() {
        Some(TrackError::EmptyTrack) => "no data",
        _ => "unusable",
    }
}

/// One route as a machine-readable record
#[derive(Serialize, Debug)]
pub struct RouteRecord {
    pub name: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascent_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<ProfilePoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteRecord {
    pub fn from_entry(
        file: &RouteFile,
        data: &Result<Arc<RouteData>>,
        include_profile: bool,
    ) -> Self {
        let mut record = RouteRecord {
            name: file.name.clone(),
            file: file.path.display().to_string(),
            distance_km: None,
            ascent_m: None,
            difficulty: None,
            points: None,
            start: None,
            end: None,
            profile: None,
            error: None,
        };

        match data {
            Ok(data) => {
                record.distance_km = Some(data.summary.distance_km());
                record.ascent_m = Some(data.summary.ascent_m());
                record.difficulty = Some(data.summary.difficulty());
                record.points = Some(data.track.len());
                record.start = data.track.start().map(|p| (p.latitude, p.longitude));
                record.end = data.track.end().map(|p| (p.latitude, p.longitude));
                if include_profile {
                    record.profile = Some(data.summary.profile().to_vec());
                }
            }
            Err(err) => {
                record.error = Some(format!("{:#}", err));
            }
        }

        record
    }
}

/// Downsample a profile to a screenful of rows, always keeping the last row.
///
/// Returns the rows and whether sampling was applied.
pub fn sample_profile(profile: &[ProfilePoint], full: bool) -> (Vec<ProfilePoint>, bool) {
    if full || profile.len() <= PROFILE_SAMPLE_ROWS {
        return (profile.to_vec(), false);
    }

    let step = profile.len().div_ceil(PROFILE_SAMPLE_ROWS);
    let mut rows: Vec<ProfilePoint> = profile.iter().copied().step_by(step).collect();
    if rows.last() != profile.last() {
        if let Some(&last) = profile.last() {
            rows.push(last);
        }
    }
    (rows, true)
}

/// Render the `list` table
pub fn render_list(dir: &Path, entries: &[(RouteFile, Result<Arc<RouteData>>)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} routes in {}", entries.len(), dir.display());
    let _ = writeln!(out);

    let name_width = entries
        .iter()
        .map(|(file, _)| file.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let _ = writeln!(
        out,
        "{:<name_width$}  {:>9}  {:>7}  {:<10}  {:>6}",
        "NAME", "DISTANCE", "ASCENT", "DIFFICULTY", "POINTS"
    );
    for (file, data) in entries {
        match data {
            Ok(data) => {
                let _ = writeln!(
                    out,
                    "{:<name_width$}  {:>9}  {:>7}  {:<10}  {:>6}",
                    file.name,
                    format_distance(data.summary.distance_km()),
                    format_ascent(data.summary.ascent_m()),
                    data.summary.difficulty().to_string(),
                    data.track.len()
                );
            }
            Err(err) => {
                let _ = writeln!(out, "{:<name_width$}  {}", file.name, describe_error(err));
            }
        }
    }
    out
}

/// Render the `list` output as JSON
pub fn render_list_json(entries: &[(RouteFile, Result<Arc<RouteData>>)]) -> Result<String> {
    let records: Vec<RouteRecord> = entries
        .iter()
        .map(|(file, data)| RouteRecord::from_entry(file, data, false))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Render one route in detail
pub fn render_detail(file: &RouteFile, data: &RouteData, full_profile: bool) -> String {
    let mut out = String::new();
    let summary = &data.summary;

    let _ = writeln!(out, "Route: {}", file.name);
    if let Some(name) = data.track.name() {
        if !name.eq_ignore_ascii_case(&file.name) {
            let _ = writeln!(out, "Track name: {}", name);
        }
    }
    let _ = writeln!(out, "File: {}", file.path.display());
    let _ = writeln!(out, "Distance: {}", format_distance(summary.distance_km()));
    let _ = writeln!(out, "Ascent: {}", format_ascent(summary.ascent_m()));
    let _ = writeln!(out, "Difficulty: {}", summary.difficulty());
    let _ = writeln!(out, "Points: {}", data.track.len());
    if let (Some(start), Some(end)) = (data.track.start(), data.track.end()) {
        let _ = writeln!(out, "Start: {:.5}, {:.5}", start.latitude, start.longitude);
        let _ = writeln!(out, "End: {:.5}, {:.5}", end.latitude, end.longitude);
    }

    let (rows, sampled) = sample_profile(summary.profile(), full_profile);
    let _ = writeln!(out);
    if sampled {
        let _ = writeln!(
            out,
            "Elevation profile ({} of {} rows):",
            rows.len(),
            summary.profile().len()
        );
    } else {
        let _ = writeln!(out, "Elevation profile:");
    }
    let _ = writeln!(out, "{:>9}  {:>9}", "KM", "ELE M");
    for row in &rows {
        let _ = writeln!(out, "{:>9.2}  {:>9.1}", row.distance_km, row.elevation_m);
    }
    out
}

/// Render one route's detail as JSON, profile included
pub fn render_detail_json(file: &RouteFile, data: &Result<Arc<RouteData>>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RouteRecord::from_entry(
        file, data, true,
    ))?)
}
