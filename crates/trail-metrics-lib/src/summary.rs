//! Summary metrics derived from a track
//!
//! A single pass over the flattened point sequence accumulates planar
//! distance and positive elevation gain, records the per-point elevation
//! profile and classifies the route's difficulty.

use crate::{Difficulty, Result, Track, TrackError, TrackPoint, utils};

/// One row of the elevation profile
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePoint {
    /// Cumulative distance from the start, in kilometers
    pub distance_km: f64,
    /// Elevation at this point, in meters
    pub elevation_m: f64,
}

/// Read-only summary of a track: totals, profile and difficulty
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSummary {
    distance_km: f64,
    ascent_m: f64,
    profile: Vec<ProfilePoint>,
    difficulty: Difficulty,
}

impl TrackSummary {
    /// Compute the summary for a track.
    ///
    /// Distance is planar (elevation-ignoring) haversine distance between
    /// consecutive points; it only ever grows, even when the path
    /// backtracks. Ascent counts positive elevation deltas only. The
    /// profile has exactly one row per input point, in input order.
    ///
    /// # Errors
    /// Fails with [`TrackError::EmptyTrack`] when the track has no points.
    /// A single-point track is legal: zero distance, zero ascent, one row.
    pub fn new(track: &Track) -> Result<Self> {
        if track.is_empty() {
            return Err(TrackError::EmptyTrack);
        }

        let mut distance_m = 0.0;
        let mut ascent_m = 0.0;
        let mut profile = Vec::with_capacity(track.len());
        let mut previous: Option<&TrackPoint> = None;

        for point in track.points() {
            if let Some(prev) = previous {
                distance_m += utils::haversine_distance(prev.point(), point.point());

                let climb = point.elevation - prev.elevation;
                if climb > 0.0 {
                    ascent_m += climb;
                }
            }

            profile.push(ProfilePoint {
                distance_km: distance_m / 1000.0,
                elevation_m: point.elevation,
            });

            previous = Some(point);
        }

        let distance_km = distance_m / 1000.0;
        let difficulty = Difficulty::classify(ascent_m, distance_km);

        Ok(Self {
            distance_km,
            ascent_m,
            profile,
            difficulty,
        })
    }

    /// Total planar distance in kilometers
    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total ascent in meters (positive elevation deltas only)
    #[inline]
    pub fn ascent_m(&self) -> f64 {
        self.ascent_m
    }

    /// The (cumulative distance, elevation) series, one row per point
    #[inline]
    pub fn profile(&self) -> &[ProfilePoint] {
        &self.profile
    }

    /// The route's difficulty rating
    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
