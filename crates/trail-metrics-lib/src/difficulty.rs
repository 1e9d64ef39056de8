//! Difficulty rating for hiking routes

use std::fmt;

/// Three-level difficulty rating derived from total ascent and distance.
///
/// This is a deliberately simple, explainable heuristic for casual hikers,
/// not a calibrated physiological model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Ascent above which a route is rated hard, in meters
    pub const HARD_ASCENT_M: f64 = 600.0;
    /// Distance above which a route is rated hard, in kilometers
    pub const HARD_DISTANCE_KM: f64 = 15.0;
    /// Ascent above which a route is rated medium, in meters
    pub const MEDIUM_ASCENT_M: f64 = 300.0;

    /// Classify a route from its total ascent (meters) and distance (km).
    ///
    /// All three thresholds are strict: a route with exactly 600 m of ascent
    /// and 10 km of distance is medium, not hard.
    pub fn classify(ascent_m: f64, distance_km: f64) -> Self {
        if ascent_m > Self::HARD_ASCENT_M || distance_km > Self::HARD_DISTANCE_KM {
            Difficulty::Hard
        } else if ascent_m > Self::MEDIUM_ASCENT_M {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
