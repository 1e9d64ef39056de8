//! Track storage and parsing
//!
//! This module provides the `Track` struct: a parsed GPX document together
//! with the flattened sequence of its points. The original document is kept
//! so it can be serialized back out unchanged.

use crate::Result;
use geo::Point;
use std::io::{Read, Write};

/// A single recorded sample of a route
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
    /// Elevation in meters; zero when the source file omits it
    pub elevation: f64,
}

impl TrackPoint {
    /// View as a geo point (x = longitude, y = latitude)
    #[inline]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// A parsed route: the raw GPX document plus its flattened point sequence
///
/// Points are the order-preserving concatenation of every point across every
/// segment across every track in the document. The grouping boundaries do
/// not matter for the summary metrics, but the document is retained verbatim
/// so downloads round-trip segments and tracks exactly as parsed.
#[derive(Clone, Debug)]
pub struct Track {
    /// The original GPX document
    gpx_data: gpx::Gpx,
    /// All points in recording order
    points: Vec<TrackPoint>,
}

impl Track {
    /// Parse a GPX document from a reader.
    ///
    /// Fails when the content is malformed, truncated, or a point is missing
    /// a mandatory coordinate. A well-formed document with zero points
    /// parses successfully into an empty track.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let gpx_data = gpx::read(reader)?;
        let track = Self::from_gpx(gpx_data);
        tracing::debug!("Parsed GPX document with {} points", track.len());
        Ok(track)
    }

    /// Build a track from an already-parsed GPX document
    pub fn from_gpx(gpx_data: gpx::Gpx) -> Self {
        let points = gpx_data
            .tracks
            .iter()
            .flat_map(|track| &track.segments)
            .flat_map(|segment| &segment.points)
            .map(|waypoint| TrackPoint {
                latitude: waypoint.point().y(),
                longitude: waypoint.point().x(),
                elevation: waypoint.elevation.unwrap_or(0.0),
            })
            .collect();

        Self { gpx_data, points }
    }

    /// Serialize the original document back out.
    ///
    /// All points, segments and tracks round-trip exactly as parsed; the
    /// exact XML formatting may differ from the source bytes.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        gpx::write(&self.gpx_data, writer)?;
        Ok(())
    }

    /// The route name carried by the document itself, if any.
    ///
    /// Prefers the first track's name, falling back to the metadata name.
    pub fn name(&self) -> Option<&str> {
        self.gpx_data
            .tracks
            .first()
            .and_then(|track| track.name.as_deref())
            .or_else(|| {
                self.gpx_data
                    .metadata
                    .as_ref()
                    .and_then(|meta| meta.name.as_deref())
            })
    }

    /// All points in recording order
    #[inline]
    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    /// Total number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the route, for a start marker
    #[inline]
    pub fn start(&self) -> Option<&TrackPoint> {
        self.points.first()
    }

    /// Last point of the route, for an end marker
    #[inline]
    pub fn end(&self) -> Option<&TrackPoint> {
        self.points.last()
    }

    /// Ordered (latitude, longitude) pairs for drawing the path on a map
    pub fn path(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.latitude, p.longitude))
            .collect()
    }

    /// Access the raw GPX document
    #[inline]
    pub fn gpx_data(&self) -> &gpx::Gpx {
        &self.gpx_data
    }
}
