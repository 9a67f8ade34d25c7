//! # Compass Directions
//!
//! Forecast feeds report wind and swell directions as 16-point compass
//! abbreviations (`"N"`, `"NNE"`, ... `"NNW"`). This module maps them onto
//! degrees through a fixed table.
//!
//! Unrecognised strings are not an error: [`direction_degrees`] treats them as
//! north (0°), which keeps every caller total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 16 compass points, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(clippy::upper_case_acronyms)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

/// Static lookup table: abbreviation, point, bearing in degrees.
const COMPASS_TABLE: [(&str, CompassPoint, f64); 16] = [
    ("N", CompassPoint::N, 0.0),
    ("NNE", CompassPoint::NNE, 22.5),
    ("NE", CompassPoint::NE, 45.0),
    ("ENE", CompassPoint::ENE, 67.5),
    ("E", CompassPoint::E, 90.0),
    ("ESE", CompassPoint::ESE, 112.5),
    ("SE", CompassPoint::SE, 135.0),
    ("SSE", CompassPoint::SSE, 157.5),
    ("S", CompassPoint::S, 180.0),
    ("SSW", CompassPoint::SSW, 202.5),
    ("SW", CompassPoint::SW, 225.0),
    ("WSW", CompassPoint::WSW, 247.5),
    ("W", CompassPoint::W, 270.0),
    ("WNW", CompassPoint::WNW, 292.5),
    ("NW", CompassPoint::NW, 315.0),
    ("NNW", CompassPoint::NNW, 337.5),
];

impl CompassPoint {
    /// Look up a compass abbreviation. Matching is exact: `"nw"` and `" NW "`
    /// are not compass points.
    pub fn parse(label: &str) -> Option<CompassPoint> {
        COMPASS_TABLE
            .iter()
            .find(|(abbr, _, _)| *abbr == label)
            .map(|(_, point, _)| *point)
    }

    /// Bearing in degrees, `[0, 360)`.
    pub fn degrees(self) -> f64 {
        COMPASS_TABLE[self as usize].2
    }

    pub fn as_str(self) -> &'static str {
        COMPASS_TABLE[self as usize].0
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strict parsing through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown compass direction: {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for CompassPoint {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompassPoint::parse(s).ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// Degrees for a compass abbreviation, defaulting unknown strings to 0° (north).
///
/// # Example
/// ```
/// use surf_metrics_lib::direction::direction_degrees;
///
/// assert_eq!(direction_degrees("SW"), 225.0);
/// assert_eq!(direction_degrees("sideways"), 0.0);
/// ```
pub fn direction_degrees(direction: &str) -> f64 {
    CompassPoint::parse(direction).map_or(0.0, CompassPoint::degrees)
}

/// Smallest angle between two bearings, in `[0, 180]`.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}
