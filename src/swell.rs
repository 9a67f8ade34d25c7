//! # Swell Classification
//!
//! Buckets a swell by its period. Long-period ground swell comes from distant
//! storms and arrives organised; short-period wind swell is generated locally
//! and arrives messy. The breakpoints are fixed:
//!
//! | period (s) | type          | quality   |
//! |------------|---------------|-----------|
//! | ≥ 13       | ground swell  | excellent |
//! | ≥ 10       | ground swell  | good      |
//! | ≥ 8        | mixed         | fair      |
//! | < 8        | wind swell    | poor      |
//!
//! Lower bounds are inclusive. Zero, negative and NaN periods land in the last
//! bracket.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Period at or above which a swell is excellent ground swell.
pub const EXCELLENT_PERIOD_SECS: f64 = 13.0;
/// Period at or above which a swell is good ground swell.
pub const GOOD_PERIOD_SECS: f64 = 10.0;
/// Period at or above which a swell is a fair mixed swell.
pub const FAIR_PERIOD_SECS: f64 = 8.0;

/// Where a swell was generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwellType {
    GroundSwell,
    WindSwell,
    Mixed,
}

impl SwellType {
    pub fn as_str(self) -> &'static str {
        match self {
            SwellType::GroundSwell => "ground_swell",
            SwellType::WindSwell => "wind_swell",
            SwellType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SwellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality label attached to a swell classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwellQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SwellQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            SwellQuality::Poor => "poor",
            SwellQuality::Fair => "fair",
            SwellQuality::Good => "good",
            SwellQuality::Excellent => "excellent",
        }
    }

    /// Bonus this quality contributes to the wave score.
    pub fn score_bonus(self) -> f64 {
        match self {
            SwellQuality::Excellent => 3.0,
            SwellQuality::Good => 2.0,
            SwellQuality::Fair => 1.0,
            SwellQuality::Poor => 0.0,
        }
    }
}

impl fmt::Display for SwellQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`classify_swell_quality`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwellClassification {
    #[serde(rename = "type")]
    pub swell_type: SwellType,
    pub quality: SwellQuality,
    pub description: String,
}

/// Classify a swell by its period in seconds.
///
/// # Example
/// ```
/// use surf_metrics_lib::swell::{classify_swell_quality, SwellQuality, SwellType};
///
/// let swell = classify_swell_quality(13.0);
/// assert_eq!(swell.swell_type, SwellType::GroundSwell);
/// assert_eq!(swell.quality, SwellQuality::Excellent);
/// ```
pub fn classify_swell_quality(period: f64) -> SwellClassification {
    let (swell_type, quality, description) = if period >= EXCELLENT_PERIOD_SECS {
        (
            SwellType::GroundSwell,
            SwellQuality::Excellent,
            "Long-period ground swell - powerful and well-organized",
        )
    } else if period >= GOOD_PERIOD_SECS {
        (
            SwellType::GroundSwell,
            SwellQuality::Good,
            "Ground swell - clean and consistent",
        )
    } else if period >= FAIR_PERIOD_SECS {
        (
            SwellType::Mixed,
            SwellQuality::Fair,
            "Mixed swell - moderate organization",
        )
    } else {
        (
            SwellType::WindSwell,
            SwellQuality::Poor,
            "Short-period wind swell - choppy and disorganized",
        )
    };

    SwellClassification {
        swell_type,
        quality,
        description: description.to_string(),
    }
}
