//! Output types produced by the recommendation engine.

use makan_core::{Canteen, Stall};
use serde::Serialize;
use thiserror::Error;

/// How much real preference and location data backed a recommendation set.
///
/// The label is uniform across one engine call: it describes the request,
/// not an individual stall.
///
/// # Examples
/// ```
/// use makan_recommend::Confidence;
///
/// assert_eq!(Confidence::High.as_str(), "high");
/// assert_eq!(Confidence::Low.to_string(), "low");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Location and preferred cuisines were both available.
    High,
    /// Location known, but no preferences record or no preferred cuisines.
    Medium,
    /// The user's current location could not be resolved.
    Low,
}

impl Confidence {
    /// Return the label as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown confidence label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown confidence label '{0}'")]
pub struct ParseConfidenceError(String);

impl std::str::FromStr for Confidence {
    type Err = ParseConfidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseConfidenceError(s.to_owned())),
        }
    }
}

/// The four component sub-scores behind a total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Cuisine-preference match component.
    pub preference: f32,
    /// Walking-proximity component.
    pub proximity: f32,
    /// Queue-time component.
    pub queue: f32,
    /// Rating component.
    pub rating: f32,
}

/// One ranked recommendation: a stall, its canteen, and how it scored.
///
/// Immutable value type; the engine builds a fresh sequence per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredStall {
    /// The recommended stall.
    pub stall: Stall,
    /// The stall's owning canteen.
    pub canteen: Canteen,
    /// Walking distance in meters, when both endpoints had coordinates.
    pub distance_m: Option<f64>,
    /// Total weighted score; higher is better.
    pub score: f32,
    /// The component sub-scores behind the total.
    pub breakdown: ScoreBreakdown,
    /// Confidence label for the whole result set.
    pub confidence: Confidence,
}
