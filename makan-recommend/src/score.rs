//! Component sub-scores and their weighted combination.
//!
//! Each helper returns a value in roughly `0.0..=1.0`; the engine combines
//! them through [`ScoreWeights::blend`]. Neutral substitutions for absent
//! inputs happen in the engine, not here, except for the rating default
//! chain which is deliberately asymmetric (see [`rating_score`]).

use makan_core::dietary;
use thiserror::Error;

use crate::types::ScoreBreakdown;

/// Neutral sub-score substituted when an input signal is absent.
pub(crate) const NEUTRAL_SCORE: f32 = 0.5;

/// Rating text assumed for stalls with no rating recorded yet.
///
/// Distinct from [`NEUTRAL_SCORE`]: an absent rating normalises to 0.7 via
/// this default, while unparseable rating text degrades to the 0.5 neutral.
const DEFAULT_RATING_TEXT: &str = "3.5";

/// Upper bound of the review rating scale.
const RATING_SCALE: f32 = 5.0;

/// Tolerance when checking that weights sum to one.
const WEIGHT_SUM_EPSILON: f32 = 1e-6;

/// Score how well a stall's cuisine matches the diner's preferences.
///
/// Returns `0.0` when any dietary restriction conflicts with the cuisine
/// under the fixed [`DietaryRule`](makan_core::DietaryRule) set, `1.0` when
/// the cuisine case-insensitively equals a preferred label, and `0.3`
/// otherwise. Callers with an empty preferred set substitute the neutral
/// score instead of calling this.
#[must_use]
pub fn preference_match(preferred: &[String], cuisine: &str, restrictions: &[String]) -> f32 {
    if dietary::any_conflict(restrictions, cuisine) {
        return 0.0;
    }
    if preferred
        .iter()
        .any(|label| label.eq_ignore_ascii_case(cuisine))
    {
        return 1.0;
    }
    0.3
}

/// Normalise a walking distance against the diner's limit.
///
/// Linear decay from `1.0` at zero meters to `0.0` at the limit; distances
/// at or beyond the limit score `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "linear decay over f64 meters, narrowed to an f32 score"
)]
pub fn proximity_score(distance_m: f64, max_walk_m: f64) -> f32 {
    if distance_m >= max_walk_m {
        return 0.0;
    }
    (1.0 - distance_m / max_walk_m) as f32
}

/// Normalise an estimated queue wait against the diner's limit.
///
/// Linear decay from `1.0` at no wait to `0.0` at the limit; waits at or
/// beyond the limit score `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "linear decay requires a floating-point ratio"
)]
pub fn queue_score(wait_minutes: u16, max_queue_minutes: u16) -> f32 {
    if wait_minutes >= max_queue_minutes {
        return 0.0;
    }
    1.0 - f32::from(wait_minutes) / f32::from(max_queue_minutes)
}

/// Normalise a 0–5 rating to a score capped at `1.0`.
///
/// An absent rating falls back to the literal [`DEFAULT_RATING_TEXT`]
/// (`"3.5"`, normalising to 0.7); text that fails to parse degrades to the
/// 0.5 neutral instead. The two fallbacks genuinely differ in the Makan
/// backend and must stay distinct.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rating normalisation divides by the scale maximum"
)]
pub fn rating_score(rating: Option<&str>) -> f32 {
    rating
        .unwrap_or(DEFAULT_RATING_TEXT)
        .parse::<f32>()
        .map_or(NEUTRAL_SCORE, |value| (value / RATING_SCALE).min(1.0))
}

/// Relative weighting of the four component sub-scores.
///
/// The defaults form the fixed convex combination used in production;
/// [`ScoreWeights::validate`] enforces that any override still sums to one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the cuisine-preference component.
    pub preference: f32,
    /// Multiplier applied to the walking-proximity component.
    pub proximity: f32,
    /// Multiplier applied to the queue-time component.
    pub queue: f32,
    /// Multiplier applied to the rating component.
    pub rating: f32,
}

/// Errors raised when configuring score weights.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// Weights were non-finite, negative, or did not sum to one.
    #[error("weights must be finite, non-negative, and sum to 1.0")]
    InvalidWeights,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeights`] when any weight is
    /// non-finite or negative, or when the total differs from one.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::InvalidWeights)
        }
    }

    fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.sums_to_one()
    }

    const fn has_finite_values(self) -> bool {
        self.preference.is_finite()
            && self.proximity.is_finite()
            && self.queue.is_finite()
            && self.rating.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.preference >= 0.0_f32
            && self.proximity >= 0.0_f32
            && self.queue >= 0.0_f32
            && self.rating >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to check convexity"
    )]
    fn sums_to_one(self) -> bool {
        let total = self.preference + self.proximity + self.queue + self.rating;
        (total - 1.0_f32).abs() <= WEIGHT_SUM_EPSILON
    }

    /// Combine a [`ScoreBreakdown`] into the total score.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the total score is a weighted sum of the components"
    )]
    pub fn blend(self, breakdown: ScoreBreakdown) -> f32 {
        breakdown.preference * self.preference
            + breakdown.proximity * self.proximity
            + breakdown.queue * self.queue
            + breakdown.rating * self.rating
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            preference: 0.35_f32,
            proximity: 0.25_f32,
            queue: 0.20_f32,
            rating: 0.20_f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f32 = 1e-6;

    fn owned(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_owned()).collect()
    }

    #[rstest]
    #[case(&["Chinese"], "Chinese", &[], 1.0)]
    #[case(&["chinese"], "CHINESE", &[], 1.0)]
    #[case(&["Chinese"], "Western", &[], 0.3)]
    #[case(&["Western"], "Meat Grill", &["vegetarian"], 0.0)]
    #[case(&["Western"], "Western", &["halal"], 0.0)]
    #[case(&["Halal Western"], "Halal Western", &["halal"], 1.0)]
    fn preference_match_cases(
        #[case] preferred: &[&str],
        #[case] cuisine: &str,
        #[case] restrictions: &[&str],
        #[case] expected: f32,
    ) {
        let score = preference_match(&owned(preferred), cuisine, &owned(restrictions));
        assert_eq!(score, expected);
    }

    #[rstest]
    #[case(0.0, 1000.0, 1.0)]
    #[case(200.0, 1000.0, 0.8)]
    #[case(1000.0, 1000.0, 0.0)]
    #[case(1500.0, 1000.0, 0.0)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn proximity_decays_linearly(
        #[case] distance_m: f64,
        #[case] max_walk_m: f64,
        #[case] expected: f32,
    ) {
        assert!((proximity_score(distance_m, max_walk_m) - expected).abs() <= EPSILON);
    }

    #[rstest]
    #[case(0, 30, 1.0)]
    #[case(10, 30, 2.0 / 3.0)]
    #[case(30, 30, 0.0)]
    #[case(45, 30, 0.0)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn queue_decays_linearly(#[case] wait: u16, #[case] max: u16, #[case] expected: f32) {
        assert!((queue_score(wait, max) - expected).abs() <= EPSILON);
    }

    #[rstest]
    fn zero_queue_limit_scores_zero() {
        assert_eq!(queue_score(0, 0), 0.0);
    }

    #[rstest]
    #[case(Some("4.5"), 0.9)]
    #[case(Some("5.0"), 1.0)]
    #[case(Some("7.5"), 1.0)]
    #[case(None, 0.7)]
    #[case(Some("not a number"), 0.5)]
    #[case(Some(""), 0.5)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn rating_fallback_chain(#[case] rating: Option<&str>, #[case] expected: f32) {
        assert!((rating_score(rating) - expected).abs() <= EPSILON);
    }

    #[rstest]
    fn default_weights_validate() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[rstest]
    #[case(ScoreWeights { preference: 0.5, proximity: 0.5, queue: 0.5, rating: 0.5 })]
    #[case(ScoreWeights { preference: -0.5, proximity: 0.5, queue: 0.5, rating: 0.5 })]
    #[case(ScoreWeights { preference: f32::NAN, proximity: 0.25, queue: 0.2, rating: 0.2 })]
    fn invalid_weights_are_rejected(#[case] weights: ScoreWeights) {
        assert_eq!(weights.validate(), Err(WeightsError::InvalidWeights));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn blend_is_the_weighted_sum() {
        let breakdown = crate::ScoreBreakdown {
            preference: 1.0,
            proximity: 0.8,
            queue: 2.0 / 3.0,
            rating: 0.9,
        };
        let total = ScoreWeights::default().blend(breakdown);
        assert!((total - 0.863_333).abs() <= 1e-5);
    }
}
