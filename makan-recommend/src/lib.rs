//! Stall recommendation scoring for the Makan campus food app.
//!
//! The engine ranks food stalls for one user from a snapshot of domain
//! records supplied by the caller. Four component sub-scores — cuisine
//! preference match, walking proximity, queue time, and rating — are
//! combined as a fixed convex combination ([`ScoreWeights`], summing to
//! 1.0), after hard filters drop stalls whose queue or distance exceeds the
//! user's limits. Every result carries a [`Confidence`] label reflecting how
//! much real preference and location data backed the request.
//!
//! The scorer is a pure computation: no I/O, no shared state, no failure
//! modes. Missing inputs (preferences, location, rating) degrade to
//! documented neutral defaults rather than errors.
//!
//! # Examples
//!
//! ```
//! use makan_core::{Canteen, Stall, User, UserPreferences};
//! use makan_recommend::{RecommendationEngine, StallSnapshot};
//!
//! # fn main() -> Result<(), makan_core::StallError> {
//! let canteens = vec![Canteen::new(1, "North Spine Food Court", "North Spine")];
//! let stalls = vec![
//!     Stall::new(1, 1, "Ah Hock Noodles", "Chinese")?.with_queue(8, 10).with_rating("4.5"),
//!     Stall::new(2, 1, "Campus Grill", "Western")?.with_queue(12, 25).with_rating("3.0"),
//! ];
//! let user = User::new(1);
//! let preferences = UserPreferences::new().with_cuisine("Chinese");
//!
//! let engine = RecommendationEngine::new();
//! let snapshot = StallSnapshot {
//!     stalls: &stalls,
//!     canteens: &canteens,
//!     blocks: &[],
//! };
//! let ranked = engine.recommend(&user, Some(&preferences), None, &snapshot);
//! assert_eq!(ranked.first().map(|s| s.stall.id), Some(1));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod engine;
mod score;
mod types;

pub use distance::haversine_distance;
pub use engine::{RecommendationEngine, StallSnapshot};
pub use score::{
    ScoreWeights, WeightsError, preference_match, proximity_score, queue_score, rating_score,
};
pub use types::{Confidence, ParseConfidenceError, ScoreBreakdown, ScoredStall};
