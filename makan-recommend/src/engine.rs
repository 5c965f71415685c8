//! The recommendation orchestrator.
//!
//! [`RecommendationEngine::recommend`] turns a snapshot of stalls, canteens
//! and location blocks into a ranked [`ScoredStall`] sequence for one user.
//! The call is synchronous and side-effect free; callers may run it
//! concurrently with exclusive per-call snapshots.

use geo::Coord;
use makan_core::{Canteen, LocationBlock, Stall, User, UserPreferences};

use crate::distance::haversine_distance;
use crate::score::{self, NEUTRAL_SCORE, ScoreWeights, WeightsError};
use crate::types::{Confidence, ScoreBreakdown, ScoredStall};

/// Queue-limit fallback when no preferences record (or field) is present.
const FALLBACK_MAX_QUEUE_MINUTES: u16 = 30;

/// Walking-limit fallback when no preferences record (or field) is present.
///
/// Deliberately differs from the 500 m record-creation default on
/// [`UserPreferences`]; the Makan backend uses both.
const FALLBACK_MAX_WALK_METERS: f64 = 1000.0;

/// Scored stalls at or below this total are dropped as a post-scoring
/// safety net, on top of the hard filters.
const MIN_TOTAL_SCORE: f32 = 0.1;

/// A borrowed snapshot of the campus catalogue for one scoring call.
///
/// The engine never queries storage; the caller materialises these slices
/// (e.g. through [`CampusStore`](makan_core::CampusStore)) and hands them
/// over for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct StallSnapshot<'a> {
    /// Every stall under consideration.
    pub stalls: &'a [Stall],
    /// Every canteen, for resolving stall ownership.
    pub canteens: &'a [Canteen],
    /// Every location block, for resolving positions.
    pub blocks: &'a [LocationBlock],
}

impl StallSnapshot<'_> {
    /// Look up a canteen by identifier.
    #[must_use]
    pub fn canteen(&self, id: u64) -> Option<&Canteen> {
        self.canteens.iter().find(|canteen| canteen.id == id)
    }

    /// Look up a location block by identifier.
    #[must_use]
    pub fn block(&self, id: u64) -> Option<&LocationBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Find the first block designating the given canteen as its nearest.
    #[must_use]
    pub fn block_serving(&self, canteen_id: u64) -> Option<&LocationBlock> {
        self.blocks
            .iter()
            .find(|block| block.nearest_canteen == Some(canteen_id))
    }
}

/// Per-call view of the user's limits, resolved field by field.
struct ResolvedPreferences<'a> {
    cuisines: &'a [String],
    restrictions: &'a [String],
    max_queue_minutes: u16,
    max_walk_meters: f64,
}

impl<'a> ResolvedPreferences<'a> {
    fn resolve(preferences: Option<&'a UserPreferences>) -> Self {
        Self {
            cuisines: preferences.map_or(&[], |prefs| &prefs.preferred_cuisines),
            restrictions: preferences.map_or(&[], |prefs| &prefs.dietary_restrictions),
            max_queue_minutes: preferences
                .and_then(|prefs| prefs.max_queue_minutes)
                .unwrap_or(FALLBACK_MAX_QUEUE_MINUTES),
            max_walk_meters: preferences
                .and_then(|prefs| prefs.max_walk_meters)
                .unwrap_or(FALLBACK_MAX_WALK_METERS),
        }
    }
}

/// Rank food stalls for one user from an in-memory snapshot.
///
/// Construction validates the score weights once, so scoring itself is
/// infallible: the engine always returns a (possibly empty) sequence and
/// degrades missing inputs to neutral defaults.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    weights: ScoreWeights,
}

impl RecommendationEngine {
    /// Construct an engine using the production score weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an engine with custom weights.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeights`] when the weights are
    /// non-finite, negative, or do not sum to one.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Produce the ranked recommendation sequence for one user.
    ///
    /// `location` is the user's current block when the caller has already
    /// resolved it; otherwise the engine falls back to the block referenced
    /// by `user.location_block`, looked up in the snapshot. Stalls whose
    /// wait exceeds the user's queue limit, or whose known walking distance
    /// exceeds the walking limit, are dropped before scoring; totals at or
    /// below the score floor are dropped after. The survivors are sorted by
    /// total score, highest first, with equal scores keeping snapshot
    /// order.
    #[must_use]
    pub fn recommend(
        &self,
        user: &User,
        preferences: Option<&UserPreferences>,
        location: Option<&LocationBlock>,
        snapshot: &StallSnapshot<'_>,
    ) -> Vec<ScoredStall> {
        let prefs = ResolvedPreferences::resolve(preferences);
        let here = location.or_else(|| {
            user.location_block
                .and_then(|block_id| snapshot.block(block_id))
        });
        let confidence = classify_confidence(here, preferences);
        let user_coords = here.and_then(|block| block.coords);

        let mut scored = Vec::new();
        for stall in snapshot.stalls {
            let Some(canteen) = snapshot.canteen(stall.canteen_id) else {
                log::warn!(
                    "stall {} references canteen {} missing from the snapshot; skipping",
                    stall.id,
                    stall.canteen_id
                );
                continue;
            };
            let distance_m = walking_distance(snapshot, canteen.id, user_coords);

            if stall.wait_minutes > prefs.max_queue_minutes {
                continue;
            }
            if distance_m.is_some_and(|distance| distance > prefs.max_walk_meters) {
                continue;
            }

            let breakdown = score_components(stall, distance_m, &prefs);
            let total = self.weights.blend(breakdown);
            if total <= MIN_TOTAL_SCORE {
                log::debug!("stall {} scored {total:.3}, at or below the floor; dropping", stall.id);
                continue;
            }

            scored.push(ScoredStall {
                stall: stall.clone(),
                canteen: canteen.clone(),
                distance_m,
                score: total,
                breakdown,
                confidence,
            });
        }

        // Stable sort: equal totals keep snapshot order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

/// Compute the four sub-scores for one surviving stall, substituting the
/// neutral score for absent preference and distance signals.
fn score_components(
    stall: &Stall,
    distance_m: Option<f64>,
    prefs: &ResolvedPreferences<'_>,
) -> ScoreBreakdown {
    ScoreBreakdown {
        preference: if prefs.cuisines.is_empty() {
            NEUTRAL_SCORE
        } else {
            score::preference_match(prefs.cuisines, &stall.cuisine, prefs.restrictions)
        },
        proximity: distance_m.map_or(NEUTRAL_SCORE, |distance| {
            score::proximity_score(distance, prefs.max_walk_meters)
        }),
        queue: score::queue_score(stall.wait_minutes, prefs.max_queue_minutes),
        rating: score::rating_score(stall.rating.as_deref()),
    }
}

/// Distance from the user to the block serving a canteen, when both ends
/// carry coordinates.
fn walking_distance(
    snapshot: &StallSnapshot<'_>,
    canteen_id: u64,
    user_coords: Option<Coord<f64>>,
) -> Option<f64> {
    let here = user_coords?;
    let block_coords = snapshot.block_serving(canteen_id)?.coords?;
    Some(haversine_distance(here, block_coords))
}

/// Classify how much real data backs this request, before any scoring.
fn classify_confidence(
    location: Option<&LocationBlock>,
    preferences: Option<&UserPreferences>,
) -> Confidence {
    if location.is_none() {
        return Confidence::Low;
    }
    if preferences.is_none_or(|prefs| prefs.preferred_cuisines.is_empty()) {
        return Confidence::Medium;
    }
    Confidence::High
}
