//! Facade crate for the Makan recommendation engine.
//!
//! This crate re-exports the domain types from `makan-core` and the
//! stall-scoring engine from `makan-recommend` so applications can depend on
//! a single crate.

#![forbid(unsafe_code)]

pub use makan_core::{
    CampusStore, Canteen, DietaryRule, LocationBlock, Stall, StallError, User, UserPreferences,
};

pub use makan_recommend::{
    Confidence, ParseConfidenceError, RecommendationEngine, ScoreBreakdown, ScoreWeights,
    ScoredStall, StallSnapshot, WeightsError, haversine_distance,
};
