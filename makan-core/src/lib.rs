//! Core domain types for the Makan recommendation engine.
//!
//! These models mirror the records served by the campus food-ordering
//! backend: canteens, the stalls inside them, campus location blocks, users
//! and their saved dining preferences. The [`CampusStore`] trait describes
//! the read-only data-access collaborator that supplies a snapshot of those
//! records to the scorer.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod block;
pub mod canteen;
pub mod dietary;
pub mod preferences;
pub mod stall;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod user;

pub use block::LocationBlock;
pub use canteen::Canteen;
pub use dietary::DietaryRule;
pub use preferences::UserPreferences;
pub use stall::{Stall, StallError};
pub use store::CampusStore;
pub use user::User;
