//! Food stalls: the unit the recommendation engine ranks.

use thiserror::Error;

/// A single vendor counter inside a canteen, tracked for queue and cuisine.
///
/// The aggregate `rating` is kept as decimal text on a 0–5 scale (e.g.
/// `"4.2"`) because upstream storage records it that way. The scorer parses
/// it lazily and degrades on malformed values rather than failing.
///
/// # Examples
/// ```
/// use makan_core::Stall;
///
/// # fn main() -> Result<(), makan_core::StallError> {
/// let stall = Stall::new(1, 10, "Ah Hock Noodles", "Chinese")?
///     .with_queue(8, 12)
///     .with_rating("4.5");
/// assert_eq!(stall.canteen_id, 10);
/// assert_eq!(stall.wait_minutes, 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stall {
    /// Unique identifier.
    pub id: u64,
    /// Identifier of the owning [`Canteen`](crate::Canteen).
    pub canteen_id: u64,
    /// Display name.
    pub name: String,
    /// Cuisine-type label, e.g. `"Chinese"` or `"Halal Western"`.
    pub cuisine: String,
    /// Number of people currently queueing.
    pub queue_length: u16,
    /// Estimated wait time in minutes.
    pub wait_minutes: u16,
    /// Aggregate review rating as decimal text on a 0–5 scale, if any.
    pub rating: Option<String>,
    /// Number of reviews behind the aggregate rating.
    pub review_count: u32,
}

/// Errors returned by [`Stall::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StallError {
    /// The stall name was empty or whitespace.
    #[error("stall name must not be blank")]
    BlankName,
    /// The cuisine-type label was empty or whitespace.
    #[error("stall cuisine label must not be blank")]
    BlankCuisine,
}

impl Stall {
    /// Validate and construct a [`Stall`] with an empty queue and no rating.
    ///
    /// The scorer assumes the name and cuisine label are present, so blank
    /// values are rejected here rather than defended against downstream.
    ///
    /// # Errors
    /// Returns [`StallError`] when `name` or `cuisine` is blank.
    pub fn new(
        id: u64,
        canteen_id: u64,
        name: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Result<Self, StallError> {
        let name = name.into();
        let cuisine = cuisine.into();
        if name.trim().is_empty() {
            return Err(StallError::BlankName);
        }
        if cuisine.trim().is_empty() {
            return Err(StallError::BlankCuisine);
        }
        Ok(Self {
            id,
            canteen_id,
            name,
            cuisine,
            queue_length: 0,
            wait_minutes: 0,
            rating: None,
            review_count: 0,
        })
    }

    /// Set the current queue length and estimated wait, consuming `self`.
    #[must_use]
    pub fn with_queue(mut self, queue_length: u16, wait_minutes: u16) -> Self {
        self.queue_length = queue_length;
        self.wait_minutes = wait_minutes;
        self
    }

    /// Set the aggregate rating text, consuming `self`.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Set the review count, consuming `self`.
    #[must_use]
    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }
}
