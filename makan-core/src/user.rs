/// A user of the food-ordering application.
///
/// Only the fields the recommendation engine consumes are modelled: the
/// identifier and an optional reference to the user's current
/// [`LocationBlock`](crate::LocationBlock).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique identifier.
    pub id: u64,
    /// Identifier of the block the user is currently at, if known.
    pub location_block: Option<u64>,
}

impl User {
    /// Construct a user with no known location.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            location_block: None,
        }
    }

    /// Set the user's current block, consuming `self`.
    #[must_use]
    pub fn at_block(mut self, block_id: u64) -> Self {
        self.location_block = Some(block_id);
        self
    }
}
