//! Test-only, in-memory `CampusStore` implementation used by unit and
//! behaviour tests.

use std::collections::HashMap;

use crate::{CampusStore, Canteen, LocationBlock, Stall, User, UserPreferences};

/// In-memory `CampusStore` implementation used in tests.
///
/// The store performs linear scans and is intended only for small datasets.
#[derive(Default, Debug)]
pub struct MemoryStore {
    stalls: Vec<Stall>,
    canteens: Vec<Canteen>,
    blocks: Vec<LocationBlock>,
    users: Vec<User>,
    preferences: HashMap<u64, UserPreferences>,
}

impl MemoryStore {
    /// Replace the stored stalls, consuming `self`.
    #[must_use]
    pub fn with_stalls(mut self, stalls: Vec<Stall>) -> Self {
        self.stalls = stalls;
        self
    }

    /// Replace the stored canteens, consuming `self`.
    #[must_use]
    pub fn with_canteens(mut self, canteens: Vec<Canteen>) -> Self {
        self.canteens = canteens;
        self
    }

    /// Replace the stored blocks, consuming `self`.
    #[must_use]
    pub fn with_blocks(mut self, blocks: Vec<LocationBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Add a user, consuming `self`.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Store preferences for a user, consuming `self`.
    #[must_use]
    pub fn with_preferences(mut self, user_id: u64, preferences: UserPreferences) -> Self {
        self.preferences.insert(user_id, preferences);
        self
    }
}

impl CampusStore for MemoryStore {
    fn stalls(&self) -> Box<dyn Iterator<Item = Stall> + Send + '_> {
        Box::new(self.stalls.iter().cloned())
    }

    fn canteens(&self) -> Box<dyn Iterator<Item = Canteen> + Send + '_> {
        Box::new(self.canteens.iter().cloned())
    }

    fn blocks(&self) -> Box<dyn Iterator<Item = LocationBlock> + Send + '_> {
        Box::new(self.blocks.iter().cloned())
    }

    fn user(&self, id: u64) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    fn preferences(&self, user_id: u64) -> Option<UserPreferences> {
        self.preferences.get(&user_id).cloned()
    }
}
