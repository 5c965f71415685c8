//! Data access traits for the campus catalogue.
//!
//! The `CampusStore` trait defines a read-only interface to the persistence
//! collaborator. The recommendation engine never queries storage itself; a
//! caller materialises a snapshot through this trait and hands the records
//! over.

use crate::{Canteen, LocationBlock, Stall, User, UserPreferences};

/// Read-only access to the persisted campus catalogue.
///
/// Implementers typically wrap an ORM or a remote API. Listing methods
/// return boxed iterators so callers can stream without committing to a
/// concrete collection type.
///
/// # Examples
///
/// ```rust
/// use makan_core::{CampusStore, Canteen, LocationBlock, Stall, User, UserPreferences};
///
/// struct MemoryStore {
///     stalls: Vec<Stall>,
/// }
///
/// impl CampusStore for MemoryStore {
///     fn stalls(&self) -> Box<dyn Iterator<Item = Stall> + Send + '_> {
///         Box::new(self.stalls.iter().cloned())
///     }
///     fn canteens(&self) -> Box<dyn Iterator<Item = Canteen> + Send + '_> {
///         Box::new(std::iter::empty())
///     }
///     fn blocks(&self) -> Box<dyn Iterator<Item = LocationBlock> + Send + '_> {
///         Box::new(std::iter::empty())
///     }
///     fn user(&self, _id: u64) -> Option<User> {
///         None
///     }
///     fn preferences(&self, _user_id: u64) -> Option<UserPreferences> {
///         None
///     }
/// }
///
/// let stall = Stall::new(1, 10, "Ah Hock Noodles", "Chinese").unwrap();
/// let store = MemoryStore { stalls: vec![stall.clone()] };
/// let listed: Vec<_> = store.stalls().collect();
/// assert_eq!(listed, vec![stall]);
/// ```
pub trait CampusStore {
    /// List every stall in the catalogue.
    fn stalls(&self) -> Box<dyn Iterator<Item = Stall> + Send + '_>;

    /// List every canteen in the catalogue.
    fn canteens(&self) -> Box<dyn Iterator<Item = Canteen> + Send + '_>;

    /// List every campus location block.
    fn blocks(&self) -> Box<dyn Iterator<Item = LocationBlock> + Send + '_>;

    /// Fetch a user by identifier.
    fn user(&self, id: u64) -> Option<User>;

    /// Fetch a user's saved preferences, if they have any.
    fn preferences(&self, user_id: u64) -> Option<UserPreferences>;
}
