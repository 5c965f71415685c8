/// A physical dining hall containing multiple stalls.
///
/// # Examples
/// ```
/// use makan_core::Canteen;
///
/// let canteen = Canteen::new(10, "North Spine Food Court", "North Spine");
/// assert_eq!(canteen.id, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canteen {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Human-readable location label, e.g. a building or precinct name.
    pub location: String,
}

impl Canteen {
    /// Construct a `Canteen`.
    pub fn new(id: u64, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
        }
    }
}
