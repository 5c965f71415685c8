use geo::Coord;

/// A campus building or residence block.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, and are
/// optional: not every block has been surveyed. A block may also designate
/// its nearest canteen, which the scorer uses to anchor walking distances.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use makan_core::LocationBlock;
///
/// let block = LocationBlock::new(3, "Hall 7")
///     .with_coords(Coord { x: 103.6831, y: 1.3483 })
///     .with_nearest_canteen(10);
/// assert_eq!(block.nearest_canteen, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationBlock {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Geospatial position, when surveyed.
    pub coords: Option<Coord<f64>>,
    /// Identifier of the closest canteen, when designated.
    pub nearest_canteen: Option<u64>,
}

impl LocationBlock {
    /// Construct a block without coordinates or a nearest-canteen link.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            coords: None,
            nearest_canteen: None,
        }
    }

    /// Attach coordinates, consuming `self`.
    #[must_use]
    pub fn with_coords(mut self, coords: Coord<f64>) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Designate the nearest canteen, consuming `self`.
    #[must_use]
    pub fn with_nearest_canteen(mut self, canteen_id: u64) -> Self {
        self.nearest_canteen = Some(canteen_id);
        self
    }
}
