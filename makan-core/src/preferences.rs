//! Saved dining preferences driving recommendation scoring.
//!
//! Numeric limits are optional so a partially filled record round-trips
//! unchanged; the engine resolves absent fields to its own fallbacks, field
//! by field.

/// A user's saved dining preferences.
///
/// `preferred_cuisines` is an order-irrelevant set of cuisine labels matched
/// case-insensitively against stall cuisine labels. `dietary_restrictions`
/// holds restriction labels such as `"vegetarian"` or `"halal"`; see
/// [`DietaryRule`](crate::DietaryRule) for the conflict semantics.
///
/// # Examples
/// ```
/// use makan_core::UserPreferences;
///
/// let prefs = UserPreferences::new()
///     .with_cuisine("Chinese")
///     .with_restriction("halal")
///     .with_max_queue_minutes(20);
/// assert_eq!(prefs.max_queue_minutes, Some(20));
/// assert!(prefs.max_walk_meters.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPreferences {
    /// Preferred cuisine labels; order is irrelevant.
    pub preferred_cuisines: Vec<String>,
    /// Dietary-restriction labels, e.g. `"vegetarian"`.
    pub dietary_restrictions: Vec<String>,
    /// Maximum acceptable queue wait in minutes, when set.
    pub max_queue_minutes: Option<u16>,
    /// Maximum acceptable walking distance in meters, when set.
    pub max_walk_meters: Option<f64>,
    /// Whether the user wants cheaper options favoured.
    pub budget_conscious: bool,
    /// Whether the user wants peak dining hours avoided.
    pub avoid_peak_hours: bool,
}

impl UserPreferences {
    /// Queue limit written into a freshly created preferences record.
    pub const DEFAULT_MAX_QUEUE_MINUTES: u16 = 30;

    /// Walking limit written into a freshly created preferences record.
    ///
    /// The recommendation engine substitutes 1000 m, not this value, when
    /// the field is unset. The two defaults genuinely differ in the Makan
    /// backend; keep them distinct until the inconsistency is resolved
    /// upstream.
    pub const DEFAULT_MAX_WALK_METERS: f64 = 500.0;

    /// Construct an empty record: no cuisines, no restrictions, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a record carrying the creation-time default limits.
    pub fn with_standard_limits() -> Self {
        Self {
            max_queue_minutes: Some(Self::DEFAULT_MAX_QUEUE_MINUTES),
            max_walk_meters: Some(Self::DEFAULT_MAX_WALK_METERS),
            ..Self::default()
        }
    }

    /// Add a preferred cuisine label, consuming `self`.
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.preferred_cuisines.push(cuisine.into());
        self
    }

    /// Add a dietary-restriction label, consuming `self`.
    #[must_use]
    pub fn with_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.dietary_restrictions.push(restriction.into());
        self
    }

    /// Set the queue limit, consuming `self`.
    #[must_use]
    pub fn with_max_queue_minutes(mut self, minutes: u16) -> Self {
        self.max_queue_minutes = Some(minutes);
        self
    }

    /// Set the walking limit, consuming `self`.
    #[must_use]
    pub fn with_max_walk_meters(mut self, meters: f64) -> Self {
        self.max_walk_meters = Some(meters);
        self
    }
}
