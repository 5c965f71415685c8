//! Hard dietary-compatibility rules.
//!
//! The rule set is a deliberate two-case placeholder inherited from the
//! Makan backend, kept as tagged variants so a richer compatibility table
//! can grow here rather than in an if/else chain. Do not extend it without
//! a product decision.

/// A hard rule excluding cuisines that conflict with a dietary restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DietaryRule {
    /// A vegetarian diner rejects any cuisine label containing `"meat"`.
    VegetarianExcludesMeat,
    /// A halal diner rejects any cuisine label not containing `"halal"`.
    HalalRequiresHalalLabel,
}

impl DietaryRule {
    /// Map a restriction label to its rule, case-insensitively.
    ///
    /// Unknown labels carry no rule and never exclude anything.
    ///
    /// # Examples
    /// ```
    /// use makan_core::DietaryRule;
    ///
    /// assert_eq!(
    ///     DietaryRule::for_restriction("Vegetarian"),
    ///     Some(DietaryRule::VegetarianExcludesMeat),
    /// );
    /// assert!(DietaryRule::for_restriction("pescatarian").is_none());
    /// ```
    #[must_use]
    pub fn for_restriction(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "vegetarian" => Some(Self::VegetarianExcludesMeat),
            "halal" => Some(Self::HalalRequiresHalalLabel),
            _ => None,
        }
    }

    /// Report whether a cuisine label conflicts with this rule.
    ///
    /// Matching is case-insensitive on substrings, mirroring the Makan
    /// backend's behaviour.
    #[must_use]
    pub fn conflicts_with(self, cuisine: &str) -> bool {
        let cuisine = cuisine.to_lowercase();
        match self {
            Self::VegetarianExcludesMeat => cuisine.contains("meat"),
            Self::HalalRequiresHalalLabel => !cuisine.contains("halal"),
        }
    }
}

/// Report whether any of the given restriction labels excludes the cuisine.
#[must_use]
pub fn any_conflict(restrictions: &[String], cuisine: &str) -> bool {
    restrictions
        .iter()
        .filter_map(|label| DietaryRule::for_restriction(label))
        .any(|rule| rule.conflicts_with(cuisine))
}
