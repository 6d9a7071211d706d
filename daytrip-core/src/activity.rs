//! Catalog activities.

use crate::PreferenceProfile;

/// A candidate activity from the bundled catalog.
///
/// Carries a display name, a short description, and the same attribute
/// block as a [`PreferenceProfile`], so activities can be scored against a
/// submitted preference record (or against each other).
///
/// # Examples
/// ```
/// use daytrip_core::{Activity, PreferenceProfile, TimeOfDay};
///
/// let activity = Activity::new(
///     "Harbour Bridge climb",
///     "Guided climb over the harbour.",
///     PreferenceProfile::new()
///         .with_time_of_day(TimeOfDay::Day)
///         .with_physical_demand(3),
/// );
/// assert_eq!(activity.name, "Harbour Bridge climb");
/// assert_eq!(activity.profile.physical_demand, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Unique display label.
    pub name: String,
    /// Free-text description shown alongside the name.
    pub description: String,
    /// The activity's attribute block.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: PreferenceProfile,
}

impl Activity {
    /// Construct an activity from its label, description, and attributes.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        profile: PreferenceProfile,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            profile,
        }
    }
}
