//! Immutable activity catalogs.

use crate::Activity;

/// An ordered, read-only collection of activities.
///
/// The catalog is loaded once at startup and never mutated; ranking treats
/// it as an opaque immutable sequence. Entry order is meaningful: it is the
/// tie-break order for equal-score results.
///
/// # Examples
/// ```
/// use daytrip_core::{Activity, Catalog, PreferenceProfile};
///
/// let catalog = Catalog::new(vec![Activity::new(
///     "Botanic gardens",
///     "A slow wander among the beds.",
///     PreferenceProfile::new(),
/// )]);
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.by_name("Botanic gardens").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    /// Construct a catalog from a list of activities.
    #[must_use]
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// The activities in catalog order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Report whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Find an activity by its display label.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Consume the catalog and return the underlying list.
    #[must_use]
    pub fn into_inner(self) -> Vec<Activity> {
        self.activities
    }
}

impl FromIterator<Activity> for Catalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
