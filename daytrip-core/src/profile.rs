//! Preference profiles: the ten attributes describing what a user feels
//! like doing.
//!
//! The same shape describes both a submitted preference record and the
//! attribute block of a catalog [`Activity`](crate::Activity), so a profile
//! can be compared against either. Ordinal attributes have small fixed
//! ranges; the `with_*` builders clamp into range rather than erroring.

use crate::TimeOfDay;

/// Upper bound of the travel distance ordinal.
pub const MAX_TRAVEL_DISTANCE: u8 = 4;
/// Upper bound of the crowd preference ordinal.
pub const MAX_CROWD_PREFERENCE: u8 = 4;
/// Upper bound of the physical demand ordinal.
pub const MAX_PHYSICAL_DEMAND: u8 = 4;
/// Upper bound of the social intent ordinal.
pub const MAX_SOCIAL_INTENT: u8 = 3;
/// Upper bound of the budget ordinal.
pub const MAX_BUDGET: u8 = 4;

/// Which ways of getting to an activity are acceptable.
///
/// Catalog data may omit either flag; a missing flag reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TransportModes {
    /// Reachable by public transport.
    pub public_transport: bool,
    /// Reachable by car.
    pub driving: bool,
}

/// A user's activity preferences.
///
/// # Examples
/// ```
/// use daytrip_core::{PreferenceProfile, TimeOfDay};
///
/// let profile = PreferenceProfile::new()
///     .with_time_of_day(TimeOfDay::Evening)
///     .with_budget(2)
///     .with_food(true);
/// assert_eq!(profile.budget, 2);
/// assert!(profile.wants_food);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PreferenceProfile {
    /// When the activity should be held.
    pub time_of_day: TimeOfDay,
    /// How far the user is willing to travel, `0..=4`.
    pub max_travel_distance: u8,
    /// How busy the surroundings should be, `0..=4`.
    pub crowd_preference: u8,
    /// How physically demanding the activity should be, `0..=4`.
    pub physical_demand: u8,
    /// How much conversation the user intends, `0..=3`.
    pub social_intent: u8,
    /// How much the user is willing to spend, `0..=4`.
    pub budget: u8,
    /// Whether food should be on offer.
    pub wants_food: bool,
    /// Whether drinking alcohol should be an option.
    pub wants_alcohol: bool,
    /// Acceptable transport modes.
    pub transport_modes: TransportModes,
}

impl PreferenceProfile {
    /// Construct a profile with every attribute at its lowest setting.
    ///
    /// # Examples
    /// ```
    /// use daytrip_core::{PreferenceProfile, TimeOfDay};
    ///
    /// let profile = PreferenceProfile::new();
    /// assert_eq!(profile.time_of_day, TimeOfDay::Morning);
    /// assert_eq!(profile.max_travel_distance, 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred time of day.
    #[must_use]
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Set the travel distance ordinal, clamped to `0..=4`.
    ///
    /// # Examples
    /// ```
    /// use daytrip_core::PreferenceProfile;
    ///
    /// let profile = PreferenceProfile::new().with_travel_distance(9);
    /// assert_eq!(profile.max_travel_distance, 4);
    /// ```
    #[must_use]
    pub fn with_travel_distance(mut self, value: u8) -> Self {
        self.max_travel_distance = value.min(MAX_TRAVEL_DISTANCE);
        self
    }

    /// Set the crowd preference ordinal, clamped to `0..=4`.
    #[must_use]
    pub fn with_crowd_preference(mut self, value: u8) -> Self {
        self.crowd_preference = value.min(MAX_CROWD_PREFERENCE);
        self
    }

    /// Set the physical demand ordinal, clamped to `0..=4`.
    #[must_use]
    pub fn with_physical_demand(mut self, value: u8) -> Self {
        self.physical_demand = value.min(MAX_PHYSICAL_DEMAND);
        self
    }

    /// Set the social intent ordinal, clamped to `0..=3`.
    #[must_use]
    pub fn with_social_intent(mut self, value: u8) -> Self {
        self.social_intent = value.min(MAX_SOCIAL_INTENT);
        self
    }

    /// Set the budget ordinal, clamped to `0..=4`.
    #[must_use]
    pub fn with_budget(mut self, value: u8) -> Self {
        self.budget = value.min(MAX_BUDGET);
        self
    }

    /// Set whether food should be on offer.
    #[must_use]
    pub fn with_food(mut self, wants_food: bool) -> Self {
        self.wants_food = wants_food;
        self
    }

    /// Set whether alcohol should be an option.
    #[must_use]
    pub fn with_alcohol(mut self, wants_alcohol: bool) -> Self {
        self.wants_alcohol = wants_alcohol;
        self
    }

    /// Set the acceptable transport modes.
    #[must_use]
    pub fn with_transport(mut self, transport_modes: TransportModes) -> Self {
        self.transport_modes = transport_modes;
        self
    }
}
