//! Test-only fixtures shared by unit, behaviour, and property tests.

use crate::{Activity, Catalog, PreferenceProfile, TimeOfDay, TransportModes};

/// The worked-example preference record used throughout the test suites.
///
/// Day time, mid-range ordinals, food but no alcohol, arriving by car.
#[must_use]
pub fn reference_profile() -> PreferenceProfile {
    PreferenceProfile::new()
        .with_time_of_day(TimeOfDay::Day)
        .with_travel_distance(2)
        .with_social_intent(1)
        .with_physical_demand(2)
        .with_budget(2)
        .with_crowd_preference(2)
        .with_food(true)
        .with_alcohol(false)
        .with_transport(TransportModes {
            driving: true,
            public_transport: false,
        })
}

/// An activity named `name` carrying the given attribute block.
#[must_use]
pub fn activity(name: &str, profile: PreferenceProfile) -> Activity {
    Activity::new(name, "", profile)
}

/// A catalog of `count` identical activities, useful for paging tests
/// where scores do not matter.
#[must_use]
pub fn uniform_catalog(count: usize) -> Catalog {
    (0..count)
        .map(|i| Activity::new(format!("activity {i}"), "", PreferenceProfile::new()))
        .collect()
}
