//! Weighted-distance similarity between a preference record and an
//! activity.
//!
//! Each ordinal attribute earns a linear fraction of its weight by
//! closeness; each boolean attribute earns its full weight when the two
//! records agree. Agreement on `false` counts: not wanting food is itself
//! information that should match an activity without food. An earlier
//! formulation granted boolean weights whenever the preference set the
//! flag, regardless of the activity; that rule is superseded.

use crate::profile::{
    MAX_BUDGET, MAX_CROWD_PREFERENCE, MAX_PHYSICAL_DEMAND, MAX_SOCIAL_INTENT, MAX_TRAVEL_DISTANCE,
};
use crate::{Activity, PreferenceProfile, ScoreWeights, Scorer, TimeOfDay, WeightsError};

/// Ordinal distance between the first and last time-of-day slots.
const MAX_TIME_OF_DAY_DISTANCE: u8 = TimeOfDay::Night as u8;

/// The canonical weighted-distance scorer.
///
/// Pure and deterministic: scoring mutates neither record and always
/// produces a value in `0.0..=1.0`. A profile scored against an activity
/// with identical attributes scores exactly `1.0`.
///
/// # Examples
/// ```
/// use daytrip_core::{Activity, PreferenceProfile, Scorer, SimilarityScorer, TimeOfDay};
///
/// let profile = PreferenceProfile::new().with_time_of_day(TimeOfDay::Day);
/// let activity = Activity::new("Gallery visit", "", profile);
///
/// let scorer = SimilarityScorer::default();
/// assert_eq!(scorer.score(&activity, &profile), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimilarityScorer {
    weights: ScoreWeights,
}

impl SimilarityScorer {
    /// Construct a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when any weight is non-finite or
    /// negative, or when the total is zero.
    pub fn new(weights: ScoreWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights this scorer was configured with.
    #[must_use]
    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Weighted closeness of one ordinal attribute pair.
    ///
    /// Distance 0 earns the full weight; distance `max` earns zero. The
    /// observed distance is capped at `max` so out-of-range catalog values
    /// degrade instead of producing negative terms.
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity scoring is floating-point weighting over small ordinals"
    )]
    fn ordinal_term(weight: f32, preference: u8, activity: u8, max: u8) -> f32 {
        let distance = preference.abs_diff(activity).min(max);
        weight * f32::from(max - distance) / f32::from(max)
    }

    /// Full weight when both flags agree, zero otherwise.
    fn match_term(weight: f32, preference: bool, activity: bool) -> f32 {
        if preference == activity { weight } else { 0.0 }
    }
}

impl Scorer for SimilarityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity is a normalised weighted sum"
    )]
    fn score(&self, activity: &Activity, profile: &PreferenceProfile) -> f32 {
        let w = self.weights;
        let a = &activity.profile;

        let mut total = Self::ordinal_term(
            w.time_of_day,
            profile.time_of_day.ordinal(),
            a.time_of_day.ordinal(),
            MAX_TIME_OF_DAY_DISTANCE,
        );
        total += Self::ordinal_term(
            w.travel_distance,
            profile.max_travel_distance,
            a.max_travel_distance,
            MAX_TRAVEL_DISTANCE,
        );
        total += Self::ordinal_term(
            w.social_intent,
            profile.social_intent,
            a.social_intent,
            MAX_SOCIAL_INTENT,
        );
        total += Self::ordinal_term(
            w.physical_demand,
            profile.physical_demand,
            a.physical_demand,
            MAX_PHYSICAL_DEMAND,
        );
        total += Self::ordinal_term(w.budget, profile.budget, a.budget, MAX_BUDGET);
        total += Self::ordinal_term(
            w.crowd_preference,
            profile.crowd_preference,
            a.crowd_preference,
            MAX_CROWD_PREFERENCE,
        );

        total += Self::match_term(w.food_match, profile.wants_food, a.wants_food);
        total += Self::match_term(w.alcohol_match, profile.wants_alcohol, a.wants_alcohol);
        total += Self::match_term(
            w.driving_match,
            profile.transport_modes.driving,
            a.transport_modes.driving,
        );
        total += Self::match_term(
            w.public_transport_match,
            profile.transport_modes.public_transport,
            a.transport_modes.public_transport,
        );

        <Self as Scorer>::sanitise(total / w.total())
    }
}
