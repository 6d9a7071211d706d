//! The attribute weighting model behind the similarity scorer.
//!
//! Weights are tunable constants, not input-derived. They need not sum to
//! any particular value; the scorer normalises by [`ScoreWeights::total`].

use thiserror::Error;

/// Relative contribution of each scored attribute.
///
/// Ordinal attributes (time of day, travel distance, social intent,
/// physical demand, budget, crowd preference) earn a fraction of their
/// weight by closeness; boolean attributes earn their full weight when the
/// preference and the activity agree.
///
/// # Examples
/// ```
/// use daytrip_core::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.total(), 173.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the time-of-day ordinal.
    pub time_of_day: f32,
    /// Weight of the travel distance ordinal.
    pub travel_distance: f32,
    /// Weight of the social intent ordinal.
    pub social_intent: f32,
    /// Weight of the physical demand ordinal.
    pub physical_demand: f32,
    /// Weight of the budget ordinal.
    pub budget: f32,
    /// Weight of the crowd preference ordinal.
    pub crowd_preference: f32,
    /// Bonus when the food flags agree.
    pub food_match: f32,
    /// Bonus when the alcohol flags agree.
    pub alcohol_match: f32,
    /// Bonus when the driving flags agree.
    pub driving_match: f32,
    /// Bonus when the public transport flags agree.
    pub public_transport_match: f32,
}

impl ScoreWeights {
    /// Sum of all configured weights, the scorer's normalisation divisor.
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation requires summing the weights"
    )]
    #[must_use]
    pub fn total(self) -> f32 {
        self.time_of_day
            + self.travel_distance
            + self.social_intent
            + self.physical_demand
            + self.budget
            + self.crowd_preference
            + self.food_match
            + self.alcohol_match
            + self.driving_match
            + self.public_transport_match
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when any weight is non-finite or
    /// negative, or when the total is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::Invalid)
        }
    }

    fn is_valid(self) -> bool {
        let values = [
            self.time_of_day,
            self.travel_distance,
            self.social_intent,
            self.physical_demand,
            self.budget,
            self.crowd_preference,
            self.food_match,
            self.alcohol_match,
            self.driving_match,
            self.public_transport_match,
        ];
        values.iter().all(|w| w.is_finite() && *w >= 0.0_f32) && self.total() != 0.0_f32
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            time_of_day: 30.0,
            travel_distance: 31.0,
            social_intent: 11.0,
            physical_demand: 18.0,
            budget: 12.0,
            crowd_preference: 13.0,
            food_match: 10.0,
            alcohol_match: 29.0,
            driving_match: 8.0,
            public_transport_match: 11.0,
        }
    }
}

/// Errors raised when configuring score weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was non-finite or negative, or the total was zero.
    #[error("weights must be finite, non-negative, and sum to a positive value")]
    Invalid,
}
