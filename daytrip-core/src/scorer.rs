//! Score activities against a preference profile.
//!
//! The `Scorer` trait assigns a similarity score to an
//! [`Activity`](crate::Activity) given a submitted
//! [`PreferenceProfile`](crate::PreferenceProfile).

use crate::{Activity, PreferenceProfile};

/// Calculate a similarity score for an activity.
///
/// Higher scores indicate a closer match between the activity and the
/// caller's preferences. Implementations must be thread-safe
/// (`Send` + `Sync`) so scorers can run across threads.
/// The method is infallible; implementers must always return a number,
/// defaulting missing information rather than erroring.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use daytrip_core::{Activity, PreferenceProfile, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _activity: &Activity, _profile: &PreferenceProfile) -> f32 {
///         1.0
///     }
/// }
///
/// let activity = Activity::new("Picnic", "", PreferenceProfile::new());
/// let profile = PreferenceProfile::new();
/// assert_eq!(UnitScorer.score(&activity, &profile), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `activity` according to `profile`.
    fn score(&self, activity: &Activity, profile: &PreferenceProfile) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
