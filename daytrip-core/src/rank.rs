//! Rank a catalog of activities against a preference record.
//!
//! Ranking is freshly computed per call over the full catalog; nothing is
//! cached between submissions.

use crate::{Activity, PreferenceProfile, Scorer};

/// One ranked result: the activity's display fields plus its score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredActivity {
    /// Display label copied from the activity.
    pub name: String,
    /// Description copied from the activity.
    pub description: String,
    /// Similarity score in `0.0..=1.0`.
    pub score: f32,
}

/// Score every activity and sort descending by score.
///
/// The sort is stable: activities with equal scores keep their catalog
/// order. The returned list always has one entry per input activity.
///
/// # Examples
/// ```
/// use daytrip_core::{Activity, PreferenceProfile, SimilarityScorer, TimeOfDay, rank};
///
/// let profile = PreferenceProfile::new().with_time_of_day(TimeOfDay::Evening);
/// let catalog = vec![
///     Activity::new("Dawn swim", "", PreferenceProfile::new()),
///     Activity::new("Twilight sail", "", profile),
/// ];
///
/// let ranked = rank(&SimilarityScorer::default(), &profile, &catalog);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].name, "Twilight sail");
/// ```
#[must_use]
pub fn rank<S: Scorer>(
    scorer: &S,
    profile: &PreferenceProfile,
    activities: &[Activity],
) -> Vec<ScoredActivity> {
    let mut results: Vec<ScoredActivity> = activities
        .iter()
        .map(|activity| ScoredActivity {
            name: activity.name.clone(),
            description: activity.description.clone(),
            score: scorer.score(activity, profile),
        })
        .collect();
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
