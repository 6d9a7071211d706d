use daytrip_core::{
    Activity, PreferenceProfile, ScoreWeights, Scorer, SimilarityScorer, TimeOfDay, TransportModes,
    rank,
};
use rstest::rstest;

const TOLERANCE: f32 = 1e-6;

/// The worked-example preference record: day time, mid-range ordinals,
/// food but no alcohol, arriving by car.
fn reference_profile() -> PreferenceProfile {
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

#[test]
fn identical_records_score_exactly_one() {
    let profile = reference_profile();
    let activity = Activity::new("Twin", "", profile);
    let score = SimilarityScorer::default().score(&activity, &profile);
    assert!((score - 1.0).abs() <= TOLERANCE);
}

// Each case perturbs one attribute of an otherwise identical activity and
// states how much weight the perturbation forfeits out of the 173 total.
#[rstest]
#[case::time_of_day_two_steps(reference_profile().with_time_of_day(TimeOfDay::Night), 30.0 * 2.0 / 3.0)]
#[case::travel_distance_two_steps(reference_profile().with_travel_distance(4), 31.0 * 2.0 / 4.0)]
#[case::social_intent_one_step(reference_profile().with_social_intent(2), 11.0 / 3.0)]
#[case::physical_demand_two_steps(reference_profile().with_physical_demand(4), 18.0 * 2.0 / 4.0)]
#[case::budget_two_steps(reference_profile().with_budget(4), 12.0 * 2.0 / 4.0)]
#[case::crowd_two_steps(reference_profile().with_crowd_preference(0), 13.0 * 2.0 / 4.0)]
#[case::food_mismatch(reference_profile().with_food(false), 10.0)]
#[case::alcohol_mismatch(reference_profile().with_alcohol(true), 29.0)]
#[case::transport_mismatch_both_ways(
    reference_profile().with_transport(TransportModes { driving: false, public_transport: true }),
    8.0 + 11.0
)]
fn perturbing_one_attribute_forfeits_its_weighted_distance(
    #[case] activity_profile: PreferenceProfile,
    #[case] forfeited: f32,
) {
    let profile = reference_profile();
    let activity = Activity::new("Perturbed twin", "", activity_profile);
    let score = SimilarityScorer::default().score(&activity, &profile);
    let expected = 1.0 - forfeited / ScoreWeights::default().total();
    assert!(score.is_finite(), "score must be finite");
    assert!(
        (-TOLERANCE..=1.0 + TOLERANCE).contains(&score),
        "score must be within [0, 1]"
    );
    assert!(
        (score - expected).abs() <= TOLERANCE,
        "expected {expected}, found {score}"
    );
}

#[test]
fn night_against_day_example_loses_the_full_time_weight() {
    let profile = reference_profile();
    let activity = Activity::new("Night twin", "", profile.with_time_of_day(TimeOfDay::Night));
    let score = SimilarityScorer::default().score(&activity, &profile);
    // Distance 2 of 3 from day to night... the worked example pins the
    // drop for the full morning-to-night span instead.
    let from_morning = reference_profile().with_time_of_day(TimeOfDay::Morning);
    let night = Activity::new("Night", "", from_morning.with_time_of_day(TimeOfDay::Night));
    let full_span = SimilarityScorer::default().score(&night, &from_morning);
    assert!((full_span - (1.0 - 30.0 / 173.0)).abs() <= TOLERANCE);
    assert!(score > full_span, "a two-step gap costs less than the full span");
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(3, 3)]
fn equal_ordinals_contribute_their_full_weight(#[case] preference: u8, #[case] activity: u8) {
    // With every attribute equal the total is the full weight sum, so the
    // normalised score is exactly one regardless of the shared value.
    let profile = reference_profile().with_social_intent(preference);
    let subject = Activity::new("Equal", "", profile.with_social_intent(activity));
    let score = SimilarityScorer::default().score(&subject, &profile);
    assert!((score - 1.0).abs() <= TOLERANCE);
}

#[test]
fn scoring_is_symmetric() {
    let first = reference_profile();
    let second = PreferenceProfile::new()
        .with_time_of_day(TimeOfDay::Night)
        .with_travel_distance(4)
        .with_alcohol(true);
    let scorer = SimilarityScorer::default();
    let forward = scorer.score(&Activity::new("b", "", second), &first);
    let backward = scorer.score(&Activity::new("a", "", first), &second);
    assert!((forward - backward).abs() <= TOLERANCE);
}

#[test]
fn ranking_prefers_the_closer_activity() {
    let profile = reference_profile();
    let catalog = vec![
        Activity::new("Different", "", profile.with_alcohol(true)),
        Activity::new("Exact", "", profile),
    ];
    let ranked = rank(&SimilarityScorer::default(), &profile, &catalog);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Exact");
}
