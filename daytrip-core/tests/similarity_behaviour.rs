use std::cell::{Cell, RefCell};

use daytrip_core::{
    Activity, PreferenceProfile, Scorer, SimilarityScorer, TimeOfDay, TransportModes,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn scorer() -> SimilarityScorer {
    SimilarityScorer::default()
}

#[fixture]
fn profile() -> RefCell<PreferenceProfile> {
    RefCell::new(PreferenceProfile::new())
}

#[fixture]
fn activity() -> RefCell<Activity> {
    RefCell::new(Activity::new("subject", "", PreferenceProfile::new()))
}

#[fixture]
fn result() -> Cell<f32> {
    Cell::new(0.0)
}

fn day_profile() -> PreferenceProfile {
    PreferenceProfile::new()
        .with_time_of_day(TimeOfDay::Day)
        .with_travel_distance(2)
        .with_social_intent(1)
        .with_physical_demand(2)
        .with_budget(2)
        .with_crowd_preference(2)
        .with_food(true)
        .with_transport(TransportModes {
            driving: true,
            public_transport: false,
        })
}

#[given("a preference record and an activity with identical attributes")]
fn given_identical(
    #[from(profile)] profile: &RefCell<PreferenceProfile>,
    #[from(activity)] activity: &RefCell<Activity>,
) {
    let record = day_profile();
    *profile.borrow_mut() = record;
    activity.borrow_mut().profile = record;
}

#[given("a morning preference record and an otherwise identical activity at night")]
fn given_opposite_times(
    #[from(profile)] profile: &RefCell<PreferenceProfile>,
    #[from(activity)] activity: &RefCell<Activity>,
) {
    let record = day_profile().with_time_of_day(TimeOfDay::Morning);
    *profile.borrow_mut() = record;
    activity.borrow_mut().profile = record.with_time_of_day(TimeOfDay::Night);
}

#[given("a preference record and an activity that both skip alcohol")]
fn given_shared_sobriety(
    #[from(profile)] profile: &RefCell<PreferenceProfile>,
    #[from(activity)] activity: &RefCell<Activity>,
) {
    let record = day_profile().with_alcohol(false);
    *profile.borrow_mut() = record;
    activity.borrow_mut().profile = record;
}

#[when("I score the activity")]
fn when_score(
    #[from(scorer)] scorer: SimilarityScorer,
    #[from(profile)] profile: &RefCell<PreferenceProfile>,
    #[from(activity)] activity: &RefCell<Activity>,
    #[from(result)] result: &Cell<f32>,
) {
    let activity = activity.borrow();
    let profile = profile.borrow();
    result.set(scorer.score(&activity, &profile));
}

#[then("the score is {float}")]
fn then_score(expected: f32, #[from(result)] result: &Cell<f32>) {
    assert!((result.get() - expected).abs() <= 1e-6);
}

#[then("the score drops by the full time-of-day weight")]
fn then_full_time_penalty(#[from(result)] result: &Cell<f32>) {
    let expected = 1.0 - 30.0 / 173.0;
    assert!((result.get() - expected).abs() <= 1e-6);
}

#[scenario(path = "tests/features/similarity.feature", index = 0)]
fn identical_records(
    scorer: SimilarityScorer,
    profile: RefCell<PreferenceProfile>,
    activity: RefCell<Activity>,
    result: Cell<f32>,
) {
    let _ = (scorer, profile, activity, result);
}

#[scenario(path = "tests/features/similarity.feature", index = 1)]
fn night_against_morning(
    scorer: SimilarityScorer,
    profile: RefCell<PreferenceProfile>,
    activity: RefCell<Activity>,
    result: Cell<f32>,
) {
    let _ = (scorer, profile, activity, result);
}

#[scenario(path = "tests/features/similarity.feature", index = 2)]
fn shared_sobriety(
    scorer: SimilarityScorer,
    profile: RefCell<PreferenceProfile>,
    activity: RefCell<Activity>,
    result: Cell<f32>,
) {
    let _ = (scorer, profile, activity, result);
}
