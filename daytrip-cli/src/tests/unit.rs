//! Focused unit tests covering rank CLI configuration validation.

use super::*;
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
fn default_args_convert_to_the_lowest_settings() {
    let config = RankConfig::try_from(RankArgs::default()).expect("defaults convert");
    assert_eq!(config.profile, PreferenceProfile::new());
    assert_eq!(config.page_size, daytrip_core::DEFAULT_PAGE_SIZE);
    assert_eq!(config.pages, 1);
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.catalog.is_none());
}

#[rstest]
#[case(Some(5), None, ARG_TRAVEL_DISTANCE, 4)]
#[case(None, Some(4), ARG_SOCIAL, 3)]
fn out_of_range_ordinals_are_rejected(
    #[case] travel: Option<u8>,
    #[case] social: Option<u8>,
    #[case] field: &'static str,
    #[case] max: u8,
) {
    let args = RankArgs {
        travel_distance: travel,
        social,
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("out-of-range ordinal should error");
    match err {
        CliError::OrdinalOutOfRange {
            field: found,
            max: found_max,
            ..
        } => {
            assert_eq!(found, field);
            assert_eq!(found_max, max);
        }
        other => panic!("expected OrdinalOutOfRange, found {other:?}"),
    }
}

#[rstest]
fn boundary_ordinals_are_accepted() {
    let args = RankArgs {
        travel_distance: Some(4),
        crowd: Some(4),
        physical: Some(4),
        social: Some(3),
        budget: Some(4),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("boundary values convert");
    assert_eq!(config.profile.max_travel_distance, 4);
    assert_eq!(config.profile.social_intent, 3);
}

#[rstest]
fn flags_assemble_the_preference_record() {
    let args = RankArgs {
        time_of_day: Some(TimeOfDay::Night),
        budget: Some(2),
        food: true,
        alcohol: true,
        public_transport: true,
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("flags convert");
    assert_eq!(config.profile.time_of_day, TimeOfDay::Night);
    assert!(config.profile.wants_food);
    assert!(config.profile.wants_alcohol);
    assert!(config.profile.transport_modes.public_transport);
    assert!(!config.profile.transport_modes.driving);
}

#[rstest]
fn missing_catalog_path_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf8 path");
    let config = RankConfig {
        profile: PreferenceProfile::new(),
        catalog: Some(path),
        page_size: 10,
        pages: 1,
        format: OutputFormat::Text,
    };
    let err = config.load_catalog().expect_err("missing catalog should error");
    assert!(matches!(err, CliError::MissingCatalogFile { .. }));
}

#[rstest]
fn bundled_catalog_loads_when_no_override_is_given() {
    let config = RankConfig::try_from(RankArgs::default()).expect("defaults convert");
    let catalog = config.load_catalog().expect("bundled catalog loads");
    assert!(!catalog.is_empty());
}

#[rstest]
fn zero_pages_still_prints_the_first_page() {
    let args = RankArgs {
        pages: Some(0),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("converts");
    assert_eq!(config.pages, 1);
}
