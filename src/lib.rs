//! Facade crate for the Daytrip activity recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the bundled
//! activity catalog behind a feature flag.

#![forbid(unsafe_code)]

pub use daytrip_core::{
    Activity, Catalog, PreferenceProfile, ResultsSession, RevealState, ScoreWeights,
    ScoredActivity, Scorer, SimilarityScorer, TimeOfDay, TransportModes, WeightsError, rank,
};

#[cfg(feature = "catalog")]
pub use daytrip_catalog::{CatalogError, embedded, from_path};
