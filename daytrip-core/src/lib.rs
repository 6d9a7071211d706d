//! Core domain types for the Daytrip activity recommendation engine.
//!
//! The crate models a single flow: a submitted
//! [`PreferenceProfile`] is scored against every [`Activity`] in an
//! immutable [`Catalog`] by a [`Scorer`], the results are ranked by
//! [`rank`], and a [`ResultsSession`] paginates the ranking for
//! incremental reveal. Everything is pure, synchronous, and in-memory.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod catalog;
pub mod profile;
pub mod rank;
pub mod scorer;
pub mod session;
pub mod similarity;
pub mod time_of_day;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use activity::Activity;
pub use catalog::Catalog;
pub use profile::{PreferenceProfile, TransportModes};
pub use rank::{ScoredActivity, rank};
pub use scorer::Scorer;
pub use session::{DEFAULT_PAGE_SIZE, ResultsSession, RevealState};
pub use similarity::SimilarityScorer;
pub use time_of_day::TimeOfDay;
pub use weights::{ScoreWeights, WeightsError};
