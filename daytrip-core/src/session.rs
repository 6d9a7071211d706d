//! Ranked-results sessions with incremental reveal.
//!
//! A session owns the scorer, the catalog, and the reveal state. Each
//! submission recomputes the full ranking and resets the reveal window;
//! "load more" widens the window one page at a time. The gap between the
//! previous and current window identifies entries that are newly revealed,
//! which downstream presentation uses to stagger entrance animation.

use crate::{Catalog, PreferenceProfile, ScoredActivity, Scorer, TimeOfDay, rank};

/// How many results a fresh submission reveals.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Where a session is in its reveal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// No submission yet; nothing to show.
    Idle,
    /// A ranking exists and a window of it is visible.
    Revealed {
        /// Count of currently visible results.
        visible: usize,
        /// Visible count before the most recent transition.
        previous_visible: usize,
    },
}

/// A single user's ranked-results session.
///
/// All transitions are caller-triggered; nothing advances on a timer. The
/// visible count never decreases within one ranking and never exceeds the
/// total.
///
/// # Examples
/// ```
/// use daytrip_core::{Catalog, PreferenceProfile, ResultsSession, SimilarityScorer};
///
/// let mut session = ResultsSession::new(SimilarityScorer::default(), Catalog::default());
/// session.submit(&PreferenceProfile::new());
/// assert!(session.visible().is_empty());
/// assert!(!session.can_load_more());
/// ```
#[derive(Debug, Clone)]
pub struct ResultsSession<S: Scorer> {
    scorer: S,
    catalog: Catalog,
    page_size: usize,
    results: Vec<ScoredActivity>,
    state: RevealState,
    time_of_day: TimeOfDay,
}

impl<S: Scorer> ResultsSession<S> {
    /// Create an idle session over a catalog.
    pub fn new(scorer: S, catalog: Catalog) -> Self {
        Self {
            scorer,
            catalog,
            page_size: DEFAULT_PAGE_SIZE,
            results: Vec::new(),
            state: RevealState::Idle,
            time_of_day: TimeOfDay::Morning,
        }
    }

    /// Override the page size, floored at 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Submit a preference record: recompute the full ranking and reset
    /// the reveal window to the first page.
    ///
    /// A new submission invalidates all prior reveal state; the previous
    /// visible count starts over at zero so every entry on the first page
    /// animates in.
    pub fn submit(&mut self, profile: &PreferenceProfile) {
        self.results = rank(&self.scorer, profile, self.catalog.activities());
        self.time_of_day = profile.time_of_day;
        self.state = RevealState::Revealed {
            visible: self.page_size.min(self.results.len()),
            previous_visible: 0,
        };
    }

    /// Reveal one more page of results.
    ///
    /// Returns `true` when the window widened. A no-op returning `false`
    /// when everything is already visible or nothing has been submitted.
    pub fn load_more(&mut self) -> bool {
        let RevealState::Revealed { visible, .. } = self.state else {
            return false;
        };
        if visible >= self.results.len() {
            return false;
        }
        self.state = RevealState::Revealed {
            visible: (visible + self.page_size).min(self.results.len()),
            previous_visible: visible,
        };
        true
    }

    /// The currently visible window of ranked results.
    #[must_use]
    pub fn visible(&self) -> &[ScoredActivity] {
        self.results.get(..self.visible_count()).unwrap_or(&[])
    }

    /// Results revealed by the most recent transition, for entrance
    /// animation.
    #[must_use]
    pub fn newly_revealed(&self) -> &[ScoredActivity] {
        let range = self.newly_revealed_range();
        self.results.get(range).unwrap_or(&[])
    }

    /// Index range of the newly revealed results.
    #[must_use]
    pub fn newly_revealed_range(&self) -> std::ops::Range<usize> {
        match self.state {
            RevealState::Idle => 0..0,
            RevealState::Revealed {
                visible,
                previous_visible,
            } => previous_visible..visible,
        }
    }

    /// Count of currently visible results.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        match self.state {
            RevealState::Idle => 0,
            RevealState::Revealed { visible, .. } => visible,
        }
    }

    /// Visible count before the most recent transition.
    #[must_use]
    pub fn previous_visible_count(&self) -> usize {
        match self.state {
            RevealState::Idle => 0,
            RevealState::Revealed {
                previous_visible, ..
            } => previous_visible,
        }
    }

    /// Total number of ranked results.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether a further `load_more` would reveal anything.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        matches!(self.state, RevealState::Revealed { visible, .. } if visible < self.results.len())
    }

    /// The session's reveal state.
    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Time-of-day signal from the most recent submission.
    ///
    /// Purely decorative: consumers may theme their backdrop from it, but
    /// it feeds nothing back into scoring.
    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// The catalog this session ranks.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
