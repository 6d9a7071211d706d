//! Render a ranked-results session for the terminal.
//!
//! The time-of-day banner is the original cityscape backdrop reduced to a
//! line of text: it follows the submitted preference record and feeds
//! nothing back into scoring.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use daytrip_core::{ResultsSession, Scorer, TimeOfDay};

/// How ranked results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable list with a banner and paging hint.
    #[default]
    Text,
    /// The visible results as a JSON array.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format '{s}'")),
        }
    }
}

/// Decorative skyline line for the submitted time of day.
fn banner(time_of_day: TimeOfDay) -> &'static str {
    match time_of_day {
        TimeOfDay::Morning => "-- first light over the harbour --",
        TimeOfDay::Day => "-- midday glare on the water --",
        TimeOfDay::Evening => "-- lights coming on across the skyline --",
        TimeOfDay::Night => "-- the city after dark --",
    }
}

/// Render the visible window of a session.
///
/// # Errors
/// Returns a `serde_json` error when JSON serialisation fails.
pub(crate) fn render<S: Scorer>(
    session: &ResultsSession<S>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(session)),
        OutputFormat::Json => serde_json::to_string_pretty(session.visible()),
    }
}

fn render_text<S: Scorer>(session: &ResultsSession<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", banner(session.time_of_day()));
    let _ = writeln!(out);

    for (index, result) in session.visible().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} ({:.2}%)",
            index + 1,
            result.name,
            result.score * 100.0
        );
        if !result.description.is_empty() {
            let _ = writeln!(out, "     {}", result.description);
        }
    }

    if session.can_load_more() {
        let remaining = session.total() - session.visible_count();
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} of {} shown ({remaining} more; raise --pages to reveal them)",
            session.visible_count(),
            session.total()
        );
    }
    out
}
