//! Command-line interface for the Daytrip recommendation engine.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use daytrip_catalog::CatalogError;
use daytrip_core::profile::{
    MAX_BUDGET, MAX_CROWD_PREFERENCE, MAX_PHYSICAL_DEMAND, MAX_SOCIAL_INTENT, MAX_TRAVEL_DISTANCE,
};
use daytrip_core::{
    Catalog, PreferenceProfile, ResultsSession, SimilarityScorer, TimeOfDay, TransportModes,
};

mod output;

pub use output::OutputFormat;

const ARG_TRAVEL_DISTANCE: &str = "travel-distance";
const ARG_CROWD: &str = "crowd";
const ARG_PHYSICAL: &str = "physical";
const ARG_SOCIAL: &str = "social";
const ARG_BUDGET: &str = "budget";
const ARG_CATALOG: &str = "catalog";
const ENV_CATALOG: &str = "DAYTRIP_CMDS_RANK_CATALOG";

/// Run the Daytrip CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration
/// merging fails, a merged value is out of range, or the catalog cannot
/// be loaded.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => {
            let rendered = run_rank(args)?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn run_rank(args: RankArgs) -> Result<String, CliError> {
    let config = args.into_config()?;
    let catalog = config.load_catalog()?;
    log::debug!("ranking {} activities", catalog.len());

    let mut session = ResultsSession::new(SimilarityScorer::default(), catalog)
        .with_page_size(config.page_size);
    session.submit(&config.profile);
    for _ in 1..config.pages {
        if !session.load_more() {
            break;
        }
    }
    output::render(&session, config.format).map_err(|source| CliError::Render { source })
}

#[derive(Debug, Parser)]
#[command(
    name = "daytrip",
    about = "Rank the bundled activity catalog against your preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank the catalog for a preference record.
    Rank(RankArgs),
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Describe what you feel like doing. Every option can come \
                 from CLI flags, configuration files, or environment \
                 variables; anything omitted sits at its lowest setting.",
    about = "Rank activities against a preference record"
)]
#[ortho_config(prefix = "DAYTRIP")]
struct RankArgs {
    /// When the activity should be held.
    #[arg(long = "time-of-day", value_name = "slot")]
    #[serde(default)]
    time_of_day: Option<TimeOfDay>,
    /// Willingness to travel, 0 (local) to 4 (day trip).
    #[arg(long = ARG_TRAVEL_DISTANCE, value_name = "0-4")]
    #[serde(default)]
    travel_distance: Option<u8>,
    /// Preferred crowd level, 0 (isolated) to 4 (packed).
    #[arg(long = ARG_CROWD, value_name = "0-4")]
    #[serde(default)]
    crowd: Option<u8>,
    /// Physical demand, 0 (lazy) to 4 (intense).
    #[arg(long = ARG_PHYSICAL, value_name = "0-4")]
    #[serde(default)]
    physical: Option<u8>,
    /// Intended sociability, 0 (activity focused) to 3 (conversation).
    #[arg(long = ARG_SOCIAL, value_name = "0-3")]
    #[serde(default)]
    social: Option<u8>,
    /// Spending appetite, 0 (free) to 4 (splurge).
    #[arg(long = ARG_BUDGET, value_name = "0-4")]
    #[serde(default)]
    budget: Option<u8>,
    /// Food should be on offer.
    #[arg(long)]
    #[serde(default)]
    food: bool,
    /// Drinking alcohol should be an option.
    #[arg(long)]
    #[serde(default)]
    alcohol: bool,
    /// Public transport is an acceptable way to get there.
    #[arg(long = "public-transport")]
    #[serde(default)]
    public_transport: bool,
    /// Driving is an acceptable way to get there.
    #[arg(long)]
    #[serde(default)]
    driving: bool,
    /// Path to a catalog JSON file overriding the bundled dataset.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    catalog: Option<Utf8PathBuf>,
    /// Results revealed per page.
    #[arg(long = "page-size", value_name = "count")]
    #[serde(default)]
    page_size: Option<usize>,
    /// Pages to reveal before printing.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pages: Option<usize>,
    /// Output format: text or json.
    #[arg(long, value_name = "format")]
    #[serde(default)]
    format: Option<OutputFormat>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RankConfig {
    profile: PreferenceProfile,
    catalog: Option<Utf8PathBuf>,
    page_size: usize,
    pages: usize,
    format: OutputFormat,
}

impl RankConfig {
    fn load_catalog(&self) -> Result<Catalog, CliError> {
        match &self.catalog {
            Some(path) => {
                Self::require_existing(path)?;
                Ok(daytrip_catalog::from_path(path)?)
            }
            None => Ok(daytrip_catalog::embedded()?),
        }
    }

    fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingCatalogFile {
                path: path.to_path_buf(),
            })
        }
    }

    fn checked_ordinal(
        value: Option<u8>,
        field: &'static str,
        max: u8,
    ) -> Result<u8, CliError> {
        let value = value.unwrap_or(0);
        if value > max {
            return Err(CliError::OrdinalOutOfRange { field, max, value });
        }
        Ok(value)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let profile = PreferenceProfile::new()
            .with_time_of_day(args.time_of_day.unwrap_or_default())
            .with_travel_distance(Self::checked_ordinal(
                args.travel_distance,
                ARG_TRAVEL_DISTANCE,
                MAX_TRAVEL_DISTANCE,
            )?)
            .with_crowd_preference(Self::checked_ordinal(
                args.crowd,
                ARG_CROWD,
                MAX_CROWD_PREFERENCE,
            )?)
            .with_physical_demand(Self::checked_ordinal(
                args.physical,
                ARG_PHYSICAL,
                MAX_PHYSICAL_DEMAND,
            )?)
            .with_social_intent(Self::checked_ordinal(
                args.social,
                ARG_SOCIAL,
                MAX_SOCIAL_INTENT,
            )?)
            .with_budget(Self::checked_ordinal(args.budget, ARG_BUDGET, MAX_BUDGET)?)
            .with_food(args.food)
            .with_alcohol(args.alcohol)
            .with_transport(TransportModes {
                public_transport: args.public_transport,
                driving: args.driving,
            });
        Ok(Self {
            profile,
            catalog: args.catalog,
            page_size: args.page_size.unwrap_or(daytrip_core::DEFAULT_PAGE_SIZE),
            pages: args.pages.unwrap_or(1).max(1),
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Errors emitted by the Daytrip CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A merged ordinal sits outside its control's range.
    #[error("--{field} must be at most {max}, found {value}")]
    OrdinalOutOfRange {
        /// Flag the value arrived under.
        field: &'static str,
        /// Largest accepted value.
        max: u8,
        /// Value found after configuration merging.
        value: u8,
    },
    /// A referenced catalog path does not exist on disk.
    #[error("--{ARG_CATALOG} path {path} does not exist (or set {ENV_CATALOG})")]
    MissingCatalogFile {
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// Loading the catalog failed.
    #[error("failed to load catalog")]
    Catalog(#[from] CatalogError),
    /// Serialising results for output failed.
    #[error("failed to render results")]
    Render {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests;
