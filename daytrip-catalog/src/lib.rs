//! The bundled activity catalog and its loaders.
//!
//! The crate ships the static dataset the engine ranks: a few dozen Sydney
//! activities, each carrying the same attribute block as a submitted
//! preference record. [`embedded`] parses the dataset compiled into the
//! binary; [`from_path`] loads a caller-supplied JSON file of the same
//! shape instead. Either way the catalog is loaded once and treated as
//! immutable from then on.
//!
//! # Examples
//!
//! ```
//! let catalog = daytrip_catalog::embedded().expect("bundled dataset parses");
//! assert!(!catalog.is_empty());
//! ```

#![forbid(unsafe_code)]

use camino::Utf8Path;
use serde::Deserialize;

use daytrip_core::{Activity, Catalog};

mod error;

pub use error::CatalogError;

/// The dataset compiled into the binary.
const EMBEDDED_DATASET: &str = include_str!("../data/activities.json");

/// On-disk shape of a catalog file: activities under a single key.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    activities: Vec<Activity>,
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Self::new(file.activities)
    }
}

/// Parse the bundled activity dataset.
///
/// # Errors
/// Returns [`CatalogError::Embedded`] when the compiled-in dataset does
/// not parse; with an unmodified build this does not happen.
pub fn embedded() -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(EMBEDDED_DATASET)
        .map_err(|source| CatalogError::Embedded { source })?;
    let catalog = Catalog::from(file);
    log::debug!("loaded {} bundled activities", catalog.len());
    Ok(catalog)
}

/// Load a catalog from a JSON file of the bundled dataset's shape.
///
/// # Errors
/// Returns [`CatalogError::ReadFile`] when the file cannot be read and
/// [`CatalogError::Parse`] when its contents do not parse.
pub fn from_path(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let contents =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let file: CatalogFile =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = Catalog::from(file);
    log::info!("loaded {} activities from {path}", catalog.len());
    Ok(catalog)
}
