//! Planet catalogs stored as RON.
//!
//! A catalog is the list of planets to texture, usually exported from an
//! exoplanet archive query:
//!
//! ```text
//! (planets: [
//!     (name: "Kepler-22 b", density: Some(1.2), temperature: Some(262.0), atmosphere: true),
//!     (name: "WASP-12 b", density: Some(0.33), temperature: Some(2580.0)),
//! ])
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::planet::PlanetParams;

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[source] ron::error::SpannedError),
}

/// An ordered list of planets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub planets: Vec<PlanetParams>,
}

impl Catalog {
    pub fn from_ron(source: &str) -> Result<Self, CatalogError> {
        ron::from_str(source).map_err(CatalogError::ParseError)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(CatalogError::ReadError)?;
        let catalog = Self::from_ron(&contents)?;
        tracing::info!(planets = catalog.planets.len(), path = %path.display(), "loaded catalog");
        Ok(catalog)
    }

    /// Planets in catalog order, keeping only the first entry for each name.
    pub fn unique(&self) -> Vec<&PlanetParams> {
        let mut seen = HashSet::new();
        self.planets
            .iter()
            .filter(|planet| {
                let fresh = seen.insert(planet.name.as_str());
                if !fresh {
                    tracing::debug!(planet = %planet.name, "skipping duplicate catalog entry");
                }
                fresh
            })
            .collect()
    }
}
