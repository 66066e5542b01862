//! Destination catalog
//!
//! Read-only collection of curated destination profiles, built once at
//! startup and shared as `Arc<Catalog>`. Profiles are kept in an ordered
//! `Vec` so that iteration order, and with it every tie-break downstream,
//! is deterministic.

pub mod markets;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::DestinationProfile;

pub use markets::MarketEntry;

const BUILTIN_CATALOG: &str = include_str!("destinations.json");

/// Errors raised while building a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog data in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("destination '{0}' appears more than once")]
    DuplicateName(String),

    #[error("destination at position {0} has an empty name")]
    EmptyName(usize),
}

/// Ordered, immutable set of destination profiles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profiles: Vec<DestinationProfile>,
}

impl Catalog {
    /// Build a catalog, rejecting blank and duplicate names
    pub fn from_profiles(profiles: Vec<DestinationProfile>) -> Result<Self, CatalogError> {
        for (index, profile) in profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if profiles[..index].iter().any(|p| p.name == profile.name) {
                return Err(CatalogError::DuplicateName(profile.name.clone()));
            }
        }
        Ok(Self { profiles })
    }

    /// The curated profiles shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Parse a JSON array of profiles
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<DestinationProfile> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Self::from_profiles(profiles)
    }

    /// Load a catalog file from disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading destination catalog from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    /// Catalog file when configured, built-in profiles otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin()?,
        };
        info!("Destination catalog ready with {} profiles", catalog.len());
        Ok(catalog)
    }

    /// Exact, case-sensitive lookup
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DestinationProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Case-insensitive lookup for user-typed names
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DestinationProfile> {
        let name = name.trim();
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DestinationProfile> {
        self.profiles.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    /// First `count` names in catalog order
    #[must_use]
    pub fn first_names(&self, count: usize) -> Vec<String> {
        self.profiles
            .iter()
            .take(count)
            .map(|p| p.name.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pace, PriceLevel};
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_loads_in_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.names(),
            vec![
                "Nuremberg",
                "Munich",
                "Dresden",
                "Vienna",
                "Salzburg",
                "Strasbourg",
                "Prague",
                "Zurich"
            ]
        );
        assert_eq!(catalog.first_names(3), vec!["Nuremberg", "Munich", "Dresden"]);
    }

    #[test]
    fn test_builtin_profile_content() {
        let catalog = Catalog::builtin().unwrap();
        let vienna = catalog.get("Vienna").unwrap();
        assert_eq!(vienna.price_level, PriceLevel::Premium);
        assert_eq!(vienna.ideal_pace, Pace::Moderate);
        assert_eq!(vienna.lodging_options[0].name, "Hotel Sacher Wien");

        let munich = catalog.get("Munich").unwrap();
        assert_eq!(munich.ideal_pace, Pace::Active);
        assert!(munich.tags.serves("food"));
        assert!(catalog.iter().all(DestinationProfile::has_content));
    }

    #[test]
    fn test_lookup_variants() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("prague").is_none());
        assert_eq!(catalog.find(" prague ").unwrap().name, "Prague");
        assert!(catalog.find("Atlantis").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::from_profiles(vec![
            DestinationProfile::empty("Graz"),
            DestinationProfile::empty("Graz"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "Graz"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Catalog::from_profiles(vec![DestinationProfile::empty("  ")]);
        assert!(matches!(result, Err(CatalogError::EmptyName(0))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Colmar", "price_level": "mid", "ideal_pace": "relaxed", "foods": ["Bredele"]}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Colmar").unwrap().foods, vec!["Bredele"]);
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(
            Catalog::from_path(file.path()),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let result = Catalog::from_path(Path::new("/nonexistent/yuletide/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
