use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Restaurant};

/// On-disk shape of the bundled dataset: `{ "restaurants": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantsFile {
    pub restaurants: Vec<Restaurant>,
}

/// The immutable restaurant collection, validated once at startup.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDb {
    restaurants: Vec<Restaurant>,
}

impl RestaurantDb {
    /// Wraps `restaurants` after checking names are non-empty and ids unique.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on an empty name or a duplicate id.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, ConfigError> {
        validate_restaurants(&restaurants)?;
        Ok(Self { restaurants })
    }

    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Resolves `ids` in the given order, silently dropping unknown ones.
    #[must_use]
    pub fn match_by_ids(&self, ids: &[u64]) -> Vec<&Restaurant> {
        ids.iter().filter_map(|&id| self.find_by_id(id)).collect()
    }
}

/// Load and validate the restaurant dataset.
///
/// Files ending in `.yaml` / `.yml` are parsed as YAML, everything else as JSON.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_restaurants(path: &Path) -> Result<RestaurantDb, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DatasetIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let db = if is_yaml {
        parse_restaurants_yaml(&content)?
    } else {
        parse_restaurants_json(&content)?
    };

    tracing::info!(path = %path.display(), count = db.len(), "loaded restaurant dataset");
    Ok(db)
}

/// Parse a JSON dataset document.
///
/// # Errors
///
/// Returns [`ConfigError::DatasetJson`] on malformed input or
/// [`ConfigError::Validation`] if the records fail validation.
pub fn parse_restaurants_json(content: &str) -> Result<RestaurantDb, ConfigError> {
    let file: RestaurantsFile = serde_json::from_str(content).map_err(ConfigError::DatasetJson)?;
    RestaurantDb::new(file.restaurants)
}

/// Parse a YAML dataset document.
///
/// # Errors
///
/// Returns [`ConfigError::DatasetYaml`] on malformed input or
/// [`ConfigError::Validation`] if the records fail validation.
pub fn parse_restaurants_yaml(content: &str) -> Result<RestaurantDb, ConfigError> {
    let file: RestaurantsFile = serde_yaml::from_str(content).map_err(ConfigError::DatasetYaml)?;
    RestaurantDb::new(file.restaurants)
}

fn validate_restaurants(restaurants: &[Restaurant]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for r in restaurants {
        if r.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "restaurant {} has an empty name",
                r.id
            )));
        }
        if !seen_ids.insert(r.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate restaurant id: {} ('{}')",
                r.id, r.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
