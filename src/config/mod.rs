//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::query::Comparison;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Query settings for one entity type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityQueryConfig {
    /// Entity type name (e.g., "doctor", "blood_pressure")
    pub entity: String,

    /// Largest page size the validation helper accepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<usize>,

    /// Comparison mode overrides for substring fields (field -> mode)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub comparisons: HashMap<String, Comparison>,
}

/// Complete configuration for the query engine
///
/// Everything is optional: the default configuration has no overrides and
/// leaves every entity on the behaviour its adapter declares.
///
/// # Example
/// ```yaml
/// entities:
///   - entity: doctor
///     max_page_size: 100
///     comparisons:
///       email: equal_ignore_case
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Per-entity settings
    #[serde(default)]
    pub entities: Vec<EntityQueryConfig>,
}

impl QueryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Merge several configurations into one
    ///
    /// Entities keep the order of their first appearance. When the same
    /// entity appears more than once, later `max_page_size` values win and
    /// comparison overrides are merged field by field, later ones winning.
    pub fn merge(configs: Vec<QueryConfig>) -> Self {
        let mut entities: Vec<EntityQueryConfig> = Vec::new();

        for config in configs {
            for entity in config.entities {
                match entities.iter_mut().find(|e| e.entity == entity.entity) {
                    Some(existing) => {
                        if entity.max_page_size.is_some() {
                            existing.max_page_size = entity.max_page_size;
                        }
                        existing.comparisons.extend(entity.comparisons);
                    }
                    None => entities.push(entity),
                }
            }
        }

        Self { entities }
    }

    /// Check the configuration for values the engine cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entity in &self.entities {
            if entity.entity.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "entity".to_string(),
                    value: entity.entity.clone(),
                    message: "entity name must not be empty".to_string(),
                });
            }

            if entity.max_page_size == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: format!("{}.max_page_size", entity.entity),
                    value: "0".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Settings for one entity type, if any
    pub fn entity(&self, entity_type: &str) -> Option<&EntityQueryConfig> {
        self.entities.iter().find(|e| e.entity == entity_type)
    }

    /// Comparison override for a substring field
    pub fn comparison_override(&self, entity_type: &str, field: &str) -> Option<Comparison> {
        self.entity(entity_type)
            .and_then(|e| e.comparisons.get(field).copied())
    }

    /// Largest accepted page size for an entity type
    pub fn max_page_size(&self, entity_type: &str) -> Option<usize> {
        self.entity(entity_type).and_then(|e| e.max_page_size)
    }
}
