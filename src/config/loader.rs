//! Drawing file loading and validation

use super::types::{EntityConfig, LayerConfig};
use crate::constants::{COLOR_BY_LAYER, CONFIG_FILENAMES, DEFAULT_LAYER};
use crate::document::{InMemoryDocument, LayerTable};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Layers and entities a drawing starts with
#[derive(Debug, Default, Deserialize)]
pub struct DrawingConfig {
    #[serde(default)]
    pub layers: IndexMap<String, LayerConfig>,
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl DrawingConfig {
    /// Loads a drawing file. A directory is searched for the known file names.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Self::parse_file(path);
        }

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = path.join(config_file_name);
            if config_file_path.exists() {
                return Self::parse_file(&config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            dir: path.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        log::debug!("Loaded drawing from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, layer) in &self.layers {
            if name.trim().is_empty() {
                return Err(Error::ConfigValidation("layer names must not be empty".into()));
            }
            if layer.color >= COLOR_BY_LAYER {
                return Err(Error::ConfigValidation(format!(
                    "layer '{name}' color must be below {COLOR_BY_LAYER}"
                )));
            }
        }
        for (index, entity) in self.entities.iter().enumerate() {
            if entity.layer != DEFAULT_LAYER && !self.layers.contains_key(&entity.layer) {
                return Err(Error::ConfigValidation(format!(
                    "entity {index} is on undeclared layer '{}'",
                    entity.layer
                )));
            }
            if entity.color > COLOR_BY_LAYER {
                return Err(Error::ConfigValidation(format!(
                    "entity {index} color must be at most {COLOR_BY_LAYER}"
                )));
            }
        }
        Ok(())
    }

    /// Builds the in-memory drawing described by this configuration.
    pub fn build_document(&self) -> Result<InMemoryDocument> {
        self.validate()?;
        let document = InMemoryDocument::new();
        for (name, layer) in self.layers.iter().filter(|(name, _)| *name != DEFAULT_LAYER) {
            document.add_layer(name, layer.color)?;
        }
        for entity in &self.entities {
            document.add_entity(entity.class, &entity.layer, entity.color)?;
        }
        Ok(document)
    }
}
