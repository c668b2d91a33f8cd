//! Layer and entity entries of a drawing file

use crate::constants::{COLOR_BY_LAYER, DEFAULT_COLOR, DEFAULT_LAYER};
use crate::entity::EntityClass;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerConfig {
    #[serde(default = "get_default_color")]
    pub color: u16,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self { color: get_default_color() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityConfig {
    pub class: EntityClass,
    #[serde(default = "get_default_layer")]
    pub layer: String,
    #[serde(default = "get_default_entity_color")]
    pub color: u16,
}

fn get_default_color() -> u16 {
    DEFAULT_COLOR
}

fn get_default_layer() -> String {
    DEFAULT_LAYER.to_string()
}

fn get_default_entity_color() -> u16 {
    COLOR_BY_LAYER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_defaults() {
        let entity: EntityConfig = serde_json::from_str(r#"{"class": "line"}"#).unwrap();
        assert_eq!(entity.layer, DEFAULT_LAYER);
        assert_eq!(entity.color, COLOR_BY_LAYER);
        assert_eq!(entity.class, EntityClass::Line);
    }

    #[test]
    fn test_layer_defaults() {
        let layer: LayerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(layer, LayerConfig::default());
        assert_eq!(layer.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_unknown_class_is_rejected() {
        assert!(serde_json::from_str::<EntityConfig>(r#"{"class": "spline"}"#).is_err());
    }
}
