//! Drawing configuration
//!
//! This module contains the configuration system components:
//! - `types`: Layer and entity entries of a drawing file
//! - `loader`: Drawing file discovery, parsing and validation

pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::DrawingConfig;
pub use types::{EntityConfig, LayerConfig};
