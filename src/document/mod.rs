//! Persistence collaborator: resolves entity handles and owns drawing state.
//!
//! The prompt layer only ever talks to the traits in this module:
//! - `EntityStore`: read/write views of entities and per-handle highlighting
//! - `LayerTable`: the layer names used by the layer commands
//!
//! `memory` holds the in-process drawing used by the CLI and the tests.

use crate::{
    entity::{EntityHandle, EntityRecord},
    error::Result,
};

pub mod memory;

pub use memory::{DocumentLock, DocumentSnapshot, InMemoryDocument};

/// Resolves entity handles to read or write views.
pub trait EntityStore {
    fn open_for_read(&self, handle: EntityHandle) -> Result<EntityRecord>;

    /// Opens the entity for write and applies `edit` to it.
    fn open_for_write(
        &self,
        handle: EntityHandle,
        edit: &mut dyn FnMut(&mut EntityRecord),
    ) -> Result<()>;

    fn set_highlight(&self, handle: EntityHandle, highlighted: bool) -> Result<()>;

    /// Every live handle, in creation order.
    fn handles(&self) -> Vec<EntityHandle>;
}

impl<T: EntityStore + ?Sized> EntityStore for &T {
    fn open_for_read(&self, handle: EntityHandle) -> Result<EntityRecord> {
        (**self).open_for_read(handle)
    }

    fn open_for_write(
        &self,
        handle: EntityHandle,
        edit: &mut dyn FnMut(&mut EntityRecord),
    ) -> Result<()> {
        (**self).open_for_write(handle, edit)
    }

    fn set_highlight(&self, handle: EntityHandle, highlighted: bool) -> Result<()> {
        (**self).set_highlight(handle, highlighted)
    }

    fn handles(&self) -> Vec<EntityHandle> {
        (**self).handles()
    }
}

/// Layer table of the drawing.
pub trait LayerTable {
    fn layer_names(&self) -> Vec<String>;

    fn add_layer(&self, name: &str, color: u16) -> Result<()>;
}
