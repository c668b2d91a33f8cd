use super::{EntityStore, LayerTable};
use crate::{
    constants::{DEFAULT_COLOR, DEFAULT_LAYER},
    entity::{EntityClass, EntityHandle, EntityRecord},
    error::{Error, Result},
};
use indexmap::IndexMap;
use serde::Serialize;
use std::cell::{Cell, RefCell};

/// Drawing held entirely in memory.
///
/// Single-threaded like the editor it stands in for: every method takes
/// `&self` and mutates through cells, so the same document can back both the
/// host session and the persistence side of a gateway.
#[derive(Debug)]
pub struct InMemoryDocument {
    layers: RefCell<IndexMap<String, u16>>,
    entities: RefCell<IndexMap<EntityHandle, EntityRecord>>,
    implied_selection: RefCell<Vec<EntityHandle>>,
    next_handle: Cell<u64>,
    locked: Cell<bool>,
}

/// Serializable state of a document, printed by `--dump`.
#[derive(Debug, Serialize)]
pub struct DocumentSnapshot {
    pub layers: IndexMap<String, u16>,
    pub entities: Vec<EntityRecord>,
    pub implied_selection: Vec<EntityHandle>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        let mut layers = IndexMap::new();
        layers.insert(DEFAULT_LAYER.to_string(), DEFAULT_COLOR);
        Self {
            layers: RefCell::new(layers),
            entities: RefCell::new(IndexMap::new()),
            implied_selection: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            locked: Cell::new(false),
        }
    }

    pub fn add_entity(&self, class: EntityClass, layer: &str, color: u16) -> Result<EntityHandle> {
        if !self.layers.borrow().contains_key(layer) {
            return Err(Error::LayerNotFound(layer.to_string()));
        }
        let handle = EntityHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.entities.borrow_mut().insert(
            handle,
            EntityRecord {
                handle,
                class,
                layer: layer.to_string(),
                color,
                highlighted: false,
            },
        );
        Ok(handle)
    }

    /// Removes an entity; its handle stops resolving.
    pub fn erase(&self, handle: EntityHandle) -> bool {
        let removed = self.entities.borrow_mut().shift_remove(&handle).is_some();
        if removed {
            self.implied_selection.borrow_mut().retain(|h| *h != handle);
        }
        removed
    }

    pub fn entities_on_layer(&self, layer: &str) -> Vec<EntityHandle> {
        self.entities
            .borrow()
            .values()
            .filter(|record| record.layer == layer)
            .map(|record| record.handle)
            .collect()
    }

    pub fn implied_selection(&self) -> Vec<EntityHandle> {
        self.implied_selection.borrow().clone()
    }

    pub fn replace_implied_selection(&self, handles: &[EntityHandle]) {
        *self.implied_selection.borrow_mut() = handles.to_vec();
    }

    /// Acquires the exclusive document lock, released when the guard drops.
    pub fn lock(&self) -> Result<DocumentLock<'_>> {
        if self.locked.replace(true) {
            return Err(Error::DocumentLocked);
        }
        log::trace!("Document locked");
        Ok(DocumentLock { document: self })
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            layers: self.layers.borrow().clone(),
            entities: self.entities.borrow().values().cloned().collect(),
            implied_selection: self.implied_selection(),
        }
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for InMemoryDocument {
    fn open_for_read(&self, handle: EntityHandle) -> Result<EntityRecord> {
        self.entities.borrow().get(&handle).cloned().ok_or(Error::HandleUnresolved(handle))
    }

    fn open_for_write(
        &self,
        handle: EntityHandle,
        edit: &mut dyn FnMut(&mut EntityRecord),
    ) -> Result<()> {
        let mut entities = self.entities.borrow_mut();
        let record = entities.get_mut(&handle).ok_or(Error::HandleUnresolved(handle))?;
        edit(record);
        record.handle = handle;
        Ok(())
    }

    fn set_highlight(&self, handle: EntityHandle, highlighted: bool) -> Result<()> {
        self.open_for_write(handle, &mut |record| record.highlighted = highlighted)
    }

    fn handles(&self) -> Vec<EntityHandle> {
        self.entities.borrow().keys().copied().collect()
    }
}

impl LayerTable for InMemoryDocument {
    fn layer_names(&self) -> Vec<String> {
        self.layers.borrow().keys().cloned().collect()
    }

    fn add_layer(&self, name: &str, color: u16) -> Result<()> {
        let mut layers = self.layers.borrow_mut();
        if layers.contains_key(name) {
            return Err(Error::LayerExists(name.to_string()));
        }
        layers.insert(name.to_string(), color);
        Ok(())
    }
}

/// Exclusive lock on an [`InMemoryDocument`].
#[derive(Debug)]
pub struct DocumentLock<'a> {
    document: &'a InMemoryDocument,
}

impl Drop for DocumentLock<'_> {
    fn drop(&mut self) {
        self.document.locked.set(false);
        log::trace!("Document unlocked");
    }
}
