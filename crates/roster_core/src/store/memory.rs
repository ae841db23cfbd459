//! In-memory slot store for tests and ephemeral sessions.

use super::{SlotStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Map-backed slot store. Single-actor access only; interior mutability
/// uses `RefCell`, not a lock.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
