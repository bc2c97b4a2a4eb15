//! Request generations used to discard stale completions

use std::collections::HashMap;

use crate::sync::{SyncOperation, SyncResult};
use crate::types::EntityId;

/// One counter for every request. Per entity id we remember the newest
/// update; the newest list request is tracked separately. Deletes are never
/// stale: a confirmed delete always wins and clears the id.
#[derive(Debug, Default)]
pub struct Generations {
    last_issued: u64,
    latest_list: u64,
    latest_by_id: HashMap<EntityId, u64>,
}

impl Generations {
    pub fn issue(&mut self, operation: &SyncOperation) -> u64 {
        self.last_issued += 1;
        let generation = self.last_issued;
        match operation {
            SyncOperation::List => self.latest_list = generation,
            SyncOperation::Update(id, _) => {
                self.latest_by_id.insert(id.clone(), generation);
            }
            SyncOperation::Create(_) | SyncOperation::Delete(_) => {}
        }
        generation
    }

    /// Creates and deletes are never stale
    pub fn is_current(&self, generation: u64, result: &SyncResult) -> bool {
        match result {
            SyncResult::Listed(_) => generation == self.latest_list,
            SyncResult::Created(_) | SyncResult::Deleted { .. } => true,
            SyncResult::Updated { id, .. } => self.latest_by_id.get(id) == Some(&generation),
        }
    }

    /// Drop tracking for a record the server has deleted
    pub fn forget(&mut self, id: &EntityId) {
        self.latest_by_id.remove(id);
    }
}
