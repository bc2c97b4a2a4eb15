//! In-memory `SyncClient` used by tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{SyncClient, SyncError};
use crate::types::{Entity, EntityId, EntityPayload};

pub struct MemoryClient {
    entities: Mutex<Vec<Entity>>,
    next_id: AtomicUsize,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self {
            entities: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_entities(entities: Vec<Entity>) -> Self {
        let client = Self::new();
        client.next_id.store(entities.len() + 1, Ordering::SeqCst);
        *client.entities.lock().unwrap() = entities;
        client
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(SyncError::Transport("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn materialize(id: EntityId, payload: &EntityPayload) -> Entity {
        Entity {
            id,
            name: payload.name.clone(),
            faction: payload.faction.clone(),
            alt_mode: payload.alt_mode.clone(),
            weapons: payload.weapons.clone(),
            image: payload.image.clone(),
        }
    }
}

impl SyncClient for MemoryClient {
    async fn list(&self) -> Result<Vec<Entity>, SyncError> {
        self.begin()?;
        Ok(self.entities.lock().unwrap().clone())
    }

    async fn create(&self, payload: &EntityPayload) -> Result<Entity, SyncError> {
        self.begin()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as u64;
        let entity = Self::materialize(EntityId::Number(id), payload);
        self.entities.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: &EntityId, payload: &EntityPayload) -> Result<Entity, SyncError> {
        self.begin()?;
        let mut entities = self.entities.lock().unwrap();
        let slot = entities
            .iter_mut()
            .find(|entity| &entity.id == id)
            .ok_or_else(|| SyncError::Status {
                status: 404,
                body: "Not Found".to_string(),
            })?;
        *slot = Self::materialize(id.clone(), payload);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), SyncError> {
        self.begin()?;
        self.entities.lock().unwrap().retain(|entity| &entity.id != id);
        Ok(())
    }
}
