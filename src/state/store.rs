//! Entity collection store: the local copy of every record plus load status

use tracing::{info, warn};

use crate::types::{Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Records in fetch order. Creates append, updates replace in place.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    entities: Vec<Entity>,
    status: LoadStatus,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            status: LoadStatus::Loading,
        }
    }
}

impl CollectionStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| &entity.id == id)
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replace the whole collection with the fetched list
    pub fn finish_load(&mut self, entities: Vec<Entity>) {
        info!(count = entities.len(), "Loaded collection");
        let malformed = entities.iter().filter(|e| !e.is_well_formed()).count();
        if malformed > 0 {
            warn!(malformed, "Collection contains records with empty fields");
        }
        self.entities = entities;
        self.status = LoadStatus::Ready;
    }

    /// Load failed: the message replaces the whole view
    pub fn fail_load(&mut self, message: String) {
        self.status = LoadStatus::Failed(message);
    }

    /// Drop exactly `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|entity| &entity.id != id);
        before != self.entities.len()
    }

    /// With `edited`, replace that record in place; otherwise append.
    /// An edited id that is no longer present leaves the collection untouched.
    pub fn upsert(&mut self, entity: Entity, edited: Option<&EntityId>) {
        match edited {
            Some(id) => match self.entities.iter_mut().find(|e| &e.id == id) {
                Some(slot) => *slot = entity,
                None => warn!(id = %id, "Updated record no longer in collection"),
            },
            None => self.entities.push(entity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u64, name: &str) -> Entity {
        Entity {
            id: EntityId::Number(id),
            name: name.to_string(),
            faction: "Autobot".to_string(),
            alt_mode: "Car".to_string(),
            weapons: Vec::new(),
            image: "img".to_string(),
        }
    }

    fn ready_store() -> CollectionStore {
        let mut store = CollectionStore::new();
        store.finish_load(vec![entity(1, "Optimus"), entity(2, "Jazz"), entity(3, "Ratchet")]);
        store
    }

    fn names(store: &CollectionStore) -> Vec<&str> {
        store.entities().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = CollectionStore::new();
        assert_eq!(store.status(), &LoadStatus::Loading);
        assert!(store.entities().is_empty());
    }

    #[test]
    fn test_fail_load_keeps_no_partial_list() {
        let mut store = CollectionStore::new();
        store.fail_load("connection refused".to_string());
        assert_eq!(store.status(), &LoadStatus::Failed("connection refused".to_string()));
        assert!(store.entities().is_empty());
    }

    #[test]
    fn test_upsert_appends_on_create() {
        let mut store = ready_store();
        store.upsert(entity(4, "Wheeljack"), None);
        assert_eq!(names(&store), vec!["Optimus", "Jazz", "Ratchet", "Wheeljack"]);
    }

    #[test]
    fn test_upsert_replaces_in_place_on_edit() {
        let mut store = ready_store();
        store.upsert(entity(2, "Jazz Mk II"), Some(&EntityId::Number(2)));
        assert_eq!(names(&store), vec!["Optimus", "Jazz Mk II", "Ratchet"]);
    }

    #[test]
    fn test_upsert_edit_of_missing_id_is_noop() {
        let mut store = ready_store();
        store.upsert(entity(9, "Ghost"), Some(&EntityId::Number(9)));
        assert_eq!(names(&store), vec!["Optimus", "Jazz", "Ratchet"]);
    }

    #[test]
    fn test_remove_only_that_id() {
        let mut store = ready_store();
        assert!(store.remove(&EntityId::Number(2)));
        assert_eq!(names(&store), vec!["Optimus", "Ratchet"]);
        assert!(!store.remove(&EntityId::Number(2)));
    }
}
