//! Top-level view mode and inline expansion

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Form,
}

/// At most one record's detail panel is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion(Option<EntityId>);

impl Expansion {
    #[cfg(test)]
    pub fn current(&self) -> Option<&EntityId> {
        self.0.as_ref()
    }

    pub fn is_expanded(&self, id: &EntityId) -> bool {
        self.0.as_ref() == Some(id)
    }

    /// Same id collapses, a different id replaces
    pub fn toggle(&mut self, id: EntityId) {
        if self.is_expanded(&id) {
            self.0 = None;
        } else {
            self.0 = Some(id);
        }
    }

    pub fn collapse_if(&mut self, id: &EntityId) {
        if self.is_expanded(id) {
            self.0 = None;
        }
    }
}
