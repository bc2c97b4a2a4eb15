//! Form controller: the create/edit draft and the record being edited

use crate::sync::SyncOperation;
use crate::types::{Draft, Entity, EntityId, Field};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(EntityId),
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: Draft,
    mode: FormMode,
    /// Generation of this form's latest in-flight submission
    pending: Option<u64>,
}

impl FormController {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn edit_id(&self) -> Option<&EntityId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    /// Back to create-mode defaults: empty draft, no edit target
    pub fn begin_create(&mut self) {
        *self = Self::default();
    }

    pub fn begin_edit(&mut self, entity: &Entity) {
        self.draft = Draft::from_entity(entity);
        self.mode = FormMode::Edit(entity.id.clone());
        self.pending = None;
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.draft.field_mut(field) = value;
    }

    /// The operation a submit would issue, or None when validation fails
    pub fn submission(&self) -> Option<SyncOperation> {
        if !self.draft.is_valid() {
            return None;
        }
        let payload = self.draft.to_payload();
        Some(match &self.mode {
            FormMode::Create => SyncOperation::Create(payload),
            FormMode::Edit(id) => SyncOperation::Update(id.clone(), payload),
        })
    }

    pub fn mark_pending(&mut self, generation: u64) {
        self.pending = Some(generation);
    }
}
