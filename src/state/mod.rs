//! Application state aggregate
//!
//! All client state lives in `AppState`. User input goes through
//! `dispatch`, which may hand back a request for the sync worker; network
//! completions go through `resolve`. Neither touches the network or the GUI,
//! so every transition is testable on its own.

use tracing::{debug, error, info, warn};

use crate::sync::{SyncError, SyncOperation, SyncRequest, SyncResponse, SyncResult};
use crate::types::{Entity, EntityId, Field};

pub mod filter;
pub mod form;
mod generations;
pub mod outcome;
pub mod store;
pub mod view;

pub use form::FormController;
pub use outcome::{OperationKind, OperationOutcome, OutcomeStatus};
pub use store::{CollectionStore, LoadStatus};
pub use view::{Expansion, ViewMode};

/// User-originated events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Startup: fetch the full list
    Initialize,
    /// Fetch the full list again after a load failure
    Reload,
    SetQuery(String),
    /// List tab selected
    ShowList,
    /// Add/edit tab selected
    BeginCreate,
    BeginEdit(EntityId),
    EditField(Field, String),
    Submit,
    Cancel,
    Delete(EntityId),
    ToggleExpanded(EntityId),
}

#[derive(Debug, Default)]
pub struct AppState {
    store: CollectionStore,
    query: String,
    form: FormController,
    mode: ViewMode,
    expanded: Expansion,
    generations: generations::Generations,
    last_outcome: Option<OperationOutcome>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn expanded(&self) -> &Expansion {
        &self.expanded
    }

    pub fn last_outcome(&self) -> Option<&OperationOutcome> {
        self.last_outcome.as_ref()
    }

    /// Records matching the current query, in collection order
    pub fn visible(&self) -> Vec<&Entity> {
        filter::visible(self.store.entities(), &self.query)
    }

    pub fn dispatch(&mut self, action: Action) -> Option<SyncRequest> {
        match action {
            Action::Initialize | Action::Reload => {
                self.store.begin_load();
                Some(self.issue(SyncOperation::List))
            }
            Action::SetQuery(query) => {
                self.query = query;
                None
            }
            Action::ShowList | Action::Cancel => {
                self.form.begin_create();
                self.mode = ViewMode::List;
                None
            }
            Action::BeginCreate => {
                self.form.begin_create();
                self.mode = ViewMode::Form;
                None
            }
            Action::BeginEdit(id) => {
                match self.store.get(&id) {
                    Some(entity) => {
                        self.form.begin_edit(entity);
                        self.mode = ViewMode::Form;
                    }
                    None => warn!(id = %id, "Edit requested for unknown record"),
                }
                None
            }
            Action::EditField(field, value) => {
                self.form.set_field(field, value);
                None
            }
            Action::Submit => {
                let Some(operation) = self.form.submission() else {
                    debug!("Submit ignored, draft has empty fields");
                    return None;
                };
                let request = self.issue(operation);
                self.form.mark_pending(request.generation);
                Some(request)
            }
            Action::Delete(id) => Some(self.issue(SyncOperation::Delete(id))),
            Action::ToggleExpanded(id) => {
                self.expanded.toggle(id);
                None
            }
        }
    }

    pub fn resolve(&mut self, response: SyncResponse) {
        let SyncResponse { generation, result } = response;

        if !self.generations.is_current(generation, &result) {
            let (kind, target) = describe(&result);
            debug!(generation, ?kind, "Discarding stale completion");
            self.record(kind, target, OutcomeStatus::Stale);
            return;
        }

        match result {
            SyncResult::Listed(Ok(entities)) => {
                self.store.finish_load(entities);
                self.record(OperationKind::Load, None, OutcomeStatus::Succeeded);
            }
            SyncResult::Listed(Err(err)) => {
                error!(error = %err, "Failed to load collection");
                self.store.fail_load(err.to_string());
                self.record(OperationKind::Load, None, failed(&err));
            }
            SyncResult::Created(Ok(entity)) => {
                info!(id = %entity.id, name = %entity.name, "Created record");
                let id = entity.id.clone();
                self.store.upsert(entity, None);
                self.finish_save(generation);
                self.record(OperationKind::Create, Some(id), OutcomeStatus::Succeeded);
            }
            SyncResult::Created(Err(err)) => {
                error!(error = %err, "Failed to create record");
                self.record(OperationKind::Create, None, failed(&err));
            }
            SyncResult::Updated { id, result: Ok(entity) } => {
                info!(id = %id, "Updated record");
                self.store.upsert(entity, Some(&id));
                self.finish_save(generation);
                self.record(OperationKind::Update, Some(id), OutcomeStatus::Succeeded);
            }
            SyncResult::Updated { id, result: Err(err) } => {
                error!(id = %id, error = %err, "Failed to update record");
                self.record(OperationKind::Update, Some(id), failed(&err));
            }
            SyncResult::Deleted { id, result: Ok(()) } => {
                info!(id = %id, "Deleted record");
                self.store.remove(&id);
                self.expanded.collapse_if(&id);
                self.generations.forget(&id);
                self.record(OperationKind::Delete, Some(id), OutcomeStatus::Succeeded);
            }
            SyncResult::Deleted { id, result: Err(err) } => {
                error!(id = %id, error = %err, "Failed to delete record");
                self.record(OperationKind::Delete, Some(id), failed(&err));
            }
        }
    }

    fn issue(&mut self, operation: SyncOperation) -> SyncRequest {
        let generation = self.generations.issue(&operation);
        debug!(generation, target = ?operation.target(), "Issuing request");
        SyncRequest {
            generation,
            operation,
        }
    }

    /// Reset the form only if this completion is the form's own submission
    fn finish_save(&mut self, generation: u64) {
        if self.form.pending() == Some(generation) {
            self.form.begin_create();
            self.mode = ViewMode::List;
        } else {
            debug!(generation, "Save completed after the form moved on");
        }
    }

    fn record(&mut self, kind: OperationKind, target: Option<EntityId>, status: OutcomeStatus) {
        self.last_outcome = Some(OperationOutcome {
            kind,
            target,
            status,
        });
    }
}

fn failed(err: &SyncError) -> OutcomeStatus {
    OutcomeStatus::Failed(err.user_message())
}

fn describe(result: &SyncResult) -> (OperationKind, Option<EntityId>) {
    match result {
        SyncResult::Listed(_) => (OperationKind::Load, None),
        SyncResult::Created(_) => (OperationKind::Create, None),
        SyncResult::Updated { id, .. } => (OperationKind::Update, Some(id.clone())),
        SyncResult::Deleted { id, .. } => (OperationKind::Delete, Some(id.clone())),
    }
}
