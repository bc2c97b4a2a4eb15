//! Request/response messages between the state core and the sync worker

use crate::sync::SyncError;
use crate::types::{Entity, EntityId, EntityPayload};

/// One REST operation to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOperation {
    /// `GET /transformers`
    List,

    /// `POST /transformers`
    Create(EntityPayload),

    /// `PUT /transformers/{id}`
    Update(EntityId, EntityPayload),

    /// `DELETE /transformers/{id}`
    Delete(EntityId),
}

impl SyncOperation {
    pub fn target(&self) -> Option<&EntityId> {
        match self {
            SyncOperation::Update(id, _) | SyncOperation::Delete(id) => Some(id),
            SyncOperation::List | SyncOperation::Create(_) => None,
        }
    }
}

/// Operation tagged with the generation it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub generation: u64,
    pub operation: SyncOperation,
}

/// Completion of a `SyncRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResponse {
    pub generation: u64,
    pub result: SyncResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncResult {
    Listed(Result<Vec<Entity>, SyncError>),
    Created(Result<Entity, SyncError>),
    Updated {
        id: EntityId,
        result: Result<Entity, SyncError>,
    },
    Deleted {
        id: EntityId,
        result: Result<(), SyncError>,
    },
}
