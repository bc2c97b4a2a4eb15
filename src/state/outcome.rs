//! Per-operation outcomes, queryable by the presentation layer

use std::fmt;

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationKind::Load => "Load",
            OperationKind::Create => "Create",
            OperationKind::Update => "Update",
            OperationKind::Delete => "Delete",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Succeeded,
    Failed(String),
    /// A newer request for the same target was issued; result discarded
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub kind: OperationKind,
    pub target: Option<EntityId>,
    pub status: OutcomeStatus,
}

impl OperationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed(_))
    }

    /// One-line status text
    pub fn summary(&self) -> String {
        let subject = match &self.target {
            Some(id) => format!("{} #{id}", self.kind),
            None => self.kind.to_string(),
        };
        match &self.status {
            OutcomeStatus::Succeeded => format!("{subject} succeeded"),
            OutcomeStatus::Failed(message) => format!("{subject} failed: {message}"),
            OutcomeStatus::Stale => format!("{subject} superseded by a newer request"),
        }
    }
}
