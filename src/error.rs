//! Engine error types.

use thiserror::Error;

use crate::model::Role;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during engine operations.
///
/// All of these leave the store untouched. `AdapterFailure` is the one kind
/// that callers inside the engine absorb rather than surface: generation
/// failures substitute default content so the triggering transition can
/// still complete.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested status edge is not in the transition table.
    #[error("invalid transition for {entity} '{id}': {detail}")]
    InvalidTransition {
        /// Entity type name
        entity: &'static str,
        /// Entity id
        id: String,
        /// Which edge was attempted and why it was refused
        detail: String,
    },

    /// The acting role is not allowed to perform this operation.
    #[error("role '{role}' may not {action}")]
    RoleDenied {
        /// Resolved role of the caller
        role: Role,
        /// The refused action, in plain words
        action: &'static str,
    },

    /// A cross-entity precondition does not hold yet.
    #[error("gate closed for proposal '{proposal_id}': {reason}")]
    GateClosed {
        /// Proposal whose downstream stage is locked
        proposal_id: String,
        /// Which precondition is missing
        reason: String,
    },

    /// The referenced entity does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Entity type name
        entity: &'static str,
        /// The id that failed to resolve
        id: String,
    },

    /// Content generation failed or returned an unparsable payload.
    #[error("content generation failed: {0}")]
    AdapterFailure(String),
}

impl EngineError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        EngineError::NotFound { entity, id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::not_found("invoice", "inv-1");
        assert_eq!(err.to_string(), "invoice 'inv-1' not found");

        let err = EngineError::RoleDenied { role: Role::Client, action: "send an invoice" };
        assert_eq!(err.to_string(), "role 'client' may not send an invoice");
    }
}
