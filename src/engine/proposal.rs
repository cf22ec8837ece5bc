//! Proposal transitions.

use crate::error::{EngineError, EngineResult};
use crate::model::{Proposal, ProposalContent, ProposalStatus, Role};

use ProposalStatus::{Accepted, Draft, SentToClient};

/// Legal proposal edges. `Draft -> Draft` is the edit-and-save loop.
const EDGES: &[(ProposalStatus, ProposalStatus)] =
    &[(Draft, Draft), (Draft, SentToClient), (SentToClient, Accepted)];

/// Apply a status transition to a proposal.
///
/// Sending is a staff action; acceptance is the client's alone. `Accepted`
/// is terminal: no edge leaves it.
pub fn transition(
    proposal: &Proposal,
    target: ProposalStatus,
    role: Role,
) -> EngineResult<Proposal> {
    let from = proposal.status;
    if !EDGES.contains(&(from, target)) {
        return Err(EngineError::InvalidTransition {
            entity: "proposal",
            id: proposal.id.clone(),
            detail: format!("{from:?} -> {target:?} is not a legal edge"),
        });
    }

    match (from, target) {
        (Draft, Draft) if !role.is_staff() => {
            Err(EngineError::RoleDenied { role, action: "save a proposal draft" })
        }
        (Draft, SentToClient) if !role.is_staff() => {
            Err(EngineError::RoleDenied { role, action: "send a proposal to the client" })
        }
        (SentToClient, Accepted) if !role.is_client() => {
            Err(EngineError::RoleDenied { role, action: "accept a proposal" })
        }
        _ => {
            let mut updated = proposal.clone();
            updated.status = target;
            Ok(updated)
        }
    }
}

/// Replace a proposal's content and amounts.
///
/// Permitted to staff while the proposal is still editable; once accepted
/// the content is read-only.
pub fn edit_content(
    proposal: &Proposal,
    content: ProposalContent,
    upfront_amount: f64,
    retainer_amount: f64,
    role: Role,
) -> EngineResult<Proposal> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "edit a proposal" });
    }
    if !proposal.status.is_editable() {
        return Err(EngineError::InvalidTransition {
            entity: "proposal",
            id: proposal.id.clone(),
            detail: "content is read-only after acceptance".to_string(),
        });
    }

    let mut updated = proposal.clone();
    updated.content = content;
    updated.upfront_amount = upfront_amount;
    updated.retainer_amount = retainer_amount;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Proposal {
        Proposal::new("org-1", vec!["Social".to_string()]).with_amounts(5000.0, 1500.0)
    }

    #[test]
    fn test_send_then_accept() {
        let proposal = draft();
        let sent = transition(&proposal, SentToClient, Role::Sales).unwrap();
        assert_eq!(sent.status, SentToClient);

        let accepted = transition(&sent, Accepted, Role::Client).unwrap();
        assert_eq!(accepted.status, Accepted);
    }

    #[test]
    fn test_client_cannot_send() {
        let err = transition(&draft(), SentToClient, Role::Client).unwrap_err();
        assert!(matches!(err, EngineError::RoleDenied { .. }));
    }

    #[test]
    fn test_staff_cannot_accept_for_client() {
        let sent = transition(&draft(), SentToClient, Role::Sales).unwrap();
        let err = transition(&sent, Accepted, Role::Sales).unwrap_err();
        assert!(matches!(err, EngineError::RoleDenied { .. }));
    }

    #[test]
    fn test_accepted_is_terminal() {
        let sent = transition(&draft(), SentToClient, Role::Sales).unwrap();
        let accepted = transition(&sent, Accepted, Role::Client).unwrap();
        for target in [Draft, SentToClient, Accepted] {
            assert!(matches!(
                transition(&accepted, target, Role::SuperAdmin),
                Err(EngineError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_content_locked_after_acceptance() {
        let sent = transition(&draft(), SentToClient, Role::Sales).unwrap();
        let accepted = transition(&sent, Accepted, Role::Client).unwrap();
        let err = edit_content(&accepted, ProposalContent::default(), 0.0, 0.0, Role::Sales)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTransition { .. }));
    }

    #[test]
    fn test_draft_edit_loop() {
        let proposal = draft();
        let saved = transition(&proposal, Draft, Role::Sales).unwrap();
        assert_eq!(saved.status, Draft);
    }

    #[test]
    fn test_client_cannot_save_draft() {
        let err = transition(&draft(), Draft, Role::Client).unwrap_err();
        assert!(matches!(err, EngineError::RoleDenied { .. }));
    }
}
