//! Marketing strategy transitions.
//!
//! The approval loop: staff submit a generated draft, sign it off, and the
//! client either takes it live or sends it back with feedback. Client
//! feedback is the only writer of `feedback_history`, and it only appends.

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::model::{FeedbackEntry, MarketingStrategy, Role, StrategyContent, StrategyStatus};

use StrategyStatus::{Approved, Drafting, Live, ModificationRequested, PendingApproval};

/// Legal strategy edges.
const EDGES: &[(StrategyStatus, StrategyStatus)] = &[
    (Drafting, PendingApproval),
    (PendingApproval, Approved),
    (Approved, Live),
    (Approved, ModificationRequested),
    (ModificationRequested, Approved),
];

fn check_edge(strategy: &MarketingStrategy, target: StrategyStatus) -> EngineResult<()> {
    let from = strategy.status;
    if EDGES.contains(&(from, target)) {
        Ok(())
    } else {
        Err(EngineError::InvalidTransition {
            entity: "strategy",
            id: "(attached)".to_string(),
            detail: format!("{from:?} -> {target:?} is not a legal edge"),
        })
    }
}

/// `Drafting -> PendingApproval`: a draft has been generated and is queued
/// for internal review. Staff only.
pub fn submit_for_approval(
    strategy: &MarketingStrategy,
    role: Role,
) -> EngineResult<MarketingStrategy> {
    check_edge(strategy, PendingApproval)?;
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "submit a strategy for approval" });
    }
    let mut updated = strategy.clone();
    updated.status = PendingApproval;
    Ok(updated)
}

/// `PendingApproval -> Approved`: internal sign-off. Staff only.
pub fn approve(strategy: &MarketingStrategy, role: Role) -> EngineResult<MarketingStrategy> {
    check_edge(strategy, Approved)?;
    if strategy.status != PendingApproval {
        return Err(EngineError::InvalidTransition {
            entity: "strategy",
            id: "(attached)".to_string(),
            detail: format!("{:?} -> Approved requires a resubmission", strategy.status),
        });
    }
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "approve a strategy" });
    }
    let mut updated = strategy.clone();
    updated.status = Approved;
    Ok(updated)
}

/// `Approved -> Live`: client acceptance. Terminal.
pub fn go_live(strategy: &MarketingStrategy, role: Role) -> EngineResult<MarketingStrategy> {
    check_edge(strategy, Live)?;
    if !role.is_client() {
        return Err(EngineError::RoleDenied { role, action: "accept a strategy" });
    }
    let mut updated = strategy.clone();
    updated.status = Live;
    Ok(updated)
}

/// `Approved -> ModificationRequested`: client rejection with a mandatory
/// note, appended to the feedback history.
pub fn request_modification(
    strategy: &MarketingStrategy,
    note: &str,
    author: &str,
    role: Role,
) -> EngineResult<MarketingStrategy> {
    check_edge(strategy, ModificationRequested)?;
    if !role.is_client() {
        return Err(EngineError::RoleDenied { role, action: "request strategy changes" });
    }
    if note.trim().is_empty() {
        return Err(EngineError::InvalidTransition {
            entity: "strategy",
            id: "(attached)".to_string(),
            detail: "a modification request needs a non-empty note".to_string(),
        });
    }

    let mut updated = strategy.clone();
    updated.status = ModificationRequested;
    updated.feedback_history.push(FeedbackEntry {
        date: Utc::now(),
        note: note.to_string(),
        author: author.to_string(),
    });
    Ok(updated)
}

/// `ModificationRequested -> Approved`: staff resubmit edited content.
///
/// The feedback history stays as-is; only the content and status change.
pub fn resubmit(
    strategy: &MarketingStrategy,
    content: StrategyContent,
    role: Role,
) -> EngineResult<MarketingStrategy> {
    check_edge(strategy, Approved)?;
    if strategy.status != ModificationRequested {
        return Err(EngineError::InvalidTransition {
            entity: "strategy",
            id: "(attached)".to_string(),
            detail: format!("{:?} -> Approved is not a resubmission", strategy.status),
        });
    }
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "resubmit a strategy" });
    }

    let mut updated = strategy.clone();
    updated.content = content;
    updated.status = Approved;
    Ok(updated)
}
