//! Project transitions.

use crate::error::{EngineError, EngineResult};
use crate::model::{Project, ProjectStatus, Role};

use ProjectStatus::{Active, Completed, OnHold};

/// Legal project edges. Completion is reachable from either working state.
const EDGES: &[(ProjectStatus, ProjectStatus)] =
    &[(Active, OnHold), (OnHold, Active), (Active, Completed), (OnHold, Completed)];

/// Apply a status transition to a project. Staff only.
pub fn transition(project: &Project, target: ProjectStatus, role: Role) -> EngineResult<Project> {
    let from = project.status;
    if !EDGES.contains(&(from, target)) {
        return Err(EngineError::InvalidTransition {
            entity: "project",
            id: project.id.clone(),
            detail: format!("{from:?} -> {target:?} is not a legal edge"),
        });
    }
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "change a project's status" });
    }

    let mut updated = project.clone();
    updated.status = target;
    Ok(updated)
}

/// Archive or unarchive a project. Allowed at any status.
pub fn set_archived(project: &Project, archived: bool, role: Role) -> EngineResult<Project> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "archive a project" });
    }
    let mut updated = project.clone();
    updated.is_archived = archived;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project() -> Project {
        Project::new("org-1", "Site relaunch", Utc::now())
    }

    #[test]
    fn test_hold_and_resume() {
        let project = project();
        let held = transition(&project, OnHold, Role::OpsHead).unwrap();
        let resumed = transition(&held, Active, Role::OpsHead).unwrap();
        assert_eq!(resumed.status, Active);
    }

    #[test]
    fn test_completed_is_terminal() {
        let done = transition(&project(), Completed, Role::OpsHead).unwrap();
        assert!(matches!(
            transition(&done, Active, Role::OpsHead),
            Err(EngineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_client_cannot_transition() {
        assert!(matches!(
            transition(&project(), OnHold, Role::Client),
            Err(EngineError::RoleDenied { .. })
        ));
    }
}
