//! Actor roles.
//!
//! The auth provider resolves a caller to one of these roles before any
//! engine call; the core only performs membership checks on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved role of the actor invoking an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access across all organizations.
    SuperAdmin,
    /// Internal staff member (strategists, designers).
    Employee,
    /// Sales staff; owns the proposal stage.
    Sales,
    /// Operations lead; owns projects and tasks.
    OpsHead,
    /// Client-organization user; approval and acceptance actions only.
    Client,
}

impl Role {
    /// Whether this role is internal staff (anything but a client).
    pub fn is_staff(self) -> bool {
        !matches!(self, Role::Client)
    }

    /// Whether this role is a client-organization user.
    pub fn is_client(self) -> bool {
        matches!(self, Role::Client)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "super-admin"),
            Role::Employee => write!(f, "employee"),
            Role::Sales => write!(f, "sales"),
            Role::OpsHead => write!(f, "ops-head"),
            Role::Client => write!(f, "client"),
        }
    }
}
