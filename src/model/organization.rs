//! Client organization records.

use serde::{Deserialize, Serialize};

/// A client organization.
///
/// Created by admin tooling; the core only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier
    pub id: String,

    /// Display name, also used as the billing name on invoices
    pub name: String,

    /// Industry the client operates in
    pub industry: String,

    /// Users belonging to this organization
    pub members: Vec<OrgMember>,

    /// Ids of staff members assigned to this account
    #[serde(default)]
    pub staff_ids: Vec<String>,
}

/// A user belonging to a client organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMember {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl Organization {
    /// Create a new organization with no members.
    pub fn new(name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            id: super::generate_id("org"),
            name: name.into(),
            industry: industry.into(),
            members: Vec::new(),
            staff_ids: Vec::new(),
        }
    }
}
