//! Sales proposal records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::strategy::MarketingStrategy;

/// Lifecycle status of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Being assembled by sales; fully editable
    Draft,
    /// Delivered to the client for review; still editable
    SentToClient,
    /// Accepted by the client; content is read-only from here on
    Accepted,
}

impl ProposalStatus {
    /// Whether proposal content may still be edited in this status.
    pub fn is_editable(self) -> bool {
        matches!(self, ProposalStatus::Draft | ProposalStatus::SentToClient)
    }
}

/// A sales proposal offered to a client organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique identifier
    pub id: String,

    /// Owning client organization
    pub client_id: String,

    /// Services offered, in presentation order
    pub services: Vec<String>,

    /// One-time amount due up front, in currency units
    pub upfront_amount: f64,

    /// Recurring monthly retainer, in currency units
    pub retainer_amount: f64,

    /// Structured proposal body
    pub content: ProposalContent,

    /// Current lifecycle status
    pub status: ProposalStatus,

    /// Marketing strategy attached after acceptance and payment (1:1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing: Option<MarketingStrategy>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Structured body of a proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalContent {
    /// Engagement phases, in order
    pub phases: Vec<ProposalPhase>,

    /// Priced investment lines
    pub investment: Vec<InvestmentLine>,

    /// High-level strategy bullets
    pub strategy: Vec<String>,
}

/// One phase of the proposed engagement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalPhase {
    /// Phase title
    pub title: String,

    /// What happens during this phase
    pub description: String,

    /// Concrete deliverables
    pub deliverables: Vec<String>,
}

/// A priced line in the investment section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentLine {
    /// What the client is paying for
    pub label: String,

    /// Price in currency units
    pub amount: f64,
}

impl Proposal {
    /// Create a new draft proposal for a client.
    pub fn new(client_id: impl Into<String>, services: Vec<String>) -> Self {
        Self {
            id: super::generate_id("prop"),
            client_id: client_id.into(),
            services,
            upfront_amount: 0.0,
            retainer_amount: 0.0,
            content: ProposalContent::default(),
            status: ProposalStatus::Draft,
            marketing: None,
            created_at: Utc::now(),
        }
    }

    /// Set the monetary estimate fields.
    pub fn with_amounts(mut self, upfront: f64, retainer: f64) -> Self {
        self.upfront_amount = upfront;
        self.retainer_amount = retainer;
        self
    }
}
