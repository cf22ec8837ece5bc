//! Entity data structures.
//!
//! Defines the records that flow through the pipeline: organizations,
//! proposals, invoices, marketing strategies, projects and tasks. These
//! types own no business rules; transitions and gating live in
//! [`crate::engine`] and [`crate::gates`].

mod ids;
mod invoice;
mod organization;
mod project;
mod proposal;
mod role;
mod strategy;
mod task;

pub use ids::generate_id;
pub use invoice::{due_date_for, Invoice, InvoiceStatus, LineItem, PaymentTerm};
pub use organization::{OrgMember, Organization};
pub use project::{Project, ProjectStatus};
pub use proposal::{InvestmentLine, Proposal, ProposalContent, ProposalPhase, ProposalStatus};
pub use role::Role;
pub use strategy::{
    AssetKind, BrandAsset, Credential, FeedbackEntry, MarketingStrategy, StrategyContent,
    StrategyStatus,
};
pub use task::{ChecklistItem, InspectionReport, Priority, Task, TaskStatus};
