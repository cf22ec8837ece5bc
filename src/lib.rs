//! # Flowdesk
//!
//! Client pipeline coordination engine: sales proposal → invoice payment →
//! marketing strategy approval → project and task delivery, for multiple
//! client organizations at once.
//!
//! ## What lives here
//!
//! - **Status transitions**: per-entity edge tables with role checks; the
//!   only writer of `status` fields
//! - **Cross-entity gates**: derived preconditions (payment unlocks the
//!   strategy stage) computed fresh on every read
//! - **Kanban board**: stable status partitioning with drag-and-drop
//!   reassignment and progress aggregates
//! - **Timeline projection**: task bars with checklist sub-rows on a
//!   rolling 30-day window
//! - **Content generation** (optional `ai` feature): Claude-backed drafts
//!   for proposals, strategies, seed tasks and invoice emails, degrading
//!   to well-defined defaults when the provider is unavailable
//!
//! The store is plain owned data mutated by read-copy-replace; board and
//! timeline are pure projections safe to recompute on any call.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod gates;
pub mod genai;
pub mod model;
pub mod store;
pub mod timeline;
pub mod workspace;

pub use board::{checklist_progress, columns, move_task, project_progress, BoardColumn};
pub use config::{BillingConfig, EngineConfig, TimelineConfig};
pub use error::{EngineError, EngineResult};
pub use gates::{
    can_initialize_strategy, client_can_view_strategy, is_proposal_paid, strategy_unlocked,
    AMOUNT_TOLERANCE,
};
pub use genai::{generate_or_default, ContentKind, ContentProvider, GeneratedContent};
pub use model::{
    Invoice, InvoiceStatus, LineItem, MarketingStrategy, Organization, PaymentTerm, Priority,
    Project, ProjectStatus, Proposal, ProposalContent, ProposalStatus, Role, StrategyContent,
    StrategyStatus, Task, TaskStatus,
};
pub use store::EntityStore;
pub use timeline::{
    project_checklist, project_task, project_task_today, ChecklistBar, TaskBar,
    DEFAULT_WINDOW_DAYS, LEAD_IN_DAYS,
};
pub use workspace::Workspace;

#[cfg(feature = "ai")]
pub use genai::ClaudeProvider;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
