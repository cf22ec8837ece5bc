//! Marketing strategy records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approval status of a marketing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyStatus {
    /// Staff are still writing; clients see a locked placeholder
    Drafting,
    /// Generated and awaiting internal sign-off; still hidden from clients
    PendingApproval,
    /// Signed off internally; visible to the client for acceptance
    Approved,
    /// Client rejected with feedback; staff must revise and resubmit
    ModificationRequested,
    /// Client accepted; strategy is in effect (terminal)
    Live,
}

/// Narrative content of a strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyContent {
    /// Executive summary
    pub summary: String,

    /// Target audience description
    pub audience: String,

    /// Brand voice guidelines
    pub voice: String,
}

/// Kind of a brand asset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// A brand color (value is a hex code)
    Color,
    /// A brand font (value is a font family name)
    Font,
}

/// A single brand asset attached to a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAsset {
    /// Asset kind
    pub kind: AssetKind,

    /// Display label ("Primary", "Heading", ...)
    pub name: String,

    /// Hex code or font family, depending on kind
    pub value: String,
}

/// Platform credentials handed over by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Platform name ("Instagram", "Meta Ads", ...)
    pub platform: String,

    /// Account username
    pub username: String,

    /// Account secret; opaque to the core
    pub secret: String,
}

/// One entry in a strategy's feedback history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// When the feedback was given
    pub date: DateTime<Utc>,

    /// The feedback note itself
    pub note: String,

    /// Who gave it
    pub author: String,
}

/// A marketing strategy attached 1:1 to an accepted proposal.
///
/// `feedback_history` is append-only: entries are added when a client
/// requests modifications and are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingStrategy {
    /// Current approval status
    pub status: StrategyStatus,

    /// Narrative content
    pub content: StrategyContent,

    /// Brand assets (colors, fonts)
    #[serde(default)]
    pub assets: Vec<BrandAsset>,

    /// Platform credentials
    #[serde(default)]
    pub credentials: Vec<Credential>,

    /// Client feedback, oldest first; append-only
    #[serde(default)]
    pub feedback_history: Vec<FeedbackEntry>,
}

impl MarketingStrategy {
    /// Create a strategy in the `Drafting` state with the given content.
    pub fn new(content: StrategyContent) -> Self {
        Self {
            status: StrategyStatus::Drafting,
            content,
            assets: Vec::new(),
            credentials: Vec::new(),
            feedback_history: Vec::new(),
        }
    }
}
