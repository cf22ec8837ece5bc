//! Per-kind content schemas and defaults.
//!
//! Generated payloads arrive as loose JSON; each kind has a strict typed
//! schema and a documented default used whenever validation fails. The
//! proposal and strategy schemas are the entity-side content structs, so a
//! validated payload drops straight into the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{ProposalContent, StrategyContent};

/// The kinds of content the adapter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// Proposal body: phases, investment lines, strategy bullets
    Proposal,
    /// Marketing strategy narrative: summary, audience, voice
    Strategy,
    /// Seed tasks for a fresh project
    TaskSeed,
    /// Invoice cover email draft
    InvoiceEmail,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Proposal => write!(f, "proposal"),
            ContentKind::Strategy => write!(f, "strategy"),
            ContentKind::TaskSeed => write!(f, "task-seed"),
            ContentKind::InvoiceEmail => write!(f, "invoice-email"),
        }
    }
}

/// A seed task suggested for a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSeed {
    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Checklist entry texts
    #[serde(default)]
    pub checklist: Vec<String>,
}

/// A drafted invoice cover email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceEmail {
    /// Email subject line
    pub subject: String,

    /// Email body
    pub body: String,
}

/// Validated content of one of the four kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeneratedContent {
    /// Proposal body
    Proposal(ProposalContent),
    /// Strategy narrative
    Strategy(StrategyContent),
    /// Seed tasks
    TaskSeed(Vec<TaskSeed>),
    /// Invoice email draft
    InvoiceEmail(InvoiceEmail),
}

impl GeneratedContent {
    /// The documented default for a kind: a well-defined empty object that
    /// keeps downstream transitions moving when generation is degraded.
    pub fn default_for(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Proposal => GeneratedContent::Proposal(ProposalContent::default()),
            ContentKind::Strategy => GeneratedContent::Strategy(StrategyContent::default()),
            ContentKind::TaskSeed => GeneratedContent::TaskSeed(Vec::new()),
            ContentKind::InvoiceEmail => GeneratedContent::InvoiceEmail(InvoiceEmail::default()),
        }
    }

    /// Validate a loose JSON payload against a kind's schema.
    pub fn parse(kind: ContentKind, value: Value) -> anyhow::Result<Self> {
        let content = match kind {
            ContentKind::Proposal => GeneratedContent::Proposal(serde_json::from_value(value)?),
            ContentKind::Strategy => GeneratedContent::Strategy(serde_json::from_value(value)?),
            ContentKind::TaskSeed => GeneratedContent::TaskSeed(serde_json::from_value(value)?),
            ContentKind::InvoiceEmail => {
                GeneratedContent::InvoiceEmail(serde_json::from_value(value)?)
            }
        };
        Ok(content)
    }

    /// Which kind this content is.
    pub fn kind(&self) -> ContentKind {
        match self {
            GeneratedContent::Proposal(_) => ContentKind::Proposal,
            GeneratedContent::Strategy(_) => ContentKind::Strategy,
            GeneratedContent::TaskSeed(_) => ContentKind::TaskSeed,
            GeneratedContent::InvoiceEmail(_) => ContentKind::InvoiceEmail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_strategy() {
        let value = json!({"summary": "Short video", "audience": "18-25", "voice": "Playful"});
        let content = GeneratedContent::parse(ContentKind::Strategy, value).unwrap();
        assert_eq!(content.kind(), ContentKind::Strategy);
    }

    #[test]
    fn test_parse_task_seeds() {
        let value = json!([
            {"title": "Kickoff", "description": "Meet the client"},
            {"title": "Audit", "description": "Review channels", "checklist": ["IG", "TikTok"]}
        ]);
        let GeneratedContent::TaskSeed(seeds) =
            GeneratedContent::parse(ContentKind::TaskSeed, value).unwrap()
        else {
            panic!("wrong kind");
        };
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[1].checklist.len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let value = json!({"totally": "unrelated"});
        assert!(GeneratedContent::parse(ContentKind::InvoiceEmail, value).is_err());
    }

    #[test]
    fn test_defaults_match_kind() {
        for kind in [
            ContentKind::Proposal,
            ContentKind::Strategy,
            ContentKind::TaskSeed,
            ContentKind::InvoiceEmail,
        ] {
            assert_eq!(GeneratedContent::default_for(kind).kind(), kind);
        }
    }
}
