//! Claude API content provider.
//!
//! Implements the `ContentProvider` trait against the Anthropic Messages
//! API. Each kind gets its own system prompt pinning the JSON shape; the
//! response text is parsed as JSON and handed back for schema validation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ContentKind, ContentProvider};

/// Claude-backed content provider.
pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    /// Create a new provider.
    ///
    /// Reads the API key from the ANTHROPIC_API_KEY environment variable.
    pub fn new() -> anyhow::Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| anyhow::anyhow!("ANTHROPIC_API_KEY not set"))?;

        Ok(Self { client: Client::new(), api_key, model: "claude-sonnet-4-20250514".to_string() })
    }

    /// Use a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Make a request to the Claude API.
    async fn request(&self, system: &str, user_message: &str) -> anyhow::Result<String> {
        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: 2048,
            system: system.to_string(),
            messages: vec![Message { role: "user".to_string(), content: user_message.to_string() }],
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        let response: ClaudeResponse = response.json().await?;

        response
            .content
            .first()
            .map(|c| c.text.clone())
            .ok_or_else(|| anyhow::anyhow!("Empty response from Claude"))
    }
}

/// System prompt for a content kind: what to write and the exact JSON
/// shape to write it in.
fn system_prompt(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Proposal => {
            r#"You write marketing agency sales proposals.
Respond with ONLY a JSON object, no markdown fences, shaped as:
{"phases": [{"title": "...", "description": "...", "deliverables": ["..."]}],
 "investment": [{"label": "...", "amount": 0}],
 "strategy": ["..."]}"#
        }
        ContentKind::Strategy => {
            r#"You write marketing strategies for agency clients.
Respond with ONLY a JSON object, no markdown fences, shaped as:
{"summary": "...", "audience": "...", "voice": "..."}"#
        }
        ContentKind::TaskSeed => {
            r#"You plan kickoff tasks for a new marketing project.
Respond with ONLY a JSON array, no markdown fences, shaped as:
[{"title": "...", "description": "...", "checklist": ["..."]}]"#
        }
        ContentKind::InvoiceEmail => {
            r#"You draft short, professional invoice cover emails.
Respond with ONLY a JSON object, no markdown fences, shaped as:
{"subject": "...", "body": "..."}"#
        }
    }
}

#[async_trait]
impl ContentProvider for ClaudeProvider {
    async fn generate(&self, kind: ContentKind, context: &Value) -> anyhow::Result<Value> {
        let user_message = format!("Context:\n{}", serde_json::to_string_pretty(context)?);
        let text = self.request(system_prompt(kind), &user_message).await?;
        let value = serde_json::from_str(text.trim())?;
        Ok(value)
    }

    fn name(&self) -> &str {
        "claude"
    }
}

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}
