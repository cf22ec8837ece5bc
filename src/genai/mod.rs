//! Content generation adapter.
//!
//! The engine treats generation as a fallible, possibly slow, single-shot
//! call: given a structured JSON context it returns content matching a
//! fixed per-kind schema. Provider failures and schema mismatches are
//! absorbed here by substituting the documented default for that kind, so
//! the transition that asked for content always completes. No automatic
//! retries; callers may re-invoke manually.

mod schema;

#[cfg(feature = "ai")]
mod claude;

#[cfg(feature = "ai")]
pub use claude::ClaudeProvider;

pub use schema::{ContentKind, GeneratedContent, InvoiceEmail, TaskSeed};

use async_trait::async_trait;
use serde_json::Value;

/// Trait for content generation providers.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate content of the given kind from a JSON context.
    ///
    /// The returned value must match the kind's schema; anything else is
    /// treated as a failure by the caller.
    async fn generate(&self, kind: ContentKind, context: &Value) -> anyhow::Result<Value>;

    /// Provider name, for logs.
    fn name(&self) -> &str;
}

/// Generate content, falling back to the kind's default on any failure.
///
/// This is the engine-facing entry point: it never errors. A provider
/// error or an unparsable payload is logged and swallowed, and the
/// documented default content object comes back instead.
pub async fn generate_or_default(
    provider: &dyn ContentProvider,
    kind: ContentKind,
    context: &Value,
) -> GeneratedContent {
    match provider.generate(kind, context).await {
        Ok(value) => match GeneratedContent::parse(kind, value) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    kind = %kind,
                    error = %e,
                    "generated payload failed schema validation, using default"
                );
                GeneratedContent::default_for(kind)
            }
        },
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                kind = %kind,
                error = %e,
                "content generation failed, using default"
            );
            GeneratedContent::default_for(kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingProvider;

    #[async_trait]
    impl ContentProvider for FailingProvider {
        async fn generate(&self, _kind: ContentKind, _context: &Value) -> anyhow::Result<Value> {
            anyhow::bail!("provider offline")
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct GarbageProvider;

    #[async_trait]
    impl ContentProvider for GarbageProvider {
        async fn generate(&self, _kind: ContentKind, _context: &Value) -> anyhow::Result<Value> {
            Ok(json!({"unexpected": true}))
        }

        fn name(&self) -> &str {
            "garbage"
        }
    }

    #[tokio::test]
    async fn test_provider_error_yields_default() {
        let content =
            generate_or_default(&FailingProvider, ContentKind::Strategy, &json!({})).await;
        assert!(matches!(content, GeneratedContent::Strategy(_)));
    }

    #[tokio::test]
    async fn test_schema_mismatch_yields_default() {
        let content =
            generate_or_default(&GarbageProvider, ContentKind::InvoiceEmail, &json!({})).await;
        let GeneratedContent::InvoiceEmail(email) = content else {
            panic!("wrong kind");
        };
        assert_eq!(email, InvoiceEmail::default());
    }

    #[tokio::test]
    async fn test_valid_payload_passes_through() {
        struct GoodProvider;

        #[async_trait]
        impl ContentProvider for GoodProvider {
            async fn generate(&self, _kind: ContentKind, _ctx: &Value) -> anyhow::Result<Value> {
                Ok(json!({"summary": "s", "audience": "a", "voice": "v"}))
            }

            fn name(&self) -> &str {
                "good"
            }
        }

        let content =
            generate_or_default(&GoodProvider, ContentKind::Strategy, &json!({})).await;
        let GeneratedContent::Strategy(strategy) = content else {
            panic!("wrong kind");
        };
        assert_eq!(strategy.summary, "s");
    }
}
