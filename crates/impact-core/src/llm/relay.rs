use crate::config::RelayConfig;
use crate::constants::fallback;
use crate::error::{FailureKind, ImpactError};
use crate::llm::gemini::GeminiClient;
use crate::llm::traits::{LlmClient, PromptRequest};
use std::sync::Arc;

/// The single shared path from a (query, context) pair to a generated reply.
///
/// Two layers:
/// - [`PromptRelay::try_generate`] returns a structured result so callers can
///   tell a transport failure from an empty generation.
/// - [`PromptRelay::generate`] always yields displayable text, mapping every
///   failure to a fixed fallback string. Chat widgets use this one.
///
/// The relay holds no mutable state; clones share the same transport.
#[derive(Clone)]
pub struct PromptRelay {
    client: Arc<dyn LlmClient>,
}

impl PromptRelay {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, ImpactError> {
        Ok(Self::new(Arc::new(GeminiClient::from_config(config)?)))
    }

    /// Issue exactly one relay call for `request`.
    ///
    /// Transport failures are logged at error level before being returned.
    pub async fn try_generate(&self, request: &PromptRequest) -> Result<String, ImpactError> {
        let prompt = request.render();
        match self.client.generate_content(&prompt).await {
            Ok(text) if text.is_empty() => {
                tracing::debug!("Relay returned empty text");
                Err(ImpactError::EmptyGeneration)
            }
            Ok(text) => Ok(text),
            Err(e) => {
                match e.kind() {
                    FailureKind::Transport => tracing::error!("Generation request failed: {e}"),
                    _ => tracing::debug!("No generation produced: {e}"),
                }
                Err(e)
            }
        }
    }

    /// Generate a reply for `user_query` framed by `system_context`.
    /// Never fails and never returns an empty string.
    pub async fn generate(&self, user_query: &str, system_context: &str) -> String {
        self.generate_request(&PromptRequest::new(user_query, system_context))
            .await
    }

    pub async fn generate_with_default_context(&self, user_query: &str) -> String {
        self.generate(user_query, "").await
    }

    pub async fn generate_request(&self, request: &PromptRequest) -> String {
        match self.try_generate(request).await {
            Ok(text) => text,
            Err(e) => fallback_text(&e).to_string(),
        }
    }
}

/// The user-facing text shown in place of a failed generation.
pub fn fallback_text(error: &ImpactError) -> &'static str {
    match error.kind() {
        FailureKind::EmptyGeneration => fallback::EMPTY_GENERATION,
        _ => fallback::HIGH_TRAFFIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Fixed {
        Text(&'static str),
        TimedOut,
    }

    #[async_trait::async_trait]
    impl LlmClient for Fixed {
        async fn generate_content(&self, _prompt: &str) -> Result<String, ImpactError> {
            match self {
                Fixed::Text(text) => Ok(text.to_string()),
                Fixed::TimedOut => Err(ImpactError::Timeout(10)),
            }
        }
    }

    #[tokio::test]
    async fn empty_text_from_transport_is_soft_failure() {
        let r = PromptRelay::new(Arc::new(Fixed::Text("")));
        let err = r.try_generate(&PromptRequest::query("hi")).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::EmptyGeneration);
        assert_eq!(r.generate("hi", "").await, fallback::EMPTY_GENERATION);
    }

    #[tokio::test]
    async fn timeout_maps_to_high_traffic() {
        let r = PromptRelay::new(Arc::new(Fixed::TimedOut));
        assert_eq!(r.generate("hi", "ctx").await, fallback::HIGH_TRAFFIC);
    }

    #[test]
    fn fallback_text_by_kind() {
        assert_eq!(fallback_text(&ImpactError::EmptyGeneration), fallback::EMPTY_GENERATION);
        assert_eq!(
            fallback_text(&ImpactError::Status { status: 503, body: String::new() }),
            fallback::HIGH_TRAFFIC
        );
    }
}
