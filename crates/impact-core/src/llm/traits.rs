use crate::constants::prompt::QUERY_SEPARATOR;
use crate::error::ImpactError;
use serde::{Deserialize, Serialize};

/// A user query paired with the system context that frames it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub system_context: String,
    pub user_query: String,
}

impl PromptRequest {
    pub fn new(user_query: impl Into<String>, system_context: impl Into<String>) -> Self {
        Self {
            system_context: system_context.into(),
            user_query: user_query.into(),
        }
    }

    /// A request with an empty system context.
    pub fn query(user_query: impl Into<String>) -> Self {
        Self::new(user_query, String::new())
    }

    /// Render the single outbound prompt string:
    /// `<system_context>\n\nUser Query: <user_query>`.
    pub fn render(&self) -> String {
        let mut prompt = String::with_capacity(
            self.system_context.len() + QUERY_SEPARATOR.len() + self.user_query.len(),
        );
        prompt.push_str(&self.system_context);
        prompt.push_str(QUERY_SEPARATOR);
        prompt.push_str(&self.user_query);
        prompt
    }
}

/// Transport to a remote text-generation endpoint.
///
/// One call is one request: implementations must not retry, and must return
/// `ImpactError::EmptyGeneration` when the endpoint answered without usable text.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a fully rendered prompt and return the generated text verbatim.
    async fn generate_content(&self, prompt: &str) -> Result<String, ImpactError>;
}
