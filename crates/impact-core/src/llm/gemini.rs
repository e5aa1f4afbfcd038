use crate::config::RelayConfig;
use crate::constants::{defaults, endpoints};
use crate::error::ImpactError;
use crate::llm::traits::LlmClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Client for the Gemini `generateContent` endpoint.
///
/// The API key travels as the `key` query parameter. The underlying
/// `reqwest::Client` is built once with the configured timeout and reused for
/// every call.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ImpactError> {
        Self::from_config(&RelayConfig {
            endpoint: endpoints::GEMINI_GENERATE_URL.to_string(),
            api_key: api_key.into(),
            timeout_ms: defaults::TIMEOUT_MS,
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, ImpactError> {
        if config.timeout_ms == 0 {
            return Err(ImpactError::Config("timeout_ms must be greater than zero".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// The request URL carries the API key, so it is stripped before the
    /// error can reach a log line.
    fn transport_error(&self, e: reqwest::Error) -> ImpactError {
        if e.is_timeout() {
            ImpactError::Timeout(self.timeout_ms)
        } else {
            ImpactError::Http(e.without_url())
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First candidate's first text part, if it is a non-empty string.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.is_empty())
    }
}

/// Pull the reply text out of a decoded response body. Any shape other than
/// `candidates[0].content.parts[0].text` counts as an empty generation.
fn extract_text(body: Value) -> Result<String, ImpactError> {
    let response: GenerateContentResponse = match serde_json::from_value(body) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Unexpected generateContent shape: {e}");
            return Err(ImpactError::EmptyGeneration);
        }
    };

    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        tracing::debug!("Prompt blocked: {reason}");
    }
    if let Some(reason) = response
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
    {
        tracing::trace!("Finish reason: {reason}");
    }

    response.first_text().ok_or(ImpactError::EmptyGeneration)
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, ImpactError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ImpactError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let body: Value = serde_json::from_str(&response_text)?;
        extract_text(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_contents_parts_text_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({ "contents": [{ "parts": [{ "text": "hi" }] }] }));
    }

    #[test]
    fn extract_text_takes_first_candidate_first_part() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        });
        assert_eq!(extract_text(body).unwrap(), "first");
    }

    #[test]
    fn extract_text_keeps_whitespace() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "  spaced\n" }] } }] });
        assert_eq!(extract_text(body).unwrap(), "  spaced\n");
    }

    #[test]
    fn extract_text_empty_shapes() {
        let shapes = [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
            json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
            json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
            json!([1, 2, 3]),
            json!("text"),
        ];
        for shape in shapes {
            let err = extract_text(shape.clone()).unwrap_err();
            assert!(
                matches!(err, ImpactError::EmptyGeneration),
                "shape {shape} gave {err:?}"
            );
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = RelayConfig {
            endpoint: "http://localhost".into(),
            api_key: "k".into(),
            timeout_ms: 0,
        };
        assert!(matches!(
            GeminiClient::from_config(&config),
            Err(ImpactError::Config(_))
        ));
    }
}
