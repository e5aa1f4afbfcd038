//! Content studio: drafts donor-facing copy through the shared relay.
//!
//! Unlike the chat widget this surface uses the structured result, so a
//! transport failure is never mistaken for publishable text.

use crate::constants::personas;
use crate::error::ImpactError;
use crate::llm::{PromptRelay, PromptRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Professional,
    UrgentEmotional,
    Gratitude,
    SocialMediaPost,
}

impl Tone {
    /// Wording used inside the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::UrgentEmotional => "Urgent & Emotional",
            Tone::Gratitude => "Gratitude",
            Tone::SocialMediaPost => "Social Media Post",
        }
    }

    pub fn all() -> Vec<Tone> {
        vec![
            Tone::Professional,
            Tone::UrgentEmotional,
            Tone::Gratitude,
            Tone::SocialMediaPost,
        ]
    }
}

impl std::str::FromStr for Tone {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "urgent" | "urgent-emotional" | "urgent & emotional" | "emotional" => {
                Ok(Tone::UrgentEmotional)
            }
            "gratitude" => Ok(Tone::Gratitude),
            "social" | "social-media-post" | "social media post" => Ok(Tone::SocialMediaPost),
            _ => Err(ImpactError::InvalidInput),
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub topic: String,
    pub tone: Tone,
}

impl ContentRequest {
    pub fn new(topic: impl Into<String>, tone: Tone) -> Self {
        Self {
            topic: topic.into(),
            tone,
        }
    }

    pub fn instruction(&self) -> String {
        format!(
            "Write a {} piece about: {}. Format nicely with headers if needed.",
            self.tone.label(),
            self.topic
        )
    }
}

pub struct ContentStudio {
    relay: PromptRelay,
    system_context: String,
}

impl ContentStudio {
    pub fn new(relay: PromptRelay) -> Self {
        Self {
            relay,
            system_context: personas::COPYWRITER_CONTEXT.to_string(),
        }
    }

    pub fn with_system_context(mut self, context: impl Into<String>) -> Self {
        self.system_context = context.into();
        self
    }

    pub fn prompt_for(&self, request: &ContentRequest) -> PromptRequest {
        PromptRequest::new(request.instruction(), self.system_context.clone())
    }

    /// Draft content for `request`. An empty topic is rejected without a call.
    pub async fn compose(&self, request: &ContentRequest) -> Result<String, ImpactError> {
        if request.topic.trim().is_empty() {
            return Err(ImpactError::InvalidInput);
        }
        self.relay.try_generate(&self.prompt_for(request)).await
    }
}
