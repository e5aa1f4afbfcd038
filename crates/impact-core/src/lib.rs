pub mod error;
pub mod constants;
pub mod llm;
pub mod context;
pub mod config;
pub mod studio;

// Re-export key types
pub use error::{FailureKind, ImpactError};
pub use llm::{GeminiClient, LlmClient, PromptRelay, PromptRequest};
pub use context::{Conversation, ConversationSession, HistoryMode, Message, PendingTurn, Sender};
pub use config::{RelayConfig, Settings};
pub use studio::{ContentRequest, ContentStudio, Tone};
