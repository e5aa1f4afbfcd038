mod traits;
mod gemini;
pub mod relay;

pub use traits::*;
pub use gemini::GeminiClient;
pub use relay::{fallback_text, PromptRelay};
