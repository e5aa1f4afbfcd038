/// Impact Assistant — centralized constants.
/// User-facing strings, endpoints and limits live here.

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GEMINI_GENERATE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent";
    pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const TIMEOUT_MS: u64 = 30_000;
    pub const TRANSCRIPT_MESSAGES: usize = 20;
    pub const CONFIG_DIR: &str = "impact";
    pub const CONFIG_FILE: &str = "config.toml";
}

// ─── Fallback Text ────────────────────────────────────────────────────────────

pub mod fallback {
    /// Shown when the endpoint answered but produced no candidate text.
    pub const EMPTY_GENERATION: &str = "I couldn't generate a response.";
    /// Shown for every transport-level failure.
    pub const HIGH_TRAFFIC: &str =
        "Our AI service is currently experiencing high traffic. Please try again later.";
}

// ─── Prompt Template ──────────────────────────────────────────────────────────

pub mod prompt {
    /// Separator between the system context and the user query.
    pub const QUERY_SEPARATOR: &str = "\n\nUser Query: ";
}

// ─── Personas ─────────────────────────────────────────────────────────────────

pub mod personas {
    pub const ASSISTANT_GREETING: &str =
        "Hello! I'm the NGO's AI Assistant. Ask me about our mission, projects, or how to donate!";

    pub const ASSISTANT_CONTEXT: &str = "You are a helpful AI assistant for a Non-Governmental Organization (NGO) in Kenya. Your goal is to explain the NGO's mission (Education, Health, Water), encourage donations via M-Pesa, and explain programs politely and professionally. Keep answers concise.";

    pub const COPYWRITER_CONTEXT: &str =
        "You are an expert NGO copywriter. Create compelling content.";
}
