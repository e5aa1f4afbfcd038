use thiserror::Error;

/// Coarse classification of a failure, for callers that need to tell a
/// transport fault from a model that produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network unreachable, non-success status, timeout or unparseable body.
    Transport,
    /// The call succeeded but carried no usable candidate text.
    EmptyGeneration,
    /// Blank input, or a turn submitted while another is pending.
    InvalidInput,
    /// Settings or credentials could not be resolved.
    Config,
}

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("No usable candidate text in response")]
    EmptyGeneration,

    #[error("Query is empty")]
    InvalidInput,

    #[error("A reply is already pending for this session")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ImpactError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_) | Self::Status { .. } | Self::Json(_) | Self::Timeout(_) => {
                FailureKind::Transport
            }
            Self::EmptyGeneration => FailureKind::EmptyGeneration,
            Self::InvalidInput | Self::Busy => FailureKind::InvalidInput,
            Self::Config(_) | Self::Io(_) | Self::Toml(_) => FailureKind::Config,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == FailureKind::Transport
    }
}

pub type Result<T> = std::result::Result<T, ImpactError>;
