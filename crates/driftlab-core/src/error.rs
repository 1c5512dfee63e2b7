//! Error types for driftlab

/// Result type alias using driftlab's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for driftlab operations
///
/// The pipelines themselves never fail. Errors come from building matchers,
/// loading settings, or handing an empty instruction across the boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Instruction was empty or whitespace only
    #[error("no instruction supplied")]
    EmptyInstruction,

    /// Keyword matcher construction errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Stage matcher construction errors
    #[error("pipeline error: {0}")]
    Pipeline(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new pipeline error
    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
