use thiserror::Error;

/// Core error type for rbxbind operations.
///
/// The generation pass itself never fails; these errors come from the edges
/// (reading files, parsing the dump, loading configuration).
#[derive(Error, Debug)]
pub enum BindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for BindError {
    fn from(e: serde_json::Error) -> Self {
        BindError::Parse(e.to_string())
    }
}

/// Result type alias using BindError.
pub type Result<T> = std::result::Result<T, BindError>;
