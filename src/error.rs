use thiserror::Error;

/// Errors that can occur while configuring, serving, or calling the recipe API.
///
/// Store operations never fail; a missing recipe is reported as `None` or
/// `false`, not through this type.
#[derive(Error, Debug)]
pub enum RecipeShareError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The bind address could not be parsed
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    /// Failed to bind or serve
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request to the recipe API failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The recipe API answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, RecipeShareError>;
