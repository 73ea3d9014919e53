use bridge_traits::BridgeError;
use thiserror::Error;

/// Fatal backend configuration/construction errors.
///
/// Every variant is a startup precondition failure; none of them is meant to
/// be handled at runtime.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Required configuration value {key} is missing")]
    MissingConfig { key: &'static str },

    #[error("Configuration value {key} could not be resolved: {source}")]
    ConfigSource {
        key: &'static str,
        source: BridgeError,
    },

    #[error("Configuration value {key} is not a valid URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("Configuration value {key} must not be empty")]
    EmptyValue { key: &'static str },

    #[error("Failed to build backend HTTP client: {0}")]
    ClientBuild(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;
