//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The cart reducer never returns these; they come from configuration
/// loading and hand-off link construction.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Store configuration could not be parsed or is inconsistent.
    #[error("Invalid store configuration: {0}")]
    Config(String),

    /// The configured messaging base URL cannot carry a contact path.
    #[error("Invalid hand-off URL: {0}")]
    InvalidHandoffUrl(String),

    /// A size tag that is not one of simple, doble or triple.
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// A line key string that does not match `<id>` or `<id>-<size>`.
    #[error("Invalid line key: {0}")]
    InvalidLineKey(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<url::ParseError> for CommerceError {
    fn from(e: url::ParseError) -> Self {
        CommerceError::InvalidHandoffUrl(e.to_string())
    }
}
