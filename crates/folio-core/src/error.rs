//! Error types for site content loading.

use thiserror::Error;

/// Errors raised while loading the site content document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("invalid site content: {0}")]
    Parse(#[from] toml::de::Error),
    /// Messaging numbers must be digits only (international format, no `+`).
    #[error("invalid messaging number: {0:?}")]
    InvalidWhatsapp(String),
    #[error("invalid contact email: {0:?}")]
    InvalidEmail(String),
    /// Project names key the request-access dialog and must be unique.
    #[error("duplicate project name: {0}")]
    DuplicateProject(String),
    #[error("carousel autoplay interval must be greater than zero")]
    ZeroAutoplay,
}
