//! Storefront error types.

use jayli_assistant::AssistantError;
use jayli_commerce::CommerceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the storefront controller and its configuration.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    /// Config file could not be read or written.
    #[error("Failed to access config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file contents are malformed.
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Config parsed but holds values the shop cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
