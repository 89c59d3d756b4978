//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// The content value is not one of the supported shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid modal content: {0}")]
pub struct InvalidSpec(pub String);

/// Viewport query failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("viewport has been closed")]
    Closed,
}

/// Scene graph lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("no node with id '{0}'")]
    NotFound(String),
}

/// Fatal modal construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error(transparent)]
    InvalidSpec(#[from] InvalidSpec),

    #[error("failed to query viewport: {0}")]
    Viewport(#[from] ViewportError),

    #[error("'{0}' is not a modal instance")]
    NotAModal(String),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid size: {0}")]
    InvalidSize(String),
}
