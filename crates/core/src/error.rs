//! Error types for the widget core

use thiserror::Error;

/// Failure reported by a config store
///
/// Controllers pass these through unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("config store unavailable: {0}")]
    Unavailable(String),
    #[error("config store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config store serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget id must not be empty")]
    EmptyId,
    #[error("widget {widget} has no callback named '{callback}'")]
    UnknownCallback { widget: String, callback: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}
