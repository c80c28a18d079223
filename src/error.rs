use std::path::PathBuf;

use thiserror::Error;

use crate::pricing::{Modality, Model};

/// Catalog lookup failures. Never papered over with a default model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ConfigurationError {
    #[error("Unknown model \"{input}\" (run `cachecost models` to list supported ids)")]
    UnknownModel { input: String },

    #[error("{} does not support context caching", .model.display_name())]
    CachingUnsupported { model: Model },

    #[error("{} has no {} price", .model.display_name(), .modality.id())]
    MissingPrice { model: Model, modality: Modality },
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Failed to load config {}: {reason}", .path.display())]
    ConfigFile { path: PathBuf, reason: String },

    #[error("Failed to serialize JSON output: {0}")]
    Serialize(#[from] serde_json::Error),
}
