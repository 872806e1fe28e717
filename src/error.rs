//! Error types for style lookup, declaration resolution and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a style cannot be resolved.
///
/// Both kinds are fatal to the resolution call that raised them; no partial
/// result or fallback styling is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A shorthand token has no entry in any searched namespace.
    #[error("stylesheet key \"{key}\" does not exist")]
    UnknownStyleKey { key: String },

    /// A dynamic declaration is malformed or references an undeclared condition.
    #[error(transparent)]
    InvalidStyleDeclaration(#[from] DeclarationError),
}

impl StyleError {
    pub(crate) fn unknown_key(key: &str) -> Self {
        StyleError::UnknownStyleKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        StyleError::InvalidStyleDeclaration(DeclarationError::Malformed {
            reason: reason.into(),
        })
    }
}

/// Why a dynamic style declaration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The declaration does not have the `[static, conditional]` shape.
    #[error("invalid dynamic style declaration: {reason}")]
    Malformed { reason: String },

    /// A conditional entry names a condition the caller never supplied.
    #[error("style condition \"{name}\" not found")]
    ConditionNotFound { name: String },

    /// A condition group was matched against a flat style list.
    #[error("style condition \"{name}\" is a group but its styles are not keyed by sub-condition")]
    ShapeMismatch { name: String },
}

/// Error returned when stylesheet options cannot be loaded or are invalid.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options from \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// The options file extension is not one of `yaml`, `yml` or `json`.
    #[error("unsupported options format: \"{}\"", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("base unit must be a positive finite number, got {0}")]
    InvalidBaseUnit(f64),

    #[error("breakpoint \"{name}\" has invalid threshold {threshold}")]
    InvalidBreakpoint { name: String, threshold: f64 },

    #[error("breakpoint \"{name}\" is defined more than once")]
    DuplicateBreakpoint { name: String },
}
