//! Structured error types for the labelgrid layout engine.
//!
//! Four variants cover the real error sources: profile geometry validation,
//! bad label quantities, JSON job parsing, and profile store file access.

use thiserror::Error;

/// The unified error type returned by all public labelgrid API functions.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The profile geometry cannot produce a valid layout. The message names
    /// the specific failing constraint.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// A request carried a quantity below 1 (or one that failed to parse).
    #[error("invalid quantity \"{value}\" for \"{identifier}\": quantity must be an integer of at least 1")]
    InvalidQuantity { identifier: String, value: String },

    /// JSON input failed to parse as a valid layout job.
    #[error("failed to parse job: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },

    /// The profile store file could not be read or written.
    #[error("profile store: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LabelError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: the JSON is valid but doesn't match the job schema. Check field names and types."
            }
            serde_json::error::Category::Eof => {
                "\n  Hint: unexpected end of input. Is the JSON truncated?"
            }
            serde_json::error::Category::Io => "",
        };
        LabelError::Parse {
            source: e,
            hint: hint.to_string(),
        }
    }
}
