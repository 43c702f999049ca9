//! Error types for catalog lookup, rendering and file output.

use crate::catalog::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested (category, id) pair is outside the fixed catalog.
    #[error("no {category} recipe with id {id} (valid ids are 1-15)")]
    RecipeNotFound { category: Category, id: u8 },

    /// A recipe could not be evaluated, e.g. an envelope whose attack is not
    /// shorter than the clip duration.
    #[error("render failed: {reason}")]
    RenderFailure { reason: String },

    /// Writing or reading a WAV container failed. `hound::Error` wraps the
    /// underlying I/O error as well as format violations.
    #[error("serialization failed: {0}")]
    Serialization(#[from] hound::Error),

    /// A WAV file was readable but does not match the generator's fixed
    /// format (mono, 16-bit integer PCM, 44100 Hz).
    #[error("unexpected wav format: {field} is {found}, expected {expected}")]
    FormatMismatch {
        field: &'static str,
        found: String,
        expected: String,
    },
}

impl Error {
    pub(crate) fn render(reason: impl Into<String>) -> Self {
        Error::RenderFailure {
            reason: reason.into(),
        }
    }

    pub(crate) fn format_mismatch(
        field: &'static str,
        found: impl std::fmt::Debug,
        expected: impl std::fmt::Debug,
    ) -> Self {
        Error::FormatMismatch {
            field,
            found: format!("{found:?}"),
            expected: format!("{expected:?}"),
        }
    }
}
