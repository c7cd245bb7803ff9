//! Error types for the catalog crate.
//!
//! A catalog is construction-time configuration, so every variant here
//! describes a broken dataset rather than a runtime condition.

use crate::types::ProductId;
use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON or has the wrong shape
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The questionnaire has no questions at all
    #[error("Catalog must contain at least one question")]
    EmptyQuestionnaire,

    /// Two questions share an identifier
    #[error("Duplicate question id: {id}")]
    DuplicateQuestionId { id: String },

    /// A question offers nothing to choose from
    #[error("Question {question} has no options")]
    NoOptions { question: String },

    /// Two options of the same question share an answer value
    #[error("Question {question} has duplicate option value: {value}")]
    DuplicateOptionValue { question: String, value: String },

    /// Answering every question with its highest-scoring option would
    /// push a product total past `u32::MAX`
    #[error("Scores for {product} can add up past {}", u32::MAX)]
    ScoreOverflow { product: ProductId },

    /// A string did not name one of the four products
    #[error("Unknown product id: {0}")]
    UnknownProduct(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
