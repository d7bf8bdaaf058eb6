//! Error types for risk rating operations.
//!
//! Two caller-facing failures:
//!
//! - [`RatingError::MissingFactor`]: a rating was scored or encoded before
//!   every category had a selection. Lists every absent category.
//! - [`RatingError::InvalidVector`]: a vector string was empty, did not
//!   match the grammar, or carried a weight with no enumerant.
//!
//! Catalog misses surface as [`UnknownFactor`]; the vector decoder converts
//! them into `InvalidVector` on the spot.
//!
//! # Example
//!
//! ```rust
//! use owasp_risk_rating::{RatingError, RiskRating};
//!
//! let err = RiskRating::new().calculate().unwrap_err();
//! assert!(err.is_missing_factor());
//! assert_eq!(err.missing_categories().len(), 16);
//! ```

use crate::factors::Category;
use crate::vector::VECTOR_PATTERN;
use thiserror::Error;

/// Failure returned by scoring and vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// One or more categories have no selection.
    #[error("Missing factor(s): {}", join_categories(.missing))]
    MissingFactor { missing: Vec<Category> },

    /// Vector string rejected by the decoder.
    #[error("Invalid vector {input:?}: {reason}. Expected pattern: {}", VECTOR_PATTERN)]
    InvalidVector { input: String, reason: String },
}

impl RatingError {
    pub fn missing_factor(missing: Vec<Category>) -> Self {
        Self::MissingFactor { missing }
    }

    pub fn invalid_vector(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVector {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn is_missing_factor(&self) -> bool {
        matches!(self, Self::MissingFactor { .. })
    }

    pub fn is_invalid_vector(&self) -> bool {
        matches!(self, Self::InvalidVector { .. })
    }

    /// Categories named by a `MissingFactor` error; empty otherwise.
    pub fn missing_categories(&self) -> &[Category] {
        match self {
            Self::MissingFactor { missing } => missing,
            Self::InvalidVector { .. } => &[],
        }
    }

    /// Get the error category name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFactor { .. } => "MissingFactor",
            Self::InvalidVector { .. } => "InvalidVector",
        }
    }
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| format!("{} ({})", category, category.code()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A catalog lookup that matched no enumerant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {category} factor: {value:?}")]
pub struct UnknownFactor {
    category: Category,
    value: String,
}

impl UnknownFactor {
    pub fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The name or weight that failed to match.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, RatingError>;
