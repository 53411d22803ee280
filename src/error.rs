//! Error types for profile construction and lookup.

use thiserror::Error;

/// Errors raised when building or querying profile boxes.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Distance-bin edges failed validation
    #[error("invalid distance bins: {0}")]
    InvalidBins(String),

    /// Box width must be a positive, finite number of kilometers
    #[error("invalid box width: {0}")]
    InvalidWidth(f64),

    /// A locator needs at least one box
    #[error("profile has no boxes")]
    EmptyProfile,

    /// Projection setup or coordinate transform failed
    #[error("projection error: {0}")]
    Projection(String),
}
