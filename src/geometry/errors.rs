/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the geometry module

use super::dimensionality::Dimensionality;

/// Error types for geometry construction and transforms
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("{operation} requires a {expected} geometry, found {found}")]
    InvalidDimension {
        operation: &'static str,
        expected: Dimensionality,
        found: Dimensionality,
    },

    #[error("{operation} is not supported for a {found} geometry")]
    UnsupportedDimension {
        operation: &'static str,
        found: Dimensionality,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
