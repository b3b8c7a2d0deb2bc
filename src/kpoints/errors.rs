/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for k-point sampling

use crate::geometry::Dimensionality;
use std::io;
use thiserror::Error;

/// Errors that can occur while sampling or persisting k-points
#[derive(Error, Debug)]
pub enum KPointError {
    #[error("k-point sampling is not supported for a {0} geometry")]
    UnsupportedDimension(Dimensionality),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed k-point file at line {line}: {message}")]
    MalformedInput { line: usize, message: String },
}

/// Result type for k-point operations
pub type Result<T> = std::result::Result<T, KPointError>;
