/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for file input and job configuration

use crate::geometry::GeometryError;
use crate::kpoints::KPointError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading inputs or running a job
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Geometry error: {0}")]
    GeometryError(#[from] GeometryError),

    #[error("k-point error: {0}")]
    KPointError(#[from] KPointError),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
