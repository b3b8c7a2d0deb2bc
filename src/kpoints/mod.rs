/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reciprocal-space sampling
//!
//! This module produces the ordered k-point sequences consumed by spectral
//! calculations, and persists them in the k-list text format.

pub mod errors;
pub mod klist;
pub mod sampler;

pub use errors::{KPointError, Result};
pub use klist::{read_klist, read_klist_from, write_default_klist, write_klist, write_klist_to};
pub use sampler::{default_path, diagonal_path, reciprocal_vectors, KPoint, ReciprocalBasis};
