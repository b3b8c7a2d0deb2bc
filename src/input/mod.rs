/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! File input and job configuration
//!
//! This module reads and writes position files and JSON geometries, and
//! drives complete build jobs described by a [`JobConfig`].

pub mod config;
pub mod errors;
pub mod json;
pub mod positions;

pub use config::{JobConfig, JobReport, LatticeSpec, SupercellSpec};
pub use errors::{InputError, Result};
pub use json::{read_geometry_json, write_geometry_json};
pub use positions::{parse_positions, read_positions, write_positions, write_positions_to};
