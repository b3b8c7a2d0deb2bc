/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometry data model
//!
//! This module provides the [`Geometry`] record, its validated builder and
//! the coordinate synchronizer shared by every builder and transform.

pub mod coordinates;
pub mod dimensionality;
pub mod errors;
pub mod structure;
pub mod vector;

pub use coordinates::{
    axes_to_positions, matrix_to_positions, positions_to_axes, positions_to_matrix, Axes,
};
pub use dimensionality::Dimensionality;
pub use errors::{GeometryError, Result};
pub use structure::{Geometry, GeometryBuilder, LatticeVectors, Sublattice};
pub use vector::Vector3D;
