/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometry transforms
//!
//! Every transform reads its input and returns a freshly validated
//! geometry. A failed transform leaves the input exactly as it was.

pub mod compose;
pub mod supercell;

pub use compose::{add, set_finite};
pub use supercell::{supercell, supercell_1d, supercell_2d};

use crate::geometry::{Geometry, Result};

impl Geometry {
    /// Supercell of multiplicity `n` along every periodic direction
    pub fn supercell(&self, n: usize) -> Result<Geometry> {
        supercell::supercell(self, n)
    }

    /// Copy of this geometry without periodic images
    pub fn set_finite(&self) -> Result<Geometry> {
        compose::set_finite(self)
    }

    /// Positional union with another geometry
    pub fn add(&self, other: &Geometry) -> Result<Geometry> {
        compose::add(self, other)
    }
}
