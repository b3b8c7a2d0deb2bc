/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodicity of a geometry

use super::errors::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periodic directions of a geometry
///
/// Serialized as the bare integer 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensionality {
    /// Molecule or flake with no periodic images
    Finite,
    /// Periodic along a single direction, spaced by the cell spacing
    Chain,
    /// Periodic in the plane spanned by `a1` and `a2`
    Plane,
}

impl Dimensionality {
    /// Number of periodic directions
    pub fn rank(self) -> u8 {
        match self {
            Dimensionality::Finite => 0,
            Dimensionality::Chain => 1,
            Dimensionality::Plane => 2,
        }
    }

    pub fn is_periodic(self) -> bool {
        self != Dimensionality::Finite
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Dimensionality::Finite),
            1 => Ok(Dimensionality::Chain),
            2 => Ok(Dimensionality::Plane),
            other => Err(GeometryError::InvalidParameter(format!(
                "dimensionality must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl From<Dimensionality> for u8 {
    fn from(value: Dimensionality) -> Self {
        value.rank()
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimensionality::Finite => write!(f, "0D (finite)"),
            Dimensionality::Chain => write!(f, "1D (chain)"),
            Dimensionality::Plane => write!(f, "2D (plane)"),
        }
    }
}
