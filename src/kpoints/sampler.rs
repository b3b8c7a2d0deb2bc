/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Brillouin-zone sampling

use super::errors::{KPointError, Result};
use crate::geometry::{Dimensionality, Geometry, Vector3D};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A point in reciprocal space, in units of the reciprocal basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KPoint {
    pub kx: f64,
    pub ky: f64,
}

impl KPoint {
    pub fn new(kx: f64, ky: f64) -> Self {
        Self { kx, ky }
    }

    /// Cartesian wave vector `kx*b1 + ky*b2`
    pub fn to_cartesian(&self, b1: &Vector3D, b2: &Vector3D) -> Vector3D {
        *b1 * self.kx + *b2 * self.ky
    }
}

/// Two in-plane reciprocal directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalBasis {
    pub b1: [f64; 2],
    pub b2: [f64; 2],
}

impl Default for ReciprocalBasis {
    /// Fractional basis `b1 = (1, 0)`, `b2 = (0, 1)`
    fn default() -> Self {
        Self {
            b1: [1.0, 0.0],
            b2: [0.0, 1.0],
        }
    }
}

/// `nk` points along `b1 + b2`, starting one step away from the origin
///
/// Points are accumulated by repeated addition of `(b1 + b2) / nk`, so the
/// last point equals `b1 + b2` up to rounding.
pub fn diagonal_path(basis: &ReciprocalBasis, nk: usize) -> Vec<KPoint> {
    let step = [
        (basis.b1[0] + basis.b2[0]) / nk as f64,
        (basis.b1[1] + basis.b2[1]) / nk as f64,
    ];
    let mut k = [0.0, 0.0];
    let mut points = Vec::with_capacity(nk);
    for _ in 0..nk {
        k[0] += step[0];
        k[1] += step[1];
        points.push(KPoint::new(k[0], k[1]));
    }
    points
}

/// Default sampling for a plane geometry
///
/// Only plane geometries have a two-dimensional zone to sample; any other
/// dimensionality is reported as an error.
pub fn default_path(g: &Geometry, nk: usize) -> Result<Vec<KPoint>> {
    if g.dimensionality() != Dimensionality::Plane {
        return Err(KPointError::UnsupportedDimension(g.dimensionality()));
    }
    if nk == 0 {
        return Err(KPointError::InvalidParameter(
            "number of k-points must be at least 1".to_string(),
        ));
    }
    let points = diagonal_path(&ReciprocalBasis::default(), nk);
    debug!("sampled {} k-points for {}", points.len(), g.name());
    Ok(points)
}

/// Cartesian reciprocal vectors of a plane geometry
///
/// Satisfies `b_i . a_j = 2 pi delta_ij` in the xy plane.
pub fn reciprocal_vectors(g: &Geometry) -> Result<(Vector3D, Vector3D)> {
    if g.dimensionality() != Dimensionality::Plane {
        return Err(KPointError::UnsupportedDimension(g.dimensionality()));
    }
    let a1 = g.a1();
    let a2 = g.a2();
    let factor = 2.0 * PI / g.lattice_vectors().cell_area();
    let b1 = Vector3D::new(a2.y, -a2.x, 0.0) * factor;
    let b2 = Vector3D::new(-a1.y, a1.x, 0.0) * factor;
    Ok((b1, b2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{chain, honeycomb_lattice};
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonal_path_ends_on_corner() {
        let points = diagonal_path(&ReciprocalBasis::default(), 7);
        assert_eq!(points.len(), 7);
        assert_relative_eq!(points[0].kx, 1.0 / 7.0, epsilon = 1e-12);
        let last = points.last().unwrap();
        assert_relative_eq!(last.kx, 1.0, epsilon = 1e-10);
        assert_relative_eq!(last.ky, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_default_path_rejects_chain() {
        let err = default_path(&chain().unwrap(), 10).unwrap_err();
        assert!(matches!(
            err,
            KPointError::UnsupportedDimension(Dimensionality::Chain)
        ));
    }

    #[test]
    fn test_default_path_rejects_zero_points() {
        assert!(default_path(&honeycomb_lattice().unwrap(), 0).is_err());
    }

    #[test]
    fn test_reciprocal_duality() {
        let g = honeycomb_lattice().unwrap();
        let (b1, b2) = reciprocal_vectors(&g).unwrap();
        assert_relative_eq!(b1.dot(&g.a1()), 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(b1.dot(&g.a2()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(b2.dot(&g.a2()), 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(b2.dot(&g.a1()), 0.0, epsilon = 1e-12);

        let k = KPoint::new(0.5, 0.0).to_cartesian(&b1, &b2);
        assert_relative_eq!(k.dot(&g.a1()), PI, epsilon = 1e-12);
    }
}
