/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Supercell replication along the lattice vectors
//!
//! Atom ordering in the output is fixed: replica-major, source atom index
//! innermost. Hamiltonian assembly relies on this to map a supercell atom
//! back to its primitive image.

use crate::geometry::{Axes, Dimensionality, Geometry, GeometryError, Result, Sublattice};
use log::debug;

fn require_multiplicity(n: usize, what: &str) -> Result<()> {
    if n == 0 {
        return Err(GeometryError::InvalidParameter(format!(
            "supercell multiplicity {} must be at least 1",
            what
        )));
    }
    Ok(())
}

fn tile_sublattice(labels: Option<&[Sublattice]>, copies: usize) -> Option<Vec<Sublattice>> {
    labels.map(|labels| {
        let mut tiled = Vec::with_capacity(labels.len() * copies);
        for _ in 0..copies {
            tiled.extend_from_slice(labels);
        }
        tiled
    })
}

/// Replicate a chain geometry `n` times along x
///
/// Replica `i` is shifted by `i * cell_spacing`. x and y are recentred, z is
/// tiled as is. The new cell spacing is `n` times the old one.
pub fn supercell_1d(g: &Geometry, n: usize) -> Result<Geometry> {
    if g.dimensionality() != Dimensionality::Chain {
        return Err(GeometryError::InvalidDimension {
            operation: "supercell_1d",
            expected: Dimensionality::Chain,
            found: g.dimensionality(),
        });
    }
    require_multiplicity(n, "n")?;
    let spacing = g.cell_spacing().ok_or_else(|| {
        GeometryError::InvalidStructure("chain geometry without cell spacing".to_string())
    })?;

    let cell = g.axes();
    let mut axes = Axes::with_capacity(n * g.atom_count());
    for i in 0..n {
        let shift = i as f64 * spacing;
        axes.x.extend(cell.x.iter().map(|x| x + shift));
        axes.y.extend_from_slice(&cell.y);
        axes.z.extend_from_slice(&cell.z);
    }
    axes.recentre_xy();

    let result = g
        .to_builder(axes)
        .cell_spacing(Some(spacing * n as f64))
        .sublattice(tile_sublattice(g.sublattice(), n))
        .build()?;
    debug!(
        "1D supercell x{} of {}: {} -> {} atoms",
        n,
        g.name(),
        g.atom_count(),
        result.atom_count()
    );
    Ok(result)
}

/// Replicate a plane geometry `n1 x n2` times
///
/// Atom `k` of cell `(i, j)` lands at `i*a1 + j*a2 + p_k`, iterating `i`
/// outermost and `k` innermost. The lattice vectors become `n1*a1` and
/// `n2*a2`.
pub fn supercell_2d(g: &Geometry, n1: usize, n2: usize) -> Result<Geometry> {
    if g.dimensionality() != Dimensionality::Plane {
        return Err(GeometryError::InvalidDimension {
            operation: "supercell_2d",
            expected: Dimensionality::Plane,
            found: g.dimensionality(),
        });
    }
    require_multiplicity(n1, "n1")?;
    require_multiplicity(n2, "n2")?;

    let a1 = g.a1();
    let a2 = g.a2();
    let cell = g.positions();
    let mut axes = Axes::with_capacity(n1 * n2 * cell.len());
    for i in 0..n1 {
        for j in 0..n2 {
            let offset = a1 * i as f64 + a2 * j as f64;
            for p in cell {
                axes.x.push(offset.x + p.x);
                axes.y.push(offset.y + p.y);
                axes.z.push(p.z);
            }
        }
    }
    // centre the in-plane stamp, then the full cloud including z
    axes.recentre_xy();
    axes.recentre_xyz();

    let result = g
        .to_builder(axes)
        .lattice_vectors(a1 * n1 as f64, a2 * n2 as f64)
        .sublattice(tile_sublattice(g.sublattice(), n1 * n2))
        .build()?;
    debug!(
        "2D supercell {}x{} of {}: {} -> {} atoms",
        n1,
        n2,
        g.name(),
        g.atom_count(),
        result.atom_count()
    );
    Ok(result)
}

/// Supercell of multiplicity `n` along every periodic direction
///
/// Chains go through [`supercell_1d`], planes through [`supercell_2d`] with
/// `n1 = n2 = n`. Finite geometries have no lattice to replicate.
pub fn supercell(g: &Geometry, n: usize) -> Result<Geometry> {
    match g.dimensionality() {
        Dimensionality::Chain => supercell_1d(g, n),
        Dimensionality::Plane => supercell_2d(g, n, n),
        Dimensionality::Finite => Err(GeometryError::UnsupportedDimension {
            operation: "supercell",
            found: Dimensionality::Finite,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{chain, honeycomb_armchair_ribbon, honeycomb_lattice, square_lattice};
    use approx::assert_relative_eq;

    #[test]
    fn test_chain_replicas_are_ordered() {
        let g = supercell_1d(&chain().unwrap(), 3).unwrap();
        let xs: Vec<f64> = g.positions().iter().map(|p| p.x).collect();
        assert_relative_eq!(xs[0], -1.0);
        assert_relative_eq!(xs[1], 0.0);
        assert_relative_eq!(xs[2], 1.0);
    }

    #[test]
    fn test_sublattice_tiled() {
        let ribbon = honeycomb_armchair_ribbon(1).unwrap();
        let g = supercell_1d(&ribbon, 2).unwrap();
        let labels = g.sublattice().unwrap();
        assert_eq!(labels.len(), 8);
        assert_eq!(&labels[..4], ribbon.sublattice().unwrap());
        assert_eq!(&labels[4..], ribbon.sublattice().unwrap());
    }

    #[test]
    fn test_2d_index_order() {
        let h = honeycomb_lattice().unwrap();
        let g = supercell_2d(&h, 2, 3).unwrap();
        let p = g.positions();
        // atom k of cell (i, j) sits at index (i*n2 + j)*nc + k
        let idx = |i: usize, j: usize, k: usize| (i * 3 + j) * 2 + k;
        let d = p[idx(1, 2, 1)] - p[idx(0, 0, 1)];
        let expected = h.a1() + h.a2() * 2.0;
        assert_relative_eq!(d.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(d.y, expected.y, epsilon = 1e-12);
        let d = p[idx(0, 1, 1)] - p[idx(0, 1, 0)];
        assert_relative_eq!(d.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrong_dimensionality() {
        let err = supercell_1d(&square_lattice().unwrap(), 2).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidDimension {
                expected: Dimensionality::Chain,
                found: Dimensionality::Plane,
                ..
            }
        ));
        assert!(supercell_2d(&chain().unwrap(), 2, 2).is_err());
    }

    #[test]
    fn test_zero_multiplicity() {
        assert!(supercell_1d(&chain().unwrap(), 0).is_err());
        assert!(supercell_2d(&square_lattice().unwrap(), 1, 0).is_err());
    }
}
