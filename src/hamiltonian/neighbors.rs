/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! First-neighbor search across the cell and its nearest periodic images

use crate::geometry::{Dimensionality, Geometry, Vector3D};
use crate::utils::constants::NEIGHBOR_TOLERANCE;
use rayon::prelude::*;

/// Bond from atom `from` in the home cell to atom `to` in cell `cell`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborPair {
    pub from: usize,
    pub to: usize,
    /// Integer offset of the target cell along (a1, a2); chains use only
    /// the first entry
    pub cell: [i32; 2],
}

/// Home cell plus the images a first-neighbor bond can reach
///
/// Chains repeat along x by the cell spacing; planes repeat along `a1` and
/// `a2`.
pub fn periodic_images(g: &Geometry) -> Vec<([i32; 2], Vector3D)> {
    match g.dimensionality() {
        Dimensionality::Finite => vec![([0, 0], Vector3D::origin())],
        Dimensionality::Chain => {
            let spacing = g.cell_spacing().unwrap_or(0.0);
            (-1..=1)
                .map(|n| ([n, 0], Vector3D::new(n as f64 * spacing, 0.0, 0.0)))
                .collect()
        }
        Dimensionality::Plane => {
            let mut images = Vec::with_capacity(9);
            for i in -1..=1 {
                for j in -1..=1 {
                    images.push(([i, j], g.a1() * i as f64 + g.a2() * j as f64));
                }
            }
            images
        }
    }
}

/// All ordered pairs at `distance` (within tolerance)
///
/// Each bond appears once from each end, so the result is symmetric under
/// `(from, to, cell) -> (to, from, -cell)`. Pairs are ordered by `from`.
pub fn first_neighbors(g: &Geometry, distance: f64) -> Vec<NeighborPair> {
    let positions = g.positions();
    let images = periodic_images(g);

    let per_atom: Vec<Vec<NeighborPair>> = (0..positions.len())
        .into_par_iter()
        .map(|from| {
            let origin = positions[from];
            let mut found = Vec::new();
            for (cell, shift) in &images {
                for (to, target) in positions.iter().enumerate() {
                    let d = origin.distance(&(*target + *shift));
                    if (d - distance).abs() < NEIGHBOR_TOLERANCE {
                        found.push(NeighborPair {
                            from,
                            to,
                            cell: *cell,
                        });
                    }
                }
            }
            found
        })
        .collect();

    per_atom.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{chain, honeycomb_lattice, kagome_lattice};

    #[test]
    fn test_chain_neighbors() {
        let pairs = first_neighbors(&chain().unwrap(), 1.0);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&NeighborPair { from: 0, to: 0, cell: [1, 0] }));
        assert!(pairs.contains(&NeighborPair { from: 0, to: 0, cell: [-1, 0] }));
    }

    #[test]
    fn test_honeycomb_coordination() {
        let g = honeycomb_lattice().unwrap();
        let pairs = first_neighbors(&g, 1.0);
        for atom in 0..g.atom_count() {
            assert_eq!(pairs.iter().filter(|p| p.from == atom).count(), 3);
        }
    }

    #[test]
    fn test_kagome_coordination() {
        let g = kagome_lattice().unwrap();
        let pairs = first_neighbors(&g, 1.0);
        assert_eq!(pairs.len(), 3 * 4);
    }

    #[test]
    fn test_finite_has_no_images() {
        let g = chain().unwrap().set_finite().unwrap();
        assert!(first_neighbors(&g, 1.0).is_empty());
        assert_eq!(periodic_images(&g).len(), 1);
    }
}
