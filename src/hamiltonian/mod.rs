/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Hamiltonian-builder hook
//!
//! Hamiltonian assembly lives outside this crate. A geometry hands itself
//! to an external [`HamiltonianAssembler`] through
//! [`Geometry::get_hamiltonian`]; [`FirstNeighborAssembler`] is the default
//! assembler and yields the first-neighbor hopping list.

pub mod neighbors;

pub use neighbors::{first_neighbors, periodic_images, NeighborPair};

use crate::geometry::{Dimensionality, Geometry, Result};
use crate::utils::constants::FIRST_NEIGHBOR_DISTANCE;
use log::debug;
use num_complex::Complex64;

/// Something that turns a geometry into a Hamiltonian
pub trait HamiltonianAssembler {
    type Output;

    fn assemble(&self, geometry: &Geometry, has_spin: bool) -> Result<Self::Output>;
}

impl Geometry {
    /// Hand this geometry to an assembler
    pub fn get_hamiltonian<A: HamiltonianAssembler>(
        &self,
        assembler: &A,
        has_spin: bool,
    ) -> Result<A::Output> {
        assembler.assemble(self, has_spin)
    }
}

/// One hopping term `amplitude * c†_to(cell) c_from(0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hopping {
    pub from: usize,
    pub to: usize,
    pub cell: [i32; 2],
    pub amplitude: Complex64,
}

/// Hopping list with first-neighbor coupling populated
#[derive(Debug, Clone, PartialEq)]
pub struct HoppingModel {
    pub orbitals: usize,
    pub has_spin: bool,
    pub dimensionality: Dimensionality,
    pub hoppings: Vec<Hopping>,
}

impl HoppingModel {
    /// Hoppings that stay in the home cell
    pub fn onsite_cell(&self) -> impl Iterator<Item = &Hopping> {
        self.hoppings.iter().filter(|h| h.cell == [0, 0])
    }

    /// Every hopping has its conjugate partner in the opposite cell
    pub fn is_hermitian(&self) -> bool {
        self.hoppings.iter().all(|h| {
            self.hoppings.iter().any(|r| {
                r.from == h.to
                    && r.to == h.from
                    && r.cell == [-h.cell[0], -h.cell[1]]
                    && (r.amplitude - h.amplitude.conj()).norm() < 1e-12
            })
        })
    }
}

/// Uniform hopping between atoms at the first-neighbor distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstNeighborAssembler {
    pub hopping: Complex64,
    pub bond_length: f64,
}

impl Default for FirstNeighborAssembler {
    fn default() -> Self {
        Self {
            hopping: Complex64::new(-1.0, 0.0),
            bond_length: FIRST_NEIGHBOR_DISTANCE,
        }
    }
}

impl HamiltonianAssembler for FirstNeighborAssembler {
    type Output = HoppingModel;

    fn assemble(&self, geometry: &Geometry, has_spin: bool) -> Result<HoppingModel> {
        let pairs = first_neighbors(geometry, self.bond_length);
        let spins = if has_spin { 2 } else { 1 };

        let mut hoppings = Vec::with_capacity(pairs.len() * spins);
        for pair in &pairs {
            // spin-diagonal: orbital index is atom * spins + spin
            for s in 0..spins {
                hoppings.push(Hopping {
                    from: pair.from * spins + s,
                    to: pair.to * spins + s,
                    cell: pair.cell,
                    amplitude: self.hopping,
                });
            }
        }

        debug!(
            "assembled {} hoppings for {} ({} bonds)",
            hoppings.len(),
            geometry.name(),
            pairs.len()
        );
        Ok(HoppingModel {
            orbitals: geometry.atom_count() * spins,
            has_spin,
            dimensionality: geometry.dimensionality(),
            hoppings,
        })
    }
}
