/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # tbgeom-rs
//!
//! Geometry and lattice construction for tight-binding simulations.
//!
//! This crate builds the geometric description of periodic and finite
//! atomic arrangements (chains, ribbons, planar lattices, custom point
//! sets), expands them into supercells, and samples the Brillouin zone for
//! the spectral routines that consume them. Hamiltonian assembly itself is
//! external and plugs in through [`hamiltonian::HamiltonianAssembler`].
//!
//! ```
//! use tbgeom_rs::lattice::honeycomb_lattice;
//!
//! let g = honeycomb_lattice().unwrap().supercell(2).unwrap();
//! assert_eq!(g.atom_count(), 8);
//! ```

pub mod cli;
pub mod geometry;
pub mod hamiltonian;
pub mod input;
pub mod kpoints;
pub mod lattice;
pub mod transform;
pub mod utils;

pub use geometry::{Dimensionality, Geometry, GeometryError, Vector3D};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
