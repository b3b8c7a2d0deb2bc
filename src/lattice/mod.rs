/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice builders
//!
//! Each builder is a pure factory returning a validated [`Geometry`] whose
//! x and y coordinates have zero mean. Finite structures read from disk are
//! built by [`crate::input::read_positions`].
//!
//! [`Geometry`]: crate::geometry::Geometry

pub mod planar;
pub mod ribbons;
pub mod squid;

pub use planar::{honeycomb_lattice, honeycomb_lattice_square_cell, kagome_lattice, square_lattice};
pub use ribbons::{
    chain, honeycomb_armchair_ribbon, honeycomb_zigzag_ribbon, square_ribbon,
    square_tetramer_ribbon, square_zigzag_ribbon,
};
pub use squid::{squid_square, SquidParameters};
