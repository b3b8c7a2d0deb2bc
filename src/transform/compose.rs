/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometry composition and periodicity removal

use crate::geometry::{Dimensionality, Geometry, GeometryBuilder, Result};
use log::{debug, warn};

/// Positional union of two geometries
///
/// Atoms of `g1` come first, then atoms of `g2`. The cell spacing is the
/// larger of the two; dimensionality and lattice vectors come from the input
/// with the higher dimensionality (`g1` on a tie). Lattice compatibility is
/// not checked and remains the caller's responsibility.
pub fn add(g1: &Geometry, g2: &Geometry) -> Result<Geometry> {
    let mut axes = g1.axes();
    axes.extend(&g2.axes());
    axes.recentre_xy();

    let cell_spacing = match (g1.cell_spacing(), g2.cell_spacing()) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    let lead = if g2.dimensionality() > g1.dimensionality() {
        g2
    } else {
        g1
    };
    if g1.dimensionality() != g2.dimensionality() || g1.lattice_vectors() != g2.lattice_vectors()
    {
        warn!(
            "adding geometries with different periodicity: {} ({}) and {} ({})",
            g1.name(),
            g1.dimensionality(),
            g2.name(),
            g2.dimensionality()
        );
    }

    let sublattice = match (g1.sublattice(), g2.sublattice()) {
        (Some(s1), Some(s2)) => Some([s1, s2].concat()),
        _ => None,
    };

    let lattice = lead.lattice_vectors();
    let result = GeometryBuilder::new(lead.dimensionality(), axes)
        .name(&format!("{}+{}", g1.name(), g2.name()))
        .lattice_vectors(lattice.a1, lattice.a2)
        .cell_spacing(cell_spacing)
        .sublattice(sublattice)
        .shift_kspace(lead.shift_kspace())
        .build()?;
    debug!(
        "added {} ({} atoms) and {} ({} atoms)",
        g1.name(),
        g1.atom_count(),
        g2.name(),
        g2.atom_count()
    );
    Ok(result)
}

/// Copy of `g` with its periodicity removed
pub fn set_finite(g: &Geometry) -> Result<Geometry> {
    g.to_builder(g.axes())
        .dimensionality(Dimensionality::Finite)
        .cell_spacing(None)
        .build()
}
