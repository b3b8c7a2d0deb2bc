/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Two-dimensional lattice builders

use crate::geometry::{Axes, Dimensionality, Geometry, GeometryBuilder, Result, Sublattice, Vector3D};
use crate::utils::constants::HALF_SQRT_3;
use log::debug;

/// Honeycomb lattice with two atoms per cell and unit bond length
///
/// The lattice vectors have length sqrt(3) and enclose 120 degrees. The two
/// atoms carry opposite sublattice labels.
pub fn honeycomb_lattice() -> Result<Geometry> {
    let axes = Axes::planar(vec![-0.5, 0.5], vec![0.0, 0.0]);
    let g = GeometryBuilder::new(Dimensionality::Plane, axes)
        .name("honeycomb_lattice")
        .lattice_vectors(
            Vector3D::new(1.5, HALF_SQRT_3, 0.0),
            Vector3D::new(-1.5, HALF_SQRT_3, 0.0),
        )
        .sublattice(Some(Sublattice::alternating(2)))
        .build()?;
    debug!("built {} with {} atoms", g.name(), g.atom_count());
    Ok(g)
}

/// Square lattice with a four-atom plaquette per cell
pub fn square_lattice() -> Result<Geometry> {
    let axes = Axes::planar(vec![-0.5, 0.5, 0.5, -0.5], vec![-0.5, -0.5, 0.5, 0.5]);
    let g = GeometryBuilder::new(Dimensionality::Plane, axes)
        .name("square_lattice")
        .lattice_vectors(Vector3D::new(2.0, 0.0, 0.0), Vector3D::new(0.0, 2.0, 0.0))
        .build()?;
    debug!("built {} with {} atoms", g.name(), g.atom_count());
    Ok(g)
}

/// Kagome lattice with a three-atom triangle per cell
pub fn kagome_lattice() -> Result<Geometry> {
    let dx = 0.5;
    let dy = HALF_SQRT_3;
    let mut axes = Axes::planar(vec![-dx, dx, 0.0], vec![-dy, -dy, 0.0]);
    // the triangle is not centred on its apex
    axes.recentre_xy();
    let g = GeometryBuilder::new(Dimensionality::Plane, axes)
        .name("kagome_lattice")
        .lattice_vectors(
            Vector3D::new(2.0, 0.0, 0.0),
            Vector3D::new(1.0, 2.0 * HALF_SQRT_3, 0.0),
        )
        .build()?;
    debug!("built {} with {} atoms", g.name(), g.atom_count());
    Ok(g)
}

/// Honeycomb lattice folded into a rectangular four-atom cell
///
/// The cell vectors are `a1 + a2` and `a1 - a2` of the primitive honeycomb
/// cell; the second pair of atoms is the first pair shifted by `-a1`.
pub fn honeycomb_lattice_square_cell() -> Result<Geometry> {
    let primitive = honeycomb_lattice()?;
    let a1 = primitive.a1();
    let a2 = primitive.a2();

    let mut axes = primitive.axes();
    for p in primitive.positions() {
        axes.push(*p - a1);
    }
    axes.recentre_xy();

    let n = primitive.atom_count();
    let mut sublattice = Sublattice::alternating(n);
    sublattice.extend(Sublattice::alternating(n));

    let g = primitive
        .to_builder(axes)
        .name("honeycomb_lattice_square_cell")
        .lattice_vectors(a1 + a2, a1 - a2)
        .sublattice(Some(sublattice))
        .build()?;
    debug!("built {} with {} atoms", g.name(), g.atom_count());
    Ok(g)
}
