/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! One-dimensional builders: the chain and ribbons of finite width
//!
//! Every ribbon is periodic along x with the returned cell spacing and is
//! stamped cell-by-cell across its width along y, then recentred.

use crate::geometry::{
    Axes, Dimensionality, Geometry, GeometryBuilder, GeometryError, Result, Sublattice,
};
use crate::utils::constants::HALF_SQRT_3;
use log::debug;
use std::f64::consts::SQRT_2;

fn require_positive(value: usize, what: &str) -> Result<()> {
    if value == 0 {
        return Err(GeometryError::InvalidParameter(format!(
            "{} must be at least 1",
            what
        )));
    }
    Ok(())
}

fn finish(builder: GeometryBuilder) -> Result<Geometry> {
    let g = builder.build()?;
    debug!(
        "built {} with {} atoms, cell spacing {:?}",
        g.name(),
        g.atom_count(),
        g.cell_spacing()
    );
    Ok(g)
}

/// Single-atom chain with unit spacing
pub fn chain() -> Result<Geometry> {
    let axes = Axes::planar(vec![0.0], vec![0.0]);
    finish(
        GeometryBuilder::new(Dimensionality::Chain, axes)
            .name("chain")
            .cell_spacing(Some(1.0)),
    )
}

/// Armchair honeycomb ribbon made of `ntetramers` four-atom rows
pub fn honeycomb_armchair_ribbon(ntetramers: usize) -> Result<Geometry> {
    require_positive(ntetramers, "ntetramers")?;
    let mut axes = Axes::with_capacity(4 * ntetramers);
    for ii in 0..ntetramers {
        let fi = ii as f64 * 2.0 * HALF_SQRT_3;
        for (x, y) in [
            (0.0, fi),
            (1.0, fi),
            (1.5, fi + HALF_SQRT_3),
            (2.5, fi + HALF_SQRT_3),
        ] {
            axes.x.push(x);
            axes.y.push(y);
            axes.z.push(0.0);
        }
    }
    axes.recentre_xy();
    let n = axes.x.len();
    finish(
        GeometryBuilder::new(Dimensionality::Chain, axes)
            .name("honeycomb_armchair_ribbon")
            .cell_spacing(Some(3.0))
            .shift_kspace(true)
            .sublattice(Some(Sublattice::alternating(n))),
    )
}

/// Zigzag honeycomb ribbon made of `ntetramers` four-atom zigzag segments
pub fn honeycomb_zigzag_ribbon(ntetramers: usize) -> Result<Geometry> {
    require_positive(ntetramers, "ntetramers")?;
    let mut axes = Axes::with_capacity(4 * ntetramers);
    for ii in 0..ntetramers {
        let fi = -(ii as f64) * 3.0;
        for (x, y) in [
            (0.0, fi),
            (HALF_SQRT_3, fi - 0.5),
            (HALF_SQRT_3, fi - 1.5),
            (0.0, fi - 2.0),
        ] {
            axes.x.push(x);
            axes.y.push(y);
            axes.z.push(0.0);
        }
    }
    axes.recentre_xy();
    let n = axes.x.len();
    finish(
        GeometryBuilder::new(Dimensionality::Chain, axes)
            .name("honeycomb_zigzag_ribbon")
            .cell_spacing(Some(3f64.sqrt()))
            .sublattice(Some(Sublattice::alternating(n))),
    )
}

/// Square-lattice ribbon `natoms` sites wide
pub fn square_ribbon(natoms: usize) -> Result<Geometry> {
    require_positive(natoms, "natoms")?;
    let x = vec![0.0; natoms];
    let y = (0..natoms).map(|i| i as f64).collect();
    let mut axes = Axes::planar(x, y);
    axes.recentre_xy();
    finish(
        GeometryBuilder::new(Dimensionality::Chain, axes)
            .name("square_ribbon")
            .cell_spacing(Some(1.0)),
    )
}

/// Ribbon of square plaquettes stacked along y
pub fn square_tetramer_ribbon(ntetramers: usize) -> Result<Geometry> {
    require_positive(ntetramers, "ntetramers")?;
    let mut axes = Axes::with_capacity(4 * ntetramers);
    for i in 0..ntetramers {
        let y0 = 2.0 * i as f64;
        for (x, y) in [(0.0, y0), (1.0, y0), (1.0, y0 + 1.0), (0.0, y0 + 1.0)] {
            axes.x.push(x);
            axes.y.push(y);
            axes.z.push(0.0);
        }
    }
    axes.recentre_xy();
    finish(
        GeometryBuilder::new(Dimensionality::Chain, axes)
            .name("square_tetramer_ribbon")
            .cell_spacing(Some(2.0))
            .shift_kspace(true),
    )
}

/// Square lattice cut along the (11) direction, `npairs` pairs wide
pub fn square_zigzag_ribbon(npairs: usize) -> Result<Geometry> {
    require_positive(npairs, "npairs")?;
    let natoms = 2 * npairs;
    let x = (0..natoms)
        .map(|i| if i % 2 == 0 { SQRT_2 / 4.0 } else { -SQRT_2 / 4.0 })
        .collect();
    let mut y = Vec::with_capacity(natoms);
    for i in 0..npairs {
        let yp = SQRT_2 * i as f64;
        y.push(yp);
        y.push(yp + SQRT_2 / 2.0);
    }
    let mut axes = Axes::planar(x, y);
    axes.recentre_xy();
    finish(
        GeometryBuilder::new(Dimensionality::Chain, axes)
            .name("square_zigzag_ribbon")
            .cell_spacing(Some(SQRT_2)),
    )
}
