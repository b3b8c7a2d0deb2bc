/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! SQUID-shaped structure: a square ring with two leads

use crate::geometry::{Axes, Dimensionality, Geometry, GeometryBuilder, GeometryError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Shape parameters of [`squid_square`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquidParameters {
    /// Thickness of the ring
    pub width: usize,
    /// Half side of the hole in the middle of the ring
    pub inner_radius: usize,
    /// Number of sites in each lead
    pub arm_length: usize,
    /// Number of sites across each lead
    pub arm_width: usize,
    /// Fill the hole instead of leaving a ring
    pub fill: bool,
}

impl Default for SquidParameters {
    fn default() -> Self {
        Self {
            width: 4,
            inner_radius: 6,
            arm_length: 8,
            arm_width: 2,
            fill: false,
        }
    }
}

/// Square ring on a unit grid with a lead attached on each side along x
///
/// Atoms are ordered right lead, ring, left lead. The result is periodic
/// along x with a spacing one site longer than the whole structure, so the
/// two leads of neighboring cells touch.
pub fn squid_square(params: &SquidParameters) -> Result<Geometry> {
    if params.width == 0 || params.arm_width == 0 {
        return Err(GeometryError::InvalidParameter(format!(
            "squid width and arm width must be at least 1, got {} and {}",
            params.width, params.arm_width
        )));
    }

    let nt = (params.width + params.inner_radius) as i64;
    let inner = params.inner_radius as f64;
    let arm_width = params.arm_width as i64;
    let shift_y = (params.arm_width as f64 - 1.0) / 2.0;

    let mut ring = Axes::default();
    for i in -nt..=nt {
        for j in -nt..(nt + arm_width) {
            let yy = j as f64 - shift_y;
            let in_ring = (i.abs() as f64) > inner || yy.abs() > inner + shift_y;
            if in_ring || params.fill {
                ring.x.push(i as f64);
                ring.y.push(yy);
            }
        }
    }

    let min_x = ring.x.iter().copied().fold(f64::INFINITY, f64::min) - 1.0;
    let max_x = ring.x.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 1.0;

    let mut right = Axes::default();
    let mut left = Axes::default();
    for i in 0..params.arm_length {
        for j in 0..params.arm_width {
            let y = j as f64 - shift_y;
            right.x.push(i as f64 + max_x);
            right.y.push(y);
            left.x.push(-(i as f64) + min_x);
            left.y.push(y);
        }
    }

    let mut axes = Axes::default();
    for part in [&right, &ring, &left] {
        axes.x.extend_from_slice(&part.x);
        axes.y.extend_from_slice(&part.y);
    }
    axes.z = vec![0.0; axes.x.len()];
    axes.recentre_xy();

    let x_min = axes.x.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = axes.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spacing = x_max - x_min + 1.0;

    let g = GeometryBuilder::new(Dimensionality::Chain, axes)
        .name("squid_square")
        .cell_spacing(Some(spacing))
        .build()?;
    debug!(
        "built {} with {} atoms ({} in the ring)",
        g.name(),
        g.atom_count(),
        ring.x.len()
    );
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_small_ring_counts() {
        let params = SquidParameters {
            width: 1,
            inner_radius: 1,
            arm_length: 2,
            arm_width: 1,
            fill: false,
        };
        let g = squid_square(&params).unwrap();
        // 5x5 square minus the 3x3 hole, plus two leads of two sites
        assert_eq!(g.atom_count(), 16 + 4);
        // ring spans x in [-2, 2], leads reach to +-4
        assert_relative_eq!(g.cell_spacing().unwrap(), 9.0);
    }

    #[test]
    fn test_fill_closes_the_hole() {
        let params = SquidParameters {
            width: 1,
            inner_radius: 1,
            arm_length: 0,
            arm_width: 1,
            fill: true,
        };
        let g = squid_square(&params).unwrap();
        assert_eq!(g.atom_count(), 25);
    }

    #[test]
    fn test_default_is_symmetric() {
        let g = squid_square(&SquidParameters::default()).unwrap();
        assert_relative_eq!(g.centroid().x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(g.centroid().y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_width_rejected() {
        let params = SquidParameters {
            width: 0,
            ..SquidParameters::default()
        };
        assert!(squid_square(&params).is_err());
    }
}
