/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordinate synchronization between per-axis arrays and position lists
//!
//! Builders and transforms work on three parallel coordinate arrays
//! ([`Axes`]); consumers read a list of [`Vector3D`] positions or an `N x 3`
//! position matrix. The conversions here are the only place where the two
//! representations meet, so the length check lives here too.

use super::errors::{GeometryError, Result};
use super::vector::Vector3D;
use crate::utils::recentre;
use ndarray::Array2;

/// Three parallel coordinate arrays, one entry per atom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Axes {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self { x, y, z }
    }

    /// Axes in the z = 0 plane
    pub fn planar(x: Vec<f64>, y: Vec<f64>) -> Self {
        let z = vec![0.0; x.len()];
        Self { x, y, z }
    }

    /// Empty axes with room for `capacity` atoms
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    /// Number of atoms, or `ShapeMismatch` if the arrays disagree
    pub fn len(&self) -> Result<usize> {
        let n = self.x.len();
        if self.y.len() != n || self.z.len() != n {
            return Err(GeometryError::ShapeMismatch(format!(
                "x has {} entries, y has {}, z has {}",
                n,
                self.y.len(),
                self.z.len()
            )));
        }
        Ok(n)
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty() && self.z.is_empty()
    }

    /// Append one atom
    pub fn push(&mut self, position: Vector3D) {
        self.x.push(position.x);
        self.y.push(position.y);
        self.z.push(position.z);
    }

    /// Append every atom of `other`
    pub fn extend(&mut self, other: &Axes) {
        self.x.extend_from_slice(&other.x);
        self.y.extend_from_slice(&other.y);
        self.z.extend_from_slice(&other.z);
    }

    /// Shift x and y to zero mean
    pub fn recentre_xy(&mut self) {
        recentre(&mut self.x);
        recentre(&mut self.y);
    }

    /// Shift x, y and z to zero mean
    pub fn recentre_xyz(&mut self) {
        self.recentre_xy();
        recentre(&mut self.z);
    }
}

/// Build the combined position list from the three axis arrays
pub fn axes_to_positions(axes: &Axes) -> Result<Vec<Vector3D>> {
    let n = axes.len()?;
    Ok((0..n)
        .map(|i| Vector3D::new(axes.x[i], axes.y[i], axes.z[i]))
        .collect())
}

/// Split a position list back into three axis arrays
pub fn positions_to_axes(positions: &[Vector3D]) -> Axes {
    let mut axes = Axes::with_capacity(positions.len());
    for p in positions {
        axes.push(*p);
    }
    axes
}

/// Pack positions into an `N x 3` matrix
pub fn positions_to_matrix(positions: &[Vector3D]) -> Array2<f64> {
    Array2::from_shape_fn((positions.len(), 3), |(i, c)| match c {
        0 => positions[i].x,
        1 => positions[i].y,
        _ => positions[i].z,
    })
}

/// Unpack an `N x 3` matrix into positions
pub fn matrix_to_positions(matrix: &Array2<f64>) -> Result<Vec<Vector3D>> {
    if matrix.ncols() != 3 {
        return Err(GeometryError::ShapeMismatch(format!(
            "position matrix must have 3 columns, got {}",
            matrix.ncols()
        )));
    }
    Ok(matrix
        .rows()
        .into_iter()
        .map(|row| Vector3D::new(row[0], row[1], row[2]))
        .collect())
}
