/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the builders and transforms
//!
//! This module provides numeric constants and the small averaging helpers
//! used to keep every geometry centred on the origin.

/// Numeric constants used throughout the crate
pub mod constants {
    /// sqrt(3)/2, the height of a unit equilateral triangle
    pub const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

    /// Default first-neighbor distance of the canonical lattices
    pub const FIRST_NEIGHBOR_DISTANCE: f64 = 1.0;

    /// Absolute tolerance when matching neighbor distances
    pub const NEIGHBOR_TOLERANCE: f64 = 1e-6;

    /// Tolerance for geometric comparisons (collinearity, recentring)
    pub const GEOMETRY_TOLERANCE: f64 = 1e-10;
}

/// Arithmetic mean of a slice, zero for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Subtract the mean from every value in place
pub fn recentre(values: &mut [f64]) {
    let shift = mean(values);
    for v in values.iter_mut() {
        *v -= shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_recentre() {
        let mut values = vec![1.0, 2.0, 6.0];
        assert_relative_eq!(mean(&values), 3.0, epsilon = 1e-12);

        recentre(&mut values);
        assert_relative_eq!(mean(&values), 0.0, epsilon = 1e-12);
        assert_relative_eq!(values[0], -2.0, epsilon = 1e-12);

        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_half_sqrt_3() {
        assert_relative_eq!(constants::HALF_SQRT_3, 3f64.sqrt() / 2.0, epsilon = 1e-15);
    }
}
