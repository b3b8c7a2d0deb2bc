/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometry record for tight-binding calculations
//!
//! A [`Geometry`] is only ever produced by [`GeometryBuilder::build`], which
//! checks every invariant before handing out the value. Transforms never
//! touch an existing geometry; they read it and build a new one.

use super::coordinates::{axes_to_positions, positions_to_axes, positions_to_matrix, Axes};
use super::dimensionality::Dimensionality;
use super::errors::{GeometryError, Result};
use super::vector::Vector3D;
use crate::utils::constants::GEOMETRY_TOLERANCE;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Label of one of the two classes of a bipartite lattice
///
/// Serialized as +1 / -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Sublattice {
    A,
    B,
}

impl Sublattice {
    /// +1 for `A`, -1 for `B`
    pub fn sign(self) -> i8 {
        match self {
            Sublattice::A => 1,
            Sublattice::B => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Sublattice::A => Sublattice::B,
            Sublattice::B => Sublattice::A,
        }
    }

    /// `A, B, A, B, ...` for `n` atoms
    pub fn alternating(n: usize) -> Vec<Self> {
        std::iter::successors(Some(Sublattice::A), |s| Some(s.opposite()))
            .take(n)
            .collect()
    }
}

impl TryFrom<i8> for Sublattice {
    type Error = GeometryError;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Sublattice::A),
            -1 => Ok(Sublattice::B),
            other => Err(GeometryError::InvalidParameter(format!(
                "sublattice label must be +1 or -1, got {}",
                other
            ))),
        }
    }
}

impl From<Sublattice> for i8 {
    fn from(value: Sublattice) -> Self {
        value.sign()
    }
}

/// The two in-plane lattice vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeVectors {
    pub a1: Vector3D,
    pub a2: Vector3D,
}

impl Default for LatticeVectors {
    fn default() -> Self {
        Self {
            a1: Vector3D::new(1.0, 0.0, 0.0),
            a2: Vector3D::new(0.0, 1.0, 0.0),
        }
    }
}

impl LatticeVectors {
    pub fn new(a1: Vector3D, a2: Vector3D) -> Self {
        Self { a1, a2 }
    }

    /// `n1 * a1`, `n2 * a2`
    pub fn scaled(&self, n1: f64, n2: f64) -> Self {
        Self {
            a1: self.a1 * n1,
            a2: self.a2 * n2,
        }
    }

    /// Signed area of the cell in the xy plane
    pub fn cell_area(&self) -> f64 {
        self.a1.x * self.a2.y - self.a1.y * self.a2.x
    }
}

/// Atomic positions, periodicity and labels of a simulated structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryRecord")]
pub struct Geometry {
    name: String,
    positions: Vec<Vector3D>,
    lattice_vectors: LatticeVectors,
    dimensionality: Dimensionality,
    cell_spacing: Option<f64>,
    sublattice: Option<Vec<Sublattice>>,
    shift_kspace: bool,
}

impl Geometry {
    /// Free-form label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Atomic positions, index = atom identity within the cell
    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Number of atoms in the unit cell
    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    pub fn lattice_vectors(&self) -> &LatticeVectors {
        &self.lattice_vectors
    }

    pub fn a1(&self) -> Vector3D {
        self.lattice_vectors.a1
    }

    pub fn a2(&self) -> Vector3D {
        self.lattice_vectors.a2
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Distance to the nearest periodic replica; `None` for finite systems
    pub fn cell_spacing(&self) -> Option<f64> {
        self.cell_spacing
    }

    pub fn has_sublattice(&self) -> bool {
        self.sublattice.is_some()
    }

    /// Sublattice labels, parallel to [`Geometry::positions`]
    pub fn sublattice(&self) -> Option<&[Sublattice]> {
        self.sublattice.as_deref()
    }

    /// Hint for k-space consumers to offset the sampled zone
    pub fn shift_kspace(&self) -> bool {
        self.shift_kspace
    }

    /// Per-axis coordinate arrays
    pub fn axes(&self) -> Axes {
        positions_to_axes(&self.positions)
    }

    /// Positions as an `N x 3` matrix
    pub fn position_matrix(&self) -> Array2<f64> {
        positions_to_matrix(&self.positions)
    }

    /// Mean position of all atoms
    pub fn centroid(&self) -> Vector3D {
        let mut sum = Vector3D::origin();
        for p in &self.positions {
            sum += *p;
        }
        sum * (1.0 / self.positions.len() as f64)
    }

    /// Builder pre-populated with this geometry's metadata and new coordinates
    pub fn to_builder(&self, axes: Axes) -> GeometryBuilder {
        GeometryBuilder {
            name: self.name.clone(),
            axes,
            lattice_vectors: self.lattice_vectors,
            dimensionality: self.dimensionality,
            cell_spacing: self.cell_spacing,
            sublattice: self.sublattice.clone(),
            shift_kspace: self.shift_kspace,
        }
    }

    /// Copy with a different name
    pub fn with_name(&self, name: &str) -> Self {
        let mut renamed = self.clone();
        renamed.name = name.to_string();
        renamed
    }
}

/// Validated constructor for [`Geometry`]
#[derive(Debug, Clone)]
pub struct GeometryBuilder {
    name: String,
    axes: Axes,
    lattice_vectors: LatticeVectors,
    dimensionality: Dimensionality,
    cell_spacing: Option<f64>,
    sublattice: Option<Vec<Sublattice>>,
    shift_kspace: bool,
}

impl GeometryBuilder {
    /// Start a geometry of the given dimensionality from coordinate arrays
    pub fn new(dimensionality: Dimensionality, axes: Axes) -> Self {
        Self {
            name: "None".to_string(),
            axes,
            lattice_vectors: LatticeVectors::default(),
            dimensionality,
            cell_spacing: None,
            sublattice: None,
            shift_kspace: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn lattice_vectors(mut self, a1: Vector3D, a2: Vector3D) -> Self {
        self.lattice_vectors = LatticeVectors::new(a1, a2);
        self
    }

    pub fn dimensionality(mut self, dimensionality: Dimensionality) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    pub fn cell_spacing(mut self, cell_spacing: Option<f64>) -> Self {
        self.cell_spacing = cell_spacing;
        self
    }

    pub fn sublattice(mut self, sublattice: Option<Vec<Sublattice>>) -> Self {
        self.sublattice = sublattice;
        self
    }

    pub fn shift_kspace(mut self, shift_kspace: bool) -> Self {
        self.shift_kspace = shift_kspace;
        self
    }

    /// Check every invariant and produce the geometry
    pub fn build(self) -> Result<Geometry> {
        let positions = axes_to_positions(&self.axes)?;

        if positions.is_empty() {
            return Err(GeometryError::InvalidStructure(
                "geometry has no atoms".to_string(),
            ));
        }

        if positions
            .iter()
            .any(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(GeometryError::InvalidStructure(
                "positions contain non-finite coordinates".to_string(),
            ));
        }

        if let Some(labels) = &self.sublattice {
            if labels.len() != positions.len() {
                return Err(GeometryError::ShapeMismatch(format!(
                    "{} sublattice labels for {} atoms",
                    labels.len(),
                    positions.len()
                )));
            }
        }

        match self.dimensionality {
            Dimensionality::Finite => {
                if self.cell_spacing.is_some() {
                    return Err(GeometryError::InvalidStructure(
                        "a finite geometry cannot have a cell spacing".to_string(),
                    ));
                }
            }
            Dimensionality::Chain => match self.cell_spacing {
                Some(d) if d.is_finite() && d > 0.0 => {}
                other => {
                    return Err(GeometryError::InvalidStructure(format!(
                        "a chain geometry needs a positive cell spacing, got {:?}",
                        other
                    )))
                }
            },
            Dimensionality::Plane => {
                if self.lattice_vectors.cell_area().abs() < GEOMETRY_TOLERANCE {
                    return Err(GeometryError::InvalidStructure(format!(
                        "lattice vectors {} and {} do not span the plane",
                        self.lattice_vectors.a1, self.lattice_vectors.a2
                    )));
                }
            }
        }

        Ok(Geometry {
            name: self.name,
            positions,
            lattice_vectors: self.lattice_vectors,
            dimensionality: self.dimensionality,
            cell_spacing: self.cell_spacing,
            sublattice: self.sublattice,
            shift_kspace: self.shift_kspace,
        })
    }
}

/// Unvalidated mirror of [`Geometry`] used for deserialization
#[derive(Debug, Deserialize)]
struct GeometryRecord {
    #[serde(default)]
    name: Option<String>,
    positions: Vec<Vector3D>,
    #[serde(default)]
    lattice_vectors: LatticeVectors,
    dimensionality: Dimensionality,
    #[serde(default)]
    cell_spacing: Option<f64>,
    #[serde(default)]
    sublattice: Option<Vec<Sublattice>>,
    #[serde(default)]
    shift_kspace: bool,
}

impl TryFrom<GeometryRecord> for Geometry {
    type Error = GeometryError;

    fn try_from(record: GeometryRecord) -> Result<Self> {
        let mut builder =
            GeometryBuilder::new(record.dimensionality, positions_to_axes(&record.positions))
                .lattice_vectors(record.lattice_vectors.a1, record.lattice_vectors.a2)
                .cell_spacing(record.cell_spacing)
                .sublattice(record.sublattice)
                .shift_kspace(record.shift_kspace);
        if let Some(name) = record.name {
            builder = builder.name(&name);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dimer() -> Axes {
        Axes::planar(vec![-0.5, 0.5], vec![0.0, 0.0])
    }

    #[test]
    fn test_builder_defaults() {
        let g = GeometryBuilder::new(Dimensionality::Chain, dimer())
            .cell_spacing(Some(2.0))
            .build()
            .unwrap();
        assert_eq!(g.atom_count(), 2);
        assert_eq!(g.name(), "None");
        assert_eq!(g.cell_spacing(), Some(2.0));
        assert!(!g.has_sublattice());
        assert!(!g.shift_kspace());
        assert_eq!(g.lattice_vectors(), &LatticeVectors::default());
        assert_relative_eq!(g.centroid().x, 0.0);
    }

    #[test]
    fn test_chain_requires_spacing() {
        let err = GeometryBuilder::new(Dimensionality::Chain, dimer())
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidStructure(_)));
    }

    #[test]
    fn test_finite_rejects_spacing() {
        assert!(GeometryBuilder::new(Dimensionality::Finite, dimer())
            .cell_spacing(Some(1.0))
            .build()
            .is_err());
        assert!(GeometryBuilder::new(Dimensionality::Finite, dimer())
            .build()
            .is_ok());
    }

    #[test]
    fn test_plane_rejects_collinear_vectors() {
        let err = GeometryBuilder::new(Dimensionality::Plane, dimer())
            .lattice_vectors(Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(2.0, 0.0, 0.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidStructure(_)));
    }

    #[test]
    fn test_sublattice_length_checked() {
        let err = GeometryBuilder::new(Dimensionality::Finite, dimer())
            .sublattice(Some(vec![Sublattice::A]))
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::ShapeMismatch(_)));
    }

    #[test]
    fn test_empty_geometry_rejected() {
        assert!(GeometryBuilder::new(Dimensionality::Finite, Axes::default())
            .build()
            .is_err());
    }

    #[test]
    fn test_sublattice_labels() {
        assert_eq!(
            Sublattice::alternating(3),
            vec![Sublattice::A, Sublattice::B, Sublattice::A]
        );
        assert_eq!(Sublattice::A.sign(), 1);
        assert_eq!(Sublattice::B.sign(), -1);
        assert_eq!(Sublattice::A.opposite(), Sublattice::B);
        assert!(Sublattice::try_from(0).is_err());
    }

    #[test]
    fn test_json_round_trip_validates() {
        let g = GeometryBuilder::new(Dimensionality::Plane, dimer())
            .name("dimer")
            .lattice_vectors(Vector3D::new(1.5, 0.5, 0.0), Vector3D::new(-1.5, 0.5, 0.0))
            .sublattice(Some(Sublattice::alternating(2)))
            .build()
            .unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"dimensionality\":2"));
        assert!(json.contains("\"sublattice\":[1,-1]"));

        let back: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);

        let broken = json.replace("\"dimensionality\":2", "\"dimensionality\":1");
        assert!(serde_json::from_str::<Geometry>(&broken).is_err());
    }
}
