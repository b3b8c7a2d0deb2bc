/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use tbgeom_rs::geometry::{
    axes_to_positions, matrix_to_positions, positions_to_axes, Axes, Dimensionality,
    GeometryBuilder, GeometryError, Sublattice, Vector3D,
};
use tbgeom_rs::lattice;

#[test]
fn test_sync_is_idempotent() {
    let positions = lattice::honeycomb_lattice_square_cell()
        .unwrap()
        .positions()
        .to_vec();
    let synced = axes_to_positions(&positions_to_axes(&positions)).unwrap();
    assert_eq!(synced, positions);
}

#[test]
fn test_position_matrix() {
    let g = lattice::kagome_lattice().unwrap();
    let matrix = g.position_matrix();
    assert_eq!(matrix.dim(), (3, 3));
    assert_eq!(matrix_to_positions(&matrix).unwrap(), g.positions());
}

#[test]
fn test_shape_mismatch_is_reported() {
    let axes = Axes::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], vec![0.0]);
    let err = GeometryBuilder::new(Dimensionality::Finite, axes)
        .build()
        .unwrap_err();
    assert!(matches!(err, GeometryError::ShapeMismatch(_)));
}

#[test]
fn test_error_messages() {
    let err = lattice::honeycomb_lattice()
        .unwrap()
        .set_finite()
        .unwrap()
        .supercell(2)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "supercell is not supported for a 0D (finite) geometry"
    );

    let err = tbgeom_rs::transform::supercell_1d(&lattice::square_lattice().unwrap(), 2)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "supercell_1d requires a 1D (chain) geometry, found 2D (plane)"
    );
}

#[test]
fn test_set_finite_keeps_atoms() {
    let ribbon = lattice::honeycomb_armchair_ribbon(2).unwrap();
    let flake = ribbon.set_finite().unwrap();
    assert_eq!(flake.positions(), ribbon.positions());
    assert_eq!(flake.sublattice(), ribbon.sublattice());
    assert_eq!(flake.dimensionality(), Dimensionality::Finite);
    assert_eq!(flake.cell_spacing(), None);
    // the source geometry is unchanged
    assert_eq!(ribbon.cell_spacing(), Some(3.0));
}

#[test]
fn test_manual_geometry() {
    let g = GeometryBuilder::new(
        Dimensionality::Plane,
        Axes::planar(vec![0.0, 1.0], vec![0.0, 0.0]),
    )
    .name("dimer")
    .lattice_vectors(Vector3D::new(2.0, 0.0, 0.0), Vector3D::new(0.0, 3.0, 0.0))
    .sublattice(Some(vec![Sublattice::A, Sublattice::B]))
    .shift_kspace(true)
    .build()
    .unwrap();
    assert_eq!(g.name(), "dimer");
    assert!(g.shift_kspace());
    assert_eq!(g.with_name("other").name(), "other");
}
