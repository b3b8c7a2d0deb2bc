/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_abs_diff_eq;
use std::fs::{self, File};
use std::io::Write;
use tbgeom_rs::geometry::Dimensionality;
use tbgeom_rs::input::{
    read_geometry_json, read_positions, write_geometry_json, write_positions, InputError,
    JobConfig, LatticeSpec, SupercellSpec,
};
use tbgeom_rs::lattice;
use tbgeom_rs::utils::mean;
use tempfile::tempdir;

/// Test helper to create a temporary input file
fn create_test_file(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join(name);
    let mut file = File::create(&file_path).unwrap();
    write!(file, "{}", content).unwrap();
    (dir, file_path)
}

#[test]
fn test_read_positions_file() {
    let (_dir, path) = create_test_file("POSITIONS.OUT", "1.0 1.0\n3.0 1.0\n2.0 4.0\n");
    let g = read_positions(&path).unwrap();
    assert_eq!(g.atom_count(), 3);
    assert_eq!(g.dimensionality(), Dimensionality::Finite);
    assert_eq!(g.cell_spacing(), None);

    let axes = g.axes();
    assert_abs_diff_eq!(mean(&axes.x), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(mean(&axes.y), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(axes.x[1] - axes.x[0], 2.0, epsilon = 1e-12);
}

#[test]
fn test_malformed_positions_file() {
    let (_dir, path) = create_test_file("POSITIONS.OUT", "1.0 1.0\n3.0\n");
    match read_positions(&path) {
        Err(InputError::MalformedInput { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_missing_positions_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        read_positions(dir.path().join("missing")),
        Err(InputError::IoError(_))
    ));
}

#[test]
fn test_positions_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("POSITIONS.OUT");
    let ribbon = lattice::honeycomb_armchair_ribbon(2).unwrap();
    write_positions(&path, &ribbon).unwrap();

    let back = read_positions(&path).unwrap();
    assert_eq!(back.atom_count(), ribbon.atom_count());
    for (a, b) in ribbon.positions().iter().zip(back.positions()) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-10);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-10);
    }
}

#[test]
fn test_geometry_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("geometry.json");
    let g = lattice::honeycomb_lattice().unwrap().supercell(2).unwrap();
    write_geometry_json(&path, &g).unwrap();
    assert_eq!(read_geometry_json(&path).unwrap(), g);
}

#[test]
fn test_invalid_geometry_json() {
    let (_dir, path) = create_test_file(
        "geometry.json",
        r#"{"positions": [{"x": 0.0, "y": 0.0, "z": 0.0}],
            "dimensionality": 1, "sublattice": [1, -1]}"#,
    );
    assert!(matches!(
        read_geometry_json(&path),
        Err(InputError::JsonError(_))
    ));
}

#[test]
fn test_job_writes_requested_outputs() {
    let dir = tempdir().unwrap();
    let config = JobConfig {
        lattice: LatticeSpec::Honeycomb,
        supercell: Some(SupercellSpec::Planar([2, 1])),
        nk: 10,
        klist_path: Some(dir.path().join("klist.in")),
        positions_path: Some(dir.path().join("POSITIONS.OUT")),
        geometry_json: Some(dir.path().join("geometry.json")),
        ..JobConfig::default()
    };

    let report = config.run().unwrap();
    assert_eq!(report.geometry.atom_count(), 4);
    assert_eq!(report.kpoints, 10);
    assert_eq!(report.written.len(), 3);
    for path in &report.written {
        assert!(path.exists(), "{} missing", path.display());
    }
    let positions = fs::read_to_string(dir.path().join("POSITIONS.OUT")).unwrap();
    assert_eq!(positions.lines().count(), 4);
}

#[test]
fn test_job_from_file() {
    let data = tempdir().unwrap();
    let positions = data.path().join("flake.dat");
    fs::write(&positions, "0 0\n1 0\n0.5 0.8660254037844386\n").unwrap();

    let json = format!(
        r#"{{"lattice": {{"kind": "file", "path": {:?}}}}}"#,
        positions.to_str().unwrap()
    );
    let (_dir, config_path) = create_test_file("job.json", &json);

    let config = JobConfig::from_file(&config_path).unwrap();
    let g = config.build_geometry().unwrap();
    assert_eq!(g.atom_count(), 3);
    assert_eq!(g.dimensionality(), Dimensionality::Finite);
}

#[test]
fn test_job_klist_for_chain_fails() {
    let dir = tempdir().unwrap();
    let config = JobConfig {
        lattice: LatticeSpec::Chain,
        klist_path: Some(dir.path().join("klist.in")),
        ..JobConfig::default()
    };
    assert!(matches!(config.run(), Err(InputError::KPointError(_))));
}
