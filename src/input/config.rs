/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Job configuration: which lattice to build, how to transform it and
//! which files to write

use super::errors::Result;
use super::json::write_geometry_json;
use super::positions::{read_positions, write_positions};
use crate::geometry::Geometry;
use crate::kpoints::write_default_klist;
use crate::lattice::{self, SquidParameters};
use crate::transform::supercell_2d;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Lattice family and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LatticeSpec {
    Chain,
    Honeycomb,
    Square,
    Kagome,
    HoneycombSquareCell,
    HoneycombArmchairRibbon { ntetramers: usize },
    HoneycombZigzagRibbon { ntetramers: usize },
    SquareRibbon { natoms: usize },
    SquareTetramerRibbon { ntetramers: usize },
    SquareZigzagRibbon { npairs: usize },
    SquidSquare(SquidParameters),
    File { path: PathBuf },
}

impl LatticeSpec {
    /// Run the matching builder
    pub fn build(&self) -> Result<Geometry> {
        let g = match self {
            LatticeSpec::Chain => lattice::chain()?,
            LatticeSpec::Honeycomb => lattice::honeycomb_lattice()?,
            LatticeSpec::Square => lattice::square_lattice()?,
            LatticeSpec::Kagome => lattice::kagome_lattice()?,
            LatticeSpec::HoneycombSquareCell => lattice::honeycomb_lattice_square_cell()?,
            LatticeSpec::HoneycombArmchairRibbon { ntetramers } => {
                lattice::honeycomb_armchair_ribbon(*ntetramers)?
            }
            LatticeSpec::HoneycombZigzagRibbon { ntetramers } => {
                lattice::honeycomb_zigzag_ribbon(*ntetramers)?
            }
            LatticeSpec::SquareRibbon { natoms } => lattice::square_ribbon(*natoms)?,
            LatticeSpec::SquareTetramerRibbon { ntetramers } => {
                lattice::square_tetramer_ribbon(*ntetramers)?
            }
            LatticeSpec::SquareZigzagRibbon { npairs } => lattice::square_zigzag_ribbon(*npairs)?,
            LatticeSpec::SquidSquare(params) => lattice::squid_square(params)?,
            LatticeSpec::File { path } => read_positions(path)?,
        };
        Ok(g)
    }
}

/// Supercell multiplicity: one number for every periodic direction, or an
/// explicit `[n1, n2]` pair for plane geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupercellSpec {
    Uniform(usize),
    Planar([usize; 2]),
}

impl SupercellSpec {
    pub fn apply(&self, g: &Geometry) -> Result<Geometry> {
        let result = match *self {
            SupercellSpec::Uniform(n) => g.supercell(n)?,
            SupercellSpec::Planar([n1, n2]) => supercell_2d(g, n1, n2)?,
        };
        Ok(result)
    }
}

/// Complete description of a geometry job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub lattice: LatticeSpec,
    pub supercell: Option<SupercellSpec>,
    /// Drop periodicity after the supercell step
    pub finite: bool,
    /// Number of k-points for the k-list
    pub nk: usize,
    pub klist_path: Option<PathBuf>,
    pub positions_path: Option<PathBuf>,
    pub geometry_json: Option<PathBuf>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeSpec::Honeycomb,
            supercell: None,
            finite: false,
            nk: 400,
            klist_path: None,
            positions_path: None,
            geometry_json: None,
        }
    }
}

/// Outcome of [`JobConfig::run`]
#[derive(Debug, Clone)]
pub struct JobReport {
    pub geometry: Geometry,
    pub kpoints: usize,
    pub written: Vec<PathBuf>,
}

impl JobConfig {
    /// Load a job from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Build the lattice and apply the requested transforms
    pub fn build_geometry(&self) -> Result<Geometry> {
        let mut g = self.lattice.build()?;
        if let Some(spec) = &self.supercell {
            g = spec.apply(&g)?;
        }
        if self.finite {
            g = g.set_finite()?;
        }
        Ok(g)
    }

    /// Build the geometry and write every requested output
    pub fn run(&self) -> Result<JobReport> {
        let geometry = self.build_geometry()?;
        info!(
            "{}: {} atoms, {}",
            geometry.name(),
            geometry.atom_count(),
            geometry.dimensionality()
        );

        let mut written = Vec::new();
        let mut kpoints = 0;

        if let Some(path) = &self.positions_path {
            write_positions(path, &geometry)?;
            written.push(path.clone());
        }
        if let Some(path) = &self.geometry_json {
            write_geometry_json(path, &geometry)?;
            written.push(path.clone());
        }
        if let Some(path) = &self.klist_path {
            kpoints = write_default_klist(&geometry, self.nk, path)?.len();
            written.push(path.clone());
        }

        Ok(JobReport {
            geometry,
            kpoints,
            written,
        })
    }
}
