/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides the command-line interface for tbgeom-rs. Every
//! subcommand is translated into a [`JobConfig`] and run through it.

use crate::input::{JobConfig, JobReport, LatticeSpec, SupercellSpec};
use crate::lattice::SquidParameters;
use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lattice geometry, supercell and k-point construction
#[derive(Debug, Parser)]
#[command(name = "tbgeom-rs", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a geometry and write its positions
    Build(BuildArgs),
    /// Build a geometry and write its default k-point path
    Kpoints(KpointsArgs),
    /// Run a job described by a JSON configuration file
    Run {
        /// Path to the job configuration
        config: PathBuf,
    },
}

/// Lattice families available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LatticeKind {
    Chain,
    Honeycomb,
    Square,
    Kagome,
    HoneycombSquareCell,
    ArmchairRibbon,
    ZigzagRibbon,
    SquareRibbon,
    TetramerRibbon,
    SquareZigzagRibbon,
    Squid,
}

#[derive(Debug, Args)]
pub struct GeometryArgs {
    /// Lattice family
    #[arg(short, long, value_enum, default_value_t = LatticeKind::Honeycomb)]
    pub lattice: LatticeKind,

    /// Width of ribbons, or ring thickness of the squid
    #[arg(short = 'n', long, default_value_t = 4)]
    pub size: usize,

    /// Supercell multiplicity along every periodic direction
    #[arg(long)]
    pub supercell: Option<usize>,

    /// Remove periodicity after building
    #[arg(long)]
    pub finite: bool,
}

impl GeometryArgs {
    pub fn lattice_spec(&self) -> LatticeSpec {
        let n = self.size;
        match self.lattice {
            LatticeKind::Chain => LatticeSpec::Chain,
            LatticeKind::Honeycomb => LatticeSpec::Honeycomb,
            LatticeKind::Square => LatticeSpec::Square,
            LatticeKind::Kagome => LatticeSpec::Kagome,
            LatticeKind::HoneycombSquareCell => LatticeSpec::HoneycombSquareCell,
            LatticeKind::ArmchairRibbon => LatticeSpec::HoneycombArmchairRibbon { ntetramers: n },
            LatticeKind::ZigzagRibbon => LatticeSpec::HoneycombZigzagRibbon { ntetramers: n },
            LatticeKind::SquareRibbon => LatticeSpec::SquareRibbon { natoms: n },
            LatticeKind::TetramerRibbon => LatticeSpec::SquareTetramerRibbon { ntetramers: n },
            LatticeKind::SquareZigzagRibbon => LatticeSpec::SquareZigzagRibbon { npairs: n },
            LatticeKind::Squid => LatticeSpec::SquidSquare(SquidParameters {
                width: n,
                ..SquidParameters::default()
            }),
        }
    }

    fn job(&self) -> JobConfig {
        JobConfig {
            lattice: self.lattice_spec(),
            supercell: self.supercell.map(SupercellSpec::Uniform),
            finite: self.finite,
            ..JobConfig::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Position file to write
    #[arg(short, long, default_value = "POSITIONS.OUT")]
    pub positions: PathBuf,

    /// Optional JSON dump of the full geometry
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct KpointsArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Number of k-points
    #[arg(long, default_value_t = 400)]
    pub nk: usize,

    /// k-list file to write
    #[arg(short, long, default_value = "klist.in")]
    pub output: PathBuf,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Translate the command line into a job
    pub fn into_job(self) -> anyhow::Result<JobConfig> {
        let job = match self.command {
            Command::Build(args) => JobConfig {
                positions_path: Some(args.positions),
                geometry_json: args.json,
                ..args.geometry.job()
            },
            Command::Kpoints(args) => JobConfig {
                nk: args.nk,
                klist_path: Some(args.output),
                ..args.geometry.job()
            },
            Command::Run { config } => JobConfig::from_file(&config)
                .with_context(|| format!("failed to load job from {}", config.display()))?,
        };
        Ok(job)
    }
}

/// Run the command line
pub fn run(cli: Cli) -> anyhow::Result<JobReport> {
    let job = cli.into_job()?;
    let report = job.run().context("geometry job failed")?;
    Ok(report)
}
