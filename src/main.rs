/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for tbgeom-rs

use clap::Parser;
use tbgeom_rs::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    println!("tbgeom-rs v{}", tbgeom_rs::VERSION);
    println!("-----------------------------------------------------------");

    let report = cli::run(args)?;

    let g = &report.geometry;
    println!("Geometry:    {}", g.name());
    println!("Atoms:       {}", g.atom_count());
    println!("Periodicity: {}", g.dimensionality());
    if let Some(spacing) = g.cell_spacing() {
        println!("Cell:        {:.6}", spacing);
    }
    if report.kpoints > 0 {
        println!("k-points:    {}", report.kpoints);
    }
    for path in &report.written {
        println!("Wrote        {}", path.display());
    }

    Ok(())
}
