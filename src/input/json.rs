/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! JSON export and import of complete geometries

use super::errors::Result;
use crate::geometry::Geometry;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `g` as pretty-printed JSON
pub fn write_geometry_json<P: AsRef<Path>>(path: P, g: &Geometry) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, g)?;
    writer.flush()?;
    info!("wrote geometry {} to {}", g.name(), path.display());
    Ok(())
}

/// Read a geometry from JSON, re-checking every invariant
pub fn read_geometry_json<P: AsRef<Path>>(path: P) -> Result<Geometry> {
    let file = File::open(path)?;
    let g = serde_json::from_reader(BufReader::new(file))?;
    Ok(g)
}
