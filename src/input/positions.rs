/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Two-column position files
//!
//! Each non-blank row holds `<x> <y>` separated by whitespace. There is no
//! header; `#` starts a comment.

use super::errors::{InputError, Result};
use crate::geometry::{Axes, Dimensionality, Geometry, GeometryBuilder};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn malformed(line: usize, message: String) -> InputError {
    InputError::MalformedInput { line, message }
}

/// Parse a finite geometry from a position listing
///
/// x and y are recentred to zero mean and z is set to zero.
pub fn parse_positions<R: BufRead>(reader: R) -> Result<Geometry> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let content = match line.split_once('#') {
            Some((before, _)) => before,
            None => line.as_str(),
        };
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 2 {
            return Err(malformed(
                line_number,
                format!("expected 2 columns, found {}", fields.len()),
            ));
        }
        for (field, column) in fields.iter().zip([&mut x, &mut y]) {
            let value = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| malformed(line_number, format!("invalid number '{}'", field)))?;
            column.push(value);
        }
    }

    if x.is_empty() {
        return Err(malformed(0, "no positions found".to_string()));
    }

    let mut axes = Axes::planar(x, y);
    axes.recentre_xy();
    let g = GeometryBuilder::new(Dimensionality::Finite, axes)
        .name("read")
        .build()?;
    debug!("parsed {} positions", g.atom_count());
    Ok(g)
}

/// Read a finite geometry from a position file
pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Geometry> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let g = parse_positions(BufReader::new(file))?;
    info!("read {} positions from {}", g.atom_count(), path.display());
    Ok(g)
}

/// Write the in-plane positions of `g` as `<x> <y>` rows
pub fn write_positions_to<W: Write>(writer: &mut W, g: &Geometry) -> Result<()> {
    for p in g.positions() {
        writeln!(writer, "{}   {}", p.x, p.y)?;
    }
    Ok(())
}

/// Write a position file
pub fn write_positions<P: AsRef<Path>>(path: P, g: &Geometry) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_positions_to(&mut writer, g)?;
    writer.flush()?;
    info!("wrote {} positions to {}", g.atom_count(), path.display());
    Ok(())
}
