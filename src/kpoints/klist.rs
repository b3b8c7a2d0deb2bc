/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! k-list file persistence
//!
//! The file holds the point count on its first line followed by one
//! `kx ky` pair per line. A file whose body does not match the count is
//! treated as corrupt.

use super::errors::{KPointError, Result};
use super::sampler::{default_path, KPoint};
use crate::geometry::Geometry;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write k-points to any sink in k-list format
pub fn write_klist_to<W: Write>(writer: &mut W, points: &[KPoint]) -> Result<()> {
    writeln!(writer, "{}", points.len())?;
    for k in points {
        writeln!(writer, "{}   {}", k.kx, k.ky)?;
    }
    Ok(())
}

/// Write k-points to a k-list file
pub fn write_klist<P: AsRef<Path>>(path: P, points: &[KPoint]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_klist_to(&mut writer, points)?;
    writer.flush()?;
    info!("wrote {} k-points to {}", points.len(), path.display());
    Ok(())
}

/// Sample the default path of `g` and persist it
pub fn write_default_klist<P: AsRef<Path>>(
    g: &Geometry,
    nk: usize,
    path: P,
) -> Result<Vec<KPoint>> {
    let points = default_path(g, nk)?;
    write_klist(path, &points)?;
    Ok(points)
}

fn malformed(line: usize, message: impl Into<String>) -> KPointError {
    KPointError::MalformedInput {
        line,
        message: message.into(),
    }
}

/// Parse k-points from any reader in k-list format
pub fn read_klist_from<R: BufRead>(reader: R) -> Result<Vec<KPoint>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| malformed(1, "missing point count"))?;
    let header = header?;
    let nk: usize = header
        .trim()
        .parse()
        .map_err(|_| malformed(header_line, format!("invalid point count '{}'", header.trim())))?;

    let mut points = Vec::new();
    for (line_number, line) in lines {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(malformed(
                line_number,
                format!("expected 2 columns, found {}", fields.len()),
            ));
        }
        let parse = |s: &str| {
            s.parse::<f64>()
                .map_err(|_| malformed(line_number, format!("invalid number '{}'", s)))
        };
        points.push(KPoint::new(parse(fields[0])?, parse(fields[1])?));
    }

    if points.len() != nk {
        return Err(malformed(
            header_line,
            format!("header announces {} points, found {}", nk, points.len()),
        ));
    }
    Ok(points)
}

/// Read a k-list file
pub fn read_klist<P: AsRef<Path>>(path: P) -> Result<Vec<KPoint>> {
    let file = File::open(path)?;
    read_klist_from(BufReader::new(file))
}
