//! Delimited-text (`.csv`/`.dat`/`.txt`) reading.
//!
//! Rules:
//!
//! - The file is probed first to decide whether the first line is a header
//!   row: it is a header iff at least one field is a non-empty token that does
//!   not parse as a number. (A file whose header row is all-numeric is
//!   therefore treated as headerless data.)
//! - Headered files keep their own column names, lowercased.
//! - Headerless files must be exactly two columns wide and take the configured
//!   time/flux column names positionally.

use std::fs;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{RawTable, Value};

use super::loader::{FormatReader, LoadOptions};

/// Fallback reader for comma-separated text; claims every path the FITS
/// reader does not.
#[derive(Debug, Default)]
pub struct DelimitedReader;

impl FormatReader for DelimitedReader {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn can_read(&self, _path: &Path) -> bool {
        true
    }

    fn read(&self, path: &Path, options: &LoadOptions) -> LoadResult<RawTable> {
        read_delimited_from_path(path, &options.time_column, &options.flux_column)
    }
}

/// Read a delimited file into a [`RawTable`].
pub fn read_delimited_from_path(
    path: impl AsRef<Path>,
    time_column: &str,
    flux_column: &str,
) -> LoadResult<RawTable> {
    let text = fs::read_to_string(path)?;
    read_delimited_from_str(&text, time_column, flux_column)
}

/// Read delimited data from an in-memory string into a [`RawTable`].
pub fn read_delimited_from_str(
    input: &str,
    time_column: &str,
    flux_column: &str,
) -> LoadResult<RawTable> {
    let mut probe = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());
    let mut first = csv::StringRecord::new();
    if !probe.read_record(&mut first)? {
        // Zero lines at all: an empty table under the configured names.
        return Ok(RawTable::new(
            vec![
                time_column.trim().to_ascii_lowercase(),
                flux_column.trim().to_ascii_lowercase(),
            ],
            Vec::new(),
        ));
    }

    if record_is_header(&first) {
        read_headered(input)
    } else {
        if first.len() != 2 {
            return Err(LoadError::HeaderlessColumnCount { found: first.len() });
        }
        read_headerless(input, time_column, flux_column)
    }
}

fn read_headered(input: &str) -> LoadResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    Ok(RawTable::new(columns, rows))
}

fn read_headerless(input: &str, time_column: &str, flux_column: &str) -> LoadResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input.as_bytes());
    let columns = vec![
        time_column.trim().to_ascii_lowercase(),
        flux_column.trim().to_ascii_lowercase(),
    ];

    let mut rows = Vec::new();
    for result in rdr.records() {
        // A ragged record surfaces as a csv error here, not a silent truncate.
        let record = result?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    Ok(RawTable::new(columns, rows))
}

fn record_is_header(record: &csv::StringRecord) -> bool {
    record.iter().any(|field| {
        let trimmed = field.trim();
        !trimmed.is_empty() && trimmed.parse::<f64>().is_err()
    })
}

fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Value::Null
    } else if let Ok(v) = trimmed.parse::<f64>() {
        // "NaN" parses as f64::NAN and is cleaned out later like a null.
        Value::Float64(v)
    } else {
        Value::Utf8(trimmed.to_owned())
    }
}
