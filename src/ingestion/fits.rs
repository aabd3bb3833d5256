//! FITS binary-table reading.
//!
//! The first table HDU in the file is ingested. Columns are read whole:
//! numeric columns as `f64` (cfitsio converts integer columns on read, and
//! float nulls arrive as NaN, which cleaning later treats like an empty
//! cell), string columns as UTF-8. Vector (repeat > 1) columns are not
//! supported.

use std::path::Path;

use fitsio::hdu::{FitsHdu, HduInfo};
use fitsio::FitsFile;

use crate::error::{LoadError, LoadResult};
use crate::types::{RawTable, Value};

use super::loader::{FormatReader, LoadOptions};

/// Reader for FITS light-curve products; claims `.fits` paths (any case).
#[derive(Debug, Default)]
pub struct FitsReader;

impl FormatReader for FitsReader {
    fn name(&self) -> &'static str {
        "fits"
    }

    fn can_read(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("fits"))
    }

    fn read(&self, path: &Path, _options: &LoadOptions) -> LoadResult<RawTable> {
        read_fits_from_path(path)
    }
}

/// Read the first table HDU of a FITS file into a [`RawTable`].
pub fn read_fits_from_path(path: impl AsRef<Path>) -> LoadResult<RawTable> {
    let mut fits = FitsFile::open(path)?;
    let hdu_count = fits.num_hdus()?;

    for idx in 0..hdu_count {
        let hdu = fits.hdu(idx)?;
        if let HduInfo::TableInfo {
            column_descriptions,
            num_rows,
        } = &hdu.info
        {
            let names: Vec<String> = column_descriptions.iter().map(|d| d.name.clone()).collect();
            let num_rows = *num_rows;
            return read_table_columns(&mut fits, &hdu, names, num_rows);
        }
    }

    Err(LoadError::FitsLayout {
        message: "no table hdu found in file".to_string(),
    })
}

fn read_table_columns(
    fits: &mut FitsFile,
    hdu: &FitsHdu,
    names: Vec<String>,
    num_rows: usize,
) -> LoadResult<RawTable> {
    let mut columns: Vec<Vec<Value>> = Vec::with_capacity(names.len());
    for name in &names {
        // Try numeric first; fall back to string columns. If neither works,
        // report the numeric read failure as the cause.
        let values: Vec<Value> = match hdu.read_col::<f64>(fits, name) {
            Ok(vs) => vs.into_iter().map(Value::Float64).collect(),
            Err(numeric_err) => match hdu.read_col::<String>(fits, name) {
                Ok(vs) => vs.into_iter().map(Value::Utf8).collect(),
                Err(_) => return Err(LoadError::Fits(numeric_err)),
            },
        };

        if values.len() != num_rows {
            return Err(LoadError::FitsLayout {
                message: format!(
                    "column '{name}' has {} values for {num_rows} rows (vector columns are not supported)",
                    values.len()
                ),
            });
        }
        columns.push(values);
    }

    let mut rows = Vec::with_capacity(num_rows);
    for r in 0..num_rows {
        rows.push(columns.iter().map(|c| c[r].clone()).collect());
    }

    let columns = names
        .iter()
        .map(|n| n.trim().to_ascii_lowercase())
        .collect();
    Ok(RawTable::new(columns, rows))
}
