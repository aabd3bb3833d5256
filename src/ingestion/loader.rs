//! Unified light-curve loading entrypoint.
//!
//! Most callers should use [`load_light_curve`], which:
//!
//! - dispatches the path to the first [`FormatReader`] that claims it
//! - validates that the configured time/flux columns are present
//! - drops rows with missing/NaN values (recorded as a [`Notice`])
//! - stable-sorts by ascending time and normalizes to the canonical
//!   `time`/`flux` columns
//! - optionally reports success/failure/alerts/notices to a [`LoadObserver`]

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::{LightCurve, LightCurvePoint, Notice, RawTable, Value};

use super::delimited::DelimitedReader;
use super::fits::FitsReader;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// A format reader that can claim a path and parse it into a [`RawTable`].
///
/// Readers are tried in registry order; the first claimant wins. Adding a
/// format means adding a reader, not touching dispatch logic.
pub trait FormatReader: Send + Sync {
    /// Short format name used in observer context and logs.
    fn name(&self) -> &'static str;

    /// Whether this reader handles the given path.
    fn can_read(&self, path: &Path) -> bool;

    /// Parse the file into a generic table. Column names must come out
    /// lowercased.
    fn read(&self, path: &Path, options: &LoadOptions) -> LoadResult<RawTable>;
}

/// The built-in reader registry: FITS first, delimited text as the catch-all
/// for every other extension (`.csv`, `.dat`, `.txt`, unknown, none).
pub fn default_readers() -> Vec<Box<dyn FormatReader>> {
    vec![Box::new(FitsReader), Box::new(DelimitedReader)]
}

/// Options controlling light-curve loading.
///
/// Use [`Default`] for the canonical `time`/`flux` column names.
#[derive(Clone)]
pub struct LoadOptions {
    /// Name of the time column in the input (matched case-insensitively).
    pub time_column: String,
    /// Name of the flux column in the input (matched case-insensitively).
    pub flux_column: String,
    /// Optional observer for logging/alerts/notices.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("time_column", &self.time_column)
            .field("flux_column", &self.flux_column)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            time_column: "time".to_string(),
            flux_column: "flux".to_string(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl LoadOptions {
    /// Options using the configured column names from a resolved run
    /// configuration (`DataColumn.time_col_name` / `DataColumn.flux_col_name`).
    pub fn with_columns(time_column: impl Into<String>, flux_column: impl Into<String>) -> Self {
        Self {
            time_column: time_column.into(),
            flux_column: flux_column.into(),
            ..Self::default()
        }
    }
}

/// A successfully loaded curve plus the notices produced along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// The normalized curve.
    pub curve: LightCurve,
    /// Informational notices (e.g. dropped-row counts). Never fatal.
    pub notices: Vec<Notice>,
}

/// Load a light-curve file using the built-in reader registry.
///
/// # Examples
///
/// ```no_run
/// use multimodes::ingestion::{load_light_curve, LoadOptions};
///
/// # fn main() -> Result<(), multimodes::LoadError> {
/// let outcome = load_light_curve("star.csv", &LoadOptions::default())?;
/// println!("observations={}", outcome.curve.len());
/// # Ok(())
/// # }
/// ```
pub fn load_light_curve(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<LoadOutcome> {
    let readers = default_readers();
    load_light_curve_with_readers(path, options, &readers)
}

/// Load a light-curve file dispatching over a caller-supplied reader set.
///
/// When an observer is configured, this function reports:
///
/// - `on_notice` once per notice, then `on_success` with row/drop stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn load_light_curve_with_readers(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    readers: &[Box<dyn FormatReader>],
) -> LoadResult<LoadOutcome> {
    let path = path.as_ref();
    let reader = readers
        .iter()
        .find(|r| r.can_read(path))
        .ok_or_else(|| LoadError::UnclaimedPath {
            path: path.to_path_buf(),
        })?;

    let ctx = LoadContext {
        path: path.to_path_buf(),
        format: reader.name(),
    };

    let result = read_and_normalize(reader.as_ref(), path, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(outcome) => {
                for notice in &outcome.notices {
                    obs.on_notice(&ctx, notice);
                }
                obs.on_success(
                    &ctx,
                    LoadStats {
                        rows: outcome.curve.len(),
                        dropped: dropped_count(&outcome.notices),
                    },
                );
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn read_and_normalize(
    reader: &dyn FormatReader,
    path: &Path,
    options: &LoadOptions,
) -> LoadResult<LoadOutcome> {
    let table = reader.read(path, options)?;

    let time_name = options.time_column.trim().to_ascii_lowercase();
    let flux_name = options.flux_column.trim().to_ascii_lowercase();
    let time_idx = require_column(&table, &time_name, &options.time_column)?;
    let flux_idx = require_column(&table, &flux_name, &options.flux_column)?;

    let total = table.row_count();
    let mut points = Vec::with_capacity(total);
    for (row_idx, row) in table.rows.iter().enumerate() {
        let time = numeric_cell(row, time_idx, row_idx, &time_name)?;
        let flux = numeric_cell(row, flux_idx, row_idx, &flux_name)?;
        if let (Some(time), Some(flux)) = (time, flux) {
            points.push(LightCurvePoint { time, flux });
        }
    }

    let mut notices = Vec::new();
    let dropped = total - points.len();
    if dropped > 0 {
        notices.push(Notice::RowsDropped { dropped });
    }

    // Stable, so duplicate times keep their file order.
    points.sort_by(|a, b| a.time.total_cmp(&b.time));

    Ok(LoadOutcome {
        curve: LightCurve::new(points),
        notices,
    })
}

fn require_column(table: &RawTable, lowercased: &str, requested: &str) -> LoadResult<usize> {
    table
        .column_index(lowercased)
        .ok_or_else(|| LoadError::MissingColumn {
            name: requested.to_string(),
            available: table.columns.clone(),
        })
}

/// Extract a cell as an optional finite float.
///
/// `Null` and non-finite floats count as missing (the row will be dropped);
/// text in a selected column is a hard parse error.
fn numeric_cell(
    row: &[Value],
    col_idx: usize,
    row_idx: usize,
    column: &str,
) -> LoadResult<Option<f64>> {
    match row.get(col_idx) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Float64(v)) if v.is_finite() => Ok(Some(*v)),
        Some(Value::Float64(_)) => Ok(None),
        Some(Value::Utf8(raw)) => Err(LoadError::CellParse {
            row: row_idx + 1,
            column: column.to_string(),
            raw: raw.clone(),
        }),
    }
}

fn dropped_count(notices: &[Notice]) -> usize {
    notices
        .iter()
        .map(|n| match n {
            Notice::RowsDropped { dropped } => *dropped,
            _ => 0,
        })
        .sum()
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Delimited(err) => match err.kind() {
            csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::Fits(_)
        | LoadError::FitsLayout { .. }
        | LoadError::HeaderlessColumnCount { .. }
        | LoadError::MissingColumn { .. }
        | LoadError::CellParse { .. }
        | LoadError::UnclaimedPath { .. } => LoadSeverity::Error,
    }
}

/// Convenience helper for callers that want an owned request object.
///
/// Useful for enqueueing load work in a job system.
#[derive(Clone)]
pub struct LoadRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling loading.
    pub options: LoadOptions,
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl LoadRequest {
    /// Execute the request by calling [`load_light_curve`].
    pub fn run(&self) -> LoadResult<LoadOutcome> {
        load_light_curve(&self.path, &self.options)
    }
}
