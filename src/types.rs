//! Core data model types for light-curve ingestion.
//!
//! Format readers parse input files into an intermediate [`RawTable`]; the
//! loading pipeline then validates, cleans, and normalizes it into a
//! [`LightCurve`] with exactly the canonical `time`/`flux` columns.

use std::fmt;

/// A single cell in a [`RawTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit float (the only numeric type light-curve data needs).
    Float64(f64),
    /// UTF-8 string (delimited-text cells that are not numeric, FITS string columns).
    Utf8(String),
}

/// Generic tabular structure produced by a format reader, before validation.
///
/// Column names are lowercased at ingestion, so all later lookups are
/// case-insensitive by construction. Rows are stored in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Lowercased column names, in file order.
    pub columns: Vec<String>,
    /// Row-major cell storage; every row has `columns.len()` cells.
    pub rows: Vec<Vec<Value>>,
}

impl RawTable {
    /// Create a raw table from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by its lowercased name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A single observation: brightness (`flux`) at an instant (`time`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightCurvePoint {
    pub time: f64,
    pub flux: f64,
}

/// Normalized, validated light curve.
///
/// Invariants, guaranteed by the loading pipeline:
///
/// - exactly the two canonical columns, `time` and `flux`
/// - no NaN / missing value in either column
/// - points ordered by ascending `time` (duplicate times keep file order)
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    /// Observations in ascending time order.
    pub points: Vec<LightCurvePoint>,
}

impl LightCurve {
    /// Create a light curve from already-normalized points.
    pub fn new(points: Vec<LightCurvePoint>) -> Self {
        Self { points }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve holds no observations.
    ///
    /// An empty input file yields an empty curve; that is not an error here,
    /// downstream analysis decides what to do with it.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate observation times in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time)
    }

    /// Iterate flux values in time order.
    pub fn fluxes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.flux)
    }
}

/// Non-fatal observational record surfaced alongside a result.
///
/// Notices are returned as structured values (and forwarded to any configured
/// observer) rather than printed as-you-go, so callers and tests can inspect
/// them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Rows removed during cleaning because `time` or `flux` was missing/NaN.
    RowsDropped { dropped: usize },
    /// A whole configuration section was absent and fell back to defaults.
    SectionDefaulted { section: String },
    /// A single configuration key was absent and fell back to its default.
    KeyDefaulted { section: String, key: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::RowsDropped { dropped } => {
                write!(f, "{dropped} rows with missing or NaN values have been removed")
            }
            Notice::SectionDefaulted { section } => {
                write!(f, "using default values for [{section}] in the configuration")
            }
            Notice::KeyDefaulted { section, key } => {
                write!(f, "using default value for {section}.{key} in the configuration")
            }
        }
    }
}
