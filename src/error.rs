use thiserror::Error;

/// Convenience result type for light-curve loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by light-curve loading.
///
/// This is a single error enum shared across FITS and delimited-text loading.
/// Format problems (`Fits`/`Delimited`/`CellParse`) and schema problems
/// (`MissingColumn`/`HeaderlessColumnCount`) are fatal for the file being
/// loaded but must not abort sibling files in a batch.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// FITS table could not be read (corrupt file, cfitsio failure).
    #[error("error reading fits table: {0}")]
    Fits(#[from] fitsio::errors::Error),

    /// Delimited text could not be parsed (malformed rows, ragged records).
    #[error("error reading delimited file: {0}")]
    Delimited(#[from] csv::Error),

    /// The FITS file opened but its table layout is not one we can ingest.
    #[error("unsupported fits layout: {message}")]
    FitsLayout { message: String },

    /// A headerless delimited file must be exactly two columns wide.
    #[error("a headerless file must have exactly two columns (time, flux); found {found}")]
    HeaderlessColumnCount { found: usize },

    /// A required column (time or flux, under its configured name) is absent.
    #[error("required column '{name}' not found. columns={available:?}")]
    MissingColumn {
        name: String,
        available: Vec<String>,
    },

    /// No reader in the registry claimed the path. This cannot happen with
    /// the built-in registry, whose delimited reader is a catch-all.
    #[error("no format reader claims path ({})", path.display())]
    UnclaimedPath { path: std::path::PathBuf },

    /// A selected time/flux cell holds a non-numeric value.
    #[error("failed to parse value at row {row} column '{column}' (raw='{raw}'): expected a number")]
    CellParse {
        row: usize,
        column: String,
        raw: String,
    },
}

/// Convenience result type for configuration resolution.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type returned by configuration resolution.
///
/// Any of these aborts the whole run: configuration is a precondition, read
/// once up front, not a per-file concern. A *missing* configuration file is
/// not an error (every value falls back to its default).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid INI.
    #[error("invalid configuration file: {0}")]
    Parse(#[from] ini::ParseError),

    /// A supplied value could not be coerced to its schema-declared type.
    #[error("invalid value for {section}.{key} (raw='{raw}'): expected {expected}")]
    Coercion {
        section: String,
        key: String,
        raw: String,
        expected: &'static str,
    },
}
