//! `multimodes` is a small library for ingesting astronomical light curves into a
//! normalized in-memory [`types::LightCurve`], and for resolving a run
//! configuration against an embedded typed schema of defaults.
//!
//! The primary entrypoints are [`ingestion::load_light_curve`] (per file) and
//! [`config::resolve`] (once per run).
//!
//! ## What you can load
//!
//! **File formats (dispatched by a reader registry):**
//!
//! - **FITS**: `.fits` binary/ASCII table products (first table HDU)
//! - **Delimited text**: `.csv`, `.dat`, `.txt`, or any other extension —
//!   headered (column names used as-is, lowercased) or headerless (exactly
//!   two columns, named from the configuration)
//!
//! Whatever the input looks like, the output is the same: a two-column
//! `time`/`flux` table with no missing values, sorted by ascending time.
//! Rows dropped during cleaning are reported as structured
//! [`types::Notice`]s alongside the curve, never silently.
//!
//! ## Quick examples
//!
//! Load one file with the canonical column names:
//!
//! ```no_run
//! use multimodes::ingestion::{load_light_curve, LoadOptions};
//!
//! # fn main() -> Result<(), multimodes::LoadError> {
//! let outcome = load_light_curve("star_0042.csv", &LoadOptions::default())?;
//! println!("observations={}", outcome.curve.len());
//! for notice in &outcome.notices {
//!     eprintln!("{notice}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Resolve the run configuration first and feed its column names through:
//!
//! ```no_run
//! use multimodes::config;
//! use multimodes::ingestion::{load_light_curve, LoadOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Coercion failures here abort the run before any file is touched.
//! let resolution = config::resolve("run.cfg")?;
//! let (time_col, flux_col) = resolution.config.data_columns();
//!
//! let options = LoadOptions::with_columns(time_col, flux_col);
//! let outcome = load_light_curve("tess_target.fits", &options)?;
//! println!("observations={}", outcome.curve.len());
//! # Ok(())
//! # }
//! ```
//!
//! Batch a directory, isolating per-file failures:
//!
//! ```no_run
//! use multimodes::batch::{discover_light_curve_files, load_batch};
//! use multimodes::ingestion::LoadOptions;
//!
//! # fn main() -> Result<(), multimodes::LoadError> {
//! let files = discover_light_curve_files("./light_curves")?;
//! for outcome in load_batch(&files, &LoadOptions::default()) {
//!     match outcome.result {
//!         Ok(loaded) => println!("{}: {} observations", outcome.path.display(), loaded.curve.len()),
//!         Err(e) => eprintln!("{}: {e}", outcome.path.display()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: format readers, the unified loading pipeline, observers
//! - [`config`]: schema-driven configuration resolution
//! - [`batch`]: directory discovery and parallel multi-file loading
//! - [`types`]: raw table, light curve, and notice types
//! - [`error`]: error types used across loading and resolution

pub mod batch;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{ConfigError, ConfigResult, LoadError, LoadResult};
