//! Light-curve loading entrypoints and implementations.
//!
//! Most callers should use [`load_light_curve`] (from [`loader`]) which:
//!
//! - dispatches the path over the format-reader registry (FITS, then
//!   delimited text as the catch-all)
//! - validates, cleans, sorts, and normalizes into a
//!   [`crate::types::LightCurve`]
//! - optionally reports success/failure/alerts/notices to a [`LoadObserver`]
//!
//! Format-specific readers are also available under:
//! - [`delimited`]
//! - [`fits`]

pub mod delimited;
pub mod fits;
pub mod loader;
pub mod observability;

pub use delimited::DelimitedReader;
pub use fits::FitsReader;
pub use loader::{
    default_readers, load_light_curve, load_light_curve_with_readers, FormatReader, LoadOptions,
    LoadOutcome, LoadRequest,
};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
