//! Multi-file runs: discovery and parallel batch loading.
//!
//! Each file loads independently, so a batch fans out across a rayon thread
//! pool. A failure stays confined to its own [`FileOutcome`] and never aborts
//! sibling files; configuration problems, by contrast, are resolved once up
//! front by the caller and abort before any file is touched.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{LoadError, LoadResult};
use crate::ingestion::{load_light_curve, LoadOptions, LoadOutcome};

/// Extensions recognized as light-curve files during discovery.
pub const LIGHT_CURVE_EXTENSIONS: [&str; 4] = ["fits", "csv", "dat", "txt"];

/// Collect light-curve files from one directory level, sorted by path.
///
/// Only regular files with a recognized extension (case-insensitive) are
/// returned; subdirectories are not descended into.
pub fn discover_light_curve_files(dir: impl AsRef<Path>) -> LoadResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| LoadError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let recognized = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                LIGHT_CURVE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if recognized {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// The per-file result of a batch load.
#[derive(Debug)]
pub struct FileOutcome {
    /// The input path.
    pub path: PathBuf,
    /// That file's load result; errors here do not affect sibling files.
    pub result: LoadResult<LoadOutcome>,
}

/// Load many light-curve files in parallel.
///
/// Outcomes come back in input order, one per path, successes and failures
/// alike.
pub fn load_batch(paths: &[PathBuf], options: &LoadOptions) -> Vec<FileOutcome> {
    paths
        .par_iter()
        .map(|path| FileOutcome {
            path: path.clone(),
            result: load_light_curve(path, options),
        })
        .collect()
}
