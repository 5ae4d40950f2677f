//! Source Analysis Module
//!
//! Extraction of the documentation model from Python sources:
//! - tree-sitter backed module extraction
//! - safe literal evaluation of default values
//! - recursive file scanning and aggregation into a documentation set

pub mod extractor;
pub mod literal;
pub mod naming;
pub mod scanner;

use std::fs;
use std::path::Path;

pub use extractor::{ExtractOptions, PythonExtractor};
pub use naming::canonical_name;
pub use scanner::FileScanner;

use crate::model::{DocSet, ModuleDoc};
use crate::types::{DocError, Result};

/// Extract the documentation model for a single file.
///
/// `root` anchors the canonical dotted name; it defaults to the file's
/// parent directory. Returns `Ok(None)` for an empty source unit.
pub fn doc_from_file(
    path: &Path,
    root: Option<&Path>,
    opts: &ExtractOptions,
) -> Result<Option<ModuleDoc>> {
    let root = root
        .or_else(|| path.parent())
        .unwrap_or_else(|| Path::new(""));
    let name = canonical_name(path, root);

    let content = fs::read_to_string(path)?;
    let extractor = PythonExtractor::new()?;
    extractor.extract(&name, &content, opts)
}

/// Fold a sequence of files into one documentation set.
///
/// A unit that fails to parse is skipped with a diagnostic; the batch
/// continues. Canonical-name collisions are last-write-wins.
pub fn doc_from_files(
    paths: &[std::path::PathBuf],
    root: Option<&Path>,
    opts: &ExtractOptions,
) -> Result<DocSet> {
    let mut set = DocSet::new();

    for path in paths {
        match doc_from_file(path, root, opts) {
            Ok(Some(module)) => set.insert(module),
            Ok(None) => tracing::debug!("skipping empty unit: {}", path.display()),
            Err(err @ DocError::Parse { .. }) => {
                tracing::error!("skipping unit {}: {}", path.display(), err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(set)
}

/// Walk a directory tree and fold every matching source file into one
/// documentation set. Canonical names are anchored at `root`, defaulting to
/// the scanned directory itself.
pub fn doc_from_dir(
    dir: &Path,
    root: Option<&Path>,
    scanner: FileScanner,
    opts: &ExtractOptions,
) -> Result<DocSet> {
    let files = scanner.scan()?;
    tracing::info!("found {} source files under {}", files.len(), dir.display());

    doc_from_files(&files, Some(root.unwrap_or(dir)), opts)
}
