//! Source File Scanner
//!
//! Recursive, gitignore-aware directory walking filtered to the Python
//! source suffix. Non-matching files are silently ignored.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::constants::scan::{DEFAULT_MAX_FILE_SIZE, DEFAULT_SKIP_DIRS, SOURCE_SUFFIX};
use crate::types::Result;

pub struct FileScanner {
    root: PathBuf,
    exclude: Vec<String>,
    max_file_size: u64,
    suffix: String,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let exclude = DEFAULT_SKIP_DIRS
            .iter()
            .map(|d| format!("**/{}/**", d))
            .collect();
        Self {
            root: root.as_ref().to_path_buf(),
            exclude,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            suffix: SOURCE_SUFFIX.to_string(),
        }
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Walk the root recursively and collect matching source files.
    /// Walk order is platform-dependent and carries no meaning.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build();

        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if !self.matches_suffix(path) {
                continue;
            }

            if self.should_exclude(path) {
                continue;
            }

            if let Ok(metadata) = path.metadata() {
                if metadata.len() > self.max_file_size {
                    tracing::debug!("skipping oversized file: {}", path.display());
                    continue;
                }
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn matches_suffix(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext == self.suffix)
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return true;
            }
        }

        false
    }
}
