//! docsift - Structural Documentation Extractor for Python Codebases
//!
//! Extracts structural metadata (functions, classes, arguments, docstrings)
//! from Python source files via tree-sitter, and renders it as a plain-text
//! tree, JSON, XML, HTML, Markdown, or relational INSERT statements.
//!
//! ## Quick Start
//!
//! ```ignore
//! use docsift::{ExtractOptions, FileScanner, OutputFormat, doc_from_dir, render};
//!
//! let opts = ExtractOptions { ignore_undocumented: false };
//! let set = doc_from_dir(path, None, FileScanner::new(path), &opts)?;
//! let output = render(&set, OutputFormat::Json)?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: tree-sitter extraction, literal evaluation, file scanning
//! - [`model`]: the normalized documentation model
//! - [`render`]: projections into each output format
//! - [`config`]: layered configuration

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod model;
pub mod render;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{DocError, Result};

// Model
pub use model::{Argument, ClassDoc, DocSet, FunctionDoc, ModuleDoc};

// Analysis
pub use analyzer::{
    ExtractOptions, FileScanner, PythonExtractor, canonical_name, doc_from_dir, doc_from_file,
    doc_from_files,
};

// Rendering
pub use render::{OutputFormat, render};
