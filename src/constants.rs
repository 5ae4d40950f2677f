//! Global Constants
//!
//! Centralized constants shared by the extractor and renderers.

/// Docstring handling constants
pub mod docstring {
    /// Placeholder emitted at rendering boundaries when no docstring exists
    pub const MISSING: &str = "N/A";

    /// Parameter marker recognized inside docstrings
    pub const PARAM_MARKER: &str = ":param ";

    /// Return marker recognized inside docstrings
    pub const RETURN_MARKER: &str = ":return:";
}

/// Argument type summaries
pub mod type_name {
    /// Type reported for unannotated arguments
    pub const ANY: &str = "any";

    /// Type reported when the annotation form is not a simple identifier
    pub const UNKNOWN: &str = "unknown";
}

/// Rendering constants
pub mod render {
    /// Line emitted for a module with neither classes nor functions
    pub const EMPTY_MODULE_PLACEHOLDER: &str =
        "This File Does Not Contain Any Functions Or Classes.";

    /// HTML/Markdown replacement for one tab of tree indentation
    pub const HTML_TAB: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";
}

/// File scanning constants
pub mod scan {
    /// Source file suffix recognized during directory walks
    pub const SOURCE_SUFFIX: &str = "py";

    /// Maximum file size considered for extraction (1MB)
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

    /// Directories skipped by default
    pub const DEFAULT_SKIP_DIRS: &[&str] = &[
        "__pycache__",
        ".git",
        ".venv",
        "venv",
        ".tox",
        ".mypy_cache",
        "build",
        "dist",
        "node_modules",
    ];
}
