//! Canonical Module Naming
//!
//! A file's display name is its path with a configured root prefix removed,
//! the source suffix stripped, and path separators replaced by dots.

use std::path::Path;

/// Derive the canonical dotted-path name for a source file.
///
/// `pkg/sub/util.py` relative to root `pkg` becomes `sub.util`. A path
/// outside the root falls back to its full dotted form.
pub fn canonical_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let stem = relative.with_extension("");

    stem.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_strips_root_and_suffix() {
        let name = canonical_name(Path::new("src/pkg/util.py"), Path::new("src"));
        assert_eq!(name, "pkg.util");
    }

    #[test]
    fn test_top_level_file() {
        let name = canonical_name(Path::new("src/main.py"), Path::new("src"));
        assert_eq!(name, "main");
    }

    #[test]
    fn test_deep_nesting() {
        let name = canonical_name(
            Path::new("project/a/b/c/mod.py"),
            Path::new("project"),
        );
        assert_eq!(name, "a.b.c.mod");
    }

    #[test]
    fn test_path_outside_root_uses_full_path() {
        let name = canonical_name(Path::new("elsewhere/thing.py"), Path::new("src"));
        assert_eq!(name, "elsewhere.thing");
    }

    #[test]
    fn test_same_relative_path_same_name() {
        // Two files under different roots mapping to one canonical name
        let a = canonical_name(&PathBuf::from("r1/pkg/m.py"), Path::new("r1"));
        let b = canonical_name(&PathBuf::from("r2/pkg/m.py"), Path::new("r2"));
        assert_eq!(a, b);
    }
}
