/*!
 * Utility functions for treed
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Directory names whose contents are never listed unless the user asks
pub static DEFAULT_OMIT: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        ".hg",
        ".svn",
        // Dependencies
        "node_modules",
        "bower_components",
        // Python
        "__pycache__",
        ".venv",
    ]
});

/// Lossy UTF-8 base name of a path, empty when there is none
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Label used for the root line of a tree
///
/// This is the final path segment, or the whole path when the path has no
/// final segment (the filesystem root).
pub fn root_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_label_uses_last_segment() {
        assert_eq!(root_label(Path::new("/home/user/project")), "project");
        assert_eq!(root_label(Path::new("relative/dir")), "dir");
    }

    #[cfg(unix)]
    #[test]
    fn test_root_label_for_filesystem_root() {
        assert_eq!(root_label(Path::new("/")), "/");
    }

    #[test]
    fn test_default_omit_covers_vcs_and_dependencies() {
        assert!(DEFAULT_OMIT.contains(&".git"));
        assert!(DEFAULT_OMIT.contains(&"node_modules"));
    }
}
