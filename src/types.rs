/*!
 * Core types and data structures for the treed application
 */

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::utils::{file_name_lossy, DEFAULT_OMIT};

/// Connector for every entry but the last in a listing
pub const BRANCH: &str = "├── ";
/// Connector for the last entry in a listing
pub const LAST_BRANCH: &str = "└── ";
/// Prefix extension below a non-last directory
pub const CONTINUATION: &str = "│   ";
/// Prefix extension below the last directory
pub const BLANK: &str = "    ";
/// Placeholder emitted when a directory cannot be listed
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

/// An immediate entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name (lossy UTF-8)
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// Whether the entry is a directory, following symlinks
    pub is_dir: bool,
}

impl Entry {
    /// Entry for `path` with a known directory flag
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        Self {
            name: file_name_lossy(&path),
            path,
            is_dir,
        }
    }

    /// Entry for `path`, following symlinks to decide whether it is a
    /// directory. Anything that cannot be inspected counts as a file.
    pub fn from_path(path: PathBuf) -> Self {
        let is_dir = path.is_dir();
        Self::new(path, is_dir)
    }

    /// Display ordering: directories first, then case-insensitive name.
    ///
    /// Names that only differ in case fall back to byte order so the result
    /// does not depend on the order the OS returned them in.
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .is_dir
            .cmp(&self.is_dir)
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Directory base names whose contents are not recursed into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OmitSet {
    names: HashSet<String>,
}

impl OmitSet {
    /// An empty set; nothing is omitted
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults (version control and dependency caches)
    pub fn with_defaults() -> Self {
        DEFAULT_OMIT.iter().copied().collect()
    }

    /// Add a directory base name
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Exact, case-sensitive base name lookup
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OmitSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for OmitSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from(name),
            is_dir,
        }
    }

    #[test]
    fn test_display_order_puts_directories_first() {
        let mut entries = vec![
            entry("a.txt", false),
            entry("zeta", true),
            entry("Beta", true),
            entry("B.md", false),
        ];
        entries.sort_by(Entry::display_order);

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Beta", "zeta", "a.txt", "B.md"]);
    }

    #[test]
    fn test_display_order_breaks_case_ties() {
        let mut entries = vec![entry("readme", false), entry("README", false)];
        entries.sort_by(Entry::display_order);
        assert_eq!(entries[0].name, "README");
        assert_eq!(entries[1].name, "readme");
    }

    #[test]
    fn test_from_path_treats_uninspectable_as_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Entry::from_path(dir.path().join("vanished"));
        assert_eq!(missing.name, "vanished");
        assert!(!missing.is_dir);

        let present = Entry::from_path(dir.path().to_path_buf());
        assert!(present.is_dir);
    }

    #[test]
    fn test_omit_set_defaults_and_extension() {
        let mut omit = OmitSet::with_defaults();
        assert!(omit.contains(".git"));
        assert!(omit.contains("node_modules"));
        assert!(!omit.contains("temp"));

        omit.extend(["temp", "build"]);
        assert!(omit.contains("temp"));
        assert!(omit.contains("build"));
    }

    #[test]
    fn test_omit_set_is_exact_match() {
        let omit: OmitSet = ["temp"].into_iter().collect();
        assert!(!omit.contains("Temp"));
        assert!(!omit.contains("temp2"));
        assert!(!omit.contains("te*"));
        assert_eq!(omit.len(), 1);
    }
}
