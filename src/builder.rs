/*!
 * Directory walking and tree line rendering
 */

use std::io;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::{Entry, OmitSet, BLANK, BRANCH, CONTINUATION, LAST_BRANCH, PERMISSION_DENIED};

/// Builds the display lines of a directory tree
pub struct TreeBuilder {
    /// Directories that are listed but not descended into
    omit: OmitSet,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl TreeBuilder {
    /// Create a new tree builder
    pub fn new(omit: OmitSet, progress: Arc<ProgressBar>) -> Self {
        Self { omit, progress }
    }

    /// Lines for everything below `root`, without the root label line
    pub fn build(&self, root: &Path) -> Result<Vec<String>> {
        self.build_level(root, "")
    }

    /// Lines for the entries of `dir`, each starting with `prefix`
    ///
    /// Directories whose listing is denied yield a single placeholder line
    /// and never fail the walk. Other errors opening `dir` are returned.
    pub fn build_level(&self, dir: &Path, prefix: &str) -> Result<Vec<String>> {
        let listing = self.list_entries(dir)?;
        self.build_listing(&listing, prefix)
    }

    /// Lines for one directory's listing
    fn build_listing(&self, listing: &Listing, prefix: &str) -> Result<Vec<String>> {
        match listing {
            Listing::Denied => Ok(vec![denied_line(prefix)]),
            Listing::Entries(entries) => self.build_entries(entries, prefix),
        }
    }

    /// Lines for an already sorted listing
    fn build_entries(&self, entries: &[Entry], prefix: &str) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(entries.len());
        let count = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            if !entry.is_dir {
                lines.push(format!("{prefix}{connector}{}", entry.name));
                continue;
            }

            lines.push(format!("{prefix}{connector}{}/", entry.name));
            if self.omit.contains(&entry.name) {
                continue;
            }

            let extension = if is_last { BLANK } else { CONTINUATION };
            let child_prefix = format!("{prefix}{extension}");
            lines.extend(self.build_level(&entry.path, &child_prefix)?);
        }

        Ok(lines)
    }

    /// Sorted immediate entries of `dir`
    ///
    /// Only a failure to open `dir` itself affects the listing as a whole.
    /// An entry that cannot be inspected is still listed by name.
    fn list_entries(&self, dir: &Path) -> Result<Listing> {
        self.progress.inc(1);
        self.progress.set_message(format!("Scanning {}", dir.display()));

        let mut paths = Vec::new();
        for item in WalkDir::new(dir).min_depth(1).max_depth(1) {
            match item {
                Ok(entry) => paths.push(entry.into_path()),
                Err(err) if err.path() == Some(dir) => {
                    if is_permission_denied(err.io_error()) {
                        return Ok(Listing::Denied);
                    }
                    return Err(err.into());
                }
                Err(err) => match err.path() {
                    Some(path) => paths.push(path.to_path_buf()),
                    None => self.progress.suspend(|| {
                        eprintln!("Skipping unreadable entry in {}: {}", dir.display(), err)
                    }),
                },
            }
        }

        // Stat once the directory handle is closed; entries such as
        // /proc/self/fd/N can refer to that handle while it is open.
        let mut entries: Vec<Entry> = paths.into_iter().map(Entry::from_path).collect();
        entries.sort_by(Entry::display_order);
        Ok(Listing::Entries(entries))
    }
}

/// Immediate entries of one directory
enum Listing {
    /// Entries in display order
    Entries(Vec<Entry>),
    /// The directory could not be opened for lack of permission
    Denied,
}

/// Placeholder for a directory that cannot be listed
fn denied_line(prefix: &str) -> String {
    format!("{prefix}{LAST_BRANCH}{PERMISSION_DENIED}")
}

/// Whether an error is a denied read
fn is_permission_denied(err: Option<&io::Error>) -> bool {
    err.map(|e| e.kind() == io::ErrorKind::PermissionDenied)
        .unwrap_or(false)
}

/// Full tree text: the root label line followed by the builder's lines
pub fn render(label: &str, lines: &[String]) -> String {
    let mut output = format!("{label}/");
    for line in lines {
        output.push('\n');
        output.push_str(line);
    }
    output
}
