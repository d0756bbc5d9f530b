/*!
 * End-to-end run of treed: resolve the root, render, print and export
 */

use std::fs;
use std::io::Write;
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::builder::{render, TreeBuilder};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::utils::root_label;

/// Render the tree described by `config`
pub fn render_tree(config: &Config, progress: Arc<ProgressBar>) -> Result<String> {
    let root = fs::canonicalize(&config.target_dir)
        .with_context(|| format!("Failed to resolve {}", config.target_dir.display()))?;

    let builder = TreeBuilder::new(config.omit.clone(), progress);
    let lines = builder.build(&root)?;
    builder.progress.finish_and_clear();

    Ok(render(&root_label(&root), &lines))
}

/// Render, print to `out` and, when requested, export to `clipboard`
///
/// Clipboard failures are reported on `err` and do not fail the run; the
/// tree has already been printed by then.
pub fn run<C, O, E>(
    config: &Config,
    progress: Arc<ProgressBar>,
    clipboard: &C,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    C: Clipboard + ?Sized,
    O: Write,
    E: Write,
{
    let output = render_tree(config, progress)?;

    writeln!(out, "{}", output)?;
    out.flush()?;

    if config.clipboard {
        match clipboard.send_text(&output) {
            Ok(()) => writeln!(err, "Folder structure copied to clipboard.")?,
            Err(e) => writeln!(err, "Error copying to clipboard: {}", e)?,
        }
    }

    Ok(())
}
