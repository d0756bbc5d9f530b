/*!
 * Configuration handling for treed
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::types::OmitSet;
use crate::{bail, ensure};

/// Command-line arguments for treed
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treed",
    version = env!("CARGO_PKG_VERSION"),
    about = "Display the folder structure as a tree",
    long_about = "Display the folder structure as a tree. Standard directories (like .git and node_modules) are omitted by default. Use -o to specify additional folder names to omit and -c to copy the output to the clipboard."
)]
pub struct Args {
    /// Root directory to display
    #[clap(default_value = ".")]
    pub directory: PathBuf,

    /// Folder names to omit (do not list their content) when encountered
    #[clap(short = 'o', long = "omit", num_args = 0.., value_name = "NAME")]
    pub omit: Vec<String>,

    /// Copy the resulting folder structure to the clipboard
    #[clap(short = 'c', long = "clipboard")]
    pub clipboard: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to render
    pub target_dir: PathBuf,

    /// Directory names that are listed but not descended into
    pub omit: OmitSet,

    /// Copy output to clipboard
    pub clipboard: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut omit = OmitSet::with_defaults();
        omit.extend(args.omit);

        Self {
            target_dir: args.directory,
            omit,
            clipboard: args.clipboard,
        }
    }

    /// Validate the configuration
    ///
    /// A root that cannot be read is accepted here; it renders as a
    /// permission placeholder instead of failing the run.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            bail!(
                PathNotFound,
                "Target directory not found: {}",
                self.target_dir.display()
            );
        }

        ensure!(
            self.target_dir.is_dir(),
            NotADirectory,
            "Target is a file, not a directory: {}",
            self.target_dir.display()
        );

        Ok(())
    }
}
