/*!
 * Command-line interface for treed
 */

use std::io;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use treed::app;
use treed::clipboard::SystemClipboard;
use treed::config::{Args, Config};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Spinner on stderr; indicatif hides it when stderr is not a terminal
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} directories {wide_msg:.dim.white}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));

    let result = app::run(
        &config,
        Arc::new(progress.clone()),
        &SystemClipboard::new(),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    if let Err(e) = result {
        progress.finish_and_clear();
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
