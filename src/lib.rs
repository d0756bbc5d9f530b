/*!
 * treed - Display a folder structure as a tree
 *
 * This library renders a directory hierarchy as indented text, skipping
 * the contents of well-known noise directories, and can hand the result
 * to the system clipboard.
 */

pub mod app;
pub mod builder;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use builder::{render, TreeBuilder};
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use config::{Args, Config};
pub use error::{Result, TreedError};
pub use types::{Entry, OmitSet};
pub use utils::root_label;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
