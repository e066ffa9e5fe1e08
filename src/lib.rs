/*!
 * dirclip - Copy the text contents of a directory tree to the clipboard
 *
 * Every file below a root directory (except inside `node_modules`) becomes a
 * `#### FILE: <name>` block; the blocks are joined into one report and handed
 * to the system clipboard.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod renderer;
pub mod report;
pub mod types;
pub mod utils;
pub mod walker;


use tracing::info;
use tracing_subscriber::EnvFilter;

// Re-export main components for easier access
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use config::{Args, Config};
pub use error::{DirClipError, Result};
pub use renderer::{read_text, render_file};
pub use report::{Report, ReportBuilder};
pub use types::{DirectoryVisit, FileReadError, FileRecord};
pub use utils::{format_file_size, is_excluded, EXCLUDED_DIR};
pub use walker::{DirectoryWalker, WalkError};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed to stdout after a successful run
pub const CONFIRMATION: &str = "File names and contents copied to clipboard.";

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or this
/// crate's debug output when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,dirclip=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Collect the configured tree and publish it to `clipboard`
///
/// Returns the report that was published.
pub fn run(config: &Config, clipboard: &dyn Clipboard) -> Result<Report> {
    config.validate()?;

    let report = ReportBuilder::new().build(&config.target_dir)?;
    let rendered = report.render();

    clipboard.copy_to_clipboard(&rendered)?;
    info!(
        "Copied {} to clipboard",
        format_file_size(rendered.len() as u64)
    );

    Ok(report)
}
