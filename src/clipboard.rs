/*!
 * Clipboard support for dirclip
 *
 * Provides functionality for copying the report to the system clipboard
 * with automatic detection of available clipboard mechanisms.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// The native clipboard could not be opened or written
    #[error("Native clipboard failed: {0}")]
    Native(#[from] arboard::Error),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Trait for clipboard operations
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// In-process clipboard access through arboard
    Native,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (via WSL)
    Wsl,
    /// Termux clipboard
    Termux,
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (cmd, args) = match self {
            Self::Native => {
                let mut clipboard = arboard::Clipboard::new()?;
                clipboard.set_text(text.to_owned())?;
                return Ok(());
            }
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Wsl => ("clip.exe", vec![]),
            Self::Termux => ("termux-clipboard-set", vec![]),
        };

        execute_clipboard_command(cmd, &args, text)
    }
}

/// The operating system clipboard
///
/// Tries each detected provider in order and stops at the first one that
/// accepts the text.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    providers: Vec<ClipboardProvider>,
}

impl SystemClipboard {
    /// Detect the providers usable on this system
    pub fn detect() -> Self {
        Self::with_providers(determine_clipboard_providers())
    }

    /// Use an explicit provider order
    pub fn with_providers(providers: Vec<ClipboardProvider>) -> Self {
        Self { providers }
    }

    /// Providers that will be tried, in order
    pub fn providers(&self) -> &[ClipboardProvider] {
        &self.providers
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::detect()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut last_error = None;

        for provider in &self.providers {
            match provider.copy_to_clipboard(text) {
                Ok(()) => {
                    debug!("Copied {} bytes with {:?}", text.len(), provider);
                    return Ok(());
                }
                Err(e) => {
                    debug!("Clipboard provider {:?} failed: {}", provider, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ClipboardError::NoClipboardFound))
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// Copy text to the system clipboard
///
/// # Examples
/// ```no_run
/// use dirclip::clipboard::copy_to_clipboard;
///
/// if let Err(e) = copy_to_clipboard("Hello, clipboard!") {
///     eprintln!("Failed to copy to clipboard: {}", e);
/// }
/// ```
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    SystemClipboard::detect().copy_to_clipboard(text)
}

/// Check if a command exists on the system `PATH`
pub fn command_exists(command: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&paths).any(|dir| dir.join(command).is_file())
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Pipe `text` into a clipboard command and wait for it to finish
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    // xclip and xsel fork to keep serving the selection; their output must
    // not hold our stdout open.
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;

        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ClipboardError::CommandFailed(format!("Failed to write to {}: {}", cmd, e)))?;
    }
    drop(child.stdin.take());

    let status = child.wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

/// Platform detection cache
static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else if cfg!(target_os = "android") {
            "android"
        } else {
            "unknown"
        }
    })
}

/// Determine which clipboard providers to try based on platform
///
/// On Linux the external tools come first: they keep owning the selection
/// after this process exits, while the in-process clipboard does not.
fn determine_clipboard_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(4);

    match get_platform() {
        "macos" => {
            providers.push(ClipboardProvider::Native);
            if command_exists("pbcopy") {
                providers.push(ClipboardProvider::MacOS);
            }
        }
        "windows" => providers.push(ClipboardProvider::Native),
        "wsl" => {
            if command_exists("clip.exe") {
                providers.push(ClipboardProvider::Wsl);
            }
            providers.push(ClipboardProvider::Native);
        }
        "linux" => {
            if command_exists("wl-copy") && env::var_os("WAYLAND_DISPLAY").is_some() {
                providers.push(ClipboardProvider::Wayland);
            }
            if command_exists("xsel") {
                providers.push(ClipboardProvider::Xsel);
            }
            if command_exists("xclip") {
                providers.push(ClipboardProvider::Xclip);
            }
            providers.push(ClipboardProvider::Native);
        }
        "android" => {
            if command_exists("termux-clipboard-set") {
                providers.push(ClipboardProvider::Termux);
            }
        }
        _ => providers.push(ClipboardProvider::Native),
    }

    providers
}
