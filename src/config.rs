/*!
 * Configuration handling for dirclip
 */

use std::env;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Command-line arguments for dirclip
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirclip",
    version = crate::VERSION,
    about = "Copy the text contents of a directory tree to the system clipboard",
    long_about = "Walks a directory tree (skipping node_modules), concatenates every file into one report with a '#### FILE: <name>' header per file, and places the report on the system clipboard."
)]
pub struct Args {
    /// Directory to collect (defaults to the current working directory)
    pub directory_path: Option<PathBuf>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Log debug details to stderr
    #[clap(short, long)]
    pub verbose: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the walk
    pub target_dir: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Without a directory argument the current working directory is read
    /// here, once.
    pub fn from_args(args: &Args) -> Result<Self> {
        let target_dir = match &args.directory_path {
            Some(path) => path.clone(),
            None => env::current_dir()?,
        };

        Ok(Self { target_dir })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );
        ensure!(
            self.target_dir.is_dir(),
            InvalidArgument,
            "Target is not a directory: {}",
            self.target_dir.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirClipError;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_to_current_dir() {
        let args = Args::parse_from(["dirclip"]);
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.target_dir, env::current_dir().unwrap());
        assert!(!args.verbose);
        assert!(args.generate.is_none());
    }

    #[test]
    fn test_explicit_directory_and_flags() {
        let args = Args::parse_from(["dirclip", "-v", "some/dir"]);
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.target_dir, PathBuf::from("some/dir"));
        assert!(args.verbose);
    }

    #[test]
    fn test_generate_accepts_shell() {
        let args = Args::parse_from(["dirclip", "--generate", "bash"]);
        assert_eq!(args.generate, Some(Shell::Bash));
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let config = Config { target_dir: temp_dir.path().join("missing") };

        assert!(matches!(
            config.validate(),
            Err(DirClipError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_validate_rejects_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let config = Config { target_dir: file };

        assert!(matches!(
            config.validate(),
            Err(DirClipError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_accepts_directory() {
        let temp_dir = tempdir().unwrap();
        let config = Config { target_dir: temp_dir.path().to_path_buf() };

        assert!(config.validate().is_ok());
    }
}
