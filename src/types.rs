/*!
 * Core types shared by the walker, renderer and report
 */

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// One directory produced by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryVisit {
    /// Absolute or root-relative path of the directory, as given to the walker
    pub path: PathBuf,
    /// Names of the subdirectories, in enumeration order
    pub subdirs: Vec<OsString>,
    /// Names of the files directly inside this directory, in enumeration order
    pub files: Vec<OsString>,
}

/// Why a file's contents could not be included
#[derive(Error, Debug)]
pub enum FileReadError {
    /// Opening or reading failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The bytes were read but are not valid UTF-8
    #[error("{0}")]
    Decode(#[from] FromUtf8Error),
}

/// A single file's block in the report
#[derive(Debug)]
pub struct FileRecord {
    /// Base name of the file, lossily decoded for the block header
    pub name: String,
    /// Full path the file was read from
    pub path: PathBuf,
    /// File text, or the reason it could not be read
    pub content: Result<String, FileReadError>,
}

impl FileRecord {
    /// Whether the file's contents made it into the block
    pub fn is_readable(&self) -> bool {
        self.content.is_ok()
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Ok(text) => write!(f, "#### FILE: {}\n\n{}\n", self.name, text),
            Err(e) => write!(
                f,
                "#### FILE: {}\n\n[Could not read file: {}]\n",
                self.name, e
            ),
        }
    }
}
