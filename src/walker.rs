/*!
 * Lazy pre-order directory traversal
 */

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::types::DirectoryVisit;
use crate::utils::is_excluded;

/// A directory could not be listed
#[derive(Error, Debug)]
#[error("Failed to read directory {}: {source}", .path.display())]
pub struct WalkError {
    /// Directory that failed to list
    pub path: PathBuf,
    /// Whether the failing directory is the walk root
    pub is_root: bool,
    /// Underlying listing error
    #[source]
    pub source: walkdir::Error,
}

/// Walks a tree one directory at a time, parents before children
///
/// Each call to `next` lists exactly one directory. Subtrees under a
/// `node_modules` segment (relative to the root) are never listed.
pub struct DirectoryWalker {
    /// Root of the walk
    root: PathBuf,
    /// Directories still to visit; the last element is visited next
    pending: Vec<PathBuf>,
}

impl DirectoryWalker {
    /// Create a walker rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            pending: vec![root.clone()],
            root,
        }
    }

    /// List a single directory, returning its visit and the subdirectories to descend into
    fn list(&self, dir: &Path) -> Result<(DirectoryVisit, Vec<PathBuf>), walkdir::Error> {
        let entries: Vec<DirEntry> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .collect::<Result<_, _>>()?;

        let mut visit = DirectoryVisit {
            path: dir.to_path_buf(),
            subdirs: Vec::new(),
            files: Vec::new(),
        };
        let mut descend = Vec::new();

        for entry in entries {
            let name = entry.file_name().to_os_string();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if is_excluded(&self.root, entry.path()) {
                    debug!("Skipping excluded directory {}", entry.path().display());
                } else {
                    descend.push(entry.path().to_path_buf());
                }
                visit.subdirs.push(name);
            } else if file_type.is_symlink() && entry.path().is_dir() {
                // Linked directories are listed but never followed
                visit.subdirs.push(name);
            } else {
                visit.files.push(name);
            }
        }

        Ok((visit, descend))
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<DirectoryVisit, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.pending.pop()?;

        match self.list(&dir) {
            Ok((visit, descend)) => {
                debug!(
                    "Visiting {} ({} files, {} subdirectories)",
                    dir.display(),
                    visit.files.len(),
                    visit.subdirs.len()
                );
                self.pending.extend(descend.into_iter().rev());
                Some(Ok(visit))
            }
            Err(source) => Some(Err(WalkError {
                is_root: dir == self.root,
                path: dir,
                source,
            })),
        }
    }
}
