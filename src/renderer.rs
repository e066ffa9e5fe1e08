/*!
 * Per-file reading and block rendering
 */

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::types::{FileReadError, FileRecord};

/// Read a whole file as strict UTF-8 text
///
/// The file is opened, read and closed within this call.
pub fn read_text(path: &Path) -> Result<String, FileReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Read `name` inside `dir` and wrap the outcome in a record
///
/// Never fails: a file that cannot be read still yields a record whose
/// block carries the error message. The file is read through its raw name;
/// only the header is lossily decoded.
pub fn render_file(dir: &Path, name: impl AsRef<OsStr>) -> FileRecord {
    let name = name.as_ref();
    let path = dir.join(name);
    let content = read_text(&path);

    if let Err(e) = &content {
        warn!("Could not read {}: {}", path.display(), e);
    }

    FileRecord {
        name: name.to_string_lossy().into_owned(),
        path,
        content,
    }
}
