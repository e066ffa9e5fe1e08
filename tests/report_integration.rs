/*!
 * End-to-end tests for collecting a tree onto a clipboard
 */

use std::cell::RefCell;
use std::fs;

use dirclip::clipboard::{Clipboard, ClipboardError};
use dirclip::{Config, DirClipError};
use tempfile::tempdir;

/// Clipboard that remembers everything copied to it
#[derive(Default)]
struct RecordingClipboard {
    copied: RefCell<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clipboard with no working provider
struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn copy_to_clipboard(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NoClipboardFound)
    }
}

fn config_for(path: &std::path::Path) -> Config {
    Config {
        target_dir: path.to_path_buf(),
    }
}

#[test]
fn test_report_is_published_once() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
    fs::create_dir(temp_dir.path().join("node_modules")).unwrap();
    fs::write(temp_dir.path().join("node_modules/b.txt"), "secret").unwrap();

    let clipboard = RecordingClipboard::default();
    let report = dirclip::run(&config_for(temp_dir.path()), &clipboard).unwrap();

    let copied = clipboard.copied.borrow();
    assert_eq!(copied.len(), 1);
    assert_eq!(copied[0], "#### FILE: a.txt\n\nhello\n");
    assert_eq!(copied[0], report.render());
}

#[test]
fn test_root_named_node_modules_is_collected() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("node_modules");
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(root.join("pkg/index.js"), "module.exports = 1;").unwrap();

    let clipboard = RecordingClipboard::default();
    dirclip::run(&config_for(&root), &clipboard).unwrap();

    assert_eq!(
        clipboard.copied.borrow()[0],
        "#### FILE: index.js\n\nmodule.exports = 1;\n"
    );
}

#[test]
fn test_clipboard_failure_is_fatal() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

    let err = dirclip::run(&config_for(temp_dir.path()), &UnavailableClipboard).unwrap_err();

    assert!(matches!(
        err,
        DirClipError::Clipboard(ClipboardError::NoClipboardFound)
    ));
}

#[test]
fn test_missing_root_never_reaches_clipboard() {
    let temp_dir = tempdir().unwrap();
    let clipboard = RecordingClipboard::default();

    let err = dirclip::run(&config_for(&temp_dir.path().join("gone")), &clipboard).unwrap_err();

    assert!(matches!(err, DirClipError::PathNotFound(_)));
    assert!(clipboard.copied.borrow().is_empty());
}
