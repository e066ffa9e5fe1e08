/*!
 * Utility functions for dirclip
 */

use std::path::{Component, Path};

/// Directory name whose subtrees are never collected
pub const EXCLUDED_DIR: &str = "node_modules";

/// Check whether `path` lies inside an excluded subtree below `root`
///
/// Only the segments of `path` relative to `root` are considered, so the root
/// itself is never excluded, whatever its name. Paths outside `root` are
/// checked segment by segment in full.
pub fn is_excluded(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name == EXCLUDED_DIR))
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_segment_anywhere_below_root() {
        let root = Path::new("/work/project");

        assert!(is_excluded(root, &root.join("node_modules")));
        assert!(is_excluded(root, &root.join("web/node_modules/pkg/lib")));
        assert!(!is_excluded(root, &root.join("src/app")));
    }

    #[test]
    fn test_segment_must_match_exactly() {
        let root = Path::new("/work/project");

        assert!(!is_excluded(root, &root.join("node_modules_backup")));
        assert!(!is_excluded(root, &root.join("my-node_modules")));
        assert!(!is_excluded(root, &root.join("Node_Modules")));
    }

    #[test]
    fn test_root_named_node_modules_is_not_excluded() {
        let root = Path::new("/work/node_modules");

        assert!(!is_excluded(root, root));
        assert!(!is_excluded(root, &root.join("pkg")));
        assert!(is_excluded(root, &root.join("pkg/node_modules")));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
