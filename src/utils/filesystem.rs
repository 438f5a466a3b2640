//! File system utility functions

use std::path::Path;

/// Ensure the directory containing `path` exists, creating it if necessary
pub fn ensure_parent_exists(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
