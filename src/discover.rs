//! Input file discovery.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extension of every input file, song metadata and event logs alike.
pub const INPUT_EXTENSION: &str = "json";

/// Make `path` absolute against the current directory, without resolving
/// symlinks.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

fn has_input_extension(path: &Path, extension: &str) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    // Dot-files are skipped the way a `*.json` shell glob would skip them
    !file_name.starts_with('.')
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension)
}

/// Recursively collect the absolute paths of regular files under `root` whose
/// extension is `extension`. Symlinks to files are included, symlinked
/// directories are not descended into.
///
/// Paths come back in traversal order. A missing root yields an empty list.
pub fn find_files<P: AsRef<Path>>(root: P, extension: &str) -> Vec<PathBuf> {
    let root = absolute_path(root.as_ref());
    if !root.exists() {
        debug!("Root {} does not exist, nothing to load", root.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        match entry {
            Ok(entry) => {
                // Symlinked files count when their target is a regular file
                let is_file = entry.file_type().is_file()
                    || (entry.path_is_symlink() && entry.path().is_file());
                if is_file && has_input_extension(entry.path(), extension) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Error accessing entry under {}: {}", root.display(), e);
            }
        }
    }
    files
}
