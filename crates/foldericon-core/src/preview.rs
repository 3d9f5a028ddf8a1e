//! Folder contents listing for the preview pane.

use std::fs;
use std::io;
use std::path::Path;

/// List the visible entries of a folder.
///
/// Hidden (dot-prefixed) names are filtered out and the rest are sorted
/// case-insensitively, the way the file browser would show them.
pub fn folder_preview(folder: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort_by_key(|name| name.to_lowercase());
    Ok(names)
}
