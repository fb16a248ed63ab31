use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if the path has one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Recursively scans a directory for supported image files, sorted by path.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    // A missing or unreadable root is an error, not an empty folder.
    fs::metadata(dir)?;

    let mut image_files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

/// Normalizes a path to its absolute, lexically cleaned form.
///
/// Favorites identity is byte-wise comparison of the result: `.` and `..`
/// components are folded away, but symlinks are not resolved and case is not
/// folded. Relative paths are anchored at the current directory.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
