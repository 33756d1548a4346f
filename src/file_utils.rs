use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns true when the path carries one of the supported extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Lists the names of the supported, non-hidden image files in `dir`.
///
/// Names are ordered case-insensitively, ties broken by the raw name, so the
/// order is stable for one listing.
pub fn scan_directory(dir: &Path) -> Result<Vec<OsString>> {
    let entries = fs::read_dir(dir).map_err(|e| AppError::DirectoryScan {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut image_files: Vec<OsString> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .filter_map(|path| path.file_name().map(OsStr::to_os_string))
        .filter(|name| !is_hidden(name))
        .collect();

    image_files.sort_by(|a, b| {
        let a_key = a.to_string_lossy().to_lowercase();
        let b_key = b.to_string_lossy().to_lowercase();
        a_key.cmp(&b_key).then_with(|| a.cmp(b))
    });
    Ok(image_files)
}

/// Splits a path into its absolute containing directory and its file name.
pub fn resolve_absolute_path(path: &Path) -> Result<(PathBuf, OsString)> {
    let absolute = std::path::absolute(path).map_err(|e| AppError::DirectoryScan {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    match (absolute.parent(), absolute.file_name()) {
        (Some(dir), Some(name)) => Ok((dir.to_path_buf(), name.to_os_string())),
        _ => Err(AppError::DirectoryScan {
            path: absolute.clone(),
            reason: "path has no parent directory or file name".to_string(),
        }),
    }
}
