//! Hidden files follow the dot-prefix convention.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::FileAttrError;

pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Hides or unhides `path` by renaming it, returning the new path.
///
/// Unhiding strips every leading dot. Returns the path unchanged if it is
/// already in the requested state; refuses to overwrite an existing entry.
pub fn set_hidden(path: &Path, hidden: bool) -> Result<PathBuf, FileAttrError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FileAttrError::NoFileName {
            path: path.to_path_buf(),
        })?;

    if is_hidden(path) == hidden {
        fs::symlink_metadata(path).map_err(|e| FileAttrError::io(path, e))?;
        return Ok(path.to_path_buf());
    }

    let new_name = if hidden {
        format!(".{name}")
    } else {
        name.trim_start_matches('.').to_string()
    };
    if new_name.is_empty() {
        return Err(FileAttrError::NoFileName {
            path: path.to_path_buf(),
        });
    }

    let target = path.with_file_name(&new_name);
    if fs::symlink_metadata(&target).is_ok() {
        return Err(FileAttrError::io(
            &target,
            io::Error::new(io::ErrorKind::AlreadyExists, "rename target exists"),
        ));
    }
    fs::rename(path, &target).map_err(|e| FileAttrError::io(path, e))?;
    tracing::debug!(from = %path.display(), to = %target.display(), hidden, "renamed");
    Ok(target)
}
