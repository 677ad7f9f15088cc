//! File attribute queries and updates.
//!
//! Queries never fail: any underlying error yields the documented default
//! (`false`, `None` or `-1`). Updates are explicit and return a
//! [`FileAttrError`] so callers can see when a change did not happen.

mod backup;
mod hidden;

pub use backup::{is_excluded_from_backup, set_excluded_from_backup, BACKUP_XATTR};
pub use hidden::{is_hidden, set_hidden};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Size reported for missing paths, directories and anything that is not a regular file.
pub const UNKNOWN_FILE_SIZE: i64 = -1;

#[derive(Debug, Error)]
pub enum FileAttrError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {} is not supported here", .path.display(), .what)]
    Unsupported { path: PathBuf, what: &'static str },
    #[error("{}: no usable file name", .path.display())]
    NoFileName { path: PathBuf },
    #[error("{}: path contains a NUL byte", .path.display())]
    NulInPath { path: PathBuf },
}

impl FileAttrError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        FileAttrError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, FileAttrError::Unsupported { .. })
    }
}

pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Last content modification, `None` if the path doesn't exist.
pub fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Creation (birth) time, `None` if missing or the filesystem doesn't record it.
pub fn created_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.created()).ok()
}

pub fn accessed_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.accessed()).ok()
}

/// Size in bytes of a regular file, else [`UNKNOWN_FILE_SIZE`].
pub fn size(path: &Path) -> i64 {
    match fs::metadata(path) {
        Ok(m) if m.is_file() => i64::try_from(m.len()).unwrap_or(UNKNOWN_FILE_SIZE),
        _ => UNKNOWN_FILE_SIZE,
    }
}

/// Whether the current user may write to `path`.
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    let Ok(c_path) = c_path(path) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
pub fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Sets the content modification time of a file or directory.
pub fn set_modified_time(path: &Path, time: SystemTime) -> Result<(), FileAttrError> {
    // Explicit timestamps need ownership, not write access, so a read-only
    // handle is enough and works for directories too.
    let file = fs::File::open(path).map_err(|e| FileAttrError::io(path, e))?;
    file.set_modified(time)
        .map_err(|e| FileAttrError::io(path, e))?;
    tracing::debug!(path = %path.display(), "set modification time");
    Ok(())
}

#[cfg(unix)]
pub(crate) fn c_path(path: &Path) -> Result<std::ffi::CString, FileAttrError> {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::CString::new(path.as_os_str().as_bytes()).map_err(|_| FileAttrError::NulInPath {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_path_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nope");
        assert!(!is_directory(&p));
        assert!(modified_time(&p).is_none());
        assert!(created_time(&p).is_none());
        assert!(accessed_time(&p).is_none());
        assert_eq!(size(&p), UNKNOWN_FILE_SIZE);
        assert!(!is_writable(&p));
    }

    #[test]
    fn regular_file_attributes() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("data.bin");
        fs::write(&p, vec![0u8; 300]).unwrap();
        assert!(!is_directory(&p));
        assert_eq!(size(&p), 300);
        assert!(modified_time(&p).is_some());
        assert!(accessed_time(&p).is_some());
        assert!(is_writable(&p));
    }

    #[test]
    fn directory_attributes() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_directory(dir.path()));
        assert_eq!(size(dir.path()), UNKNOWN_FILE_SIZE);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_file_is_not_writable() {
        use std::os::unix::fs::PermissionsExt;
        // root bypasses permission bits
        if unsafe { libc::geteuid() } == 0 {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("ro.txt");
        fs::write(&p, b"x").unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o444)).unwrap();
        assert!(!is_writable(&p));
    }

    #[test]
    fn set_modified_time_on_file_and_dir() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("old.txt");
        fs::write(&p, b"x").unwrap();
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);

        set_modified_time(&p, when).unwrap();
        assert_eq!(modified_time(&p), Some(when));

        set_modified_time(dir.path(), when).unwrap();
        assert_eq!(modified_time(dir.path()), Some(when));
    }

    #[test]
    fn set_modified_time_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = set_modified_time(&dir.path().join("gone"), SystemTime::now()).unwrap_err();
        match err {
            FileAttrError::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
