//! Backup exclusion via the freedesktop `user.xdg.robots.backup` extended
//! attribute: a value of `false` asks backup tools to skip the entry.

use std::fs;
use std::path::Path;

use super::FileAttrError;

macro_rules! backup_xattr {
    () => {
        "user.xdg.robots.backup"
    };
}

pub const BACKUP_XATTR: &str = backup_xattr!();

/// True if `path` is marked as excluded from backups. Missing paths and
/// filesystems without user xattrs read as not excluded.
pub fn is_excluded_from_backup(path: &Path) -> bool {
    imp::read(path).unwrap_or(false)
}

/// Marks or unmarks `path` as excluded from backups.
///
/// Directories are walked first and every entry below them is updated;
/// symlinks are not followed. Stops at the first failure.
pub fn set_excluded_from_backup(path: &Path, excluded: bool) -> Result<(), FileAttrError> {
    let meta = fs::metadata(path).map_err(|e| FileAttrError::io(path, e))?;
    if meta.is_dir() {
        let entries = fs::read_dir(path).map_err(|e| FileAttrError::io(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| FileAttrError::io(path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| FileAttrError::io(&entry.path(), e))?;
            if file_type.is_symlink() {
                continue;
            }
            set_excluded_from_backup(&entry.path(), excluded)?;
        }
    }
    imp::write(path, excluded)?;
    tracing::debug!(path = %path.display(), excluded, "updated backup exclusion");
    Ok(())
}

#[cfg(target_os = "linux")]
mod imp {
    use std::io;
    use std::path::Path;

    use crate::file_attrs::{c_path, FileAttrError};

    /// `BACKUP_XATTR`, NUL-terminated.
    pub(super) const NAME: &[u8] = concat!(backup_xattr!(), "\0").as_bytes();
    const EXCLUDED: &[u8] = b"false";

    fn os_error(path: &Path, err: io::Error) -> FileAttrError {
        match err.raw_os_error() {
            Some(code) if code == libc::ENOTSUP || code == libc::EPERM => {
                FileAttrError::Unsupported {
                    path: path.to_path_buf(),
                    what: "user extended attributes",
                }
            }
            _ => FileAttrError::io(path, err),
        }
    }

    pub(super) fn read(path: &Path) -> Result<bool, FileAttrError> {
        let c_path = c_path(path)?;
        let mut buf = [0u8; 16];
        let n = unsafe {
            libc::getxattr(
                c_path.as_ptr(),
                NAME.as_ptr().cast(),
                buf.as_mut_ptr().cast(),
                buf.len(),
            )
        };
        if n < 0 {
            let err = io::Error::last_os_error();
            return match err.raw_os_error() {
                // absent, or a value too long to be "false"
                Some(code) if code == libc::ENODATA || code == libc::ERANGE => Ok(false),
                _ => Err(os_error(path, err)),
            };
        }
        Ok(&buf[..n as usize] == EXCLUDED)
    }

    pub(super) fn write(path: &Path, excluded: bool) -> Result<(), FileAttrError> {
        let c_path = c_path(path)?;
        let rc = if excluded {
            unsafe {
                libc::setxattr(
                    c_path.as_ptr(),
                    NAME.as_ptr().cast(),
                    EXCLUDED.as_ptr().cast(),
                    EXCLUDED.len(),
                    0,
                )
            }
        } else {
            unsafe { libc::removexattr(c_path.as_ptr(), NAME.as_ptr().cast()) }
        };
        if rc != 0 {
            let err = io::Error::last_os_error();
            if !excluded && err.raw_os_error() == Some(libc::ENODATA) {
                return Ok(());
            }
            return Err(os_error(path, err));
        }
        Ok(())
    }
}

#[cfg(not(target_os = "linux"))]
mod imp {
    use std::path::Path;

    use crate::file_attrs::FileAttrError;

    pub(super) fn read(path: &Path) -> Result<bool, FileAttrError> {
        Err(unsupported(path))
    }

    pub(super) fn write(path: &Path, _excluded: bool) -> Result<(), FileAttrError> {
        Err(unsupported(path))
    }

    fn unsupported(path: &Path) -> FileAttrError {
        FileAttrError::Unsupported {
            path: path.to_path_buf(),
            what: "backup exclusion",
        }
    }
}
