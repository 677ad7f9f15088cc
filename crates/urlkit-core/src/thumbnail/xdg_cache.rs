//! Thumbnails cached as `<cache>/urlkit/thumbnails/1024/<sha256 of file URI>.png`.

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

use super::{validate_thumbnail, ThumbnailError, ThumbnailStore};

#[derive(Debug, Clone)]
pub struct XdgThumbnailStore {
    root: PathBuf,
}

impl XdgThumbnailStore {
    /// Store under the user's XDG cache home.
    pub fn new() -> Result<Self, ThumbnailError> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")
            .map_err(|e| ThumbnailError::NoCacheDir(e.to_string()))?;
        Ok(Self::at(xdg_dirs.get_cache_home().join("thumbnails").join("1024")))
    }

    /// Store rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache file for `path`. The file must exist so its URI can be made canonical.
    fn entry_path(&self, path: &Path) -> Result<PathBuf, ThumbnailError> {
        let canonical = fs::canonicalize(path).map_err(|e| ThumbnailError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let uri = Url::from_file_path(&canonical).map_err(|()| ThumbnailError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not an absolute path"),
        })?;
        let key = hex::encode(Sha256::digest(uri.as_str().as_bytes()));
        Ok(self.root.join(format!("{key}.png")))
    }
}

impl ThumbnailStore for XdgThumbnailStore {
    fn thumbnail_1024(&self, path: &Path) -> Option<Vec<u8>> {
        let entry = self.entry_path(path).ok()?;
        fs::read(entry).ok()
    }

    fn set_thumbnail_1024(&self, path: &Path, png: Option<&[u8]>) -> Result<(), ThumbnailError> {
        let entry = self.entry_path(path)?;
        let io_err = |source| ThumbnailError::Io {
            path: entry.clone(),
            source,
        };

        let Some(png) = png else {
            return match fs::remove_file(&entry) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(io_err(e)),
            };
        };

        validate_thumbnail(png)?;
        fs::create_dir_all(&self.root).map_err(io_err)?;
        let mut tmp = entry.clone().into_os_string();
        tmp.push(".part");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, png).map_err(io_err)?;
        fs::rename(&tmp, &entry).map_err(io_err)?;
        tracing::debug!(file = %path.display(), cache = %entry.display(), "stored thumbnail");
        Ok(())
    }
}
