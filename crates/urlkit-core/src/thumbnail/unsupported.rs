use std::path::Path;

use super::{ThumbnailError, ThumbnailStore};

/// Store for targets without a thumbnail cache: nothing to read, every write fails.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedThumbnailStore;

impl UnsupportedThumbnailStore {
    pub fn new() -> Result<Self, ThumbnailError> {
        Ok(Self)
    }
}

impl ThumbnailStore for UnsupportedThumbnailStore {
    fn thumbnail_1024(&self, _path: &Path) -> Option<Vec<u8>> {
        None
    }

    fn set_thumbnail_1024(&self, _path: &Path, _png: Option<&[u8]>) -> Result<(), ThumbnailError> {
        Err(ThumbnailError::Unsupported)
    }
}
