//! 1024×1024 file thumbnails behind a per-platform store.
//!
//! [`PlatformThumbnailStore`] is chosen at build time: an XDG cache backed
//! store on Unix, a store that reports `Unsupported` elsewhere.

#[cfg(unix)]
mod xdg_cache;
#[cfg(not(unix))]
mod unsupported;

#[cfg(unix)]
pub use xdg_cache::XdgThumbnailStore;
#[cfg(not(unix))]
pub use unsupported::UnsupportedThumbnailStore;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(unix)]
pub type PlatformThumbnailStore = XdgThumbnailStore;
#[cfg(not(unix))]
pub type PlatformThumbnailStore = UnsupportedThumbnailStore;

/// Edge length in pixels of the stored thumbnail.
pub const THUMBNAIL_EDGE: u32 = 1024;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("thumbnail data is not a PNG image")]
    NotPng,
    #[error("thumbnail must be 1024x1024, got {width}x{height}")]
    WrongSize { width: u32, height: u32 },
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no thumbnail cache directory: {0}")]
    NoCacheDir(String),
    #[error("thumbnails are not supported on this platform")]
    Unsupported,
}

/// Reads and writes a file's 1024×1024 PNG thumbnail.
pub trait ThumbnailStore {
    /// PNG bytes of the stored thumbnail, `None` if there is none or it can't be read.
    fn thumbnail_1024(&self, path: &Path) -> Option<Vec<u8>>;

    /// Stores `png` as the thumbnail of `path`, or removes it when `None`.
    fn set_thumbnail_1024(&self, path: &Path, png: Option<&[u8]>) -> Result<(), ThumbnailError>;
}

/// The store for the target platform.
pub fn platform_store() -> Result<PlatformThumbnailStore, ThumbnailError> {
    PlatformThumbnailStore::new()
}

/// Width and height from a PNG's IHDR chunk.
pub fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 24 || data[..8] != PNG_SIGNATURE || &data[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(data[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(data[20..24].try_into().ok()?);
    Some((width, height))
}

/// Rejects anything but a 1024×1024 PNG.
pub(crate) fn validate_thumbnail(data: &[u8]) -> Result<(), ThumbnailError> {
    match png_dimensions(data) {
        None => Err(ThumbnailError::NotPng),
        Some((THUMBNAIL_EDGE, THUMBNAIL_EDGE)) => Ok(()),
        Some((width, height)) => Err(ThumbnailError::WrongSize { width, height }),
    }
}

/// Minimal PNG header (signature + IHDR) with the given dimensions.
#[cfg(test)]
pub(crate) fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend_from_slice(&13u32.to_be_bytes());
    v.extend_from_slice(b"IHDR");
    v.extend_from_slice(&width.to_be_bytes());
    v.extend_from_slice(&height.to_be_bytes());
    v.extend_from_slice(&[8, 6, 0, 0, 0]);
    v.extend_from_slice(&[0, 0, 0, 0]); // CRC, not checked
    v
}
