//! tilecut-export: Pure tile serializers (sans-IO)
//!
//! Encodes tiles as lossless PNG and bundles a whole tile set into a
//! single ZIP archive. Everything returns bytes; triggering the actual
//! browser download is `tilecut-io`'s job.

pub mod archive;
pub mod naming;
pub mod png;

pub use archive::{ARCHIVE_DEFLATE_LEVEL, build_archive};
pub use naming::{ARCHIVE_FILENAME, ARCHIVE_MIME_TYPE, TILE_MIME_TYPE, tile_filename};
pub use png::encode_png;

/// Errors that can occur while serializing tiles.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    /// The ZIP writer rejected an entry or failed to finalize.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing entry data into the archive failed.
    #[error("archive write failed: {0}")]
    Io(#[from] std::io::Error),
}
