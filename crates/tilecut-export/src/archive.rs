//! ZIP packaging of a whole tile set.
//!
//! Every retained tile becomes one PNG entry named after its origin.
//! Retention was decided when the tiles were cut, so empty tiles kept
//! with `keep_empty` are exported like any other.

use std::io::{Cursor, Write};

use tilecut_tiling::Tile;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ExportError;
use crate::naming::tile_filename;
use crate::png::encode_png;

/// DEFLATE level for archive entries: a middle ground between size and
/// speed, since PNG data is already compressed.
pub const ARCHIVE_DEFLATE_LEVEL: u8 = 6;

/// Build a ZIP archive with one PNG entry per tile.
///
/// Entries are written in slice order. Returns `Ok(None)` for an empty
/// slice: there is nothing to download.
///
/// # Errors
///
/// Returns [`ExportError::PngEncode`] if a tile cannot be encoded, and
/// [`ExportError::Archive`] or [`ExportError::Io`] if the ZIP writer
/// fails.
pub fn build_archive(tiles: &[Tile]) -> Result<Option<Vec<u8>>, ExportError> {
    if tiles.is_empty() {
        return Ok(None);
    }

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(ARCHIVE_DEFLATE_LEVEL.into()));

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for tile in tiles {
        let png = encode_png(&tile.image)?;
        writer.start_file(tile_filename(tile), options)?;
        writer.write_all(&png)?;
    }
    let bytes = writer.finish()?.into_inner();

    tracing::debug!(entries = tiles.len(), bytes = bytes.len(), "built tile archive");
    Ok(Some(bytes))
}
