//! Download file names and MIME types.

use tilecut_tiling::Tile;

/// File name of the all-tiles archive.
pub const ARCHIVE_FILENAME: &str = "cut_images.zip";

/// MIME type of the all-tiles archive.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// MIME type of a single exported tile.
pub const TILE_MIME_TYPE: &str = "image/png";

/// File name for a tile: `cut_{x}_{y}.png`.
///
/// Origins are unique within a tile set, so names are too.
#[must_use]
pub fn tile_filename(tile: &Tile) -> String {
    let (x, y) = tile.origin();
    format!("cut_{x}_{y}.png")
}
