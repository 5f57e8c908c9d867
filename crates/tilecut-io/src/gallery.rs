//! A tile set paired with the thumbnails rendered for it.

use std::rc::Rc;

use tilecut_tiling::TileSet;

use crate::raster::BlobUrl;

/// Tiles from one cut together with one thumbnail URL per tile.
///
/// Thumbnails are created once, when the gallery is built, and revoked
/// when it is dropped. A tile whose thumbnail failed to encode has
/// `None` in its slot and is rendered as a placeholder.
#[derive(Debug)]
pub struct Gallery {
    tiles: Rc<TileSet>,
    thumbnails: Vec<Option<BlobUrl>>,
}

impl Gallery {
    /// Render thumbnails for every tile in `tiles`.
    #[must_use]
    pub fn new(tiles: Rc<TileSet>) -> Self {
        let thumbnails = tiles
            .iter()
            .map(|tile| match BlobUrl::from_rgba(&tile.image) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!(
                        origin_x = tile.origin_x,
                        origin_y = tile.origin_y,
                        error = %e,
                        "thumbnail creation failed"
                    );
                    None
                }
            })
            .collect();
        Self { tiles, thumbnails }
    }

    /// The tiles shown in this gallery.
    #[must_use]
    pub const fn tiles(&self) -> &Rc<TileSet> {
        &self.tiles
    }

    /// Thumbnail URL of the tile at `index`, if it rendered.
    #[must_use]
    pub fn thumbnail(&self, index: usize) -> Option<&str> {
        self.thumbnails
            .get(index)
            .and_then(Option::as_ref)
            .map(BlobUrl::as_str)
    }
}
