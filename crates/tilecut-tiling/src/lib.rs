//! tilecut-tiling: Pure image tiling core (sans-IO).
//!
//! Decodes a raster image, cuts it into a row-major grid of fixed-size
//! tiles (optionally overlapping by half a tile), and drops fully
//! transparent tiles unless asked to keep them. Also holds the pieces
//! of application state that need no browser: preview sizing, the
//! localization table, the preference model, and the [`Session`] that
//! ties them together.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and pixel buffers. All browser interaction lives in
//! `tilecut-io`.

pub mod decode;
pub mod i18n;
pub mod partition;
pub mod prefs;
pub mod preview;
pub mod session;
pub mod types;

pub use decode::{SourceImage, decode_source};
pub use i18n::{Language, MessageKey, count_label, translate};
pub use partition::{grid_origins, partition};
pub use prefs::{MemoryStore, PreferenceError, PreferenceStore, Preferences, Theme};
pub use preview::preview_dimensions;
pub use session::{LoadOutcome, LoadTicket, Session, ViewState};
pub use types::{
    DEFAULT_TILE_DIMENSION, Dimensions, MAX_TILE_DIMENSION, RgbaImage, Tile, TileConfig, TileSet,
    TilingError, parse_dimension,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decode_and_partition_end_to_end() {
        let img = RgbaImage::from_fn(30, 20, |x, _| {
            if x < 10 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        });
        let png = decode::tests::encode_png(&img);

        let source = decode_source(&png).unwrap();
        let config = TileConfig::from_form("10", "10", false, false);
        let tiles = partition(&source, &config);

        // Only the left column of the 3x2 grid has visible pixels.
        let origins: Vec<_> = tiles.iter().map(Tile::origin).collect();
        assert_eq!(origins, vec![(0, 0), (0, 10)]);
        assert_eq!(tiles.generated(), 6);
    }

    #[test]
    fn keep_empty_reports_every_cell() {
        let img = RgbaImage::new(30, 20);
        let source = SourceImage::from_rgba(img).unwrap();
        let config = TileConfig::from_form("10", "10", true, false);
        let tiles = partition(&source, &config);

        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|t| t.is_empty));
    }
}
