//! Shared types for the tilecut tiling core.

use serde::{Deserialize, Serialize};

/// Re-export `RgbaImage` so downstream crates can reference tile and
/// source pixel buffers without depending on `image` directly.
pub use image::RgbaImage;

/// Tile edge length used when the user leaves a dimension blank or
/// enters something that is not a positive integer.
pub const DEFAULT_TILE_DIMENSION: u32 = 512;

/// Largest accepted tile edge length.
///
/// Matches the largest canvas edge browsers reliably allocate; larger
/// inputs are clamped so a typo cannot request gigabytes of padding.
pub const MAX_TILE_DIMENSION: u32 = 16_384;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a new dimensions pair.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The longer of the two axes.
    #[must_use]
    pub const fn longest(self) -> u32 {
        if self.width >= self.height {
            self.width
        } else {
            self.height
        }
    }
}

/// User-supplied tiling parameters.
///
/// Re-read from the form on every cut; never persisted. Construct from
/// raw form strings with [`TileConfig::from_form`] so invalid
/// dimensions fall back to [`DEFAULT_TILE_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Tile width in pixels. Always at least 1.
    pub tile_width: u32,

    /// Tile height in pixels. Always at least 1.
    pub tile_height: u32,

    /// Keep tiles whose every pixel is fully transparent.
    pub keep_empty: bool,

    /// Advance by half a tile instead of a whole tile, so neighbouring
    /// tiles share half their area.
    pub overlap: bool,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_DIMENSION,
            tile_height: DEFAULT_TILE_DIMENSION,
            keep_empty: false,
            overlap: false,
        }
    }
}

impl TileConfig {
    /// Build a config from the raw width/height input strings and the
    /// two checkbox states.
    ///
    /// Each dimension is parsed with [`parse_dimension`]; anything that
    /// is not a positive integer becomes [`DEFAULT_TILE_DIMENSION`].
    #[must_use]
    pub fn from_form(width: &str, height: &str, keep_empty: bool, overlap: bool) -> Self {
        Self {
            tile_width: parse_dimension(width),
            tile_height: parse_dimension(height),
            keep_empty,
            overlap,
        }
    }

    /// Distance between consecutive tile origins along each axis.
    ///
    /// Equal to the tile size, or half of it rounded up in overlap mode
    /// (511 → 256). Never zero, even for a hand-built config with a
    /// zero dimension.
    #[must_use]
    pub const fn step(&self) -> (u32, u32) {
        let (w, h) = (self.width(), self.height());
        if self.overlap {
            (w.div_ceil(2), h.div_ceil(2))
        } else {
            (w, h)
        }
    }

    /// Effective tile width (zero is treated as the default).
    #[must_use]
    pub const fn width(&self) -> u32 {
        sanitize(self.tile_width)
    }

    /// Effective tile height (zero is treated as the default).
    #[must_use]
    pub const fn height(&self) -> u32 {
        sanitize(self.tile_height)
    }
}

const fn sanitize(value: u32) -> u32 {
    if value == 0 {
        DEFAULT_TILE_DIMENSION
    } else if value > MAX_TILE_DIMENSION {
        MAX_TILE_DIMENSION
    } else {
        value
    }
}

/// Parse a tile dimension typed by the user.
///
/// Reads the leading run of ASCII digits after optional whitespace and
/// an optional `+` sign, so `"256px"` and `" 128"` are accepted. Blank
/// input, a leading `-`, no digits at all, or zero yield
/// [`DEFAULT_TILE_DIMENSION`]. Values above [`MAX_TILE_DIMENSION`] are
/// clamped.
#[must_use]
pub fn parse_dimension(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return DEFAULT_TILE_DIMENSION;
    }

    // Digit runs too long for u32 are necessarily above the maximum.
    digits
        .parse::<u32>()
        .map_or(MAX_TILE_DIMENSION, sanitize)
}

/// One rectangular window cut from the source image.
///
/// Tiles own their pixels; nothing is shared with the source after
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Left edge of the window in source coordinates.
    pub origin_x: u32,
    /// Top edge of the window in source coordinates.
    pub origin_y: u32,
    /// Exactly `tile_width × tile_height` pixels. Regions past the
    /// source edge are transparent black.
    pub image: RgbaImage,
    /// `true` iff every pixel has alpha 0.
    pub is_empty: bool,
}

impl Tile {
    /// Top-left corner as an `(x, y)` pair.
    #[must_use]
    pub const fn origin(&self) -> (u32, u32) {
        (self.origin_x, self.origin_y)
    }
}

/// The ordered tiles retained by one partition run.
///
/// Tiles are stored in generation order (row-major, y then x
/// ascending). The set also remembers the config and source size that
/// produced it so consumers can tell what they are looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<Tile>,
    config: TileConfig,
    source: Dimensions,
    generated: usize,
}

impl TileSet {
    pub(crate) const fn new(
        tiles: Vec<Tile>,
        config: TileConfig,
        source: Dimensions,
        generated: usize,
    ) -> Self {
        Self {
            tiles,
            config,
            source,
            generated,
        }
    }

    /// Number of retained tiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if no tile was retained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Retained tiles in generation order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over retained tiles in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of retained tiles that are fully transparent.
    ///
    /// Always zero unless the set was produced with `keep_empty`.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_empty).count()
    }

    /// Number of grid cells visited, retained or not.
    #[must_use]
    pub const fn generated(&self) -> usize {
        self.generated
    }

    /// The config used for this run.
    #[must_use]
    pub const fn config(&self) -> &TileConfig {
        &self.config
    }

    /// Dimensions of the source image the tiles were cut from.
    #[must_use]
    pub const fn source_dimensions(&self) -> Dimensions {
        self.source
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Errors produced by the tiling core.
#[derive(Debug, thiserror::Error)]
pub enum TilingError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The decoded image has a zero-length side.
    #[error("image has no pixels ({width}x{height})")]
    ZeroSized {
        /// Decoded width.
        width: u32,
        /// Decoded height.
        height: u32,
    },
}
