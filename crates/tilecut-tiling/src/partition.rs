//! Grid partitioning of a source image into fixed-size tiles.
//!
//! The grid starts at the top-left corner and advances by the config's
//! step until an origin would fall outside the image. Origins are never
//! clamped, so the last row and column may hang past the image edge;
//! those regions are padded with transparent black.
//!
//! Tiles whose every pixel has alpha 0 are dropped unless the config
//! asks to keep them. The result is a pure function of the source
//! pixels and the config.

use image::RgbaImage;

use crate::decode::SourceImage;
use crate::types::{Dimensions, Tile, TileConfig, TileSet};

/// Iterate over tile origins in row-major order.
///
/// Yields every `(x, y)` with `x = 0, step_x, 2·step_x, … < width` and
/// `y = 0, step_y, … < height`, all `x` for a given `y` before the next
/// `y`. A zero step is treated as 1.
pub fn grid_origins(
    dimensions: Dimensions,
    step: (u32, u32),
) -> impl Iterator<Item = (u32, u32)> {
    let step_x = step.0.max(1) as usize;
    let step_y = step.1.max(1) as usize;
    let width = dimensions.width;
    (0..dimensions.height)
        .step_by(step_y)
        .flat_map(move |y| (0..width).step_by(step_x).map(move |x| (x, y)))
}

/// Number of origins [`grid_origins`] yields, without iterating.
#[must_use]
pub const fn grid_size(dimensions: Dimensions, step: (u32, u32)) -> (u32, u32) {
    let step_x = if step.0 == 0 { 1 } else { step.0 };
    let step_y = if step.1 == 0 { 1 } else { step.1 };
    (
        dimensions.width.div_ceil(step_x),
        dimensions.height.div_ceil(step_y),
    )
}

/// Copy a `width × height` window starting at `(x, y)` out of `source`.
///
/// Pixels that fall outside the source are left transparent black, so
/// the result always has the requested size.
#[must_use]
pub fn extract_window(source: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    let mut tile = RgbaImage::new(width, height);

    let copy_w = width.min(source.width().saturating_sub(x)) as usize;
    let copy_h = height.min(source.height().saturating_sub(y));
    if copy_w == 0 || copy_h == 0 {
        return tile;
    }

    let src_stride = source.width() as usize * 4;
    let dst_stride = width as usize * 4;
    let row_bytes = copy_w * 4;
    let src = source.as_raw();

    {
        let dst: &mut [u8] = &mut tile;
        for row in 0..copy_h {
            let src_start = (y + row) as usize * src_stride + x as usize * 4;
            let dst_start = row as usize * dst_stride;
            dst[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src[src_start..src_start + row_bytes]);
        }
    }

    tile
}

/// Returns `true` if every pixel of `image` has alpha 0.
///
/// Color channels are ignored: a fully transparent red pixel is still
/// empty.
#[must_use]
pub fn is_fully_transparent(image: &RgbaImage) -> bool {
    image.pixels().all(|p| p.0[3] == 0)
}

/// Cut `source` into tiles according to `config`.
///
/// Visits every grid origin in row-major order, extracts a
/// `tile_width × tile_height` window, and retains it if it has at least
/// one non-transparent pixel or `config.keep_empty` is set. Retained
/// tiles keep generation order and record whether they are empty.
#[must_use]
pub fn partition(source: &SourceImage, config: &TileConfig) -> TileSet {
    let dimensions = source.dimensions();
    let (tile_w, tile_h) = (config.width(), config.height());
    let step = config.step();
    let pixels = source.pixels();

    let (cols, rows) = grid_size(dimensions, step);
    let mut tiles = Vec::with_capacity(if config.keep_empty {
        cols as usize * rows as usize
    } else {
        0
    });
    let mut generated = 0usize;

    for (x, y) in grid_origins(dimensions, step) {
        generated += 1;
        let image = extract_window(pixels, x, y, tile_w, tile_h);
        let is_empty = is_fully_transparent(&image);

        if !is_empty || config.keep_empty {
            tiles.push(Tile {
                origin_x: x,
                origin_y: y,
                image,
                is_empty,
            });
        }
    }

    let set = TileSet::new(tiles, *config, dimensions, generated);
    tracing::debug!(
        source_width = dimensions.width,
        source_height = dimensions.height,
        tile_width = tile_w,
        tile_height = tile_h,
        overlap = config.overlap,
        cols,
        rows,
        generated,
        retained = set.len(),
        empty = set.empty_count(),
        "partitioned source image"
    );
    set
}
