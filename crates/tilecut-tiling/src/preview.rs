//! On-screen preview sizing for the loaded source image.
//!
//! The preview is scaled uniformly so its longest side fits within
//! `min(800, viewport_width - 80)` CSS pixels. It is never upscaled.

use crate::types::Dimensions;

/// Upper bound on the preview's longest side, in CSS pixels.
pub const PREVIEW_MAX_EXTENT: f64 = 800.0;

/// Horizontal space reserved around the preview for page margins.
pub const PREVIEW_VIEWPORT_MARGIN: f64 = 80.0;

/// Largest longest-side the preview may occupy for a viewport width.
///
/// Always at least 1 so a very narrow (or unreported) viewport still
/// yields a drawable preview.
#[must_use]
pub fn max_preview_extent(viewport_width: f64) -> f64 {
    let available = viewport_width - PREVIEW_VIEWPORT_MARGIN;
    if available.is_nan() {
        return PREVIEW_MAX_EXTENT;
    }
    available.clamp(1.0, PREVIEW_MAX_EXTENT)
}

/// Uniform scale factor in `(0, 1]` applied to the source for preview.
#[must_use]
pub fn preview_scale(source: Dimensions, viewport_width: f64) -> f64 {
    let longest = f64::from(source.longest().max(1));
    (max_preview_extent(viewport_width) / longest).min(1.0)
}

/// Preview dimensions for `source` at the given viewport width.
///
/// Each side is `floor(side × scale)`, but never less than 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn preview_dimensions(source: Dimensions, viewport_width: f64) -> Dimensions {
    let scale = preview_scale(source, viewport_width);
    let scaled = |side: u32| ((f64::from(side) * scale).floor() as u32).max(1);
    Dimensions::new(scaled(source.width), scaled(source.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_image_is_not_upscaled() {
        let dims = Dimensions::new(300, 200);
        assert_eq!(preview_dimensions(dims, 1920.0), dims);
        assert!((preview_scale(dims, 1920.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wide_viewport_caps_at_800() {
        let dims = preview_dimensions(Dimensions::new(1600, 1200), 1920.0);
        assert_eq!(dims, Dimensions::new(800, 600));
    }

    #[test]
    fn narrow_viewport_reserves_margin() {
        // 480 - 80 = 400 available.
        let dims = preview_dimensions(Dimensions::new(1000, 500), 480.0);
        assert_eq!(dims, Dimensions::new(400, 200));
    }

    #[test]
    fn portrait_image_fits_longest_side() {
        let dims = preview_dimensions(Dimensions::new(500, 2000), 1920.0);
        assert_eq!(dims, Dimensions::new(200, 800));
    }

    #[test]
    fn degenerate_viewport_still_draws_something() {
        let dims = preview_dimensions(Dimensions::new(5000, 10), 0.0);
        assert_eq!(dims.width, 1);
        assert_eq!(dims.height, 1);
        assert!((max_preview_extent(f64::NAN) - PREVIEW_MAX_EXTENT).abs() < f64::EPSILON);
    }

    #[test]
    fn resize_is_idempotent() {
        let source = Dimensions::new(1234, 777);
        let a = preview_dimensions(source, 1024.0);
        let b = preview_dimensions(source, 1024.0);
        assert_eq!(a, b);
    }
}
