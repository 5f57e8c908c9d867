//! The per-page tiling session and its command handlers.
//!
//! A [`Session`] owns the current source image and the tiles cut from
//! it. Each user action is a method that mutates the session and
//! returns the resulting [`ViewState`]; the UI renders from that
//! instead of poking at elements directly.
//!
//! The tile set is only ever replaced as a whole, and is dropped
//! whenever the source image changes, so it always belongs to the
//! image being previewed.

use std::rc::Rc;

use crate::decode::SourceImage;
use crate::partition::partition;
use crate::types::{Dimensions, TileConfig, TileSet, TilingError};

/// Identifies one load started with [`Session::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What the UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No image loaded: only the file picker is visible.
    NoImage,
    /// Image loaded and previewed, settings visible, no results yet.
    Loaded {
        /// Source image size.
        dimensions: Dimensions,
    },
    /// Tiles computed and shown in the results panel.
    Cut {
        /// Source image size.
        dimensions: Dimensions,
        /// Number of retained tiles (may be zero).
        tile_count: usize,
    },
}

impl ViewState {
    /// Returns `true` when the settings panel should be shown.
    #[must_use]
    pub const fn has_image(self) -> bool {
        !matches!(self, Self::NoImage)
    }

    /// Returns `true` when the results panel should be shown.
    #[must_use]
    pub const fn has_results(self) -> bool {
        matches!(self, Self::Cut { .. })
    }

    /// Size of the loaded image, if there is one.
    #[must_use]
    pub const fn dimensions(self) -> Option<Dimensions> {
        match self {
            Self::NoImage => None,
            Self::Loaded { dimensions } | Self::Cut { dimensions, .. } => Some(dimensions),
        }
    }
}

/// Outcome of [`Session::finish_load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// The image replaced the previous one.
    Applied(ViewState),
    /// A newer load was started after this one; the result was dropped.
    Stale,
    /// Decoding failed; the previous image and tiles are untouched.
    Failed(TilingError),
}

/// Source image, tile set, and load bookkeeping for one page session.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<Rc<SourceImage>>,
    tiles: Option<Rc<TileSet>>,
    latest_ticket: u64,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view state.
    #[must_use]
    pub fn view(&self) -> ViewState {
        match (&self.source, &self.tiles) {
            (None, _) => ViewState::NoImage,
            (Some(source), None) => ViewState::Loaded {
                dimensions: source.dimensions(),
            },
            (Some(source), Some(tiles)) => ViewState::Cut {
                dimensions: source.dimensions(),
                tile_count: tiles.len(),
            },
        }
    }

    /// The loaded source image, if any.
    #[must_use]
    pub fn source(&self) -> Option<Rc<SourceImage>> {
        self.source.clone()
    }

    /// The tiles from the most recent cut, if any.
    #[must_use]
    pub fn tiles(&self) -> Option<Rc<TileSet>> {
        self.tiles.clone()
    }

    /// Start a new load. Any load started earlier becomes stale.
    pub const fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// Complete the load identified by `ticket` with its decode result.
    ///
    /// A successful, current load replaces the source image and clears
    /// the tile set. A stale load is ignored whatever its result. A
    /// failed load leaves the session as it was.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<SourceImage, TilingError>,
    ) -> LoadOutcome {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(ticket = ticket.0, latest = self.latest_ticket, "dropping stale load");
            return LoadOutcome::Stale;
        }

        match decoded {
            Ok(source) => {
                self.source = Some(Rc::new(source));
                self.tiles = None;
                LoadOutcome::Applied(self.view())
            }
            Err(e) => {
                tracing::warn!(error = %e, "image load failed, keeping previous state");
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Cut the current image with `config`, replacing any previous tiles.
    ///
    /// Does nothing when no image is loaded.
    pub fn cut(&mut self, config: &TileConfig) -> ViewState {
        if let Some(source) = &self.source {
            self.tiles = Some(Rc::new(partition(source, config)));
        }
        self.view()
    }

    /// Forget the image and tiles.
    ///
    /// In-flight loads become stale.
    pub fn reset(&mut self) -> ViewState {
        self.source = None;
        self.tiles = None;
        self.latest_ticket += 1;
        ViewState::NoImage
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::decode::tests::encode_png;
    use image::RgbaImage;

    fn png(w: u32, h: u32) -> Vec<u8> {
        encode_png(&RgbaImage::from_pixel(w, h, image::Rgba([1, 2, 3, 255])))
    }

    fn load(session: &mut Session, bytes: &[u8]) -> LoadOutcome {
        let ticket = session.begin_load();
        session.finish_load(ticket, crate::decode::decode_source(bytes))
    }

    fn source(w: u32, h: u32) -> SourceImage {
        SourceImage::from_rgba(RgbaImage::from_pixel(w, h, image::Rgba([1, 2, 3, 255]))).unwrap()
    }

    #[test]
    fn new_session_has_no_image() {
        let session = Session::new();
        assert_eq!(session.view(), ViewState::NoImage);
        assert!(session.tiles().is_none());
    }

    #[test]
    fn cut_without_image_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.cut(&TileConfig::default()), ViewState::NoImage);
        assert!(session.tiles().is_none());
    }

    #[test]
    fn load_then_cut_then_reset() {
        let mut session = Session::new();
        let outcome = load(&mut session, &png(600, 400));
        assert!(matches!(
            outcome,
            LoadOutcome::Applied(ViewState::Loaded { dimensions }) if dimensions == Dimensions::new(600, 400)
        ));

        let view = session.cut(&TileConfig::default());
        assert_eq!(
            view,
            ViewState::Cut {
                dimensions: Dimensions::new(600, 400),
                tile_count: 2
            }
        );
        assert!(view.has_results());

        assert_eq!(view.dimensions(), Some(Dimensions::new(600, 400)));

        assert_eq!(session.reset(), ViewState::NoImage);
        assert_eq!(session.view().dimensions(), None);
        assert!(session.source().is_none());
        assert!(session.tiles().is_none());
    }

    #[test]
    fn new_image_discards_previous_tiles() {
        let mut session = Session::new();
        load(&mut session, &png(10, 10));
        session.cut(&TileConfig::from_form("5", "5", false, false));
        assert!(session.tiles().is_some());

        load(&mut session, &png(20, 20));
        assert!(session.tiles().is_none());
        assert_eq!(
            session.view(),
            ViewState::Loaded {
                dimensions: Dimensions::new(20, 20)
            }
        );
    }

    #[test]
    fn recut_replaces_tiles_wholesale() {
        let mut session = Session::new();
        load(&mut session, &png(10, 10));
        session.cut(&TileConfig::from_form("5", "5", false, false));
        let first = session.tiles().unwrap();
        session.cut(&TileConfig::from_form("10", "10", false, false));
        let second = session.tiles().unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 1);
        assert!(!Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut session = Session::new();
        load(&mut session, &png(10, 10));
        session.cut(&TileConfig::from_form("5", "5", false, false));
        let before = session.view();

        let outcome = load(&mut session, &[0xFF, 0x00, 0x12]);
        assert!(matches!(outcome, LoadOutcome::Failed(TilingError::ImageDecode(_))));
        assert_eq!(session.view(), before);
        assert_eq!(session.tiles().unwrap().len(), 4);
    }

    #[test]
    fn stale_load_is_ignored() {
        let mut session = Session::new();
        let older = session.begin_load();
        let newer = session.begin_load();

        let applied = session.finish_load(newer, Ok(source(8, 8)));
        assert!(matches!(applied, LoadOutcome::Applied(_)));

        let stale = session.finish_load(older, Ok(source(99, 99)));
        assert!(matches!(stale, LoadOutcome::Stale));
        assert_eq!(
            session.view(),
            ViewState::Loaded {
                dimensions: Dimensions::new(8, 8)
            }
        );
    }

    #[test]
    fn reset_makes_in_flight_load_stale() {
        let mut session = Session::new();
        let ticket = session.begin_load();
        session.reset();
        let outcome = session.finish_load(ticket, Ok(source(4, 4)));
        assert!(matches!(outcome, LoadOutcome::Stale));
        assert_eq!(session.view(), ViewState::NoImage);
    }

    #[test]
    fn cut_with_all_tiles_filtered_still_shows_results() {
        let mut session = Session::new();
        let ticket = session.begin_load();
        session.finish_load(ticket, SourceImage::from_rgba(RgbaImage::new(6, 6)));
        let view = session.cut(&TileConfig::from_form("3", "3", false, false));
        assert_eq!(
            view,
            ViewState::Cut {
                dimensions: Dimensions::new(6, 6),
                tile_count: 0
            }
        );
    }
}
