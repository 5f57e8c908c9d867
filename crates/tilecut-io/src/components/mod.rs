//! Dioxus UI components for tilecut.
//!
//! Provides the file picker, source preview, tile settings form,
//! results panel, and the theme/language toolbar.

mod results;
mod settings;
mod source_preview;
mod toolbar;
mod upload;

pub use results::{RESULTS_ID, ResultsPanel};
pub use settings::TileSettings;
pub use source_preview::SourcePreview;
pub use toolbar::Toolbar;
pub use upload::FileUpload;
