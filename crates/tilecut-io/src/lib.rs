//! tilecut-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, Blob downloads, thumbnail URLs, preference
//! storage, document attributes, console logging, and provides the
//! UI components for the tilecut web application.

pub mod components;
pub mod document;
pub mod download;
pub mod gallery;
pub mod logging;
pub mod raster;
pub mod storage;
pub mod viewport;

pub use components::{
    FileUpload, RESULTS_ID, ResultsPanel, SourcePreview, TileSettings, Toolbar,
};
pub use gallery::Gallery;
pub use raster::BlobUrl;
pub use storage::open_preference_store;
