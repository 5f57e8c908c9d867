//! Scaled preview of the loaded source image.

use std::rc::Rc;

use dioxus::prelude::*;
use tilecut_tiling::{Dimensions, preview_dimensions};

use crate::raster::BlobUrl;
use crate::viewport::use_viewport_width;

/// Props for the [`SourcePreview`] component.
#[derive(Props, Clone)]
pub struct SourcePreviewProps {
    /// Object URL of the uploaded file.
    url: Rc<BlobUrl>,
    /// Pixel size of the decoded source.
    dimensions: Dimensions,
}

impl PartialEq for SourcePreviewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.url, &other.url) && self.dimensions == other.dimensions
    }
}

/// The source image, shrunk to fit the viewport.
///
/// Re-sized on every window resize; never upscaled.
#[component]
pub fn SourcePreview(props: SourcePreviewProps) -> Element {
    let viewport = use_viewport_width();
    let shown = preview_dimensions(props.dimensions, viewport());

    rsx! {
        div { class: "preview",
            img {
                src: props.url.as_str(),
                width: "{shown.width}",
                height: "{shown.height}",
                alt: "",
            }
            p { class: "muted",
                "{props.dimensions.width} × {props.dimensions.height}"
            }
        }
    }
}
