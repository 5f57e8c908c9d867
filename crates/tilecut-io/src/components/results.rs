//! Results panel: tile grid, per-tile download, and archive download.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use tilecut_export::{ARCHIVE_FILENAME, ARCHIVE_MIME_TYPE, TILE_MIME_TYPE};
use tilecut_tiling::{Language, MessageKey, Tile, count_label, translate};

use crate::download;
use crate::gallery::Gallery;

/// Element id of the results section, used as a scroll target.
pub const RESULTS_ID: &str = "results";

/// Props for the [`ResultsPanel`] component.
#[derive(Props, Clone)]
pub struct ResultsPanelProps {
    /// Active interface language.
    language: Language,
    /// Tiles from the latest cut and their thumbnails.
    gallery: Rc<Gallery>,
    /// Called when the "new image" button is pressed.
    on_reset: EventHandler<()>,
}

impl PartialEq for ResultsPanelProps {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && Rc::ptr_eq(&self.gallery, &other.gallery)
            && self.on_reset == other.on_reset
    }
}

fn download_tile(tile: &Tile) -> Result<(), String> {
    let png = tilecut_export::encode_png(&tile.image).map_err(|e| e.to_string())?;
    download::trigger_download(&png, &tilecut_export::tile_filename(tile), TILE_MIME_TYPE)
        .map_err(|e| e.to_string())
}

/// CSS class of a tile card.
const fn tile_class(tile: &Tile) -> &'static str {
    if tile.is_empty { "tile empty" } else { "tile" }
}

/// The results section shown after a cut.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let language = props.language;
    let tiles = Rc::clone(props.gallery.tiles());
    let mut preparing = use_signal(|| false);
    let mut export_error = use_signal(|| Option::<String>::None);

    // Drop stale errors whenever a new cut arrives.
    let gallery_ptr = Rc::as_ptr(&props.gallery);
    use_effect(use_reactive!(|gallery_ptr| {
        let _ = gallery_ptr;
        export_error.set(None);
    }));

    let download_all = {
        let tiles = Rc::clone(&tiles);
        move |_| {
            if preparing() || tiles.is_empty() {
                return;
            }
            preparing.set(true);
            let tiles = Rc::clone(&tiles);
            spawn(async move {
                // Let the busy label paint before compressing.
                gloo_timers::future::TimeoutFuture::new(0).await;

                let outcome = tilecut_export::build_archive(tiles.tiles());
                match outcome {
                    Ok(Some(bytes)) => {
                        if let Err(e) =
                            download::trigger_download(&bytes, ARCHIVE_FILENAME, ARCHIVE_MIME_TYPE)
                        {
                            tracing::warn!(error = %e, "archive download failed");
                            export_error.set(Some(e.to_string()));
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "archive build failed");
                        export_error.set(Some(e.to_string()));
                    }
                }
                preparing.set(false);
            });
        }
    };

    let has_tiles = !tiles.is_empty();

    rsx! {
        section { id: RESULTS_ID, class: "results",
            div { class: "results-header",
                h2 { {translate(language, MessageKey::Results)} }
                span { class: "muted", {count_label(language, tiles.len())} }
            }

            if let Some(ref err) = export_error() {
                p { class: "error", "{err}" }
            }

            div { class: "tile-grid",
                for (index, tile) in tiles.iter().enumerate() {
                    div {
                        key: "{tile.origin_x}-{tile.origin_y}",
                        class: tile_class(tile),
                        if let Some(url) = props.gallery.thumbnail(index) {
                            img { src: url, alt: tilecut_export::tile_filename(tile) }
                        } else {
                            div { class: "placeholder" }
                        }
                        div { class: "tile-footer",
                            span { class: "muted", "{tile.origin_x}, {tile.origin_y}" }
                            button {
                                class: "icon-button",
                                title: translate(language, MessageKey::DownloadTile),
                                aria_label: translate(language, MessageKey::DownloadTile),
                                onclick: {
                                    let tiles = Rc::clone(&tiles);
                                    move |_| {
                                        let Some(tile) = tiles.tiles().get(index) else {
                                            return;
                                        };
                                        if let Err(e) = download_tile(tile) {
                                            tracing::warn!(error = %e, "tile download failed");
                                            export_error.set(Some(e));
                                        }
                                    }
                                },
                                Icon { width: 16, height: 16, icon: LdDownload }
                            }
                        }
                    }
                }
            }

            div { class: "actions",
                button {
                    class: "button primary",
                    disabled: !has_tiles || preparing(),
                    onclick: download_all,
                    if preparing() {
                        {translate(language, MessageKey::Preparing)}
                    } else {
                        {translate(language, MessageKey::DownloadAll)}
                    }
                }
                button {
                    class: "button",
                    onclick: move |_| props.on_reset.call(()),
                    {translate(language, MessageKey::NewImage)}
                }
            }
        }
    }
}
