//! Tile size and cut options.

use dioxus::prelude::*;
use tilecut_tiling::{DEFAULT_TILE_DIMENSION, Language, MessageKey, TileConfig, translate};

/// Props for the [`TileSettings`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TileSettingsProps {
    /// Active interface language.
    language: Language,
    /// Called with the parsed configuration when the cut button is pressed.
    on_cut: EventHandler<TileConfig>,
}

/// Width/height inputs, the two option checkboxes, and the cut button.
///
/// The inputs hold raw text; it is only parsed when cutting, so an
/// empty or invalid field quietly means the default size.
#[component]
pub fn TileSettings(props: TileSettingsProps) -> Element {
    let language = props.language;
    let mut width = use_signal(|| DEFAULT_TILE_DIMENSION.to_string());
    let mut height = use_signal(|| DEFAULT_TILE_DIMENSION.to_string());
    let mut keep_empty = use_signal(|| false);
    let mut overlap = use_signal(|| false);

    let on_cut = move |_| {
        let config = TileConfig::from_form(&width(), &height(), keep_empty(), overlap());
        props.on_cut.call(config);
    };

    rsx! {
        div { class: "settings",
            label { class: "field",
                span { {translate(language, MessageKey::Width)} }
                input {
                    r#type: "number",
                    min: "1",
                    value: "{width}",
                    oninput: move |e| width.set(e.value()),
                }
            }
            label { class: "field",
                span { {translate(language, MessageKey::Height)} }
                input {
                    r#type: "number",
                    min: "1",
                    value: "{height}",
                    oninput: move |e| height.set(e.value()),
                }
            }
            label { class: "check",
                input {
                    r#type: "checkbox",
                    checked: keep_empty(),
                    onchange: move |e| keep_empty.set(e.checked()),
                }
                {translate(language, MessageKey::KeepEmpty)}
            }
            label { class: "check",
                input {
                    r#type: "checkbox",
                    checked: overlap(),
                    onchange: move |e| overlap.set(e.checked()),
                }
                {translate(language, MessageKey::Overlap)}
            }
            button { class: "button primary", onclick: on_cut,
                {translate(language, MessageKey::Cut)}
            }
        }
    }
}
