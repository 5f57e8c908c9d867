//! Theme and language toggles.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};
use tilecut_tiling::{Language, MessageKey, Theme, translate};

/// Props for the [`Toolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Active interface language.
    language: Language,
    /// Active color scheme.
    theme: Theme,
    /// Called when the theme button is pressed.
    on_toggle_theme: EventHandler<()>,
    /// Called when the language button is pressed.
    on_toggle_language: EventHandler<()>,
}

/// The two toggle buttons in the page corner.
///
/// The theme button shows the icon of the theme it switches to; the
/// language button shows the code of the other language.
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    let language = props.language;

    rsx! {
        div { class: "toolbar",
            button {
                class: "icon-button",
                title: translate(language, MessageKey::ToggleLanguage),
                aria_label: translate(language, MessageKey::ToggleLanguage),
                onclick: move |_| props.on_toggle_language.call(()),
                {language.toggle_label()}
            }
            button {
                class: "icon-button",
                title: translate(language, MessageKey::ToggleTheme),
                aria_label: translate(language, MessageKey::ToggleTheme),
                onclick: move |_| props.on_toggle_theme.call(()),
                if props.theme.is_dark() {
                    Icon { width: 18, height: 18, icon: LdSun }
                } else {
                    Icon { width: 18, height: 18, icon: LdMoon }
                }
            }
        }
    }
}
