use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tilecut_io::document::{apply_language, apply_theme, scroll_into_view};
use tilecut_io::{
    BlobUrl, FileUpload, Gallery, RESULTS_ID, ResultsPanel, SourcePreview, TileSettings, Toolbar,
};
use tilecut_tiling::{
    LoadOutcome, MessageKey, PreferenceStore, Preferences, Session, SourceImage, TileConfig,
    translate,
};

/// Page stylesheet (CSS variables for both themes + layout).
const STYLE: &str = include_str!("../assets/style.css");

fn main() {
    tilecut_io::logging::init();
    dioxus::launch(app);
}

/// Object URL for the source preview.
///
/// Points at the uploaded bytes when the format is known to the
/// browser; otherwise at a PNG re-encoding of the decoded pixels.
fn source_preview_url(bytes: &[u8], source: &SourceImage) -> Option<BlobUrl> {
    let url = match source.mime_type() {
        Some(mime) => BlobUrl::from_bytes(bytes, mime),
        None => BlobUrl::from_rgba(source.pixels()),
    };
    match url {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(error = %e, "source preview unavailable");
            None
        }
    }
}

/// Root application component.
///
/// Owns the tiling [`Session`] and the user [`Preferences`], and wires
/// the upload, settings, results, and toolbar components to the
/// session's commands.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Preferences ---
    let store: Rc<RefCell<Box<dyn PreferenceStore>>> =
        use_hook(|| Rc::new(RefCell::new(tilecut_io::open_preference_store())));
    let mut prefs = use_signal({
        let store = Rc::clone(&store);
        move || Preferences::load(&**store.borrow())
    });

    // --- Session state ---
    let mut session = use_signal(Session::new);
    let mut preview_url = use_signal(|| Option::<Rc<BlobUrl>>::None);
    let mut gallery = use_signal(|| Option::<Rc<Gallery>>::None);
    let mut load_error = use_signal(|| false);
    // Bumped on reset so the file input is recreated empty.
    let mut upload_epoch = use_signal(|| 0u64);

    // Re-apply document attributes whenever a preference changes.
    use_effect(move || {
        let Preferences { language, theme } = prefs();
        if let Err(e) = apply_theme(theme) {
            tracing::warn!(error = %e, "failed to apply theme");
        }
        if let Err(e) = apply_language(language) {
            tracing::warn!(error = %e, "failed to apply language");
        }
    });

    // --- Preference toggles ---
    let on_toggle_theme = {
        let store = Rc::clone(&store);
        move |()| {
            let next = prefs.peek().theme.toggled();
            let persisted = prefs
                .write()
                .set_theme(&mut **store.borrow_mut(), next);
            if let Err(e) = persisted {
                tracing::warn!(error = %e, "theme not persisted");
            }
        }
    };

    let on_toggle_language = {
        let store = Rc::clone(&store);
        move |()| {
            let next = prefs.peek().language.toggled();
            let persisted = prefs
                .write()
                .set_language(&mut **store.borrow_mut(), next);
            if let Err(e) = persisted {
                tracing::warn!(error = %e, "language not persisted");
            }
        }
    };

    // --- File upload handler ---
    // Decoding runs in a spawned task after one yield so the browser
    // stays responsive; a newer upload or a reset makes it stale.
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        let ticket = session.write().begin_load();
        tracing::debug!(name, bytes = bytes.len(), "loading image");

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let decoded = tilecut_tiling::decode_source(&bytes);
            let outcome = session.write().finish_load(ticket, decoded);

            match outcome {
                LoadOutcome::Applied(_) => {
                    let url = session
                        .peek()
                        .source()
                        .and_then(|source| source_preview_url(&bytes, &source));
                    preview_url.set(url.map(Rc::new));
                    gallery.set(None);
                    load_error.set(false);
                }
                LoadOutcome::Stale => {}
                LoadOutcome::Failed(_) => load_error.set(true),
            }
        });
    };

    // --- Cut handler ---
    let on_cut = move |config: TileConfig| {
        let view = session.write().cut(&config);
        tracing::debug!(?view, ?config, "cut requested");

        let tiles = session.peek().tiles();
        gallery.set(tiles.map(|tiles| Rc::new(Gallery::new(tiles))));

        if view.has_results() {
            spawn(async move {
                // Wait for the results section to be rendered.
                gloo_timers::future::TimeoutFuture::new(0).await;
                if let Err(e) = scroll_into_view(RESULTS_ID) {
                    tracing::debug!(error = %e, "scroll to results skipped");
                }
            });
        }
    };

    // --- Reset handler ---
    let on_reset = move |()| {
        session.write().reset();
        gallery.set(None);
        preview_url.set(None);
        load_error.set(false);
        upload_epoch += 1;
    };

    // --- Layout ---
    let Preferences { language, theme } = prefs();
    let view = session.read().view();
    let title = translate(language, MessageKey::Title);

    rsx! {
        document::Title { "{title}" }
        style { dangerous_inner_html: STYLE }

        div { class: "app",
            Toolbar {
                language,
                theme,
                on_toggle_theme,
                on_toggle_language,
            }

            header {
                h1 { "{title}" }
            }

            main {
                // Keyed by epoch: a reset remounts the picker.
                for epoch in [upload_epoch()] {
                    FileUpload { key: "{epoch}", language, on_upload }
                }

                if load_error() {
                    p { class: "error", {translate(language, MessageKey::LoadFailed)} }
                }

                if let (Some(url), Some(dimensions)) = (preview_url(), view.dimensions()) {
                    SourcePreview { url, dimensions }
                }

                if view.has_image() {
                    TileSettings { language, on_cut }
                }

                if view.has_results() {
                    if let Some(gallery) = gallery() {
                        ResultsPanel { language, gallery, on_reset }
                    }
                }
            }
        }
    }
}
