//! File picker with a drag-and-drop zone.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use tilecut_tiling::{Language, MessageKey, translate};

/// File extensions the picker offers and the drop zone accepts.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp", "gif"];

/// `accept` attribute for the file input.
const ACCEPT: &str = ".png,.jpg,.jpeg,.bmp,.webp,.gif,image/*";

/// Check whether a file is worth handing to the decoder.
///
/// Names without an extension pass: the decoder sniffs the format from
/// the bytes. Only a known non-image extension is rejected up front.
fn may_be_image(name: &str) -> bool {
    match name.rsplit_once('.') {
        None | Some((_, "")) => true,
        Some((_, ext)) => ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext)),
    }
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Active interface language.
    language: Language,
    /// Called with the raw file bytes and filename once a file is read.
    on_upload: EventHandler<(Vec<u8>, String)>,
}

/// The image picker.
///
/// Only the first selected or dropped file is used. Files with a
/// non-image extension are rejected here; everything else is handed to
/// `on_upload` and decoded by the caller.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let language = props.language;
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        if !may_be_image(&name) {
            tracing::debug!(name, "rejected file extension");
            error.set(Some(format!(
                "{}: {name}",
                translate(language, MessageKey::LoadFailed)
            )));
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => {
                error.set(None);
                props.on_upload.call((bytes.to_vec(), name));
            }
            Err(e) => {
                tracing::warn!(name, error = %e, "file read failed");
                error.set(Some(format!(
                    "{}: {name}",
                    translate(language, MessageKey::LoadFailed)
                )));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    rsx! {
        div {
            class: if dragging() { "upload dragging" } else { "upload" },
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            label { class: "button primary",
                input {
                    r#type: "file",
                    accept: ACCEPT,
                    class: "hidden",
                    onchange: handle_files,
                }
                {translate(language, MessageKey::Upload)}
            }

            if let Some(ref err) = error() {
                p { class: "error", "{err}" }
            }
        }
    }
}
