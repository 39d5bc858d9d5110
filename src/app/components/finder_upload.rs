//! Screenshot picker with drag and drop and a local preview.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use super::{ErrorAlert, Spinner};
use crate::error::FinderError;
use crate::finder::{Upload, ACCEPTED_TYPES};

const STEPS: [&str; 4] = [
    "Upload a screenshot from any Cinestream title",
    "We compare it against the scenes in our library",
    "We identify the title and the timestamp of the scene",
    "Click \"Watch This Scene\" to jump straight to that moment",
];

async fn read_upload(file: FileData) -> Option<Upload> {
    let name = file.name();
    let bytes = match file.read_bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", name, e);
            return None;
        }
    };
    Some(match file.content_type() {
        Some(media_type) if !media_type.is_empty() => Upload::new(name, media_type, bytes),
        _ => Upload::from_file_name(name, bytes),
    })
}

#[component]
pub fn FinderUpload(
    /// Upload or match in progress
    busy: bool,
    error: Option<String>,
    on_upload: EventHandler<Upload>,
    /// A dropped file was refused before upload
    on_reject: EventHandler<String>,
    on_dismiss_error: EventHandler<()>,
) -> Element {
    let mut selected = use_signal(|| None::<Upload>);
    let mut dragging = use_signal(|| false);

    let drop_zone = if dragging() {
        "border-2 border-dashed rounded-lg p-8 text-center transition-colors border-red-600 bg-red-600/10"
    } else {
        "border-2 border-dashed rounded-lg p-8 text-center transition-colors border-neutral-600 hover:border-neutral-400"
    };

    rsx! {
        div { class: "w-full max-w-3xl mx-auto",
            div { class: "bg-neutral-900 rounded-lg shadow-lg overflow-hidden",
                div { class: "p-6",
                    h2 { class: "text-2xl font-bold mb-4", "Scene Finder" }
                    p { class: "text-white/80 text-sm mb-6",
                        "Upload a screenshot from any show or movie and we'll find the exact scene for you."
                    }

                    match selected() {
                        None => rsx! {
                            div {
                                class: drop_zone,
                                ondragover: move |evt: DragEvent| {
                                    evt.prevent_default();
                                    dragging.set(true);
                                },
                                ondragleave: move |_| dragging.set(false),
                                ondrop: move |evt: DragEvent| async move {
                                    evt.prevent_default();
                                    dragging.set(false);
                                    let Some(file) = evt.files().into_iter().next() else {
                                        return;
                                    };
                                    match read_upload(file).await {
                                        Some(upload) if upload.is_image() => selected.set(Some(upload)),
                                        Some(_) => on_reject.call(FinderError::NotAnImage.to_string()),
                                        None => {}
                                    }
                                },
                                h3 { class: "text-lg font-semibold mb-2", "Drag & drop a screenshot here" }
                                p { class: "text-white/50 text-sm mb-4", "Or browse files (JPEG, PNG, or WebP)" }
                                label { class: "inline-block bg-red-600 hover:bg-red-700 py-2 px-6 rounded-md cursor-pointer transition",
                                    "Choose File"
                                    input {
                                        r#type: "file",
                                        class: "hidden",
                                        accept: ACCEPTED_TYPES,
                                        multiple: false,
                                        onchange: move |evt: FormEvent| async move {
                                            let Some(file) = evt.files().into_iter().next() else {
                                                return;
                                            };
                                            if let Some(upload) = read_upload(file).await {
                                                selected.set(Some(upload));
                                            }
                                        },
                                    }
                                }
                            }
                        },
                        Some(upload) => rsx! {
                            div { class: "space-y-4",
                                div { class: "relative rounded-lg overflow-hidden border border-neutral-700",
                                    if upload.is_image() {
                                        img {
                                            class: "w-full h-auto max-h-[400px] object-contain",
                                            src: upload.preview_data_url(),
                                            alt: "Screenshot preview",
                                        }
                                    } else {
                                        p { class: "p-6 text-white/60 text-sm", "{upload.file_name}" }
                                    }
                                    button {
                                        class: "absolute top-2 right-2 px-2 bg-black/70 rounded-full hover:bg-black",
                                        aria_label: "Remove screenshot",
                                        disabled: busy,
                                        onclick: move |_| selected.set(None),
                                        "×"
                                    }
                                }
                                div { class: "flex flex-col md:flex-row gap-3",
                                    button {
                                        class: if busy { "flex-1 flex items-center justify-center gap-2 py-3 px-6 rounded bg-neutral-800 cursor-not-allowed" } else { "flex-1 flex items-center justify-center gap-2 py-3 px-6 rounded bg-red-600 hover:bg-red-700 transition" },
                                        disabled: busy,
                                        onclick: {
                                            let upload = upload.clone();
                                            move |_| on_upload.call(upload.clone())
                                        },
                                        if busy {
                                            Spinner { size: "h-5 w-5".to_string() }
                                            "Processing..."
                                        } else {
                                            "Find This Scene"
                                        }
                                    }
                                    button {
                                        class: "bg-neutral-700 hover:bg-neutral-600 py-3 px-6 rounded transition",
                                        disabled: busy,
                                        onclick: move |_| selected.set(None),
                                        "Choose Different Image"
                                    }
                                }
                            }
                        },
                    }

                    if let Some(message) = error {
                        div { class: "mt-4",
                            ErrorAlert { message, on_dismiss: move |_| on_dismiss_error.call(()) }
                        }
                    }
                }

                div { class: "bg-black/20 border-t border-neutral-800 p-6",
                    h3 { class: "text-lg font-semibold mb-3", "How it works:" }
                    ol { class: "text-white/70 text-sm space-y-3",
                        for (i, step) in STEPS.iter().enumerate() {
                            li { key: "{i}", class: "flex items-start gap-2",
                                span { class: "bg-red-600 rounded-full w-5 h-5 flex-none flex items-center justify-center text-xs",
                                    "{i + 1}"
                                }
                                span { "{step}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
