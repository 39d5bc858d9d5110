//! Scene finder page: upload form until a match comes back, then the result.

use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::app::components::{FinderResults, FinderUpload, Layout, Protected};
use crate::app::config_context::use_config;
use crate::app::hooks::use_view_token;
use crate::app::use_catalog;
use crate::error::FinderError;
use crate::finder::{FinderStatus, RandomSceneMatcher, SceneFinder as Finder, Upload};

#[component]
pub fn SceneFinder() -> Element {
    rsx! {
        Layout { title: "Scene Finder".to_string(),
            Protected {
                FinderView {}
            }
        }
    }
}

#[component]
fn FinderView() -> Element {
    let catalog = use_catalog();
    let config = use_config();
    let view = use_view_token();

    let mut status = use_signal(FinderStatus::default);
    // Token of the run in flight, a child of the view token
    let mut in_flight = use_signal(|| None::<CancellationToken>);

    let on_upload = move |upload: Upload| {
        if let Some(previous) = in_flight.write().take() {
            previous.cancel();
        }
        let run = view.child_token();
        in_flight.set(Some(run.clone()));

        let finder = Finder::new(RandomSceneMatcher::new(&catalog), config.get().finder);
        spawn(async move {
            let mut status = status;
            let result = finder
                .upload_screenshot(&upload, &run, |now| status.set(now.clone()))
                .await;
            match result {
                Ok(_) | Err(FinderError::Cancelled) => {}
                Err(e) => tracing::debug!("Scene finder gave up on {}: {}", upload.file_name, e),
            }
        });
    };

    let on_reset = move |_: ()| {
        if let Some(run) = in_flight.write().take() {
            run.cancel();
        }
        status.write().reset();
    };

    let current = status();

    rsx! {
        div { class: "min-h-screen pt-24 pb-16 px-4",
            if let Some(found) = current.matched.clone() {
                FinderResults { found, on_reset }
            } else {
                FinderUpload {
                    busy: current.is_busy(),
                    error: current.error.clone(),
                    on_upload,
                    on_reject: move |message: String| {
                        status.set(FinderStatus {
                            error: Some(message),
                            ..FinderStatus::default()
                        });
                    },
                    on_dismiss_error: move |_: ()| status.write().error = None,
                }
            }
        }
    }
}
