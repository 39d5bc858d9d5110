use dioxus::prelude::*;

use crate::app::{LoadingScreen, Route};

/// Unknown paths go home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        tracing::debug!("No route for /{}, redirecting home", segments.join("/"));
        navigator().replace(Route::Home {});
    });

    rsx! {
        LoadingScreen {}
    }
}
