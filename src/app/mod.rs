//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component, the route table and the
//! context providers every page relies on.

use dioxus::prelude::*;

use crate::catalog::Catalog;

pub mod components;
pub mod config_context;
pub mod hooks;
pub mod pages;
pub mod session_context;

use components::Spinner;
use config_context::use_config_provider;
use pages::{Home, Login, MovieDetail, NotFound, SceneFinder, Signup, Watch};
use session_context::use_session_provider;

/// Root app component. Loads the catalog, then hands over to the shell.
#[component]
pub fn App() -> Element {
    let catalog = use_hook(Catalog::builtin);

    match catalog {
        Ok(catalog) => rsx! {
            AppShell { catalog }
        },
        Err(e) => {
            tracing::error!("Catalog failed validation: {}", e);
            rsx! {
                div { class: "flex flex-col items-center justify-center h-screen bg-black text-white",
                    h1 { class: "text-2xl font-bold mb-2", "Something went wrong" }
                    p { class: "text-white/70 text-sm", "{e}" }
                }
            }
        }
    }
}

/// Installs the shared contexts and the router.
#[component]
fn AppShell(catalog: Catalog) -> Element {
    use_context_provider(|| catalog.clone());

    // Timings first: the session restore waits for them (storage key may be overridden)
    use_config_provider();

    use_session_provider();

    rsx! {
        document::Title { "Cinestream" }
        document::Link { rel: "stylesheet", href: asset!("/assets/tailwind.css") }
        div { class: "flex flex-col min-h-screen bg-neutral-950 text-white",
            Router::<Route> {}
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/movie/:id")]
    MovieDetail { id: u32 },
    #[route("/watch/:id?:t")]
    Watch { id: u32, t: String },
    #[route("/scene-finder")]
    SceneFinder {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Watch link that starts playback at a scene timestamp.
    pub fn watch_at(id: u32, timestamp: &str) -> Self {
        Route::Watch {
            id,
            t: timestamp.to_string(),
        }
    }
}

/// Full-screen loading indicator used while data or the session resolves.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "flex items-center justify-center h-screen bg-neutral-950",
            Spinner { size: "h-10 w-10".to_string() }
        }
    }
}

/// Get the catalog - use in any page
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}
