//! Title page: backdrop with a delayed trailer preview, details, scenes and
//! related titles.

use dioxus::prelude::*;
use rand::Rng;

use crate::app::components::{Layout, MovieRow, Protected};
use crate::app::config_context::use_config;
use crate::app::hooks::use_view_token;
use crate::app::{use_catalog, LoadingScreen, Route};
use crate::catalog::Category;
use crate::timer::{millis, sleep_or_cancel};

/// Range of the decorative "% Match" label
const MATCH_SCORE_RANGE: std::ops::RangeInclusive<u8> = 70..=99;

#[component]
pub fn MovieDetail(id: u32) -> Element {
    let catalog = use_catalog();
    let title = catalog
        .movie(id)
        .map(|m| m.title.clone())
        .unwrap_or_else(|| "Movie".to_string());

    rsx! {
        Layout { title,
            Protected {
                DetailView { key: "{id}", id }
            }
        }
    }
}

#[component]
fn DetailView(id: u32) -> Element {
    let catalog = use_catalog();
    let config = use_config();
    let token = use_view_token();

    let mut muted = use_signal(|| true);
    let mut show_trailer = use_signal(|| false);
    // Picked on the client so hydration sees the server's empty label
    let mut match_score = use_signal(|| None::<u8>);

    let trailer_delay = config.get().detail.trailer_delay_ms;
    let has_movie = catalog.movie(id).is_some();
    use_effect(move || {
        if !has_movie {
            return;
        }
        match_score.set(Some(rand::thread_rng().gen_range(MATCH_SCORE_RANGE)));
        let token = token.clone();
        spawn(async move {
            if sleep_or_cancel(millis(trailer_delay), &token).await.is_ok() {
                show_trailer.set(true);
            }
        });
    });

    let Some(movie) = catalog.movie(id).cloned() else {
        return rsx! { LoadingScreen {} };
    };
    let related = catalog.category_containing(id).cloned();
    let genres = movie.genres_label();

    rsx! {
        section { class: "relative w-full h-[80vh]",
            div { class: "absolute inset-0",
                if show_trailer() {
                    img {
                        class: "w-full h-full object-cover opacity-50",
                        src: "{movie.backdrop_url}",
                        alt: "{movie.title} trailer",
                    }
                    div { class: "absolute inset-0 bg-gradient-to-b from-transparent to-neutral-950" }
                    div { class: "absolute bottom-8 right-8 flex items-center gap-3",
                        button {
                            class: "bg-neutral-900/80 hover:bg-neutral-800 px-3 py-2 rounded-full text-sm transition",
                            aria_label: if muted() { "Unmute" } else { "Mute" },
                            onclick: move |_| muted.set(!muted()),
                            if muted() { "🔇" } else { "🔊" }
                        }
                        span { class: "text-white/80 text-xs bg-neutral-900/80 px-2 py-1 rounded-md", "Preview" }
                    }
                } else {
                    img {
                        class: "w-full h-full object-cover",
                        src: "{movie.backdrop_url}",
                        alt: "{movie.title}",
                    }
                    div { class: "absolute inset-0 bg-gradient-to-r from-neutral-950/90 via-neutral-950/70 to-transparent" }
                    div { class: "absolute inset-0 bg-gradient-to-b from-transparent to-neutral-950" }
                }
            }

            div { class: "absolute bottom-16 md:bottom-24 inset-x-0 px-4 md:px-16",
                div { class: "w-full md:w-2/3 lg:w-1/2",
                    h1 { class: "text-3xl md:text-5xl font-bold mb-3", "{movie.title}" }
                    div { class: "flex items-center gap-4 text-sm text-white/80 mb-4",
                        if let Some(score) = match_score() {
                            span { class: "text-green-500 font-semibold", "{score}% Match" }
                        }
                        span { "{movie.release_year}" }
                        span { class: "border border-white/40 px-1 text-xs", "{movie.rating}" }
                        span { "{movie.duration}" }
                    }
                    p { class: "text-white/90 text-sm md:text-base mb-6 max-w-xl", "{movie.description}" }
                    div { class: "flex flex-wrap gap-3",
                        Link {
                            to: Route::Watch { id: movie.id, t: String::new() },
                            class: "bg-white text-black py-2 px-6 rounded font-semibold hover:bg-white/90 transition",
                            "▶ Play"
                        }
                        button { class: "bg-neutral-600/60 py-2 px-4 rounded font-medium hover:bg-neutral-700/60 transition",
                            "+ My List"
                        }
                    }
                }
            }
        }

        div { class: "px-4 md:px-16 py-8 grid grid-cols-1 lg:grid-cols-3 gap-8",
            div { class: "lg:col-span-2",
                h2 { class: "text-xl font-semibold mb-4", "About {movie.title}" }
                dl { class: "grid grid-cols-1 md:grid-cols-2 gap-4 text-sm mb-8",
                    div {
                        dt { class: "text-white/50 inline", "Genres: " }
                        dd { class: "inline", "{genres}" }
                    }
                    div {
                        dt { class: "text-white/50 inline", "Maturity rating: " }
                        dd { class: "inline", "{movie.rating}" }
                    }
                    div {
                        dt { class: "text-white/50 inline", "Released: " }
                        dd { class: "inline", "{movie.release_year}" }
                    }
                    div {
                        dt { class: "text-white/50 inline", "Runtime: " }
                        dd { class: "inline", "{movie.duration}" }
                    }
                }

                if movie.has_scenes() {
                    div { class: "bg-neutral-900 p-4 rounded-md mb-8 border-l-4 border-red-600",
                        h3 { class: "text-lg font-medium mb-2", "Looking for a specific scene?" }
                        p { class: "text-white/80 text-sm mb-3",
                            "Try Scene Finder to jump straight to memorable moments in {movie.title}."
                        }
                        Link {
                            to: Route::SceneFinder {},
                            class: "inline-block bg-red-600 hover:bg-red-700 text-sm py-2 px-4 rounded transition",
                            "Try Scene Finder"
                        }
                        ul { class: "mt-4 space-y-2",
                            for scene in movie.scenes.iter() {
                                li { key: "{scene.id}", class: "flex items-center gap-3 text-sm",
                                    Link {
                                        to: Route::watch_at(movie.id, &scene.timestamp),
                                        class: "font-mono text-red-500 hover:underline",
                                        "{scene.timestamp}"
                                    }
                                    span { class: "text-white/70", "{scene.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(category) = related {
            div { class: "pb-10",
                MovieRow { category: Category { name: "More Like This".to_string(), ..category } }
            }
        }
    }
}
