use dioxus::prelude::*;

use crate::app::Route;
use crate::catalog::Movie;

/// Full-bleed banner for the featured title.
#[component]
pub fn Hero(movie: Movie) -> Element {
    let genres = movie.genres_label();

    rsx! {
        section { class: "relative h-[56vw] max-h-[85vh] min-h-[420px] w-full",
            img {
                class: "absolute inset-0 w-full h-full object-cover",
                src: "{movie.backdrop_url}",
                alt: "{movie.title}",
            }
            div { class: "absolute inset-0 bg-gradient-to-r from-black/90 via-black/40 to-transparent" }
            div { class: "absolute inset-x-0 bottom-0 h-32 bg-gradient-to-t from-neutral-950 to-transparent" }

            div { class: "relative z-10 flex flex-col justify-end h-full px-4 md:px-12 pb-24 max-w-2xl",
                if movie.is_original {
                    p { class: "text-xs font-bold tracking-[0.3em] text-red-500 mb-2", "CINESTREAM ORIGINAL" }
                }
                h1 { class: "text-4xl md:text-6xl font-extrabold mb-4", "{movie.title}" }
                div { class: "flex items-center gap-3 text-sm text-white/80 mb-4",
                    span { class: "text-green-400 font-semibold", "New" }
                    span { "{movie.release_year}" }
                    span { class: "border border-white/40 px-1.5 text-xs", "{movie.rating}" }
                    span { "{movie.duration}" }
                    span { class: "hidden md:inline", "{genres}" }
                }
                p { class: "text-white/90 text-base md:text-lg mb-6 line-clamp-3", "{movie.description}" }
                div { class: "flex flex-wrap gap-3",
                    Link {
                        to: Route::Watch { id: movie.id, t: String::new() },
                        class: "flex items-center gap-2 bg-white text-black font-semibold px-6 py-2 rounded hover:bg-white/80",
                        "▶ Play"
                    }
                    Link {
                        to: Route::MovieDetail { id: movie.id },
                        class: "flex items-center gap-2 bg-neutral-500/70 font-semibold px-6 py-2 rounded hover:bg-neutral-500/50",
                        "ⓘ More Info"
                    }
                    if movie.has_scenes() {
                        Link {
                            to: Route::SceneFinder {},
                            class: "flex items-center gap-2 border border-white/40 px-6 py-2 rounded hover:bg-white/10",
                            "Find a Scene"
                        }
                    }
                }
            }
        }
    }
}
