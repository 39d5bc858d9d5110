use dioxus::prelude::*;

use crate::app::Route;
use crate::catalog::Movie;

#[component]
pub fn MovieCard(
    movie: Movie,
    /// Originals row uses taller poster-style cards
    #[props(default = false)]
    large: bool,
) -> Element {
    let genres = movie.genres_label();
    let size = if large {
        "w-40 md:w-56 aspect-[2/3]"
    } else {
        "w-44 md:w-64 aspect-video"
    };

    rsx! {
        Link {
            to: Route::MovieDetail { id: movie.id },
            class: "group relative flex-none {size} rounded overflow-hidden bg-neutral-800 transition-transform duration-300 hover:scale-105 hover:z-10",
            img {
                class: "w-full h-full object-cover",
                src: "{movie.thumbnail_url}",
                alt: "{movie.title}",
                loading: "lazy",
            }
            if movie.has_scenes() {
                span { class: "absolute top-2 right-2 bg-red-600/90 text-[10px] font-bold uppercase px-1.5 py-0.5 rounded",
                    "Scene search"
                }
            }
            div { class: "absolute inset-0 flex flex-col justify-end p-3 bg-gradient-to-t from-black/90 via-black/30 to-transparent opacity-0 group-hover:opacity-100 transition-opacity",
                p { class: "font-semibold text-sm truncate", "{movie.title}" }
                p { class: "text-xs text-white/70 truncate", "{movie.release_year} · {genres}" }
            }
        }
    }
}
