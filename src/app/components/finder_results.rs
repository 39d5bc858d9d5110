use dioxus::prelude::*;

use crate::app::Route;
use crate::finder::SceneMatch;

#[component]
pub fn FinderResults(found: SceneMatch, on_reset: EventHandler<()>) -> Element {
    let SceneMatch { scene, movie, .. } = found.clone();
    let percent = found.confidence_percent();

    rsx! {
        div { class: "w-full max-w-3xl mx-auto",
            div { class: "bg-neutral-900 rounded-lg shadow-lg overflow-hidden p-6",
                div { class: "flex justify-between items-center mb-5",
                    h2 { class: "text-2xl font-bold",
                        span { class: "text-red-600 mr-2", "Scene" }
                        "Found!"
                    }
                    button {
                        class: "text-white/80 hover:text-white text-sm transition",
                        onclick: move |_| on_reset.call(()),
                        "← Try Another Screenshot"
                    }
                }

                div { class: "flex flex-col md:flex-row gap-6 mb-6",
                    div { class: "w-full md:w-1/2 rounded-md overflow-hidden",
                        img { class: "w-full h-auto", src: "{scene.screenshot_url}", alt: "Matched scene" }
                    }
                    div { class: "w-full md:w-1/2 bg-black/30 p-4 rounded-md space-y-3",
                        div { class: "flex items-center gap-3",
                            img {
                                class: "w-16 h-16 object-cover rounded flex-none",
                                src: "{movie.thumbnail_url}",
                                alt: "{movie.title}",
                            }
                            div {
                                h3 { class: "font-bold", "{movie.title}" }
                                p { class: "text-xs text-white/70",
                                    "{movie.release_year} • {movie.rating} • {movie.duration}"
                                }
                            }
                        }
                        p { class: "text-sm",
                            span { class: "text-xs text-white/70 mr-2", "Timestamp:" }
                            span { class: "font-mono font-semibold", "{scene.timestamp}" }
                        }
                        p { class: "text-sm text-white/80 bg-black/20 p-3 rounded", "\"{scene.description}\"" }
                        div { class: "flex items-center gap-2",
                            span { class: "text-xs text-white/70", "Match confidence:" }
                            div { class: "flex-1 bg-neutral-800 h-2 rounded-full overflow-hidden",
                                div { class: "bg-green-500 h-full rounded-full", style: "width: {percent}%" }
                            }
                            span { class: "text-xs text-green-400 font-semibold", "{percent}%" }
                        }
                    }
                }

                div { class: "flex flex-col gap-3",
                    Link {
                        to: Route::watch_at(movie.id, &scene.timestamp),
                        class: "bg-red-600 hover:bg-red-700 py-3 px-6 rounded text-center font-semibold transition",
                        "▶ Watch This Scene"
                    }
                    Link {
                        to: Route::MovieDetail { id: movie.id },
                        class: "bg-white/10 hover:bg-white/20 py-2 rounded text-center text-sm transition",
                        "View Details"
                    }
                }
            }
        }
    }
}
