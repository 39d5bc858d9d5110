//! Full-screen player. No media is streamed: the backdrop stands in for the
//! video and two timer loops drive [`PlaybackState`].

use dioxus::prelude::*;

use crate::app::components::Protected;
use crate::app::config_context::use_config;
use crate::app::hooks::use_view_token;
use crate::app::{use_catalog, LoadingScreen};
use crate::playback::PlaybackState;
use crate::timer::{millis, sleep_or_cancel};

/// Granularity of the controls auto-hide clock
const IDLE_POLL_MS: u64 = 250;

#[component]
pub fn Watch(id: u32, t: String) -> Element {
    rsx! {
        document::Title { "Watch - Cinestream" }
        Protected {
            Player { key: "{id}-{t}", id, t }
        }
    }
}

#[component]
fn Player(id: u32, t: String) -> Element {
    let catalog = use_catalog();
    let config = use_config();
    let token = use_view_token();

    let mut state = use_signal(|| PlaybackState::new(config.get().playback, Some(t.as_str())));

    // Client-side only (effects never run during SSR)
    use_effect(move || {
        let tick_token = token.clone();
        spawn(async move {
            loop {
                let tick_ms = state.peek().tick_ms();
                if sleep_or_cancel(millis(tick_ms), &tick_token).await.is_err() {
                    break;
                }
                if state.peek().playing {
                    state.write().tick();
                }
            }
        });

        let idle_token = token.clone();
        spawn(async move {
            loop {
                if sleep_or_cancel(millis(IDLE_POLL_MS), &idle_token).await.is_err() {
                    break;
                }
                let counting = {
                    let s = state.peek();
                    s.playing && s.controls_visible
                };
                if counting {
                    state.write().idle_elapsed(IDLE_POLL_MS);
                }
            }
        });
    });

    let Some(movie) = catalog.movie(id).cloned() else {
        return rsx! { LoadingScreen {} };
    };

    let s = state.read().clone();
    let overlay = if s.controls_visible {
        "absolute inset-0 transition-opacity duration-300 opacity-100"
    } else {
        "absolute inset-0 transition-opacity duration-300 opacity-0 pointer-events-none cursor-none"
    };
    let progress = s.progress;
    let time_label = s.time_label();
    let play_label = if s.playing { "Pause" } else { "Play" };
    let play_icon = if s.playing { "❚❚" } else { "▶" };
    let mute_label = if s.muted { "Unmute" } else { "Mute" };

    rsx! {
        div {
            class: "h-screen w-full bg-black relative overflow-hidden",
            onmousemove: move |_| state.write().pointer_moved(),
            img {
                class: "absolute inset-0 w-full h-full object-contain",
                src: "{movie.backdrop_url}",
                alt: "{movie.title}",
            }

            div { class: overlay,
                div { class: "absolute top-0 inset-x-0 p-4 bg-gradient-to-b from-black/80 to-transparent",
                    div { class: "flex items-center gap-4",
                        button {
                            class: "p-2 rounded-full hover:bg-white/10 transition text-2xl",
                            aria_label: "Back",
                            onclick: move |_| navigator().go_back(),
                            "←"
                        }
                        div {
                            h2 { class: "text-xl font-bold", "{movie.title}" }
                            if let Some(marker) = s.scene_marker() {
                                p { class: "text-xs text-red-400 font-semibold", "Scene Finder match · {marker}" }
                            } else {
                                p { class: "text-white/70 text-sm", "{movie.release_year} · {movie.duration}" }
                            }
                        }
                    }
                }

                div { class: "absolute inset-0 flex items-center justify-center pointer-events-none",
                    button {
                        class: "pointer-events-auto bg-white/10 rounded-full w-20 h-20 text-3xl hover:bg-white/20 transition hover:scale-110",
                        aria_label: play_label,
                        onclick: move |_| state.write().toggle_play(),
                        "{play_icon}"
                    }
                }

                div { class: "absolute bottom-0 inset-x-0 bg-gradient-to-t from-black/90 to-transparent px-4 pb-4 pt-16",
                    div { class: "w-full h-1 bg-neutral-600 rounded-full mb-4 relative",
                        div { class: "h-full bg-red-600 rounded-full absolute", style: "width: {progress}%" }
                        div {
                            class: "absolute top-1/2 -translate-y-1/2 -translate-x-1/2 h-3 w-3 bg-red-600 rounded-full",
                            style: "left: {progress}%",
                        }
                    }
                    div { class: "flex items-center gap-4",
                        button {
                            class: "hover:text-white/70 transition",
                            aria_label: play_label,
                            onclick: move |_| state.write().toggle_play(),
                            "{play_icon}"
                        }
                        button {
                            class: "hover:text-white/70 transition",
                            aria_label: "Rewind 10 seconds",
                            onclick: move |_| state.write().rewind(),
                            "⟲ 10"
                        }
                        button {
                            class: "hover:text-white/70 transition",
                            aria_label: "Forward 10 seconds",
                            onclick: move |_| state.write().forward(),
                            "10 ⟳"
                        }
                        button {
                            class: "hover:text-white/70 transition",
                            aria_label: mute_label,
                            onclick: move |_| state.write().toggle_mute(),
                            if s.muted { "🔇" } else { "🔊" }
                        }
                        span { class: "text-sm ml-2 font-mono", "{time_label}" }
                    }
                }
            }
        }
    }
}
