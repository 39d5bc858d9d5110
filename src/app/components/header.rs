//! Top navigation bar.
//!
//! Transparent over the hero until the window scrolls past
//! [`SOLID_AFTER_PX`], then solid. Auth pages get the reduced variant with
//! only the logo.

use dioxus::prelude::*;

use crate::app::session_context::use_session;
use crate::app::Route;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Scroll offset at which the header turns solid
pub const SOLID_AFTER_PX: f64 = 30.0;

pub fn is_solid(scroll_y: f64) -> bool {
    scroll_y > SOLID_AFTER_PX
}

/// RAII guard removing the window scroll listener on drop
#[cfg(target_arch = "wasm32")]
struct ScrollListenerGuard {
    window: web_sys::Window,
    onscroll: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.onscroll.as_ref().unchecked_ref());
    }
}

/// Whether the window is scrolled past the header threshold.
fn use_window_scrolled() -> Signal<bool> {
    let scrolled = use_signal(|| false);

    // Client-side only: the server renders the transparent variant
    #[cfg(target_arch = "wasm32")]
    {
        let guard: Rc<RefCell<Option<ScrollListenerGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let guard_clone = guard.clone();
        use_effect(move || {
            if guard_clone.borrow().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };

            let mut scrolled_clone = scrolled;
            let reader = window.clone();
            let onscroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let solid = is_solid(reader.scroll_y().unwrap_or(0.0));
                if *scrolled_clone.peek() != solid {
                    scrolled_clone.set(solid);
                }
            }) as Box<dyn FnMut(_)>);

            if let Err(e) =
                window.add_event_listener_with_callback("scroll", onscroll.as_ref().unchecked_ref())
            {
                tracing::warn!("Could not watch window scroll: {:?}", e);
                return;
            }

            *guard_clone.borrow_mut() = Some(ScrollListenerGuard { window, onscroll });
        });

        use_drop(move || {
            guard.borrow_mut().take();
        });
    }

    scrolled
}

#[component]
pub fn Header(
    /// Logo only (login/signup)
    #[props(default = false)]
    minimal: bool,
) -> Element {
    let scrolled = use_window_scrolled();
    let session = use_session();
    let mut menu_open = use_signal(|| false);

    let background = if minimal || scrolled() {
        "bg-neutral-950"
    } else {
        "bg-gradient-to-b from-black/80 to-transparent"
    };

    let user = session.current();
    let logout = session.clone();

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-40 transition-colors duration-300 {background}",
            div { class: "flex items-center justify-between px-4 md:px-12 h-16",
                div { class: "flex items-center gap-8",
                    Link {
                        to: Route::Home {},
                        class: "text-red-600 text-2xl md:text-3xl font-extrabold tracking-tight",
                        "CINESTREAM"
                    }
                    if !minimal {
                        nav { class: "hidden md:flex items-center gap-5 text-sm text-white/80",
                            Link { to: Route::Home {}, class: "hover:text-white", "Home" }
                            Link { to: Route::SceneFinder {}, class: "hover:text-white", "Scene Finder" }
                        }
                    }
                }

                if !minimal {
                    if let Some(user) = user {
                        div { class: "relative",
                            button {
                                class: "flex items-center gap-2 text-sm",
                                onclick: move |_| menu_open.set(!menu_open()),
                                span { class: "w-8 h-8 rounded bg-red-600 flex items-center justify-center font-bold uppercase",
                                    {user.name.chars().next().map(String::from).unwrap_or_default()}
                                }
                                span { class: "hidden sm:inline", "{user.name}" }
                            }
                            if menu_open() {
                                div { class: "absolute right-0 mt-2 w-56 bg-black/95 border border-white/10 rounded shadow-lg py-2",
                                    div { class: "px-4 py-2 border-b border-white/10",
                                        p { class: "text-sm font-semibold", "{user.name}" }
                                        p { class: "text-xs text-white/60 truncate", "{user.email}" }
                                    }
                                    Link {
                                        to: Route::SceneFinder {},
                                        class: "block px-4 py-2 text-sm hover:bg-white/10",
                                        onclick: move |_| menu_open.set(false),
                                        "Scene Finder"
                                    }
                                    button {
                                        class: "block w-full text-left px-4 py-2 text-sm hover:bg-white/10",
                                        onclick: move |_| {
                                            menu_open.set(false);
                                            logout.logout();
                                            navigator().push(Route::Login {});
                                        },
                                        "Sign out of Cinestream"
                                    }
                                }
                            }
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "bg-red-600 hover:bg-red-700 text-sm font-semibold px-4 py-1.5 rounded",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_only_past_threshold() {
        assert!(!is_solid(0.0));
        assert!(!is_solid(30.0));
        assert!(is_solid(30.5));
        assert!(is_solid(400.0));
    }
}
