//! Dismissable error alert component.

use dioxus::prelude::*;

/// A dismissable error alert that displays an error message with a close button.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the dismiss button is clicked
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex items-start justify-between gap-3 rounded bg-orange-500/15 border border-orange-500/60 text-orange-200 text-sm px-4 py-3 mb-4",
            role: "alert",
            span { "{message}" }
            button {
                class: "text-orange-200/80 hover:text-white",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
