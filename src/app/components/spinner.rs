use dioxus::prelude::*;

#[component]
pub fn Spinner(
    /// Tailwind size classes
    #[props(default = "h-8 w-8".to_string())]
    size: String,
) -> Element {
    rsx! {
        div {
            class: "{size} animate-spin rounded-full border-4 border-white/20 border-t-red-600",
            role: "status",
            aria_label: "Loading",
        }
    }
}
