//! Page chrome shared by every page except the player.

use dioxus::prelude::*;

use super::{Footer, Header};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
    /// Reduced header for the auth pages
    #[props(default = false)]
    pub minimal: bool,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - Cinestream", props.title);

    rsx! {
        // Dioxus hoists this to the real <head>
        document::Title { "{full_title}" }

        Header { minimal: props.minimal }
        main { class: "flex-1",
            {props.children}
        }
        Footer {}
    }
}
