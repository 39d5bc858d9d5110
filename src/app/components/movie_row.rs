//! Horizontally scrolling row of movie cards with arrow buttons.

use dioxus::prelude::*;

use super::MovieCard;
use crate::catalog::Category;

/// Slack before the right arrow disappears
pub const SCROLL_TOLERANCE_PX: f64 = 5.0;
/// How much of the viewport a click keeps on screen
pub const SCROLL_OVERLAP_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Scroll geometry of the row container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollExtent {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollExtent {
    pub fn can_scroll_left(&self) -> bool {
        self.scroll_left > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.scroll_left < self.scroll_width - self.client_width - SCROLL_TOLERANCE_PX
    }

    /// Signed offset for one arrow click.
    pub fn step(&self, direction: ScrollDirection) -> f64 {
        let amount = (self.client_width - SCROLL_OVERLAP_PX).max(0.0);
        match direction {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn row_element(dom_id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(dom_id)
}

#[cfg(target_arch = "wasm32")]
fn measure(dom_id: &str) -> Option<ScrollExtent> {
    let el = row_element(dom_id)?;
    Some(ScrollExtent {
        scroll_left: f64::from(el.scroll_left()),
        scroll_width: f64::from(el.scroll_width()),
        client_width: f64::from(el.client_width()),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn measure(_dom_id: &str) -> Option<ScrollExtent> {
    None
}

#[cfg(target_arch = "wasm32")]
fn scroll_by(dom_id: &str, dx: f64) {
    if let Some(el) = row_element(dom_id) {
        el.scroll_by_with_x_and_y(dx, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_by(_dom_id: &str, _dx: f64) {}

fn refresh(dom_id: &str, mut extent: Signal<ScrollExtent>, mut measured: Signal<bool>) {
    if let Some(now) = measure(dom_id) {
        extent.set(now);
        measured.set(true);
    }
}

fn scroll_row(dom_id: &str, last: ScrollExtent, direction: ScrollDirection) {
    let now = measure(dom_id).unwrap_or(last);
    scroll_by(dom_id, now.step(direction));
}

#[component]
pub fn MovieRow(
    category: Category,
    #[props(default = false)]
    large: bool,
) -> Element {
    let dom_id = format!("row-{}", category.id);
    let extent = use_signal(ScrollExtent::default);
    // Before the first measurement: left hidden, right visible
    let measured = use_signal(|| false);

    let on_mounted = {
        let dom_id = dom_id.clone();
        move |_: MountedEvent| refresh(&dom_id, extent, measured)
    };
    let on_scroll = {
        let dom_id = dom_id.clone();
        move |_: ScrollEvent| refresh(&dom_id, extent, measured)
    };
    let on_left = {
        let dom_id = dom_id.clone();
        move |_: MouseEvent| scroll_row(&dom_id, extent(), ScrollDirection::Left)
    };
    let on_right = {
        let dom_id = dom_id.clone();
        move |_: MouseEvent| scroll_row(&dom_id, extent(), ScrollDirection::Right)
    };

    let show_left = measured() && extent().can_scroll_left();
    let show_right = !measured() || extent().can_scroll_right();

    rsx! {
        section { class: "relative px-4 md:px-12 mb-8 group/row",
            h2 { class: "text-lg md:text-xl font-semibold mb-3", "{category.name}" }
            if show_left {
                button {
                    class: "absolute left-0 top-9 bottom-0 z-20 w-10 md:w-12 bg-black/60 text-3xl opacity-0 group-hover/row:opacity-100 transition-opacity",
                    aria_label: "Scroll left",
                    onclick: on_left,
                    "‹"
                }
            }
            div {
                id: "{dom_id}",
                class: "flex gap-2 overflow-x-auto scroll-smooth scrollbar-hide py-2",
                onmounted: on_mounted,
                onscroll: on_scroll,
                for movie in category.movies.iter().cloned() {
                    MovieCard { key: "{movie.id}", movie, large }
                }
            }
            if show_right {
                button {
                    class: "absolute right-0 top-9 bottom-0 z-20 w-10 md:w-12 bg-black/60 text-3xl opacity-0 group-hover/row:opacity-100 transition-opacity",
                    aria_label: "Scroll right",
                    onclick: on_right,
                    "›"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(scroll_left: f64) -> ScrollExtent {
        ScrollExtent {
            scroll_left,
            scroll_width: 2000.0,
            client_width: 800.0,
        }
    }

    #[test]
    fn arrows_follow_scroll_position() {
        assert!(!extent(0.0).can_scroll_left());
        assert!(extent(0.0).can_scroll_right());

        assert!(extent(600.0).can_scroll_left());
        assert!(extent(600.0).can_scroll_right());

        // within tolerance of the end
        assert!(!extent(1196.0).can_scroll_right());
        assert!(!extent(1200.0).can_scroll_right());
    }

    #[test]
    fn short_row_never_scrolls_right() {
        let row = ScrollExtent {
            scroll_left: 0.0,
            scroll_width: 500.0,
            client_width: 800.0,
        };
        assert!(!row.can_scroll_right());
        assert!(!row.can_scroll_left());
    }

    #[test]
    fn step_keeps_an_overlap() {
        assert_eq!(extent(0.0).step(ScrollDirection::Right), 700.0);
        assert_eq!(extent(0.0).step(ScrollDirection::Left), -700.0);

        let narrow = ScrollExtent {
            client_width: 60.0,
            ..extent(0.0)
        };
        assert_eq!(narrow.step(ScrollDirection::Right), 0.0);
    }
}
