//! Browse page: featured hero then one row per category, originals first.

use dioxus::prelude::*;

use crate::app::components::{Hero, Layout, MovieRow, Protected};
use crate::app::use_catalog;

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let featured = catalog.featured().clone();
    let (originals, rest) = catalog.rows();

    rsx! {
        Layout { title: "Home".to_string(),
            Protected {
                Hero { movie: featured }
                div { class: "-mt-16 md:-mt-24 relative z-10 pb-10",
                    for category in originals {
                        MovieRow { key: "{category.id}", category: category.clone(), large: true }
                    }
                    for category in rest {
                        MovieRow { key: "{category.id}", category: category.clone() }
                    }
                }
            }
        }
    }
}
