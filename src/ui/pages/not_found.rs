//! Not-found placeholder for unregistered paths.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Generic not-found page component.
#[component]
pub fn NotFound() -> Element {
    rsx! {
        Layout {
            title: "Not Found".to_string(),
            nav_active: String::new(),

            section { style: "text-align:center;padding:2.5rem 0;",
                h2 { "Page not found" }
                p { a { href: "/", "Back to Home" } }
            }
        }
    }
}
