//! Provider search page component.
//!
//! Search box, filter chips, and two mock results. Nothing is queried; the
//! results are component-local placeholders.

use dioxus::prelude::*;

use crate::ui::components::{FilterChips, Layout};

/// Mock provider results shown under the search box.
const MOCK_RESULTS: &[&str] = &[
    "Dr. A — Cardiology — In-network",
    "Clinic B — Urgent Care — 2.3 mi",
];

/// Search page component.
#[component]
pub fn Search() -> Element {
    rsx! {
        Layout {
            title: "Search".to_string(),
            nav_active: "search".to_string(),

            h2 { "Find Providers" }

            article {
                input {
                    r#type: "search",
                    placeholder: "Search by name, specialty or location",
                }
                FilterChips {
                    options: vec![
                        "In-network".to_string(),
                        "Telehealth".to_string(),
                        "Pediatrics".to_string(),
                    ],
                }
                ul {
                    for result in MOCK_RESULTS.iter() {
                        li { "{result}" }
                    }
                }
            }
        }
    }
}
