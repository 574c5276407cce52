//! Emergency page component.
//!
//! Nearby ERs and urgent care with wait times. The three locations and their
//! wait times are fixed mock data; a real feed would replace them.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Mock locations: (name, distance, urgency, wait time).
const LOCATIONS: &[(&str, &str, &str, &str)] = &[
    ("St. Mary's ER", "1.6 mi", "low", "15 min"),
    ("City Urgent Care", "2.1 mi", "moderate", "45 min"),
    ("North Hospital", "5.4 mi", "high", "120+ min"),
];

/// Emergency page component.
#[component]
pub fn Emergency() -> Element {
    rsx! {
        Layout {
            title: "Emergency".to_string(),
            nav_active: "emergency".to_string(),

            h2 { "Emergency & Urgent Care" }

            article {
                p { "Nearby ERs and urgent care — live wait times (mock data)." }
                ul {
                    for (name, dist, urgency, wait) in LOCATIONS.iter() {
                        li { class: "list-row",
                            div {
                                strong { "{name}" }
                                br {}
                                small { class: "urgency-{urgency}", "{dist} • {urgency}" }
                            }
                            strong { "{wait}" }
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
    fn renders_exactly_three_locations_with_wait_times() {
        assert_eq!(LOCATIONS.len(), 3);

        let html = dioxus::ssr::render_element(rsx! { Emergency {} });
        assert!(html.contains("St. Mary"));
        assert!(html.contains("15 min"));
        assert!(html.contains("City Urgent Care"));
        assert!(html.contains("45 min"));
        assert!(html.contains("North Hospital"));
        assert!(html.contains("120+ min"));
    }

    #[test]
    fn rendering_is_pure() {
        let first = dioxus::ssr::render_element(rsx! { Emergency {} });
        let second = dioxus::ssr::render_element(rsx! { Emergency {} });
        assert_eq!(first, second);
    }
}
