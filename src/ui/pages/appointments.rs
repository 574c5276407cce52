//! Appointments page component.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Appointments page component with one mock upcoming appointment.
/// The Details and Start Telehealth buttons are wired to nothing.
#[component]
pub fn Appointments() -> Element {
    rsx! {
        Layout {
            title: "Appointments".to_string(),
            nav_active: "appointments".to_string(),

            h2 { "Appointments" }

            article {
                div { class: "list-row",
                    div {
                        strong { "Dr. Patel — Annual Checkup" }
                        br {}
                        small { "Dec 10, 2025 • 9:30 AM" }
                    }
                    div { class: "controls",
                        button { class: "outline", "Details" }
                        button { "Start Telehealth" }
                    }
                }
            }
        }
    }
}
