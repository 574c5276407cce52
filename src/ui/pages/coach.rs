//! Lifestyle coach stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Lifestyle coach page component with a fixed progress line.
#[component]
pub fn AiLifestyleCoach() -> Element {
    rsx! {
        Layout {
            title: "Coach".to_string(),
            nav_active: "more".to_string(),

            h2 { "AI Lifestyle Coach" }
            p { "Goals, wearables sync, and AI insights." }

            article {
                p { "Today's progress: Steps 4,200 / 8,000 • Water 5/8 cups" }
            }
        }
    }
}
