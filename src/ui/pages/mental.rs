//! Mental health stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Mental health page component. Both buttons are wired to nothing.
#[component]
pub fn MentalHealth() -> Element {
    rsx! {
        Layout {
            title: "Mental Health".to_string(),
            nav_active: "more".to_string(),

            h2 { "Mental Health" }

            article {
                p { "Mood tracker, breathing guides, therapist search and crisis hotlines." }
                div { class: "controls",
                    button { class: "outline", "Start Mood Entry" }
                    button { class: "outline", "Breathing Exercises" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tool_buttons() {
        let html = dioxus::ssr::render_element(rsx! { MentalHealth {} });
        assert!(html.contains("Mood tracker, breathing guides, therapist search and crisis hotlines."));
        assert!(html.contains("Start Mood Entry"));
        assert!(html.contains("Breathing Exercises"));
    }
}
