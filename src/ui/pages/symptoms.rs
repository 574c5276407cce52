//! Symptom checker page component.
//!
//! The form never navigates or sends anything; submit shows a local
//! acknowledgment and Clear empties the field.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Client-side JavaScript for the Symptoms page.
const SYMPTOM_SCRIPT: &str = r#"
document.getElementById('symptom-form').addEventListener('submit', (e) => {
    e.preventDefault();
    document.getElementById('symptom-ack').hidden = false;
});
document.getElementById('symptom-clear').addEventListener('click', () => {
    document.getElementById('symptom-input').value = '';
    document.getElementById('symptom-ack').hidden = true;
});
"#;

/// Symptoms page component.
#[component]
pub fn Symptoms() -> Element {
    rsx! {
        Layout {
            title: "Symptoms".to_string(),
            nav_active: "symptoms".to_string(),
            scripts: Some(SYMPTOM_SCRIPT.to_string()),

            h2 { "AI Symptom Checker" }

            article {
                form { id: "symptom-form",
                    textarea {
                        id: "symptom-input",
                        placeholder: "Describe symptoms, duration, severity...",
                    }
                    div { class: "controls",
                        button { r#type: "submit", "Check" }
                        button { r#type: "button", id: "symptom-clear", class: "outline", "Clear" }
                    }
                }
                p { id: "symptom-ack", hidden: true,
                    small { "AI symptom check is a placeholder — nothing was submitted." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_targets_no_backend() {
        let html = dioxus::ssr::render_element(rsx! { Symptoms {} });
        assert!(html.contains("AI Symptom Checker"));
        // No action/method: submit is intercepted locally
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
    }

    #[test]
    fn acknowledgment_starts_hidden() {
        let html = dioxus::ssr::render_element(rsx! { Symptoms {} });
        assert!(html.contains("symptom-ack"));
        assert!(html.contains("hidden"));
    }
}
