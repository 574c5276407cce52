//! Community Q&A stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Community page component with one mock answered post.
#[component]
pub fn CommunityQa() -> Element {
    rsx! {
        Layout {
            title: "Community".to_string(),
            nav_active: "more".to_string(),

            h2 { "Community Q&A" }

            article {
                p { "Post anonymously, filter by topic, and see verified answers." }
                ul {
                    li { "How do I refill my prescription? — Answered by Pharmacist (verified)" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_mock_answered_post() {
        let html = dioxus::ssr::render_element(rsx! { CommunityQa {} });
        assert!(html.contains("How do I refill my prescription? — Answered by Pharmacist (verified)"));
    }
}
