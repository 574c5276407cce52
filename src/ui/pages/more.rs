//! More page component - directory of the advanced feature stubs.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Feature directory: (slug, title). One link per feature, at `/more/<slug>`.
pub const FEATURES: &[(&str, &str)] = &[
    ("prescriptions", "Prescription Price Finder"),
    ("bill-decoder", "AI Bill Decoder"),
    ("wallet", "Health Wallet"),
    ("mental", "Mental Health"),
    ("coach", "AI Lifestyle Coach"),
    ("community", "Community Q&A"),
    ("rewards", "Health Rewards"),
    ("premium", "Premium Plan"),
];

/// More page component.
#[component]
pub fn More() -> Element {
    rsx! {
        Layout {
            title: "More".to_string(),
            nav_active: "more".to_string(),

            h2 { "More Tools" }

            section { class: "feature-grid",
                for (slug, title) in FEATURES.iter() {
                    a {
                        href: "/more/{slug}",
                        role: "button",
                        class: "secondary outline",
                        "{title}"
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
    fn renders_one_link_per_feature() {
        assert_eq!(FEATURES.len(), 8);

        let html = dioxus::ssr::render_element(rsx! { More {} });
        for (slug, title) in FEATURES.iter() {
            assert!(
                html.contains(&format!("href=\"/more/{slug}\"")),
                "missing link for {slug}"
            );
            // SSR escapes text nodes, so "&" appears as "&amp;"
            let escaped = title.replace('&', "&amp;");
            assert!(html.contains(&escaped), "missing title {title}");
        }
        assert_eq!(html.matches("href=\"/more/").count(), FEATURES.len());
    }
}
