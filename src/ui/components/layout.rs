//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::{FooterNav, TopNav};

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
main.container { padding-bottom: 5.5rem; }
footer.app-footer { position: fixed; bottom: 0; left: 0; right: 0; background: var(--pico-card-background-color); border-top: 1px solid var(--pico-muted-border-color); }
footer.app-footer nav { display: flex; justify-content: space-between; }
footer.app-footer a { flex: 1; text-align: center; padding: 0.5rem 0; font-size: 0.75rem; text-decoration: none; }
footer.app-footer .nav-icon { display: block; font-size: 1.25rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 0.75rem; }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 0.75rem; }
.chips { display: flex; gap: 0.5rem; }
.chips button { margin: 0; padding: 0.25rem 0.75rem; font-size: 0.85rem; }
.controls { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.controls button { margin: 0; padding: 0.5rem 1rem; }
.list-row { display: flex; justify-content: space-between; align-items: center; }
.urgency-low { color: var(--pico-ins-color); }
.urgency-high { color: var(--pico-del-color); }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Main layout component wrapping all pages.
///
/// Renders the fixed frame around the active page: header with the app title
/// and top nav links, footer with the six icon+label nav items.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("HN_VERSION");
    let git_sha = env!("HN_GIT_SHA");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Health Navigator" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css"
            }
            style { {CUSTOM_STYLES} }
        }
        body {
            header { class: "container",
                div { class: "list-row",
                    h1 { "Health Navigator" }
                    TopNav { active: props.nav_active.clone() }
                }
            }
            main { class: "container",
                {props.children}
            }
            footer { class: "app-footer container-fluid",
                FooterNav { active: props.nav_active.clone() }
                small { style: "display:block;text-align:center;", "Health Navigator v{version} ({git_sha})" }
            }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}
