//! Navigation components for the web UI.

use dioxus::prelude::*;

/// The six main navigation destinations: (id, label, short label, icon, href).
///
/// Defined once and never mutated; both the top nav and the footer nav render
/// from this table. The short label is what fits in the footer bar.
pub const NAV_TABS: &[(&str, &str, &str, &str, &str)] = &[
    ("home", "Home", "Home", "🏠", "/"),
    ("search", "Search", "Search", "🔍", "/search"),
    ("appointments", "Appointments", "Appt", "📅", "/appointments"),
    ("symptoms", "Symptoms", "Symptoms", "🩺", "/symptoms"),
    ("emergency", "Emergency", "Emergency", "🚨", "/emergency"),
    ("more", "More", "More", "⋯", "/more"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "emergency")
    pub active: String,
}

/// Header navigation bar with text links for the main tabs.
#[component]
pub fn TopNav(props: NavProps) -> Element {
    rsx! {
        nav {
            ul {
                for (id, label, _, _, href) in NAV_TABS.iter() {
                    li {
                        if *id == props.active.as_str() {
                            a {
                                href: *href,
                                "aria-current": "page",
                                strong { "{label}" }
                            }
                        } else {
                            a {
                                href: *href,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Footer navigation bar with one icon+label item per main tab.
#[component]
pub fn FooterNav(props: NavProps) -> Element {
    rsx! {
        nav {
            for (id, _, short, icon, href) in NAV_TABS.iter() {
                NavItem {
                    href: href.to_string(),
                    label: short.to_string(),
                    icon: icon.to_string(),
                    active: *id == props.active.as_str(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavItemProps {
    pub href: String,
    pub label: String,
    pub icon: String,
    #[props(default = false)]
    pub active: bool,
}

/// A single footer navigation item: icon above label, linking to a tab.
#[component]
pub fn NavItem(props: NavItemProps) -> Element {
    rsx! {
        a {
            href: "{props.href}",
            "aria-current": if props.active { "page" },
            span { class: "nav-icon", "{props.icon}" }
            if props.active {
                strong { "{props.label}" }
            } else {
                span { "{props.label}" }
            }
        }
    }
}
