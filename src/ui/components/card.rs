//! Card primitives shared across pages.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    pub subtitle: String,
}

/// A small summary card: title above muted subtitle.
#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        article {
            div { strong { "{props.title}" } }
            small { "{props.subtitle}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct QuickActionProps {
    pub title: String,
    pub href: String,
}

/// A prominent shortcut linking to another page.
#[component]
pub fn QuickAction(props: QuickActionProps) -> Element {
    rsx! {
        a {
            href: "{props.href}",
            role: "button",
            class: "secondary",
            "{props.title}"
        }
    }
}
