//! Filter chip row primitive.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterChipsProps {
    /// Chip labels, rendered in order
    pub options: Vec<String>,
}

/// A row of filter chips. Purely visual; the chips are wired to nothing.
#[component]
pub fn FilterChips(props: FilterChipsProps) -> Element {
    rsx! {
        div { class: "chips",
            for option in props.options.iter() {
                button { class: "outline", "{option}" }
            }
        }
    }
}
