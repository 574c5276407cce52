//! Home page component.
//!
//! Dashboard overview: summary cards plus quick actions into the most-used
//! features. All values are placeholders.

use dioxus::prelude::*;

use crate::ui::components::{Card, Layout, QuickAction};

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            h2 { "Dashboard" }
            p { "Quick view of appointments, active prescriptions, and next actions." }

            section { class: "card-grid",
                Card {
                    title: "Next Appointment".to_string(),
                    subtitle: "Dr. Mehta — Oct 30, 11:00 AM".to_string(),
                }
                Card {
                    title: "Active Prescriptions".to_string(),
                    subtitle: "3 medications".to_string(),
                }
                Card {
                    title: "Steps Today".to_string(),
                    subtitle: "4,200".to_string(),
                }
                Card {
                    title: "Rewards".to_string(),
                    subtitle: "420 pts".to_string(),
                }
            }

            section { class: "card-grid",
                QuickAction {
                    title: "Price Check".to_string(),
                    href: "/more/prescriptions".to_string(),
                }
                QuickAction {
                    title: "Decode Bill".to_string(),
                    href: "/more/bill-decoder".to_string(),
                }
                QuickAction {
                    title: "Emergency".to_string(),
                    href: "/emergency".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dashboard_cards_and_quick_actions() {
        let html = dioxus::ssr::render_element(rsx! { Home {} });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Dr. Mehta — Oct 30, 11:00 AM"));
        assert!(html.contains("420 pts"));
        assert!(html.contains("href=\"/more/prescriptions\""));
        assert!(html.contains("href=\"/more/bill-decoder\""));
        assert!(html.contains("href=\"/emergency\""));
    }
}
