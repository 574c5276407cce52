//! Premium membership stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Pricing plans: (plan, price).
const PLANS: &[(&str, &str)] = &[
    ("Monthly Plan", "$20/mo"),
    ("Yearly Plan (Save $40)", "$200/yr"),
];

/// Premium feature list.
const FEATURES: &[&str] = &[
    "Unlimited AI Bill Decoder Usage",
    "Telehealth HD Video Calls",
    "Advanced symptom insights & risk analysis",
    "Premium Community Expert Responses",
    "Double Rewards Points Boost",
];

/// Premium page component. The Upgrade Now button is wired to nothing.
#[component]
pub fn Premium() -> Element {
    rsx! {
        Layout {
            title: "Premium".to_string(),
            nav_active: "more".to_string(),

            h2 { "Premium Membership" }
            p { "Unlock advanced AI tools, unlimited bill decoding, and exclusive rewards." }

            article {
                h3 { "Pricing" }
                ul {
                    for (plan, price) in PLANS.iter() {
                        li { class: "list-row",
                            span { "{plan}" }
                            strong { "{price}" }
                        }
                    }
                }
                button { style: "width:100%;", "Upgrade Now" }
            }

            article {
                h3 { "Premium Features" }
                ul {
                    for feature in FEATURES.iter() {
                        li { "{feature}" }
                    }
                }
            }
        }
    }
}
