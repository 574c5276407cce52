//! Health wallet stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Mock wallet documents.
const DOCUMENTS: &[&str] = &[
    "Insurance Card — Provider: BestHealth",
    "Vaccination — COVID-19 — Completed",
    "Prescription — Metformin — Active",
];

/// Health wallet page component.
#[component]
pub fn HealthWallet() -> Element {
    rsx! {
        Layout {
            title: "Wallet".to_string(),
            nav_active: "more".to_string(),

            h2 { "Health Wallet" }

            article {
                p { "Digital insurance cards, vaccination records, prescriptions, and secure docs." }
                ul {
                    for doc in DOCUMENTS.iter() {
                        li { "{doc}" }
                    }
                }
            }
        }
    }
}
