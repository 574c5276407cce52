//! Prescription price finder stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Mock pharmacy prices for the sample results list.
const SAMPLE_PRICES: &[&str] = &[
    "Walmart: $8 — Save 60% (with coupon)",
    "CVS: $12 — In-network",
    "Walgreens: $13 — GoodRx coupon",
];

/// Prescription price finder page component.
#[component]
pub fn PrescriptionPriceFinder() -> Element {
    rsx! {
        Layout {
            title: "Prescriptions".to_string(),
            nav_active: "more".to_string(),

            h2 { "Prescription Price Finder" }
            p { "Compare prices across pharmacies and view discounts." }

            article {
                input {
                    r#type: "search",
                    placeholder: "Search medication (e.g. Lisinopril)",
                }
                p { small { "Sample results (mock):" } }
                ul {
                    for price in SAMPLE_PRICES.iter() {
                        li { "{price}" }
                    }
                }
            }
        }
    }
}
