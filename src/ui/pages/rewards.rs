//! Health rewards stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Mock reward activities: (activity, points).
const ACTIVITIES: &[(&str, &str)] = &[
    ("Complete Annual Checkup", "200 pts"),
    ("7-day Step Streak", "50 pts"),
];

/// Health rewards page component.
#[component]
pub fn HealthRewards() -> Element {
    rsx! {
        Layout {
            title: "Rewards".to_string(),
            nav_active: "more".to_string(),

            h2 { "Health Rewards" }

            article {
                p { "Earn points for checkups, vaccines, and adherence. Redeem for gift cards." }
                ul {
                    for (activity, points) in ACTIVITIES.iter() {
                        li { class: "list-row",
                            span { "{activity}" }
                            strong { "{points}" }
                        }
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
    fn renders_reward_activities() {
        let html = dioxus::ssr::render_element(rsx! { HealthRewards {} });
        assert!(html.contains("Complete Annual Checkup"));
        assert!(html.contains("200 pts"));
        assert!(html.contains("7-day Step Streak"));
        assert!(html.contains("50 pts"));
    }
}
