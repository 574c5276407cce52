//! Bill decoder stub.

use dioxus::prelude::*;

use crate::ui::components::Layout;

/// Bill decoder page component. The file input is wired to nothing.
#[component]
pub fn AiBillDecoder() -> Element {
    rsx! {
        Layout {
            title: "Bill Decoder".to_string(),
            nav_active: "more".to_string(),

            h2 { "AI Bill Decoder" }
            p { "Upload a bill (PDF or photo) and get plain-English explanations." }

            article {
                input { r#type: "file" }
                p {
                    small {
                        "Uploaded bills are parsed and shown line-by-line with flags for potential errors."
                    }
                }
            }
        }
    }
}
