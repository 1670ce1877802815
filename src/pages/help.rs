use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;

#[component]
pub fn Help() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Help & Support",
            subtitle: "Get assistance with using the platform.",
            heading: "How can we help you?",
            body: "Find answers to common questions or contact our support team.",
        }
    }
}
