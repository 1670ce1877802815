use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;

#[component]
pub fn Simulator() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Income Simulator",
            subtitle: "Project your earnings and plan your financial future.",
            heading: "Simulator is coming soon!",
            body: "We are building advanced tools to help you simulate different income scenarios and optimize your gig work.",
        }
    }
}
