use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;
use crate::{auth, config::APP_NAME};

#[component]
pub fn Land() -> Element {
    let name = auth::current_user()
        .map(|x| x.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            h1 {
                class: "text-3xl font-bold tracking-tight",
                "Welcome back, {name}"
            }
            p {
                class: "text-slate-500",
                "Pick a section from the menu to get started with {APP_NAME}."
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Dashboard",
            subtitle: "Your earnings and activity across gig platforms at a glance.",
            heading: "Nothing to show yet",
            body: "Connect a gig platform to see your earnings, hours and trends here.",
        }
    }
}

#[component]
pub fn Jobs() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Jobs",
            subtitle: "Track the gigs you have taken and the ones on offer.",
            heading: "No jobs yet",
            body: "Jobs you complete on connected platforms will be listed here.",
        }
    }
}

#[component]
pub fn Goals() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Goals",
            subtitle: "Set income targets and follow your progress.",
            heading: "No goals yet",
            body: "Create a weekly or monthly target to start tracking progress toward it.",
        }
    }
}
