use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;
use crate::auth;

#[component]
pub fn Profile() -> Element {
    let details = auth::current_user().map(|x| (x.display_name().to_string(), x.email));

    rsx! {
        div {
            class: "flex flex-col gap-6",
            PagePlaceholder {
                title: "My Profile",
                subtitle: "Manage your account settings and personal information.",
                heading: "Profile Management",
                body: "Update your personal details, gig platforms, and notification preferences here.",
            }
            if let Some((name, email)) = details {
                dl {
                    class: "rounded-lg border bg-white shadow-sm p-6 grid grid-cols-[8rem_1fr] gap-y-2 text-sm",
                    dt { class: "text-slate-500", "Name" }
                    dd { "{name}" }
                    if let Some(email) = email {
                        dt { class: "text-slate-500", "Email" }
                        dd { "{email}" }
                    }
                }
            }
        }
    }
}
