use dioxus::prelude::*;

use crate::{
    auth,
    components::icon::{Icon, LucideIcon},
    config::APP_NAME,
    nav::{LOGIN_HREF, SIGNED_IN_HOME_HREF, SIGNUP_HREF},
};

#[component]
pub fn Landing() -> Element {
    let signed_in = auth::is_authenticated();

    rsx! {
        section {
            class: "mx-auto flex max-w-3xl flex-col items-center gap-6 px-6 py-20 text-center",
            LucideIcon { icon: Icon::Activity, class: "h-12 w-12 text-sky-600" }
            h1 {
                class: "text-4xl font-bold tracking-tight md:text-5xl",
                "See the whole picture of your gig income"
            }
            p {
                class: "text-lg text-slate-500",
                "{APP_NAME} brings your jobs, earnings and goals from every platform into one dashboard."
            }
            div {
                class: "flex items-center gap-3",
                if signed_in {
                    Link {
                        to: SIGNED_IN_HOME_HREF,
                        class: "rounded-md bg-sky-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-sky-700",
                        "Open dashboard"
                    }
                } else {
                    Link {
                        to: SIGNUP_HREF,
                        class: "rounded-md bg-sky-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-sky-700",
                        "Get Started"
                    }
                    Link {
                        to: LOGIN_HREF,
                        class: "rounded-md px-5 py-2.5 text-sm font-medium hover:bg-slate-100",
                        "Login"
                    }
                }
            }
        }
    }
}
