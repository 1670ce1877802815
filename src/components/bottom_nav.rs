use dioxus::prelude::*;

use crate::{
    auth,
    components::icon::LucideIcon,
    nav::NavView,
    route::Route,
};

const BOTTOM_LINK: &str =
    "flex flex-1 flex-col items-center justify-center gap-1 text-xs font-medium";

#[component]
pub fn BottomNav() -> Element {
    let current_path = use_route::<Route>().to_string();
    let view = NavView::derive(&current_path, auth::is_authenticated());

    if view.links.is_empty() {
        return rsx! {};
    }

    let links_mapped = view
        .links
        .iter()
        .map(|x| {
            (
                x.route,
                match x.active {
                    true => format!("{BOTTOM_LINK} text-slate-900"),
                    _ => format!("{BOTTOM_LINK} text-slate-500"),
                },
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        nav {
            class: "lg:hidden sticky bottom-0 z-40 border-t bg-white/95 backdrop-blur",
            div {
                class: "flex h-16 items-stretch justify-around",
                for (route, class) in links_mapped {
                    Link {
                        key: "{route.href}",
                        to: route.href,
                        class: "{class}",
                        LucideIcon { icon: route.icon, class: "h-5 w-5 {route.accent}" }
                        span { "{route.label}" }
                    }
                }
            }
        }
    }
}
