use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::{
    auth,
    components::{
        avatar::Avatar,
        icon::{Icon, LucideIcon},
        toast,
    },
    config::APP_NAME,
    nav::{Affordances, MenuState, NavView, PROFILE_HREF},
    route::Route,
};

const PANEL_LINK: &str =
    "flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium transition-all hover:text-sky-700";
const DESKTOP_LINK: &str =
    "flex items-center gap-2 text-sm font-medium transition-colors hover:text-sky-700";
const GHOST_ICON_BUTTON: &str =
    "relative inline-flex h-10 w-10 items-center justify-center rounded-md hover:bg-slate-100";

#[component]
fn Brand(#[props(into)] label_class: String) -> Element {
    rsx! {
        LucideIcon { icon: Icon::Activity, class: "h-8 w-8" }
        span {
            class: "font-bold text-lg {label_class}",
            "{APP_NAME}"
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let current_path = use_route::<Route>().to_string();
    let view = NavView::derive(&current_path, auth::is_authenticated());
    let user = auth::current_user();
    let mut menu = use_signal(MenuState::default);
    let menu_open = menu().open;

    let on_logout = move |_: MouseEvent| {
        menu.write().close();

        if let Err(e) = auth::logout() {
            warn!("{e:#}");
            toast::show(e.to_string());
        }
    };

    let signed_in = view.affordances == Affordances::Account;
    let user_name = user.map(|x| x.display_name().to_string()).unwrap_or_default();

    let links_mapped = view
        .links
        .iter()
        .map(|x| {
            (
                x.route,
                match x.active {
                    true => (
                        format!("{DESKTOP_LINK} text-slate-900"),
                        format!("{PANEL_LINK} bg-slate-100 text-slate-900"),
                    ),
                    _ => (
                        format!("{DESKTOP_LINK} text-slate-500"),
                        format!("{PANEL_LINK} text-slate-500 hover:bg-slate-50"),
                    ),
                },
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        header {
            class: "sticky top-0 z-50 flex h-16 w-full items-center justify-between border-b bg-white/95 px-6 backdrop-blur",
            div {
                class: "flex items-center gap-6",

                // mobile menu
                if signed_in {
                    div {
                        class: "lg:hidden",
                        button {
                            r#type: "button",
                            class: "{GHOST_ICON_BUTTON} -ml-2",
                            "aria-label": "Open menu",
                            "aria-expanded": "{menu_open}",
                            onclick: move |_| menu.write().toggle(),
                            LucideIcon { icon: Icon::Menu, class: "h-6 w-6" }
                        }
                    }
                }

                Link {
                    to: view.logo_href,
                    class: "flex items-center gap-2 text-sky-700 hover:text-sky-600 transition-colors",
                    Brand { label_class: "hidden md:block" }
                }

                if signed_in {
                    nav {
                        class: "hidden lg:flex items-center gap-6 ml-6",
                        for (route, (class, _)) in links_mapped.clone() {
                            Link {
                                key: "{route.href}",
                                to: route.href,
                                class: "{class}",
                                LucideIcon { icon: route.icon, class: "h-4 w-4 {route.accent}" }
                                "{route.label}"
                            }
                        }
                    }
                }
            }

            div {
                class: "flex items-center gap-4",
                {match view.affordances {
                    Affordances::Account => rsx! {
                        button {
                            r#type: "button",
                            class: GHOST_ICON_BUTTON,
                            "aria-label": "Notifications",
                            LucideIcon { icon: Icon::Bell, class: "h-5 w-5 text-slate-500" }
                            span { class: "absolute right-2 top-2 h-2 w-2 rounded-full bg-red-500" }
                        }
                        Link {
                            to: PROFILE_HREF,
                            class: "{GHOST_ICON_BUTTON} rounded-full",
                            Avatar { name: user_name.clone() }
                        }
                        button {
                            r#type: "button",
                            class: "{GHOST_ICON_BUTTON} hidden lg:inline-flex",
                            "aria-label": "Logout",
                            onclick: on_logout,
                            LucideIcon { icon: Icon::LogOut, class: "h-5 w-5 text-red-500" }
                        }
                    },
                    Affordances::Guest { login_href, signup_href } => rsx! {
                        div {
                            class: "flex items-center gap-2",
                            Link {
                                to: login_href,
                                class: "rounded-md px-4 py-2 text-sm font-medium hover:bg-slate-100",
                                "Login"
                            }
                            Link {
                                to: signup_href,
                                class: "rounded-md bg-sky-600 px-4 py-2 text-sm font-medium text-white hover:bg-sky-700",
                                "Get Started"
                            }
                        }
                    },
                }}
            }
        }

        if signed_in && menu_open {
            div {
                class: "fixed inset-0 z-50 bg-black/40 lg:hidden",
                onclick: move |_| menu.write().close(),
            }
            aside {
                class: "fixed inset-y-0 left-0 z-50 w-72 bg-white p-6 shadow-lg lg:hidden",
                div {
                    class: "flex items-center justify-between mb-8",
                    div {
                        class: "flex items-center gap-2 text-sky-700",
                        Brand { label_class: "" }
                    }
                    button {
                        r#type: "button",
                        class: GHOST_ICON_BUTTON,
                        "aria-label": "Close menu",
                        onclick: move |_| menu.write().close(),
                        LucideIcon { icon: Icon::X, class: "h-5 w-5" }
                    }
                }
                nav {
                    class: "flex flex-col gap-2",
                    for (route, (_, class)) in links_mapped {
                        Link {
                            key: "{route.href}",
                            to: route.href,
                            class: "{class}",
                            onclick: move |_| menu.write().close(),
                            LucideIcon { icon: route.icon, class: "h-5 w-5 {route.accent}" }
                            "{route.label}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "{PANEL_LINK} w-full justify-start text-slate-500 hover:bg-slate-50 mt-4",
                        onclick: on_logout,
                        LucideIcon { icon: Icon::LogOut, class: "h-5 w-5 text-red-500" }
                        "Logout"
                    }
                }
            }
        }
    }
}
