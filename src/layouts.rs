use dioxus::prelude::*;

use crate::{
    auth::AUTH,
    components::{bottom_nav::BottomNav, navbar::Navbar},
    config::APP_NAME,
    nav::NavView,
    route::Route,
};

#[component]
pub fn PublicLayout() -> Element {
    rsx! {
        div {
            class: "flex min-h-screen flex-col bg-white",
            Navbar {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}

fn signed_out_redirect(signed_in: bool) -> Option<Route> {
    match signed_in {
        true => None,
        _ => Some(Route::Login {}),
    }
}

/// Header, scrolling content and bottom bar for signed-in pages.
#[component]
pub fn DashboardLayout() -> Element {
    let navigator = use_navigator();
    let signed_in = AUTH.read().is_some();
    let current_path = use_route::<Route>().to_string();
    let title = match NavView::derive(&current_path, signed_in).active() {
        Some(route) => format!("{} · {APP_NAME}", route.label),
        None => APP_NAME.to_string(),
    };

    // the only redirect after a logout from a signed-in page
    use_effect(move || {
        if let Some(target) = signed_out_redirect(AUTH.read().is_some()) {
            navigator.replace(target);
        }
    });

    if !signed_in {
        return rsx! {};
    }

    rsx! {
        document::Title { "{title}" }
        div {
            class: "flex h-screen flex-col overflow-hidden bg-white",
            Navbar {}
            main {
                class: "flex-1 overflow-y-auto p-4 lg:p-6 bg-slate-50/50",
                Outlet::<Route> {}
            }
            BottomNav {}
        }
    }
}
