use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::{auth::AUTH, components::toast, route::Route};

const INPUT: &str = "bg-slate-50 border border-slate-300 text-slate-900 text-sm rounded-lg focus:ring-sky-500 focus:border-sky-500 block w-full p-2.5";
const LABEL: &str = "block mb-2 text-sm font-medium text-slate-900";
const SUBMIT: &str = "text-white bg-sky-600 hover:bg-sky-700 focus:ring-4 focus:outline-none focus:ring-sky-300 font-medium rounded-lg text-sm px-4 py-2 text-center";

const UNAVAILABLE: &str = "Accounts are managed by the GigLens account service, which is not reachable from this build.";

/// Sends signed-in visitors to their home instead of the auth forms.
fn use_signed_in_redirect() {
    let navigator = use_navigator();

    use_effect(move || {
        if AUTH.read().is_some() {
            navigator.replace(Route::Land {});
        }
    });
}

#[component]
fn Field(id: String, label: String, kind: String) -> Element {
    rsx! {
        div {
            class: "mb-4",
            label {
                r#for: "{id}",
                class: LABEL,
                "{label}"
            }
            input {
                r#type: "{kind}",
                id: "{id}",
                name: "{id}",
                class: INPUT,
                required: true,
            }
        }
    }
}

#[component]
fn AuthCard(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex w-full px-4",
            div {
                class: "w-full max-w-sm p-6 border border-slate-200 rounded-lg shadow-sm bg-white flex-col mx-auto mt-10",
                h5 {
                    class: "mb-4 text-2xl font-bold tracking-tight text-slate-900",
                    "{title}"
                }
                {children}
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    use_signed_in_redirect();

    rsx! {
        AuthCard {
            title: "Login",
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    info!("login submitted without an account service");
                    toast::show(UNAVAILABLE);
                },
                Field { id: "email", label: "Email", kind: "email" }
                Field { id: "password", label: "Password", kind: "password" }
                div {
                    class: "flex flex-wrap justify-between gap-6 items-center",
                    Link {
                        class: "block text-sm py-2 underline",
                        to: Route::Signup {},
                        "New here? Create an account"
                    }
                    button {
                        r#type: "submit",
                        class: SUBMIT,
                        "Login"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Signup() -> Element {
    use_signed_in_redirect();

    rsx! {
        AuthCard {
            title: "Get Started",
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    info!("signup submitted without an account service");
                    toast::show(UNAVAILABLE);
                },
                Field { id: "display_name", label: "Display name", kind: "text" }
                Field { id: "email", label: "Email", kind: "email" }
                Field { id: "password", label: "Password", kind: "password" }
                div {
                    class: "flex flex-wrap justify-between gap-6 items-center",
                    Link {
                        class: "block text-sm py-2 underline",
                        to: Route::Login {},
                        "Or, if you have an account, login!"
                    }
                    button {
                        r#type: "submit",
                        class: SUBMIT,
                        "Create account"
                    }
                }
            }
        }
    }
}
