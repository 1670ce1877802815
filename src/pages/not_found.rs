use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center gap-4 text-center",
            h1 {
                class: "text-3xl font-bold tracking-tight",
                "Page not found"
            }
            p {
                class: "text-slate-500",
                "Nothing lives at {path}."
            }
            Link {
                to: Route::Landing {},
                class: "text-sky-600 hover:text-sky-800 font-medium",
                "← Back to GigLens"
            }
        }
    }
}
