use dioxus::prelude::*;

/// Page header plus a centred card, used by pages whose feature has not
/// shipped yet.
#[component]
pub fn PagePlaceholder(
    title: String,
    subtitle: String,
    heading: String,
    body: String,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-6",
            div {
                h1 {
                    class: "text-3xl font-bold tracking-tight",
                    "{title}"
                }
                p {
                    class: "text-slate-500",
                    "{subtitle}"
                }
            }
            div {
                class: "rounded-lg border bg-white text-slate-900 shadow-sm p-6",
                div {
                    class: "flex flex-col items-center justify-center py-10 text-center",
                    p {
                        class: "text-lg font-medium",
                        "{heading}"
                    }
                    p {
                        class: "text-sm text-slate-500 max-w-md mt-2",
                        "{body}"
                    }
                }
            }
        }
    }
}
