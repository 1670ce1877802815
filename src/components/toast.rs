use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config::TOAST_TIMEOUT;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    id: u64,
    text: String,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub static TOAST: GlobalSignal<Option<ToastMessage>> = Signal::global(|| None);

/// Shows `text` until it times out or a newer toast replaces it.
pub fn show(text: impl Into<String>) {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    *TOAST.write() = Some(ToastMessage {
        id,
        text: text.into(),
    });

    spawn(async move {
        TimeoutFuture::new(TOAST_TIMEOUT).await;

        let current = TOAST.peek().as_ref().map(|x| x.id);
        if current == Some(id) {
            *TOAST.write() = None;
        }
    });
}

#[component]
pub fn Toast() -> Element {
    let Some(message) = TOAST() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "toast",
            role: "alert",
            class: "fixed top-5 right-5 z-[70]",
            div {
                class: "bg-red-500 text-white p-4 rounded-lg shadow-lg w-72 flex justify-between items-center gap-2",
                p {
                    id: "toast-content",
                    class: "text-sm",
                    "{message.text}"
                }
                button {
                    r#type: "button",
                    class: "font-bold",
                    "aria-label": "Dismiss",
                    onclick: move |_| *TOAST.write() = None,
                    "×"
                }
            }
        }
    }
}
