#![allow(non_snake_case)]

use components::toast::Toast;
use config::APP_NAME;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use route::Route;

mod auth;
mod components;
mod config;
mod layouts;
mod nav;
mod pages;
mod route;

fn main() {
    // Init logger
    dioxus_logger::init(config::log_level()).expect("failed to init logger");
    info!("starting {APP_NAME}");
    launch(App);
}

fn App() -> Element {
    rsx! {
        document::Title { "{APP_NAME}" }
        document::Stylesheet {
            href: asset!("/assets/tailwind.css")
        }
        Toast {}
        Router::<Route> {}
    }
}
