use dioxus::prelude::*;

use crate::{
    layouts::{DashboardLayout, PublicLayout},
    pages::{
        dashboard::{Dashboard, Goals, Jobs, Land},
        help::Help,
        landing::Landing,
        login::{Login, Signup},
        not_found::NotFound,
        profile::Profile,
        simulator::Simulator,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[layout(DashboardLayout)]
        #[route("/land")]
        Land {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/jobs")]
        Jobs {},
        #[route("/simulator")]
        Simulator {},
        #[route("/goals")]
        Goals {},
        #[route("/profile")]
        Profile {},
        #[route("/help")]
        Help {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
