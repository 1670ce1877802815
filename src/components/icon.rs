use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Activity,
    Bell,
    Briefcase,
    Calculator,
    HelpCircle,
    LayoutDashboard,
    LogOut,
    Menu,
    Target,
    User,
    X,
}

#[component]
pub fn LucideIcon(icon: Icon, #[props(into)] class: String) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class: "{class}",
            "aria-hidden": "true",
            {shapes(icon)}
        }
    }
}

fn shapes(icon: Icon) -> Element {
    match icon {
        Icon::Activity => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        Icon::Bell => rsx! {
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        },
        Icon::Briefcase => rsx! {
            path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
            rect { width: "20", height: "14", x: "2", y: "6", rx: "2" }
        },
        Icon::Calculator => rsx! {
            rect { width: "16", height: "20", x: "4", y: "2", rx: "2" }
            line { x1: "8", x2: "16", y1: "6", y2: "6" }
            line { x1: "16", x2: "16", y1: "14", y2: "18" }
            path { d: "M16 10h.01" }
            path { d: "M12 10h.01" }
            path { d: "M8 10h.01" }
            path { d: "M12 14h.01" }
            path { d: "M8 14h.01" }
            path { d: "M12 18h.01" }
            path { d: "M8 18h.01" }
        },
        Icon::HelpCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
            path { d: "M12 17h.01" }
        },
        Icon::LayoutDashboard => rsx! {
            rect { width: "7", height: "9", x: "3", y: "3", rx: "1" }
            rect { width: "7", height: "5", x: "14", y: "3", rx: "1" }
            rect { width: "7", height: "9", x: "14", y: "12", rx: "1" }
            rect { width: "7", height: "5", x: "3", y: "16", rx: "1" }
        },
        Icon::LogOut => rsx! {
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", x2: "9", y1: "12", y2: "12" }
        },
        Icon::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        Icon::Target => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "12", r: "6" }
            circle { cx: "12", cy: "12", r: "2" }
        },
        Icon::User => rsx! {
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        },
        Icon::X => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    }
}
