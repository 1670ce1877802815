use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavRoute {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
    pub accent: &'static str,
}

pub const ROUTES: &[NavRoute] = &[
    NavRoute {
        label: "Dashboard",
        icon: Icon::LayoutDashboard,
        href: "/dashboard",
        accent: "text-sky-500",
    },
    NavRoute {
        label: "Jobs",
        icon: Icon::Briefcase,
        href: "/jobs",
        accent: "text-violet-500",
    },
    NavRoute {
        label: "Simulator",
        icon: Icon::Calculator,
        href: "/simulator",
        accent: "text-pink-700",
    },
    NavRoute {
        label: "Goals",
        icon: Icon::Target,
        href: "/goals",
        accent: "text-orange-700",
    },
    NavRoute {
        label: "Profile",
        icon: Icon::User,
        href: "/profile",
        accent: "text-gray-500",
    },
    NavRoute {
        label: "Help",
        icon: Icon::HelpCircle,
        href: "/help",
        accent: "text-green-600",
    },
];

pub const HOME_HREF: &str = "/";
pub const SIGNED_IN_HOME_HREF: &str = "/land";
pub const PROFILE_HREF: &str = "/profile";
pub const LOGIN_HREF: &str = "/login";
pub const SIGNUP_HREF: &str = "/signup";

impl NavRoute {
    /// Exact match only, so `/jobs/42` or `/jobs/` never light up `/jobs`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub route: &'static NavRoute,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Affordances {
    /// Notification bell and profile shortcut.
    Account,
    Guest {
        login_href: &'static str,
        signup_href: &'static str,
    },
}

/// Everything the navigation chrome shows for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct NavView {
    pub logo_href: &'static str,
    pub links: Vec<NavLink>,
    pub affordances: Affordances,
}

impl NavView {
    pub fn derive(current_path: &str, authenticated: bool) -> Self {
        if !authenticated {
            return Self {
                logo_href: HOME_HREF,
                links: Vec::new(),
                affordances: Affordances::Guest {
                    login_href: LOGIN_HREF,
                    signup_href: SIGNUP_HREF,
                },
            };
        }

        let links = ROUTES
            .iter()
            .map(|route| NavLink {
                route,
                active: route.is_active(current_path),
            })
            .collect();

        Self {
            logo_href: SIGNED_IN_HOME_HREF,
            links,
            affordances: Affordances::Account,
        }
    }

    pub fn active(&self) -> Option<&'static NavRoute> {
        self.links.iter().find(|x| x.active).map(|x| x.route)
    }
}

/// Open/closed state of the slide-out mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hrefs_and_labels_are_unique() {
        let hrefs: HashSet<_> = ROUTES.iter().map(|x| x.href).collect();
        let labels: HashSet<_> = ROUTES.iter().map(|x| x.label).collect();

        assert_eq!(hrefs.len(), ROUTES.len());
        assert_eq!(labels.len(), ROUTES.len());
    }

    #[test]
    fn hrefs_are_absolute_without_trailing_slash() {
        for route in ROUTES {
            assert!(route.href.starts_with('/'), "{}", route.href);
            assert!(!route.href.ends_with('/'), "{}", route.href);
        }
    }

    #[test]
    fn authenticated_view_lists_every_route_in_order() {
        let view = NavView::derive("/dashboard", true);

        let hrefs: Vec<_> = view.links.iter().map(|x| x.route.href).collect();
        let expected: Vec<_> = ROUTES.iter().map(|x| x.href).collect();
        assert_eq!(hrefs, expected);
    }

    #[test]
    fn jobs_path_activates_only_jobs() {
        let view = NavView::derive("/jobs", true);

        let active: Vec<_> = view
            .links
            .iter()
            .filter(|x| x.active)
            .map(|x| x.route.label)
            .collect();
        assert_eq!(active, vec!["Jobs"]);
        assert_eq!(view.affordances, Affordances::Account);
        assert_eq!(view.logo_href, "/land");
    }

    #[test]
    fn each_route_path_activates_exactly_one_link() {
        for route in ROUTES {
            let view = NavView::derive(route.href, true);

            assert_eq!(view.links.iter().filter(|x| x.active).count(), 1);
            assert_eq!(view.active(), Some(route));
        }
    }

    #[test]
    fn prefix_and_trailing_slash_paths_activate_nothing() {
        for path in ["/jobs/42", "/jobs/", "/job", "/", "/land", "/JOBS", ""] {
            let view = NavView::derive(path, true);
            assert_eq!(view.active(), None, "{path}");
        }
    }

    #[test]
    fn guest_view_hides_links_and_offers_login_and_signup() {
        let view = NavView::derive("/jobs", false);

        assert!(view.links.is_empty());
        assert_eq!(view.logo_href, "/");
        assert_eq!(
            view.affordances,
            Affordances::Guest {
                login_href: "/login",
                signup_href: "/signup",
            }
        );
    }

    #[test]
    fn menu_starts_closed_and_toggles() {
        let mut menu = MenuState::default();
        assert!(!menu.open);

        menu.toggle();
        assert!(menu.open);

        menu.toggle();
        assert!(!menu.open);

        menu.toggle();
        menu.close();
        assert!(!menu.open);

        menu.close();
        assert!(!menu.open);
    }
}
