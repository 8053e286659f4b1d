use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteNavbar};
use ui::views::{Dashboard, Home, Track};
use ui::{SiteFrame, THEME_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/track")]
    Track {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_tracking(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Track {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        dashboard: nav_dashboard,
        tracking: nav_tracking,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

/// Wraps the shared navbar and page frame around the web `Route` outlet.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteFrame {
            SiteNavbar {}
            main { class: "site__main",
                Outlet::<Route> {}
            }
        }
    }
}
