use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::site::{MenuState, SectionAnchor};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Route links supplied by the platform shell, so `ui` never needs to know
/// the shell's `Route` enum.
///
/// Each closure receives the label and returns a `Link` wrapping it.
/// Register once before the router renders:
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" }),
///     dashboard: |label| rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" }),
///     tracking: |label| rsx!(Link { class: "navbar__link", to: Route::Track {}, "{label}" }),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub tracking: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn SiteNavbar() -> Element {
    // Local state only used when rendered outside `SiteFrame`.
    let fallback = use_signal(MenuState::default);
    let mut menu = try_use_context::<Signal<MenuState>>().unwrap_or(fallback);

    let links = NAV_BUILDER.get().map(|b| {
        rsx! {
            {(b.home)("Home")}
            {(b.dashboard)("Dashboard")}
            {(b.tracking)("Track")}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Clicks inside the header never count as outside clicks.
            onclick: move |evt| evt.stop_propagation(),
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "Lanehaul" }
                    span { class: "navbar__brand-subtitle", "Freight, on time." }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle {menu().css_modifier()}",
                    aria_label: "Toggle navigation",
                    aria_expanded: "{menu().open}",
                    onclick: move |_| menu.with_mut(MenuState::toggle),
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                }

                nav {
                    class: "navbar__links {menu().css_modifier()}",
                    // Following any link closes the mobile menu.
                    onclick: move |_| menu.with_mut(MenuState::close),
                    if let Some(links) = links {
                        {links}
                    }
                    SectionAnchor { href: "#faq", class: "navbar__link", "FAQ" }
                    SectionAnchor { href: "#contact", class: "navbar__link navbar__link--cta", "Get a quote" }
                }
            }
        }
    }
}
