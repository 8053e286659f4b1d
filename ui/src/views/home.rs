use dioxus::prelude::*;

use crate::core::bridge;
use crate::site::{ContactSection, CounterStrip, FaqSection, SectionAnchor};

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "One booking flow",
        body: "Truckload, LTL, reefer and intermodal quotes side by side, booked in a single step.",
    },
    Feature {
        title: "Live lane analytics",
        body: "Loads, capacity and on-time performance per lane, refreshed with every checkpoint scan.",
    },
    Feature {
        title: "Emissions on every invoice",
        body: "Per-shipment CO₂e so sustainability reporting is a download, not a project.",
    },
];

#[component]
pub fn Home() -> Element {
    // Arriving from another page via `/#faq` and similar.
    use_effect(bridge::scroll_to_location_hash);

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__title", "Freight that shows up when you said it would." }
                p { class: "hero__tagline",
                    "Lanehaul books, tracks and reports on every load across your network."
                }
                div { class: "hero__actions",
                    SectionAnchor { href: "#contact", class: "btn btn--primary", "Get a quote" }
                    SectionAnchor { href: "#features", class: "btn btn--ghost", "See how it works" }
                }
            }

            CounterStrip {}

            section { id: "features", class: "section features",
                h2 { class: "section__title", "Why shippers switch" }
                ul { class: "page-home__features",
                    for feature in FEATURES.iter() {
                        li { key: "{feature.title}", class: "feature-card",
                            h3 { "{feature.title}" }
                            p { "{feature.body}" }
                        }
                    }
                }
            }

            FaqSection {}
            ContactSection {}
        }
    }
}
