use dioxus::prelude::*;

use crate::tracking::TrackingPanel;

#[component]
pub fn Track() -> Element {
    rsx! {
        section { class: "page page-track",
            h1 { "Shipment tracking" }
            TrackingPanel {}
        }
    }
}
