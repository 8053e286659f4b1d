use dioxus::prelude::*;

use crate::dashboard::DashboardPanel;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            h1 { "Network dashboard" }
            p { "Sample activity across your lanes. Pick a range to compare loads against booked capacity." }
            DashboardPanel {}
        }
    }
}
