use dioxus::prelude::*;

use super::{lookup, TrackingResult};

#[component]
pub fn TrackingPanel() -> Element {
    let mut query = use_signal(String::new);
    let mut submitted = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let code = query.read().clone();
        tracing::debug!(code = %code.trim(), "tracking lookup");
        submitted.set(code);
    };

    let code = submitted();
    let body = match lookup(&code) {
        TrackingResult::Empty => rsx! {
            p { class: "tracking__prompt", "Enter a tracking code such as LH-20481." }
        },
        TrackingResult::NotFound(missing) => rsx! {
            p { class: "tracking__missing", role: "status",
                "No shipment found for \"{missing}\". Check the code and try again."
            }
        },
        TrackingResult::Found(shipment) => {
            let done = shipment.completed_count();
            let total = shipment.checkpoints.len();
            rsx! {
                div { class: "tracking__result",
                    div { class: "tracking__summary",
                        h3 { "{shipment.code}" }
                        span { class: "tracking__status", "{shipment.status}" }
                        p { "{shipment.origin} → {shipment.destination} · {shipment.mode}" }
                        p { class: "tracking__eta", "ETA {shipment.eta} ({done}/{total} checkpoints)" }
                    }
                    ol { class: "tracking__timeline",
                        for (idx, stop) in shipment.checkpoints.iter().enumerate() {
                            li {
                                key: "{idx}",
                                class: if stop.completed { "timeline-item timeline-item--done" } else { "timeline-item" },
                                span { class: "timeline-item__time", "{stop.time}" }
                                strong { class: "timeline-item__location", "{stop.location}" }
                                span { class: "timeline-item__description", "{stop.description}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { id: "tracking", class: "section tracking",
            h2 { "Track a shipment" }
            form { class: "tracking__form", onsubmit,
                label { class: "visually-hidden", r#for: "tracking-code", "Tracking code" }
                input {
                    id: "tracking-code",
                    r#type: "text",
                    placeholder: "LH-20481",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button { class: "btn btn--primary", r#type: "submit", "Track" }
            }
            {body}
        }
    }
}
