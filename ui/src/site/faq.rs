//! FAQ accordion. At most one answer is expanded at a time.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "Which freight modes do you cover?",
        answer: "Full truckload, less-than-truckload, refrigerated and intermodal rail. One booking flow handles all four.",
    },
    FaqItem {
        question: "How quickly can we start shipping?",
        answer: "Most shippers move their first load within two business days of signing. We import lanes and rates from your current TMS export.",
    },
    FaqItem {
        question: "Can I track every shipment in real time?",
        answer: "Yes. Every load reports checkpoint scans and ETA updates, and you can look up any tracking code from the Track page.",
    },
    FaqItem {
        question: "How are emissions figures calculated?",
        answer: "We apply the GLEC framework per leg, using actual distance, equipment type and load factor for each shipment.",
    },
    FaqItem {
        question: "Is there a minimum volume?",
        answer: "No. Plans scale from a handful of loads a month up to dedicated fleets.",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    /// Open `index`, closing any other item; toggling the open item closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[component]
pub fn FaqSection() -> Element {
    let mut faq = use_signal(FaqState::default);
    let state = faq();

    rsx! {
        section { id: "faq", class: "section faq",
            h2 { class: "section__title", "Frequently asked questions" }
            div { class: "faq__list",
                for (idx, item) in FAQ_ITEMS.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: if state.is_open(idx) { "faq-item active" } else { "faq-item" },
                        button {
                            r#type: "button",
                            class: "faq-item__question",
                            aria_expanded: "{state.is_open(idx)}",
                            onclick: move |_| faq.with_mut(|f| f.toggle(idx)),
                            span { "{item.question}" }
                            span { class: "faq-item__icon", aria_hidden: "true",
                                if state.is_open(idx) { "−" } else { "+" }
                            }
                        }
                        if state.is_open(idx) {
                            p { class: "faq-item__answer", "{item.answer}" }
                        }
                    }
                }
            }
        }
    }
}
