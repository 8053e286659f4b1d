//! Headline numbers that count up the first time they scroll into view.

use dioxus::prelude::*;

use crate::core::animation::{CountUp, CountUpConfig};
use crate::core::timing::{self, SystemClock};
use crate::core::{bridge, format};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    /// Element id observed for visibility.
    pub id: &'static str,
    pub target: f64,
    pub decimals: usize,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub caption: &'static str,
}

impl Counter {
    pub fn display(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format::format_grouped(value, self.decimals),
            self.suffix
        )
    }
}

pub const HERO_COUNTERS: [Counter; 4] = [
    Counter {
        id: "counter-loads",
        target: 80_590.0,
        decimals: 0,
        prefix: "",
        suffix: "+",
        caption: "loads moved this year",
    },
    Counter {
        id: "counter-on-time",
        target: 96.2,
        decimals: 1,
        prefix: "",
        suffix: "%",
        caption: "on-time delivery",
    },
    Counter {
        id: "counter-carriers",
        target: 1_450.0,
        decimals: 0,
        prefix: "",
        suffix: "",
        caption: "vetted carriers",
    },
    Counter {
        id: "counter-savings",
        target: 18.0,
        decimals: 0,
        prefix: "",
        suffix: "%",
        caption: "average freight savings",
    },
];

/// Lets the first visible report through and ignores everything after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    fired: bool,
}

impl VisibilityLatch {
    /// Returns `true` exactly once: on the first visible report.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[component]
pub fn CountUpStat(counter: Counter) -> Element {
    let mut shown = use_signal(|| counter.display(0.0));

    use_future(move || async move {
        let mut latch = VisibilityLatch::default();
        let mut watch = bridge::watch_visibility(counter.id);
        loop {
            match watch.recv::<bool>().await {
                Ok(visible) if latch.observe(visible) => break,
                Ok(_) => continue,
                // Eval channel closed: skip the animation.
                Err(_) => {
                    shown.set(counter.display(counter.target));
                    return;
                }
            }
        }

        tracing::debug!(counter = counter.id, "count-up started");
        let clock = SystemClock::new();
        let run = CountUp::start(&clock, counter.target, CountUpConfig::default());
        loop {
            let frame = run.sample(&clock);
            shown.set(counter.display(frame.value));
            if frame.finished {
                break;
            }
            timing::next_frame().await;
        }
    });

    rsx! {
        div { class: "stat-counter", id: counter.id,
            strong { class: "stat-counter__value", "{shown}" }
            span { class: "stat-counter__caption", "{counter.caption}" }
        }
    }
}

#[component]
pub fn CounterStrip() -> Element {
    rsx! {
        section { id: "numbers", class: "section counters",
            for counter in HERO_COUNTERS {
                CountUpStat { key: "{counter.id}", counter }
            }
        }
    }
}
