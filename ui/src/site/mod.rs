//! Landing page collaborators: menu, FAQ, smooth scroll, count-up
//! counters and the contact form.

pub mod contact;
pub mod counters;
pub mod faq;
pub mod menu;
pub mod scroll;

pub use contact::{ContactForm, ContactSection};
pub use counters::{CountUpStat, Counter, CounterStrip, VisibilityLatch, HERO_COUNTERS};
pub use faq::{FaqSection, FaqState, FAQ_ITEMS};
pub use menu::MenuState;
pub use scroll::{section_id, SectionAnchor};

use dioxus::prelude::*;

/// Page wrapper that owns the menu state. Clicks bubbling up from inside
/// the navbar are stopped there, so anything reaching this frame counts as
/// an outside click.
#[component]
pub fn SiteFrame(children: Element) -> Element {
    let mut menu = use_context_provider(|| Signal::new(MenuState::default()));

    rsx! {
        div {
            class: "site",
            onclick: move |_| {
                if menu.peek().open {
                    menu.write().dismiss_outside(false, false);
                }
            },
            {children}
        }
    }
}
