//! In-page anchors that scroll smoothly to their section.

use dioxus::prelude::*;

use crate::core::bridge;

/// Section id targeted by an in-page `href`, e.g. `"#faq"` -> `"faq"`.
/// Bare `#` and off-page links yield `None`.
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[component]
pub fn SectionAnchor(href: String, class: Option<String>, children: Element) -> Element {
    let target = section_id(&href).map(str::to_string);

    rsx! {
        a {
            href: "{href}",
            class: class.unwrap_or_default(),
            onclick: move |evt| {
                if let Some(id) = target.as_deref() {
                    evt.prevent_default();
                    bridge::scroll_into_view(id);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_links_resolve_to_ids() {
        assert_eq!(section_id("#faq"), Some("faq"));
        assert_eq!(section_id("#contact"), Some("contact"));
    }

    #[test]
    fn bare_hash_and_routes_are_ignored() {
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("/dashboard"), None);
        assert_eq!(section_id(""), None);
    }
}
