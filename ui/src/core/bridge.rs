//! Small JS snippets run through `document::eval`.
//!
//! Each works the same in the browser and in the desktop webview. Element
//! ids are JSON-encoded before being spliced into the script.

use dioxus::prelude::*;

fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}

/// Window property holding the resize handlers, keyed by element id.
const RESIZE_REGISTRY: &str = "__lanehaulResize";

/// Reports the element's `clientWidth` once immediately and again after
/// every window resize. Reports `0` while the element is absent. A handler
/// left over from an earlier watch on the same id is removed first.
pub fn width_watch_script(element_id: &str) -> String {
    let id = js_string(element_id);
    format!(
        r#"
        const key = {id};
        const registry = (window.{RESIZE_REGISTRY} = window.{RESIZE_REGISTRY} || {{}});
        if (registry[key]) {{
            window.removeEventListener("resize", registry[key]);
        }}
        const report = () => {{
            const host = document.getElementById(key);
            dioxus.send(host ? host.clientWidth : 0);
        }};
        registry[key] = report;
        window.addEventListener("resize", report);
        report();
        "#
    )
}

/// Removes the resize handler installed by [`width_watch_script`].
pub fn width_unwatch_script(element_id: &str) -> String {
    let id = js_string(element_id);
    format!(
        r#"
        const key = {id};
        const registry = window.{RESIZE_REGISTRY} || {{}};
        if (registry[key]) {{
            window.removeEventListener("resize", registry[key]);
            delete registry[key];
        }}
        "#
    )
}

/// Sends `true` the first time the element scrolls into view, then stops
/// observing it.
pub fn visibility_watch_script(element_id: &str) -> String {
    let id = js_string(element_id);
    format!(
        r#"
        const target = document.getElementById({id});
        if (target && "IntersectionObserver" in window) {{
            const observer = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting) {{
                        observer.unobserve(entry.target);
                        dioxus.send(true);
                    }}
                }}
            }}, {{ threshold: 0.4 }});
            observer.observe(target);
        }} else {{
            dioxus.send(true);
        }}
        "#
    )
}

/// Smooth-scrolls to the element. When it is not on the current page,
/// loads the home page at `/#<id>` instead.
pub fn scroll_script(element_id: &str) -> String {
    let id = js_string(element_id);
    format!(
        r#"
        const target = document.getElementById({id});
        if (target) {{
            target.scrollIntoView({{ behavior: "smooth", block: "start" }});
        }} else {{
            window.location.assign("/#" + encodeURIComponent({id}));
        }}
        "#
    )
}

/// Scrolls to the element named by `location.hash`, if it is rendered.
pub fn hash_scroll_script() -> String {
    r#"
    const id = decodeURIComponent(window.location.hash.slice(1));
    const target = id ? document.getElementById(id) : null;
    if (target) {
        target.scrollIntoView({ behavior: "smooth", block: "start" });
    }
    "#
    .to_string()
}

pub fn watch_width(element_id: &str) -> document::Eval {
    document::eval(&width_watch_script(element_id))
}

/// Stop the resize watch started by [`watch_width`].
pub fn unwatch_width(element_id: &str) {
    let _ = document::eval(&width_unwatch_script(element_id));
}

pub fn watch_visibility(element_id: &str) -> document::Eval {
    document::eval(&visibility_watch_script(element_id))
}

/// Smoothly scroll the element into view, or open the home page at it.
pub fn scroll_into_view(element_id: &str) {
    let _ = document::eval(&scroll_script(element_id));
}

/// Honour a `#section` fragment once the page has rendered.
pub fn scroll_to_location_hash() {
    let _ = document::eval(&hash_scroll_script());
}
