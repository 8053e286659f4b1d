pub mod site_navbar;
pub use site_navbar::{register_nav, NavBuilder, SiteNavbar};

use dioxus::prelude::*;

/// Shared theme stylesheet, linked by the web shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same stylesheet, inlined by the desktop shell.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
