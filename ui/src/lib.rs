//! Shared UI crate for Lanehaul. Data, components and routed views live here;
//! the `web` and `desktop` crates only add a router and launch.

pub mod components;
pub mod core;
pub mod dashboard;
pub mod site;
pub mod tracking;
pub mod views;

pub use components::{THEME_CSS, THEME_CSS_INLINE};
pub use site::SiteFrame;
