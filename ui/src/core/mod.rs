//! Platform-agnostic helpers shared by the dashboard and the site sections.

pub mod animation;
pub mod bridge;
pub mod format;
pub mod timing;
