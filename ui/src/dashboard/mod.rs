//! Analytics dashboard: range tabs, headline stats, top lanes and the
//! loads-versus-capacity chart.
//!
//! Selecting a tab runs [`DashboardController::select_range`], which
//! resolves the bundle from the [`SampleStore`] and renders stats, lanes and
//! chart into [`Mounts`] in that order. The Dioxus view in `view.rs` is a
//! thin adapter over those mounts.

pub mod chart;
pub mod data;
pub mod lanes;
pub mod metrics;
pub mod state;
pub mod surface;

mod view;
pub use view::DashboardPanel;

pub use chart::{draw_chart, ChartConfig, ChartLayout, ChartPoint, ChartSurface};
pub use data::{sample_store, Lane, RangeBundle, RangeKey, SampleStore, TimeSeries};
pub use lanes::{render_lanes, LaneRow, TrendTone};
pub use metrics::{project, StatField, StatProjection};
pub use state::{DashboardController, DashboardState, Mounts};
pub use surface::SvgSurface;
