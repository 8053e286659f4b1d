use dioxus::prelude::*;

use super::chart::ChartSurface;
use super::data::{sample_store, RangeKey};
use super::lanes::LaneRow;
use super::metrics::StatField;
use super::state::{DashboardController, Mounts};
use super::surface::{SvgShape, SvgSurface};
use crate::core::bridge;

#[cfg(target_arch = "wasm32")]
use super::surface::CanvasSurface;

#[cfg(target_arch = "wasm32")]
type PlatformSurface = CanvasSurface;
#[cfg(not(target_arch = "wasm32"))]
type PlatformSurface = SvgSurface;

const CHART_ID: &str = "dashboard-chart";
const CHART_HOST_ID: &str = "dashboard-chart-host";
const INITIAL_RANGE: RangeKey = RangeKey::Week;

/// Attach the chart surface once the chart element exists.
#[cfg(target_arch = "wasm32")]
fn attach_surface(mounts: &mut Mounts<PlatformSurface>, _host_width: Option<f64>) {
    if mounts.chart().is_none() {
        if let Ok(surface) = CanvasSurface::from_element_id(CHART_ID) {
            mounts.mount_chart(surface);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn attach_surface(mounts: &mut Mounts<PlatformSurface>, host_width: Option<f64>) {
    if mounts.chart().is_none() {
        mounts.mount_chart(SvgSurface::new());
    }
    if let (Some(surface), Some(width)) = (mounts.chart_mut(), host_width) {
        if width > 0.0 {
            surface.set_layout_width(width);
        }
    }
}

#[component]
pub fn DashboardPanel() -> Element {
    let mut controller = use_signal(|| DashboardController::new(sample_store()));
    let mut mounts = use_signal(|| Mounts::<PlatformSurface>::with_all(None));

    // First paint: mount the surface and show the default range.
    use_effect(move || {
        let mut view = mounts.write();
        attach_surface(&mut *view, None);
        controller
            .write()
            .select_range(INITIAL_RANGE.as_str(), &mut *view);
    });

    // Viewport resizes repaint the chart from the last selected series.
    use_future(move || async move {
        let mut watch = bridge::watch_width(CHART_HOST_ID);
        while let Ok(width) = watch.recv::<f64>().await {
            let mut view = mounts.write();
            attach_surface(&mut *view, Some(width));
            controller.peek().redraw(&mut *view);
        }
    });
    use_drop(|| bridge::unwatch_width(CHART_HOST_ID));

    let active = controller.read().current_range();
    let view = mounts.read();
    let range_label = view.range_label().unwrap_or_default().to_string();
    let range_badge = view.range_badge().unwrap_or_default().to_string();
    let stats: Vec<(StatField, String)> = StatField::ALL
        .iter()
        .filter_map(|field| view.stat(*field).map(|text| (*field, text.to_string())))
        .collect();
    let rows: Vec<LaneRow> = view.lanes().map(<[LaneRow]>::to_vec).unwrap_or_default();
    let chart_view = render_chart(view.chart());
    drop(view);

    rsx! {
        section { class: "dashboard",
            div { class: "dashboard__header",
                div {
                    h2 { class: "dashboard__range-label", "{range_label}" }
                    span { class: "dashboard__badge", "{range_badge}" }
                }
                div { class: "dashboard__tabs", role: "tablist",
                    for key in RangeKey::ALL {
                        button {
                            key: "{key}",
                            r#type: "button",
                            role: "tab",
                            class: if active == Some(key) { "dashboard__tab dashboard__tab--active" } else { "dashboard__tab" },
                            "data-range": key.as_str(),
                            onclick: move |_| {
                                controller.write().select_range(key.as_str(), &mut *mounts.write());
                            },
                            "{tab_caption(key)}"
                        }
                    }
                }
            }

            div { class: "dashboard__stats",
                for (field, text) in stats {
                    div { key: "{field:?}", class: "dashboard-stat",
                        span { class: "dashboard-stat__label", "{field.caption()}" }
                        strong { class: "dashboard-stat__value", "{text}" }
                    }
                }
            }

            div { class: "dashboard__body",
                div { class: "dashboard-card dashboard-chart",
                    div { class: "dashboard-card__header",
                        h3 { "Loads vs. capacity" }
                        div { class: "dashboard-chart__legend",
                            span { class: "dashboard-chart__swatch dashboard-chart__swatch--loads" }
                            "Loads"
                            span { class: "dashboard-chart__swatch dashboard-chart__swatch--capacity" }
                            "Capacity"
                        }
                    }
                    div { id: CHART_HOST_ID, class: "dashboard-chart__host", {chart_view} }
                }

                div { class: "dashboard-card dashboard-lanes",
                    div { class: "dashboard-card__header",
                        h3 { "Top lanes" }
                    }
                    if rows.is_empty() {
                        p { class: "dashboard-card__placeholder", "No lane activity for this range." }
                    } else {
                        ol { class: "dashboard-lanes__list",
                            for row in rows {
                                li { key: "{row.rank}", class: "dashboard-lanes__row",
                                    span { class: "dashboard-lanes__rank", "{row.rank}" }
                                    div { class: "dashboard-lanes__route",
                                        strong { "{row.route}" }
                                        span { class: "dashboard-lanes__mode", "{row.mode}" }
                                    }
                                    span { class: "dashboard-lanes__loads", "{row.loads}" }
                                    span { class: row.tone.css_class(), "{row.trend_label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn tab_caption(key: RangeKey) -> &'static str {
    match key {
        RangeKey::Day => "Day",
        RangeKey::Week => "Week",
        RangeKey::Month => "Month",
        RangeKey::Year => "Year",
    }
}

#[cfg(target_arch = "wasm32")]
fn render_chart(_surface: Option<&PlatformSurface>) -> Element {
    rsx! {
        canvas { id: CHART_ID, class: "dashboard-chart__canvas" }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn render_chart(surface: Option<&PlatformSurface>) -> Element {
    let Some(surface) = surface.filter(|s| !s.is_blank()) else {
        return rsx! {
            div { id: CHART_ID, class: "dashboard-chart__svg dashboard-chart__svg--empty" }
        };
    };
    render_svg(surface)
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn render_svg(surface: &SvgSurface) -> Element {
    let view_box = surface.view_box();
    let gradient = surface.gradient().cloned();
    let shapes = surface.shapes().to_vec();
    let layout_hint = surface.layout_width().unwrap_or_default();

    rsx! {
        svg {
            id: CHART_ID,
            class: "dashboard-chart__svg",
            "viewBox": "{view_box}",
            "preserveAspectRatio": "none",
            "data-layout-width": "{layout_hint}",
            if let Some(fill) = gradient {
                defs {
                    linearGradient {
                        id: "dashboard-loads-fill",
                        "gradientUnits": "userSpaceOnUse",
                        "x1": "0",
                        "y1": "{fill.top}",
                        "x2": "0",
                        "y2": "{fill.bottom}",
                        stop { "offset": "0", "stop-color": fill.from }
                        stop { "offset": "1", "stop-color": fill.to }
                    }
                }
            }
            for (idx, shape) in shapes.into_iter().enumerate() {
                match shape {
                    SvgShape::Polyline { points, color, width, dash } => rsx! {
                        polyline {
                            key: "{idx}",
                            "points": "{points}",
                            "fill": "none",
                            "stroke": "{color}",
                            "stroke-width": "{width}",
                            "stroke-dasharray": dash.unwrap_or_default(),
                            "stroke-linejoin": "round",
                            "stroke-linecap": "round",
                        }
                    },
                    SvgShape::Area { path } => rsx! {
                        path {
                            key: "{idx}",
                            "d": "{path}",
                            "fill": "url(#dashboard-loads-fill)",
                            "stroke": "none",
                        }
                    },
                }
            }
        }
    }
}
