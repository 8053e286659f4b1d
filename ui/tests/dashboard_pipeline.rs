//! End-to-end checks of the dashboard pipeline using the bundled sample data:
//! tab key in, stats, lanes and chart geometry out.

use ui::dashboard::{
    sample_store, DashboardController, Mounts, RangeKey, StatField, SvgSurface, TrendTone,
};

fn mounted() -> Mounts<SvgSurface> {
    Mounts::with_all(Some(SvgSurface::new()))
}

#[test]
fn switching_ranges_updates_the_shipments_stat() {
    let mut controller = DashboardController::new(sample_store());
    let mut mounts = mounted();

    controller.select_range("day", &mut mounts);
    assert_eq!(mounts.stat(StatField::Shipments), Some("428 loads"));

    controller.select_range("year", &mut mounts);
    assert_eq!(mounts.stat(StatField::Shipments), Some("80,590 loads"));
    assert_eq!(controller.current_range(), Some(RangeKey::Year));
}

#[test]
fn week_chart_geometry_uses_headroom_and_fallback_width() {
    let mut controller = DashboardController::new(sample_store());
    let mut mounts = mounted();
    controller.select_range("week", &mut mounts);

    let layout = controller.redraw(&mut mounts).expect("chart painted");
    assert!((layout.max_value - 473.0).abs() < 1e-9);
    assert_eq!(layout.width, 600.0);
    assert_eq!(layout.gridlines, vec![40.0, 95.0, 150.0, 205.0, 260.0]);

    assert_eq!(layout.loads.len(), 7);
    assert_eq!(layout.loads[0].x, 40.0);
    assert!((layout.loads[6].x - 560.0).abs() < 1e-9);
    let expected_y = 40.0 + 220.0 - (180.0 / 473.0) * 220.0;
    assert!((layout.loads[0].y - expected_y).abs() < 1e-9);

    // Every point stays inside the plot area.
    for p in layout.loads.iter().chain(layout.capacity.iter()) {
        assert!(p.y >= 40.0 && p.y <= 260.0, "point out of bounds: {p:?}");
    }
}

#[test]
fn redraw_is_idempotent() {
    let mut controller = DashboardController::new(sample_store());
    let mut mounts = mounted();
    controller.select_range("month", &mut mounts);

    let first = controller.redraw(&mut mounts);
    let surface_after_first = mounts.chart().cloned();
    let second = controller.redraw(&mut mounts);

    assert_eq!(first, second);
    assert_eq!(mounts.chart().cloned(), surface_after_first);
}

#[test]
fn resize_reflows_the_same_series() {
    let mut controller = DashboardController::new(sample_store());
    let mut mounts = mounted();
    controller.select_range("week", &mut mounts);

    if let Some(surface) = mounts.chart_mut() {
        surface.set_layout_width(900.0);
    }
    let layout = controller.redraw(&mut mounts).expect("chart painted");
    assert_eq!(layout.width, 900.0);
    assert!((layout.loads[6].x - 860.0).abs() < 1e-9);
    assert_eq!(mounts.chart().map(|s| s.view_box()), Some("0 0 900 300".to_string()));
}

#[test]
fn lane_rows_follow_store_order_with_formatted_counts() {
    let mut controller = DashboardController::new(sample_store());
    let mut mounts = mounted();
    controller.select_range("year", &mut mounts);

    let bundle = sample_store().get(RangeKey::Year).expect("year bundle");
    let rows = mounts.lanes().expect("lanes mounted");
    assert_eq!(rows.len(), bundle.lanes.len());
    for (idx, (row, lane)) in rows.iter().zip(&bundle.lanes).enumerate() {
        assert_eq!(row.rank, idx + 1);
        assert_eq!(row.route, lane.route);
        assert!(row.loads.ends_with(" loads"));
        let negative = row.tone == TrendTone::Negative;
        assert_eq!(negative, lane.is_negative_trend);
    }
}

#[test]
fn rapid_switching_ends_on_last_selection() {
    let mut controller = DashboardController::new(sample_store());
    let mut mounts = mounted();
    for key in ["day", "week", "bogus", "month", "year", "week"] {
        controller.select_range(key, &mut mounts);
    }
    let week = sample_store().get(RangeKey::Week).expect("week bundle");
    assert_eq!(controller.current_range(), Some(RangeKey::Week));
    assert_eq!(controller.state().current_series.as_ref(), Some(&week.series));
    assert_eq!(mounts.range_label(), Some(week.label.as_str()));
}
