//! Range selection state and the mount points it renders into.

use std::collections::BTreeMap;

use super::chart::{self, ChartConfig, ChartLayout, ChartSurface};
use super::data::{RangeBundle, RangeKey, SampleStore, TimeSeries};
use super::lanes::{self, LaneRow};
use super::metrics::{self, StatField};

/// What the dashboard currently shows. Replaced wholesale on every
/// successful selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub current_range: Option<RangeKey>,
    pub current_series: Option<TimeSeries>,
}

/// Presentation targets the pipeline writes into.
///
/// Every slot is optional: a `None` slot is an unmounted target and is
/// skipped by the projectors without error.
#[derive(Debug, Clone, PartialEq)]
pub struct Mounts<S> {
    range_label: Option<String>,
    range_badge: Option<String>,
    stats: BTreeMap<StatField, String>,
    lanes: Option<Vec<LaneRow>>,
    chart: Option<S>,
}

impl<S> Mounts<S> {
    /// No targets mounted.
    pub fn empty() -> Self {
        Self {
            range_label: None,
            range_badge: None,
            stats: BTreeMap::new(),
            lanes: None,
            chart: None,
        }
    }

    /// All text targets mounted (blank), plus the given chart surface.
    pub fn with_all(chart: Option<S>) -> Self {
        let mut mounts = Self::empty();
        mounts.range_label = Some(String::new());
        mounts.range_badge = Some(String::new());
        for field in StatField::ALL {
            mounts.mount_stat(field);
        }
        mounts.lanes = Some(Vec::new());
        mounts.chart = chart;
        mounts
    }

    pub fn mount_range_label(&mut self) {
        self.range_label.get_or_insert_with(String::new);
    }

    pub fn mount_range_badge(&mut self) {
        self.range_badge.get_or_insert_with(String::new);
    }

    pub fn mount_stat(&mut self, field: StatField) {
        self.stats.entry(field).or_default();
    }

    pub fn mount_lanes(&mut self) {
        self.lanes.get_or_insert_with(Vec::new);
    }

    pub fn mount_chart(&mut self, surface: S) {
        self.chart = Some(surface);
    }

    pub fn unmount_chart(&mut self) -> Option<S> {
        self.chart.take()
    }

    pub fn range_label(&self) -> Option<&str> {
        self.range_label.as_deref()
    }

    pub fn range_badge(&self) -> Option<&str> {
        self.range_badge.as_deref()
    }

    pub fn stat(&self, field: StatField) -> Option<&str> {
        self.stats.get(&field).map(String::as_str)
    }

    pub(crate) fn stat_mut(&mut self, field: StatField) -> Option<&mut String> {
        self.stats.get_mut(&field)
    }

    pub fn lanes(&self) -> Option<&[LaneRow]> {
        self.lanes.as_deref()
    }

    /// Replace the whole lane list. Skipped when the list is unmounted.
    pub fn replace_lanes(&mut self, rows: Vec<LaneRow>) {
        if let Some(slot) = self.lanes.as_mut() {
            *slot = rows;
        }
    }

    pub fn chart(&self) -> Option<&S> {
        self.chart.as_ref()
    }

    pub fn chart_mut(&mut self) -> Option<&mut S> {
        self.chart.as_mut()
    }

    fn set_headings(&mut self, bundle: &RangeBundle) {
        if let Some(slot) = self.range_label.as_mut() {
            slot.clone_from(&bundle.label);
        }
        if let Some(slot) = self.range_badge.as_mut() {
            slot.clone_from(&bundle.heading);
        }
    }
}

impl<S> Default for Mounts<S> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Owns the dashboard state and drives the render pipeline on selection.
#[derive(Debug, Clone)]
pub struct DashboardController<'a> {
    store: &'a SampleStore,
    state: DashboardState,
    config: ChartConfig,
}

impl<'a> DashboardController<'a> {
    pub fn new(store: &'a SampleStore) -> Self {
        Self::with_config(store, ChartConfig::default())
    }

    pub fn with_config(store: &'a SampleStore, config: ChartConfig) -> Self {
        Self {
            store,
            state: DashboardState::default(),
            config,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn current_range(&self) -> Option<RangeKey> {
        self.state.current_range
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn store(&self) -> &'a SampleStore {
        self.store
    }

    /// Switch to the range named by a tab attribute.
    ///
    /// Keys that are unknown, or known but absent from the store, leave the
    /// state and every mount untouched. Otherwise the state is replaced and
    /// stats, lanes and chart are rendered in that order.
    pub fn select_range<S: ChartSurface>(&mut self, key: &str, mounts: &mut Mounts<S>) {
        let store = self.store;
        let Some(bundle) = store.resolve(key) else {
            return;
        };

        self.state = DashboardState {
            current_range: Some(bundle.key),
            current_series: Some(bundle.series.clone()),
        };
        tracing::debug!(range = %bundle.key, points = bundle.series.len(), "range selected");

        mounts.set_headings(bundle);
        metrics::project(bundle).commit(mounts);
        mounts.replace_lanes(lanes::render_lanes(&bundle.lanes));
        self.redraw(mounts);
    }

    /// Repaint the chart from the last selected series, e.g. after a resize.
    pub fn redraw<S: ChartSurface>(&self, mounts: &mut Mounts<S>) -> Option<ChartLayout> {
        chart::draw_chart(
            self.state.current_series.as_ref(),
            mounts.chart_mut(),
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::data::sample_store;
    use crate::dashboard::surface::SvgSurface;

    fn mounted() -> Mounts<SvgSurface> {
        Mounts::with_all(Some(SvgSurface::new()))
    }

    #[test]
    fn every_stored_range_yields_a_well_formed_series() {
        let store = sample_store();
        let mut controller = DashboardController::new(store);
        let mut mounts = mounted();

        for key in store.keys() {
            controller.select_range(key.as_str(), &mut mounts);
            assert_eq!(controller.current_range(), Some(key));
            let series = controller.state().current_series.as_ref().unwrap();
            assert!(series.len() >= 1);
            assert_eq!(series.loads.len(), series.len());
            assert_eq!(series.capacity.len(), series.len());
        }
    }

    #[test]
    fn unknown_key_leaves_state_and_mounts_untouched() {
        let mut controller = DashboardController::new(sample_store());
        let mut mounts = mounted();
        controller.select_range("month", &mut mounts);

        let state_before = controller.state().clone();
        let mounts_before = mounts.clone();

        controller.select_range("quarter", &mut mounts);
        controller.select_range("", &mut mounts);
        controller.select_range("MONTH", &mut mounts);

        assert_eq!(controller.state(), &state_before);
        assert_eq!(mounts, mounts_before);
    }

    #[test]
    fn key_missing_from_store_is_a_no_op() {
        let week = sample_store().get(RangeKey::Week).cloned().unwrap();
        let store = SampleStore::from_bundles(vec![week]);
        let mut controller = DashboardController::new(&store);
        let mut mounts = mounted();

        controller.select_range("day", &mut mounts);
        assert_eq!(controller.state(), &DashboardState::default());
        assert!(mounts.chart().unwrap().is_blank());
    }

    #[test]
    fn selection_fills_headings_lanes_and_chart() {
        let mut controller = DashboardController::new(sample_store());
        let mut mounts = mounted();
        controller.select_range("week", &mut mounts);

        let bundle = sample_store().get(RangeKey::Week).unwrap();
        assert_eq!(mounts.range_label(), Some(bundle.label.as_str()));
        assert_eq!(mounts.range_badge(), Some(bundle.heading.as_str()));
        assert_eq!(mounts.lanes().unwrap().len(), bundle.lanes.len());
        assert!(!mounts.chart().unwrap().is_blank());
    }

    #[test]
    fn missing_mounts_do_not_block_the_rest() {
        let mut controller = DashboardController::new(sample_store());
        let mut mounts: Mounts<SvgSurface> = Mounts::empty();
        mounts.mount_stat(StatField::Shipments);

        controller.select_range("day", &mut mounts);

        assert_eq!(mounts.stat(StatField::Shipments), Some("428 loads"));
        assert!(mounts.range_label().is_none());
        assert!(mounts.lanes().is_none());
        assert!(controller.redraw(&mut mounts).is_none());
        assert_eq!(controller.current_range(), Some(RangeKey::Day));
    }

    #[test]
    fn redraw_before_any_selection_is_a_no_op() {
        let controller = DashboardController::new(sample_store());
        let mut mounts = mounted();
        assert!(controller.redraw(&mut mounts).is_none());
        assert!(mounts.chart().unwrap().is_blank());
    }

    #[test]
    fn lanes_are_replaced_not_appended() {
        let mut controller = DashboardController::new(sample_store());
        let mut mounts = mounted();
        controller.select_range("day", &mut mounts);
        controller.select_range("year", &mut mounts);

        let year = sample_store().get(RangeKey::Year).unwrap();
        let rows = mounts.lanes().unwrap();
        assert_eq!(rows.len(), year.lanes.len());
        assert_eq!(rows[0].route, year.lanes[0].route);
    }
}
