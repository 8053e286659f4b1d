//! Ranked lane rows for the "top lanes" table.

use super::data::Lane;
use crate::core::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendTone {
    Neutral,
    Negative,
}

impl TrendTone {
    pub fn css_class(self) -> &'static str {
        match self {
            TrendTone::Neutral => "lane-trend",
            TrendTone::Negative => "lane-trend lane-trend--negative",
        }
    }
}

/// One rendered row. Rows keep the order of the source lanes; `rank` is
/// 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneRow {
    pub rank: usize,
    pub route: String,
    pub mode: String,
    pub loads: String,
    pub trend_label: String,
    pub tone: TrendTone,
}

pub fn render_lanes(lanes: &[Lane]) -> Vec<LaneRow> {
    lanes
        .iter()
        .enumerate()
        .map(|(idx, lane)| LaneRow {
            rank: idx + 1,
            route: lane.route.clone(),
            mode: lane.mode.clone(),
            loads: format!("{} loads", format::format_thousands(lane.load_count.into())),
            trend_label: lane.trend_label.clone(),
            tone: if lane.is_negative_trend {
                TrendTone::Negative
            } else {
                TrendTone::Neutral
            },
        })
        .collect()
}
