//! Sample data backing the analytics dashboard.
//!
//! Bundles are authored in `assets/data/dashboard.json` and embedded at
//! compile time. The set is fixed for the lifetime of the page.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const SAMPLE_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/dashboard.json"
));

/// Reporting window selected by a dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKey {
    Day,
    Week,
    Month,
    Year,
}

impl RangeKey {
    pub const ALL: [RangeKey; 4] = [
        RangeKey::Day,
        RangeKey::Week,
        RangeKey::Month,
        RangeKey::Year,
    ];

    /// Attribute value carried by the tab for this range.
    pub fn as_str(self) -> &'static str {
        match self {
            RangeKey::Day => "day",
            RangeKey::Week => "week",
            RangeKey::Month => "month",
            RangeKey::Year => "year",
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a tab attribute names no known range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRange(pub String);

impl fmt::Display for UnknownRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown range key `{}`", self.0)
    }
}

impl std::error::Error for UnknownRange {}

impl FromStr for RangeKey {
    type Err = UnknownRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(RangeKey::Day),
            "week" => Ok(RangeKey::Week),
            "month" => Ok(RangeKey::Month),
            "year" => Ok(RangeKey::Year),
            other => Err(UnknownRange(other.to_string())),
        }
    }
}

/// Category labels plus the two parallel value sequences drawn by the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub loads: Vec<f64>,
    pub capacity: Vec<f64>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// At least one point, and all three sequences the same length.
    pub fn is_well_formed(&self) -> bool {
        let n = self.labels.len();
        n >= 1 && self.loads.len() == n && self.capacity.len() == n
    }
}

/// Pre-formatted headline figures for a range. Copied verbatim to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStats {
    pub shipments: String,
    pub delta: String,
    pub on_time: String,
    pub distance: String,
    pub emissions: String,
}

/// One ranked route entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub route: String,
    pub mode: String,
    pub load_count: u32,
    pub trend_label: String,
    pub is_negative_trend: bool,
}

/// Everything the dashboard shows for one range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBundle {
    pub key: RangeKey,
    pub label: String,
    pub heading: String,
    pub series: TimeSeries,
    pub stats: RangeStats,
    pub lanes: Vec<Lane>,
}

/// Fixed mapping from range to bundle.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    bundles: BTreeMap<RangeKey, RangeBundle>,
}

impl SampleStore {
    /// Build a store from bundles, dropping any whose series is malformed.
    pub fn from_bundles(bundles: impl IntoIterator<Item = RangeBundle>) -> Self {
        let bundles = bundles
            .into_iter()
            .filter(|bundle| bundle.series.is_well_formed())
            .map(|bundle| (bundle.key, bundle))
            .collect();
        Self { bundles }
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        let bundles: Vec<RangeBundle> = serde_json::from_str(raw).map_err(|err| err.to_string())?;
        Ok(Self::from_bundles(bundles))
    }

    pub fn get(&self, key: RangeKey) -> Option<&RangeBundle> {
        self.bundles.get(&key)
    }

    /// Resolve a raw tab attribute. Unknown or missing ranges yield `None`.
    pub fn resolve(&self, raw: &str) -> Option<&RangeBundle> {
        raw.parse::<RangeKey>().ok().and_then(|key| self.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = RangeKey> + '_ {
        self.bundles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

static SAMPLE_STORE: Lazy<SampleStore> =
    Lazy::new(|| SampleStore::from_json(SAMPLE_JSON).unwrap_or_default());

/// The embedded sample dataset.
pub fn sample_store() -> &'static SampleStore {
    &SAMPLE_STORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_json_parses_every_range() {
        let store = SampleStore::from_json(SAMPLE_JSON).expect("embedded sample data parses");
        for key in RangeKey::ALL {
            let bundle = store.get(key).expect("bundle for every tab");
            assert!(bundle.series.is_well_formed(), "{key} series malformed");
        }
    }

    #[test]
    fn range_key_round_trips_through_attribute() {
        for key in RangeKey::ALL {
            assert_eq!(key.as_str().parse::<RangeKey>(), Ok(key));
        }
        assert_eq!(
            "quarter".parse::<RangeKey>(),
            Err(UnknownRange("quarter".into()))
        );
        assert!("Day".parse::<RangeKey>().is_err());
    }

    #[test]
    fn malformed_bundles_are_dropped() {
        let mut bundle = sample_store().get(RangeKey::Week).cloned().unwrap();
        bundle.series.capacity.pop();
        let store = SampleStore::from_bundles(vec![bundle]);
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SampleStore::from_json("{ not json").is_err());
    }

    #[test]
    fn resolve_ignores_unknown_attributes() {
        let store = sample_store();
        assert!(store.resolve("week").is_some());
        assert!(store.resolve("fortnight").is_none());
        assert!(store.resolve("").is_none());
    }
}
