//! Shipment tracking against a fixed sample table.

use once_cell::sync::Lazy;
use serde::Deserialize;

mod view;
pub use view::TrackingPanel;

const SHIPMENTS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/shipments.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Checkpoint {
    pub time: String,
    pub location: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shipment {
    pub code: String,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub status: String,
    pub eta: String,
    pub checkpoints: Vec<Checkpoint>,
}

impl Shipment {
    /// Checkpoints already passed, for the progress bar.
    pub fn completed_count(&self) -> usize {
        self.checkpoints.iter().filter(|c| c.completed).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingResult<'a> {
    /// Nothing typed yet.
    Empty,
    /// The trimmed code the user searched for.
    NotFound(&'a str),
    Found(&'a Shipment),
}

pub fn parse_shipments(json: &str) -> Result<Vec<Shipment>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid shipment table: {e}"))
}

static SHIPMENTS: Lazy<Vec<Shipment>> =
    Lazy::new(|| parse_shipments(SHIPMENTS_JSON).unwrap_or_default());

pub fn shipments() -> &'static [Shipment] {
    &SHIPMENTS
}

/// Look a tracking code up in `table`. Surrounding whitespace is ignored
/// and codes compare case-insensitively.
pub fn lookup_in<'a>(table: &'a [Shipment], code: &'a str) -> TrackingResult<'a> {
    let code = code.trim();
    if code.is_empty() {
        return TrackingResult::Empty;
    }
    table
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code))
        .map_or(TrackingResult::NotFound(code), TrackingResult::Found)
}

pub fn lookup(code: &str) -> TrackingResult<'_> {
    lookup_in(shipments(), code)
}
