//! Headline stat projection.

use super::data::RangeBundle;
use super::state::Mounts;

/// Display targets for the five headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatField {
    Shipments,
    Delta,
    OnTime,
    Distance,
    Emissions,
}

impl StatField {
    pub const ALL: [StatField; 5] = [
        StatField::Shipments,
        StatField::Delta,
        StatField::OnTime,
        StatField::Distance,
        StatField::Emissions,
    ];

    pub fn caption(self) -> &'static str {
        match self {
            StatField::Shipments => "Shipments",
            StatField::Delta => "Change",
            StatField::OnTime => "On-time delivery",
            StatField::Distance => "Distance covered",
            StatField::Emissions => "Emissions",
        }
    }
}

/// The five stat strings of a bundle, keyed by their display target.
#[derive(Debug, Clone, PartialEq)]
pub struct StatProjection {
    entries: Vec<(StatField, String)>,
}

impl StatProjection {
    pub fn get(&self, field: StatField) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }

    /// Write each figure into its mount. Unmounted targets are skipped.
    pub fn commit<S>(self, mounts: &mut Mounts<S>) {
        for (field, text) in self.entries {
            if let Some(slot) = mounts.stat_mut(field) {
                *slot = text;
            }
        }
    }
}

/// Copy the bundle's stats verbatim; they are formatted when authored.
pub fn project(bundle: &RangeBundle) -> StatProjection {
    let stats = &bundle.stats;
    StatProjection {
        entries: vec![
            (StatField::Shipments, stats.shipments.clone()),
            (StatField::Delta, stats.delta.clone()),
            (StatField::OnTime, stats.on_time.clone()),
            (StatField::Distance, stats.distance.clone()),
            (StatField::Emissions, stats.emissions.clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::data::{sample_store, RangeKey};
    use crate::dashboard::surface::SvgSurface;

    #[test]
    fn projection_copies_strings_verbatim() {
        let bundle = sample_store().get(RangeKey::Day).unwrap();
        let projection = project(bundle);
        assert_eq!(projection.get(StatField::Shipments), Some("428 loads"));
        assert_eq!(projection.get(StatField::OnTime), Some(bundle.stats.on_time.as_str()));
    }

    #[test]
    fn unmounted_targets_are_skipped() {
        let bundle = sample_store().get(RangeKey::Year).unwrap();
        let mut mounts: Mounts<SvgSurface> = Mounts::empty();
        mounts.mount_stat(StatField::Shipments);
        mounts.mount_stat(StatField::Emissions);

        project(bundle).commit(&mut mounts);

        assert_eq!(mounts.stat(StatField::Shipments), Some("80,590 loads"));
        assert_eq!(mounts.stat(StatField::Emissions), Some(bundle.stats.emissions.as_str()));
        assert_eq!(mounts.stat(StatField::Delta), None);
    }
}
