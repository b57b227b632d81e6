use std::collections::BTreeMap;

use matjip_core::Restaurant;
use serde::Serialize;

/// Bucket name for records missing the counted field.
pub const UNKNOWN: &str = "unknown";

/// Record counts for the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total: usize,
    pub by_region: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub by_price_range: BTreeMap<String, usize>,
}

#[must_use]
pub fn dataset_stats(restaurants: &[Restaurant]) -> DatasetStats {
    let mut stats = DatasetStats {
        total: restaurants.len(),
        ..DatasetStats::default()
    };
    for r in restaurants {
        bump(&mut stats.by_region, r.region.as_deref());
        bump(&mut stats.by_category, r.category.as_deref());
        bump(&mut stats.by_price_range, r.price_range.map(|p| p.label()));
    }
    stats
}

fn bump(counts: &mut BTreeMap<String, usize>, key: Option<&str>) {
    *counts.entry(key.unwrap_or(UNKNOWN).to_string()).or_default() += 1;
}
