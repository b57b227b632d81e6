//! Chat-style free-text search over the dataset.

use matjip_core::Restaurant;
use serde::Serialize;

use crate::query::{parse_query, ConditionSet};
use crate::scoring::{score_for_query, SearchHit};

/// Upper bound on returned hits.
pub const MAX_RESULTS: usize = 10;

const MIN_QUERY_CHARS: usize = 2;

/// Result of [`search`].
///
/// `conditions` is `None` when the query was too short to parse at all, and
/// `Some` with every bucket empty when it parsed but nothing was recognised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    pub results: Vec<SearchHit<'a>>,
    pub conditions: Option<ConditionSet>,
}

/// Rank `restaurants` against `query`, best first, at most [`MAX_RESULTS`].
///
/// Records scoring zero are dropped. Equal scores keep dataset order.
#[must_use]
pub fn search<'a>(restaurants: &'a [Restaurant], query: &str) -> SearchOutcome<'a> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome {
            results: Vec::new(),
            conditions: None,
        };
    }

    let conditions = parse_query(query);
    if conditions.is_empty() {
        tracing::debug!(query, "query matched no vocabulary");
        return SearchOutcome {
            results: Vec::new(),
            conditions: Some(conditions),
        };
    }

    let mut results: Vec<SearchHit<'a>> = restaurants
        .iter()
        .map(|restaurant| SearchHit {
            restaurant,
            score: score_for_query(restaurant, &conditions),
        })
        .filter(|hit| hit.score > 0)
        .collect();
    // `sort_by` is stable, so ties keep dataset order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);

    tracing::debug!(query, hits = results.len(), "search complete");
    SearchOutcome {
        results,
        conditions: Some(conditions),
    }
}

/// Human-readable summary of recognised conditions, e.g.
/// `서울 / 강남 / 한식 / #데이트 / 저렴 가격대`.
#[must_use]
pub fn describe_conditions(conditions: &ConditionSet) -> String {
    let mut parts = Vec::new();

    if !conditions.regions.is_empty() {
        parts.push(conditions.regions.join(", "));
    }
    if !conditions.districts.is_empty() {
        parts.push(conditions.districts.join(", "));
    }
    if !conditions.categories.is_empty() {
        parts.push(conditions.categories.join(", "));
    }
    if !conditions.moods.is_empty() {
        let tags: Vec<String> = conditions.moods.iter().map(|m| format!("#{m}")).collect();
        parts.push(tags.join(" "));
    }
    if !conditions.price_ranges.is_empty() {
        let labels: Vec<&str> = conditions.price_ranges.iter().map(|p| p.label()).collect();
        parts.push(format!("{} 가격대", labels.join(", ")));
    }

    parts.join(" / ")
}
