//! Mapping generator picks back onto dataset records.

use matjip_core::Restaurant;

use super::params::CourseParams;
use super::parse::GeneratedSpot;
use super::plan::CourseSpot;
use super::tables::region_area;

/// Below this many resolved picks the course is topped up from the pool.
const MIN_RESOLVED: usize = 3;
/// Top-up stops once the course reaches this length.
const TOP_UP_TARGET: usize = 5;

/// Fuzzy lookup of a record by a generator-supplied name.
///
/// Tries an exact name match, then containment in either direction, then
/// (for a known region key) any record inside the region whose name or
/// category contains a whitespace-separated token of `name`.
#[must_use]
pub fn find_restaurant_by_name<'a>(
    restaurants: &'a [Restaurant],
    name: &str,
    region: &str,
) -> Option<&'a Restaurant> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(exact) = restaurants.iter().find(|r| r.name == name) {
        return Some(exact);
    }

    if let Some(partial) = restaurants
        .iter()
        .filter(|r| !r.name.is_empty())
        .find(|r| r.name.contains(name) || name.contains(r.name.as_str()))
    {
        return Some(partial);
    }

    let area = region_area(region)?;
    let tokens: Vec<&str> = name.split_whitespace().collect();
    restaurants
        .iter()
        .filter(|r| area.contains(r))
        .find(|r| {
            tokens
                .iter()
                .any(|t| r.name.contains(t) || r.category_contains(t))
        })
}

/// Resolve generator picks against the candidate pool (by id) or the whole
/// dataset (by name), dropping picks that match nothing.
///
/// When fewer than three picks resolve, unused pool records are appended in
/// pool order until the course has five stops or the pool runs out.
#[must_use]
pub fn reconcile(
    generated: &[GeneratedSpot],
    pool: &[&Restaurant],
    restaurants: &[Restaurant],
    params: &CourseParams,
) -> Vec<CourseSpot> {
    let mut spots: Vec<CourseSpot> = generated
        .iter()
        .filter_map(|spot| {
            let record = spot
                .id
                .and_then(|id| pool.iter().copied().find(|r| r.id == id))
                .or_else(|| {
                    spot.name
                        .as_deref()
                        .and_then(|n| find_restaurant_by_name(restaurants, n, &params.region))
                });
            if record.is_none() {
                tracing::debug!(id = ?spot.id, name = ?spot.name, "dropping unresolved course pick");
            }
            record.map(|r| CourseSpot {
                restaurant: r.clone(),
                time: spot.time.clone(),
                custom_description: spot
                    .custom_description
                    .clone()
                    .or_else(|| r.description.clone()),
                is_from_db: true,
            })
        })
        .collect();

    if spots.len() < MIN_RESOLVED {
        let resolved = spots.len();
        let used: Vec<u64> = spots.iter().map(|s| s.restaurant.id).collect();
        let extra: Vec<CourseSpot> = pool
            .iter()
            .filter(|r| !used.contains(&r.id))
            .take(TOP_UP_TARGET.saturating_sub(resolved))
            .enumerate()
            .map(|(idx, r)| CourseSpot {
                restaurant: (*r).clone(),
                time: Some(params.time.slot(resolved + idx)),
                custom_description: Some(synthesize_description(r)),
                is_from_db: true,
            })
            .collect();
        tracing::debug!(resolved, added = extra.len(), "topping up course from pool");
        spots.extend(extra);
    }

    spots
}

/// `"{moods} 분위기의 {category}. {description}"`, skipping absent parts.
fn synthesize_description(r: &Restaurant) -> String {
    let mut text = String::new();
    if !r.mood.is_empty() {
        text.push_str(&r.mood.join(", "));
        text.push_str(" 분위기의 ");
    }
    text.push_str(r.category.as_deref().unwrap_or("맛집"));
    text.push('.');
    if let Some(description) = r.description.as_deref() {
        text.push(' ');
        text.push_str(description);
    }
    text
}
