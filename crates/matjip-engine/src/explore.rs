//! Card-deck browsing with simple attribute filters.

use matjip_core::{PriceRange, Restaurant};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Optional filters for the explore deck. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreFilter {
    /// Exact region (`서울`, `부산`, ...).
    pub region: Option<String>,
    /// Exact district (`강남구`, ...).
    pub district: Option<String>,
    /// Category substring.
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
}

impl ExploreFilter {
    /// Number of filters that are set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.region.is_some(),
            self.district.is_some(),
            self.category.is_some(),
            self.price_range.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Short location label: `전국`, the region, or `region district`.
    #[must_use]
    pub fn location_label(&self) -> String {
        match (&self.region, &self.district) {
            (None, _) => "전국".to_string(),
            (Some(region), None) => region.clone(),
            (Some(region), Some(district)) => format!("{region} {district}"),
        }
    }

    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let exact = |wanted: &Option<String>, field: &Option<String>| {
            wanted.as_ref().is_none_or(|w| field.as_ref() == Some(w))
        };
        exact(&self.region, &restaurant.region)
            && exact(&self.district, &restaurant.district)
            && self
                .category
                .as_deref()
                .is_none_or(|c| restaurant.category_contains(c))
            && self
                .price_range
                .is_none_or(|p| restaurant.price_range == Some(p))
    }
}

/// Records matching `filter` that the user has neither saved nor passed,
/// in dataset order.
#[must_use]
pub fn explore<'a>(
    restaurants: &'a [Restaurant],
    filter: &ExploreFilter,
    excluded_ids: &[u64],
) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|r| !excluded_ids.contains(&r.id))
        .filter(|r| filter.matches(r))
        .collect()
}

/// Shuffle a deck in place.
pub fn shuffle_deck<T, R>(deck: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    deck.shuffle(rng);
}
