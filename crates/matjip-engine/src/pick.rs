//! "Spin the wheel" random recommendation.

use matjip_core::Restaurant;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::geo::{Coordinate, GeoIndex};

/// Filters applied before a random draw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RandomFilter<'f> {
    /// Category substring; `None` means every category.
    pub category: Option<&'f str>,
    /// Position to measure from. Ignored without a positive `max_meters`.
    pub origin: Option<Coordinate>,
    /// Radius in meters; `None` or zero means unlimited.
    pub max_meters: Option<f64>,
}

/// A drawable record and, when a radius filter applied, its distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RandomCandidate<'a> {
    pub restaurant: &'a Restaurant,
    pub distance_m: Option<f64>,
}

/// Records eligible for a random pick.
///
/// With an origin and a positive radius the result is nearest first,
/// otherwise dataset order.
#[must_use]
pub fn random_candidates<'a>(
    geo: &GeoIndex<'_>,
    restaurants: &'a [Restaurant],
    filter: &RandomFilter<'_>,
) -> Vec<RandomCandidate<'a>> {
    let keep = |r: &Restaurant| filter.category.is_none_or(|c| r.category_contains(c));

    match (filter.origin, filter.max_meters.filter(|m| *m > 0.0)) {
        (Some(origin), Some(max)) => geo
            .filter_by_radius(restaurants, origin, max)
            .into_iter()
            .filter(|n| keep(n.restaurant))
            .map(|n| RandomCandidate {
                restaurant: n.restaurant,
                distance_m: Some(n.distance_m),
            })
            .collect(),
        _ => restaurants
            .iter()
            .filter(|r| keep(r))
            .map(|restaurant| RandomCandidate {
                restaurant,
                distance_m: None,
            })
            .collect(),
    }
}

/// Uniform draw from `candidates`; `None` when empty.
pub fn pick_random<'c, 'a, R>(
    candidates: &'c [RandomCandidate<'a>],
    rng: &mut R,
) -> Option<&'c RandomCandidate<'a>>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
