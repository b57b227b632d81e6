use matjip_core::Restaurant;

use super::params::CourseParams;
use super::tables::region_area;
use crate::scoring::{score_for_course_params, CourseCandidate};

/// Records passing the region and budget gates, best course score first.
///
/// An unknown or empty region key skips the region gate. An absent budget
/// gates as medium. Equal scores keep dataset order.
#[must_use]
pub fn filter_for_course<'a>(
    restaurants: &'a [Restaurant],
    params: &CourseParams,
) -> Vec<CourseCandidate<'a>> {
    let area = region_area(&params.region);
    let bounds = params.budget.unwrap_or_default().bounds();

    let mut candidates: Vec<CourseCandidate<'a>> = restaurants
        .iter()
        .filter(|r| area.is_none_or(|a| a.contains(r)))
        .filter(|r| bounds.admits(r))
        .map(|restaurant| CourseCandidate {
            restaurant,
            score: score_for_course_params(restaurant, params),
        })
        .collect();
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}
