//! Date-course planning: filter, select, prompt, reconcile, fall back.
//!
//! [`generate_course`] never fails. Generator errors, unparseable output and
//! picks that resolve to nothing all end in [`build_fallback_course`].

mod fallback;
mod filter;
mod params;
mod parse;
mod plan;
mod prompt;
mod reconcile;
mod select;
mod tables;

use std::fmt::Display;
use std::future::Future;

use matjip_core::Restaurant;

pub use fallback::build_fallback_course;
pub use filter::filter_for_course;
pub use params::{Budget, CourseParams, Mood, TimeOfDay};
pub use parse::{extract_payload, parse_generated_course, GeneratedCourse, GeneratedSpot};
pub use plan::{estimate_total_budget, CoursePlan, CourseSpot, PlanSource};
pub use prompt::{build_course_prompt, format_candidates};
pub use reconcile::{find_restaurant_by_name, reconcile};
pub use select::{select_diverse_subset, CANDIDATE_CAPACITY};
pub use tables::{region_area, BudgetBounds, CategoryBucket, RegionArea, REGION_AREAS};

/// Text generator used to draft a course from a prompt.
///
/// Implementations own transport concerns such as retry on throttling. A
/// returned error is final for the current request.
pub trait CourseGenerator {
    type Error: Display;

    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Plan a course for `params` over `restaurants`, asking `generator` to pick
/// and order stops from a category-balanced candidate pool.
pub async fn generate_course<G>(
    generator: &G,
    restaurants: &[Restaurant],
    params: &CourseParams,
) -> CoursePlan
where
    G: CourseGenerator + Sync,
{
    let filtered = filter_for_course(restaurants, params);
    tracing::info!(region = %params.region, filtered = filtered.len(), "filtered course candidates");

    let pool = select_diverse_subset(filtered.iter().map(|c| c.restaurant), CANDIDATE_CAPACITY);
    tracing::info!(selected = pool.len(), "selected diverse candidate pool");

    if pool.is_empty() {
        tracing::warn!("no candidates for course; skipping generator");
        return build_fallback_course(&pool, params);
    }

    let prompt = build_course_prompt(params, &pool);
    let raw = match generator.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "course generator failed; using fallback course");
            return build_fallback_course(&pool, params);
        }
    };

    let course = match parse_generated_course(&raw) {
        Ok(course) => course,
        Err(e) => {
            tracing::warn!(error = %e, "could not parse generator output; using fallback course");
            tracing::debug!(raw = %raw, "unparseable generator output");
            return build_fallback_course(&pool, params);
        }
    };

    let spots = reconcile(&course.spots, &pool, restaurants, params);
    if spots.is_empty() {
        tracing::warn!("no generator picks resolved; using fallback course");
        return build_fallback_course(&pool, params);
    }
    tracing::info!(
        picks = course.spots.len(),
        spots = spots.len(),
        "reconciled generator picks"
    );

    let total_budget = course
        .total_budget
        .unwrap_or_else(|| estimate_total_budget(spots.iter().map(|s| &s.restaurant)));
    CoursePlan::new(
        course
            .title
            .unwrap_or_else(|| format!("{} 데이트 코스", params.region)),
        course
            .summary
            .unwrap_or_else(|| "맞춤 추천 데이트 코스입니다.".to_string()),
        spots,
        total_budget,
        course.course_highlight.unwrap_or_default(),
        PlanSource::Generated,
    )
}

/// Fallback course without consulting a generator.
#[must_use]
pub fn plan_offline(restaurants: &[Restaurant], params: &CourseParams) -> CoursePlan {
    let filtered = filter_for_course(restaurants, params);
    let pool = select_diverse_subset(filtered.iter().map(|c| c.restaurant), CANDIDATE_CAPACITY);
    tracing::info!(filtered = filtered.len(), selected = pool.len(), "planning offline course");
    build_fallback_course(&pool, params)
}
