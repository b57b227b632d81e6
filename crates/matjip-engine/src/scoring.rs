//! Relevance scoring for the chat search and course planning paths.
//!
//! Both rubrics are additive: every contribution is non-negative, an absent
//! field contributes nothing, and totals are only comparable within one batch.

use matjip_core::Restaurant;
use serde::Serialize;

use crate::course::CourseParams;
use crate::query::ConditionSet;

const REGION_POINTS: u32 = 10;
const DISTRICT_POINTS: u32 = 8;
const CATEGORY_POINTS: u32 = 7;
const MOOD_POINTS: u32 = 5;
const PRICE_POINTS: u32 = 4;
const KEYWORD_POINTS: u32 = 3;

const COURSE_MOOD_POINTS: f64 = 10.0;
const COURSE_TIME_POINTS: f64 = 5.0;
const DEFAULT_RATING: f64 = 4.0;

/// A chat search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub restaurant: &'a Restaurant,
    pub score: u32,
}

/// A record that passed the course gates, with its course score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourseCandidate<'a> {
    pub restaurant: &'a Restaurant,
    pub score: f64,
}

/// `true` when a record tag and a term are substrings of each other in
/// either direction. Empty tags never match.
pub(crate) fn tags_overlap(tag: &str, term: &str) -> bool {
    !tag.is_empty() && (tag.contains(term) || term.contains(tag))
}

/// Score `restaurant` against a parsed chat query. Zero means nothing matched.
#[must_use]
pub fn score_for_query(restaurant: &Restaurant, conditions: &ConditionSet) -> u32 {
    let mut score = 0;

    for region in &conditions.regions {
        if restaurant.region.as_deref() == Some(*region) {
            score += REGION_POINTS;
        }
    }

    for district in &conditions.districts {
        if contains(restaurant.district.as_deref(), district) {
            score += DISTRICT_POINTS;
        }
        if contains(restaurant.neighborhood.as_deref(), district) {
            score += DISTRICT_POINTS;
        }
    }

    for category in &conditions.categories {
        if restaurant.category_contains(category) {
            score += CATEGORY_POINTS;
        }
    }

    for mood in &conditions.moods {
        if restaurant.mood.iter().any(|tag| tags_overlap(tag, mood)) {
            score += MOOD_POINTS;
        }
    }

    for price in &conditions.price_ranges {
        if restaurant.price_range == Some(*price) {
            score += PRICE_POINTS;
        }
    }

    if !conditions.keywords.is_empty() {
        let haystack = format!(
            "{} {} {}",
            restaurant.name,
            restaurant.description.as_deref().unwrap_or_default(),
            restaurant.signature.as_deref().unwrap_or_default(),
        )
        .to_lowercase();
        for keyword in &conditions.keywords {
            if haystack.contains(keyword.to_lowercase().as_str()) {
                score += KEYWORD_POINTS;
            }
        }
    }

    score
}

/// Score `restaurant` for course planning.
///
/// +10 per mood tag overlapping the mood's keyword list, a flat +5 when the
/// category is preferred for the time of day, plus `rating × 2` (4.0 when absent).
#[must_use]
pub fn score_for_course_params(restaurant: &Restaurant, params: &CourseParams) -> f64 {
    let keywords = params.mood.keywords();
    let mut score: f64 = restaurant
        .mood
        .iter()
        .filter(|tag| keywords.iter().any(|k| tags_overlap(tag, k)))
        .map(|_| COURSE_MOOD_POINTS)
        .sum();

    if restaurant.category_contains_any(params.time.preferred_categories()) {
        score += COURSE_TIME_POINTS;
    }

    score + restaurant.rating.unwrap_or(DEFAULT_RATING) * 2.0
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.contains(needle))
}
