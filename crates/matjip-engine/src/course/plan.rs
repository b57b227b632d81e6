use matjip_core::Restaurant;
use serde::Serialize;

/// Per-stop cost assumed when a record has no usable average price.
const DEFAULT_SPOT_COST: f64 = 20_000.0;

/// One stop of a course: the full record plus schedule and rationale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSpot {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub time: Option<String>,
    pub custom_description: Option<String>,
    #[serde(rename = "isFromDB")]
    pub is_from_db: bool,
}

/// Which path produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePlan {
    pub title: String,
    pub summary: String,
    pub spots: Vec<CourseSpot>,
    pub total_budget: String,
    pub course_highlight: String,
    #[serde(rename = "matchedFromDB")]
    pub matched_from_db: usize,
    pub total_spots: usize,
    pub source: PlanSource,
}

impl CoursePlan {
    pub(crate) fn new(
        title: String,
        summary: String,
        spots: Vec<CourseSpot>,
        total_budget: String,
        course_highlight: String,
        source: PlanSource,
    ) -> Self {
        let matched_from_db = spots.iter().filter(|s| s.is_from_db).count();
        let total_spots = spots.len();
        Self {
            title,
            summary,
            spots,
            total_budget,
            course_highlight,
            matched_from_db,
            total_spots,
            source,
        }
    }
}

/// Rough total in 만원 units, e.g. `약 8만원`.
///
/// Records without a positive average price count as 20,000.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_total_budget<'a, I>(restaurants: I) -> String
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let total: f64 = restaurants
        .into_iter()
        .map(|r| r.avg_price.filter(|p| *p > 0.0).unwrap_or(DEFAULT_SPOT_COST))
        .sum();
    format!("약 {}만원", (total / 10_000.0).round() as i64)
}
