use matjip_core::Restaurant;

use super::params::{CourseParams, TimeOfDay};
use super::plan::{estimate_total_budget, CoursePlan, CourseSpot, PlanSource};
use super::tables::CategoryBucket;

/// Deterministic three-stop course built straight from the pool.
///
/// Daytime courses go cafe, meal, second cafe. Evening and night courses go
/// meal, cafe, then a bar or a second meal. Missing stops are skipped; the
/// time label is always that of the stop's fixed position.
#[must_use]
pub fn build_fallback_course(pool: &[&Restaurant], params: &CourseParams) -> CoursePlan {
    let bucket = |wanted: CategoryBucket| {
        pool.iter()
            .copied()
            .filter(|r| CategoryBucket::of(r) == wanted)
            .collect::<Vec<_>>()
    };
    let meals = bucket(CategoryBucket::Meal);
    let cafes = bucket(CategoryBucket::Cafe);
    let bars = bucket(CategoryBucket::Bar);

    let steps: [Option<&Restaurant>; 3] = match params.time {
        TimeOfDay::Morning | TimeOfDay::Afternoon => [
            cafes.first().copied(),
            meals.first().copied(),
            cafes.get(1).copied(),
        ],
        TimeOfDay::Evening | TimeOfDay::Night => [
            meals.first().copied(),
            cafes.first().copied(),
            bars.first().or(meals.get(1)).copied(),
        ],
    };

    let chosen: Vec<(usize, &Restaurant)> = steps
        .into_iter()
        .enumerate()
        .filter_map(|(slot, r)| r.map(|r| (slot, r)))
        .collect();

    let total_budget = estimate_total_budget(chosen.iter().map(|(_, r)| *r));
    let spots = chosen
        .into_iter()
        .map(|(slot, r)| CourseSpot {
            restaurant: r.clone(),
            time: Some(params.time.slot(slot)),
            custom_description: r.description.clone(),
            is_from_db: true,
        })
        .collect();

    CoursePlan::new(
        format!("{} 추천 코스", params.region),
        "조건에 맞는 인기 맛집으로 구성한 코스입니다.".to_string(),
        spots,
        total_budget,
        "엄선된 인기 맛집들로 구성했어요!".to_string(),
        PlanSource::Fallback,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Mood;

    fn record(id: u64, category: &str) -> Restaurant {
        let mut r = Restaurant::new(id, format!("r{id}"));
        r.category = Some(category.into());
        r.avg_price = Some(30_000.0);
        r
    }

    fn params(time: TimeOfDay) -> CourseParams {
        CourseParams {
            region: "서울 홍대/합정".into(),
            mood: Mood::Chill,
            budget: None,
            time,
            extra: None,
        }
    }

    fn ids(plan: &CoursePlan) -> Vec<u64> {
        plan.spots.iter().map(|s| s.restaurant.id).collect()
    }

    #[test]
    fn daytime_course_is_light_main_light() {
        let data = [record(1, "한식"), record(2, "카페"), record(3, "디저트"), record(4, "양식")];
        let pool: Vec<&Restaurant> = data.iter().collect();
        let plan = build_fallback_course(&pool, &params(TimeOfDay::Morning));
        assert_eq!(ids(&plan), vec![2, 1, 3]);
        let times: Vec<&str> = plan.spots.iter().filter_map(|s| s.time.as_deref()).collect();
        assert_eq!(times, vec!["10:00", "11:00", "12:00"]);
        assert_eq!(plan.title, "서울 홍대/합정 추천 코스");
        assert_eq!(plan.total_budget, "약 9만원");
        assert_eq!(plan.source, PlanSource::Fallback);
    }

    #[test]
    fn evening_prefers_bar_for_last_stop() {
        let data = [record(1, "한식"), record(2, "바/와인"), record(3, "카페"), record(4, "일식")];
        let pool: Vec<&Restaurant> = data.iter().collect();
        let plan = build_fallback_course(&pool, &params(TimeOfDay::Evening));
        assert_eq!(ids(&plan), vec![1, 3, 2]);
    }

    #[test]
    fn night_without_bar_uses_second_meal() {
        let data = [record(1, "고기/구이"), record(4, "일식")];
        let pool: Vec<&Restaurant> = data.iter().collect();
        let plan = build_fallback_course(&pool, &params(TimeOfDay::Night));
        assert_eq!(ids(&plan), vec![1, 4]);
        // Missing cafe keeps the third stop on its own slot.
        assert_eq!(plan.spots[1].time.as_deref(), Some("23:00"));
        assert_eq!(plan.matched_from_db, 2);
        assert_eq!(plan.total_spots, 2);
    }

    #[test]
    fn empty_pool_gives_empty_plan() {
        let plan = build_fallback_course(&[], &params(TimeOfDay::Afternoon));
        assert!(plan.spots.is_empty());
        assert_eq!(plan.total_budget, "약 0만원");
    }
}
