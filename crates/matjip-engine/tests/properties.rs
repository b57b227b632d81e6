//! Behavioural guarantees of the engine's public API.

use matjip_core::{PriceRange, Restaurant};
use matjip_engine::course::GeneratedSpot;
use matjip_engine::{
    build_fallback_course, distance_meters, format_distance, parse_query, reconcile, search,
    select_diverse_subset, Coordinate, CourseParams, GeoIndex, Mood, TimeOfDay,
};

fn record(id: u64, category: &str) -> Restaurant {
    let mut r = Restaurant::new(id, format!("가게{id}"));
    r.category = Some(category.to_string());
    r
}

fn params(time: TimeOfDay) -> CourseParams {
    CourseParams {
        region: "서울 종로/광화문".to_string(),
        mood: Mood::Culture,
        budget: None,
        time,
        extra: None,
    }
}

#[test]
fn distance_is_zero_on_identity_and_symmetric() {
    let points = [
        Coordinate::new(37.5665, 126.9780),
        Coordinate::new(35.1796, 129.0756),
        Coordinate::new(33.4996, 126.5312),
        Coordinate::new(-33.8688, 151.2093),
    ];
    for a in points {
        assert!(distance_meters(a, a).abs() < 1e-6);
        for b in points {
            assert!((distance_meters(a, b) - distance_meters(b, a)).abs() < 1e-6);
        }
    }
}

#[test]
fn radius_filter_keeps_only_nearby_records_in_distance_order() {
    let geo = GeoIndex::builtin();
    let mut records = Vec::new();
    for (id, neighborhood) in [(1, "잠실"), (2, "해운대"), (3, "성수동"), (4, "건대")] {
        let mut r = Restaurant::new(id, "x");
        r.neighborhood = Some(neighborhood.to_string());
        records.push(r);
    }
    let origin = geo.lookup("건대").expect("건대 is in the table");

    let hits = geo.filter_by_radius(&records, origin, 5_000.0);
    let ids: Vec<u64> = hits.iter().map(|n| n.restaurant.id).collect();
    assert_eq!(ids, vec![4, 3, 1]);
    assert!(hits.iter().all(|n| n.distance_m <= 5_000.0));
    assert!(hits.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));

    assert!(geo.filter_by_radius(&[], origin, 5_000.0).is_empty());
}

#[test]
fn distance_labels_switch_units_at_one_kilometre() {
    assert_eq!(format_distance(999.0), "999m");
    assert_eq!(format_distance(1000.0), "1.0km");
    assert_eq!(format_distance(2500.0), "2.5km");
}

#[test]
fn one_character_query_returns_no_conditions() {
    let records = vec![record(1, "한식")];
    let out = search(&records, "a");
    assert!(out.results.is_empty());
    assert!(out.conditions.is_none());
}

#[test]
fn fully_matching_record_outranks_unrelated_one() {
    let mut target = record(1, "한식");
    target.region = Some("서울".to_string());
    target.district = Some("강남구".to_string());
    target.mood = vec!["데이트".to_string()];
    target.price_range = Some(PriceRange::Normal);
    let unrelated = record(2, "베이커리/카페");

    let records = vec![unrelated, target];
    let out = search(&records, "서울 강남 데이트 한식");

    assert_eq!(out.results.len(), 1);
    let hit = out.results[0];
    assert_eq!(hit.restaurant.id, 1);
    assert!(hit.score >= 10 + 8 + 7 + 5, "score was {}", hit.score);
}

#[test]
fn single_category_pool_still_fills_capacity() {
    let pool: Vec<Restaurant> = (0..20).map(|i| record(i, "한식")).collect();
    let selected = select_diverse_subset(&pool, 10);
    assert_eq!(selected.len(), 10);
}

#[test]
fn unresolvable_pick_is_dropped_and_pool_tops_up_in_order() {
    let pool_data: Vec<Restaurant> = (1..=8).map(|i| record(i, "한식")).collect();
    let pool: Vec<&Restaurant> = pool_data.iter().collect();
    let generated = vec![
        GeneratedSpot {
            id: Some(500),
            ..GeneratedSpot::default()
        },
        GeneratedSpot {
            id: Some(2),
            ..GeneratedSpot::default()
        },
    ];

    let spots = reconcile(&generated, &pool, &pool_data, &params(TimeOfDay::Afternoon));
    let ids: Vec<u64> = spots.iter().map(|s| s.restaurant.id).collect();
    assert_eq!(ids, vec![2, 1, 3, 4, 5]);

    let small: Vec<&Restaurant> = pool.iter().copied().take(3).collect();
    let spots = reconcile(&generated[..1], &small, &pool_data, &params(TimeOfDay::Afternoon));
    assert_eq!(spots.len(), 3);
}

#[test]
fn morning_fallback_is_cafe_meal_cafe() {
    let pool_data = [
        record(1, "한식"),
        record(2, "카페"),
        record(3, "양식"),
        record(4, "베이커리/카페"),
    ];
    let pool: Vec<&Restaurant> = pool_data.iter().collect();

    let plan = build_fallback_course(&pool, &params(TimeOfDay::Morning));
    let ids: Vec<u64> = plan.spots.iter().map(|s| s.restaurant.id).collect();
    assert_eq!(ids, vec![2, 1, 4]);
    let times: Vec<&str> = plan
        .spots
        .iter()
        .map(|s| s.time.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(times, vec!["10:00", "11:00", "12:00"]);

    let single_cafe = [record(1, "한식"), record(2, "카페")];
    let pool: Vec<&Restaurant> = single_cafe.iter().collect();
    let plan = build_fallback_course(&pool, &params(TimeOfDay::Morning));
    assert_eq!(plan.spots.len(), 2);
}

#[test]
fn parsing_twice_gives_equal_conditions() {
    for q in ["강남 오마카세 데이트", "부산 가성비 국밥, 노포", "x", ""] {
        assert_eq!(parse_query(q), parse_query(q));
    }
}
