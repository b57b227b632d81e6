//! Read-only command handlers: search, nearby, pick, explore, stats and
//! the location list. Output is plain text on stdout.

use matjip_core::{Restaurant, RestaurantDb};
use matjip_engine::{
    dataset_stats, describe_conditions, explore, format_distance, pick_random, random_candidates,
    search, selectable_locations, shuffle_deck, Coordinate, ExploreFilter, GeoIndex,
    LocationOption, Nearby, RandomFilter,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Origin from explicit coordinates or a named place; `None` when neither is given.
///
/// # Errors
///
/// Returns an error if `place` is not in the built-in place table.
pub(crate) fn resolve_origin(
    lat: Option<f64>,
    lng: Option<f64>,
    place: Option<&str>,
) -> anyhow::Result<Option<Coordinate>> {
    if let Some(name) = place {
        return GeoIndex::builtin()
            .lookup(name)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("unknown place '{name}'; see `matjip locations`"));
    }
    Ok(lat.zip(lng).map(|(lat, lng)| Coordinate::new(lat, lng)))
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// One-line summary: `[id] name · category · location · price`.
pub(crate) fn summary_line(r: &Restaurant) -> String {
    let location = [
        r.region.as_deref(),
        r.district.as_deref(),
        r.neighborhood.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    let mut parts = vec![format!("[{}] {}", r.id, r.name)];
    if let Some(category) = r.category.as_deref() {
        parts.push(category.to_string());
    }
    if !location.is_empty() {
        parts.push(location);
    }
    if let Some(price) = r.price_range {
        parts.push(price.label().to_string());
    }
    parts.join(" · ")
}

pub(crate) fn run_search(db: &RestaurantDb, query: &str) {
    let outcome = search(db.restaurants(), query);

    let Some(conditions) = outcome.conditions else {
        println!("검색어를 2글자 이상 입력해주세요.");
        return;
    };
    if conditions.is_empty() && outcome.results.is_empty() {
        println!("'{query}'에서 알아들은 조건이 없어요. 지역, 음식 종류, 분위기로 검색해보세요.");
        return;
    }

    let described = describe_conditions(&conditions);
    if !described.is_empty() {
        println!("조건: {described}");
    }
    if outcome.results.is_empty() {
        println!("조건에 맞는 맛집이 없어요.");
        return;
    }
    for hit in &outcome.results {
        println!("{:>4}  {}", hit.score, summary_line(hit.restaurant));
    }
}

/// Records near `origin`, nearest first. A radius of zero or less means
/// unlimited.
pub(crate) fn nearby_within<'a>(
    restaurants: &'a [Restaurant],
    origin: Coordinate,
    radius: f64,
    category: Option<&str>,
) -> Vec<Nearby<'a>> {
    let max_meters = if radius > 0.0 { radius } else { f64::INFINITY };
    GeoIndex::builtin()
        .filter_by_radius(restaurants, origin, max_meters)
        .into_iter()
        .filter(|n| category.is_none_or(|c| n.restaurant.category_contains(c)))
        .collect()
}

pub(crate) fn run_nearby(
    db: &RestaurantDb,
    origin: Coordinate,
    radius: f64,
    category: Option<&str>,
) {
    let nearby = nearby_within(db.restaurants(), origin, radius, category);

    if nearby.is_empty() {
        if radius > 0.0 {
            println!("{} 안에 맛집이 없어요.", format_distance(radius));
        } else {
            println!("조건에 맞는 맛집이 없어요.");
        }
        return;
    }
    for n in &nearby {
        println!(
            "{:>7}  {}",
            format_distance(n.distance_m),
            summary_line(n.restaurant)
        );
    }
}

pub(crate) fn run_nearest(lat: f64, lng: f64) {
    match GeoIndex::builtin().nearest_named_location(Coordinate::new(lat, lng)) {
        Some(name) => println!("{name}"),
        None => println!("no named places configured"),
    }
}

pub(crate) fn run_pick(
    db: &RestaurantDb,
    origin: Option<Coordinate>,
    radius: Option<f64>,
    category: Option<&str>,
    seed: Option<u64>,
) {
    let geo = GeoIndex::builtin();
    let filter = RandomFilter {
        category,
        origin,
        max_meters: radius,
    };
    let candidates = random_candidates(&geo, db.restaurants(), &filter);
    tracing::debug!(candidates = candidates.len(), "random pick pool built");

    let mut rng = rng_from(seed);
    match pick_random(&candidates, &mut rng) {
        Some(pick) => {
            let distance = pick
                .distance_m
                .map(|d| format!(" ({})", format_distance(d)))
                .unwrap_or_default();
            println!("오늘은 여기! {}{distance}", summary_line(pick.restaurant));
            if let Some(signature) = pick.restaurant.signature.as_deref() {
                println!("  대표 메뉴: {signature}");
            }
        }
        None => println!("조건에 맞는 맛집이 없어요."),
    }
}

pub(crate) fn run_explore(
    db: &RestaurantDb,
    filter: &ExploreFilter,
    excluded_ids: &[u64],
    shuffle: bool,
    seed: Option<u64>,
) {
    let mut deck = explore(db.restaurants(), filter, excluded_ids);
    if shuffle {
        shuffle_deck(&mut deck, &mut rng_from(seed));
    }

    println!(
        "{} · 필터 {}개 · {}곳",
        filter.location_label(),
        filter.active_count(),
        deck.len()
    );
    for r in deck {
        println!("  {}", summary_line(r));
    }
}

pub(crate) fn run_stats(db: &RestaurantDb) {
    let stats = dataset_stats(db.restaurants());
    println!("total: {}", stats.total);
    for (title, counts) in [
        ("region", &stats.by_region),
        ("category", &stats.by_category),
        ("price range", &stats.by_price_range),
    ] {
        println!("{title}:");
        for (key, count) in counts {
            println!("  {key:<12}{count:>5}");
        }
    }
}

pub(crate) fn run_locations() {
    for option in selectable_locations(&GeoIndex::builtin()) {
        match option {
            LocationOption::CurrentPosition { label } | LocationOption::Anywhere { label } => {
                println!("{label}");
            }
            LocationOption::Separator { label } => println!("-- {label} --"),
            LocationOption::Place {
                id,
                label,
                coordinate,
            } => println!(
                "  {label:<16}{id:<8}{:.4}, {:.4}",
                coordinate.lat, coordinate.lng
            ),
        }
    }
}
