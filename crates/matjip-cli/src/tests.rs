use super::*;
use matjip_engine::{Budget, Mood, TimeOfDay};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["matjip"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.dataset.is_none());
}

#[test]
fn search_joins_words() {
    let cli = Cli::try_parse_from(["matjip", "search", "강남", "데이트", "한식"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref query }) if query.join(" ") == "강남 데이트 한식"
    ));
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["matjip", "search"]).is_err());
}

#[test]
fn nearby_accepts_negative_coordinates_and_default_radius() {
    let cli = Cli::try_parse_from([
        "matjip", "nearby", "--lat", "-33.86", "--lng", "151.2",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Nearby {
            lat: Some(lat),
            lng: Some(lng),
            place: None,
            radius,
            category: None,
        }) if lat < 0.0 && lng > 151.0 && (radius - 3000.0).abs() < f64::EPSILON
    ));
}

#[test]
fn nearby_place_conflicts_with_coordinates() {
    assert!(Cli::try_parse_from([
        "matjip", "nearby", "--place", "강남", "--lat", "37.5", "--lng", "127.0",
    ])
    .is_err());
}

#[test]
fn nearby_lat_requires_lng() {
    assert!(Cli::try_parse_from(["matjip", "nearby", "--lat", "37.5"]).is_err());
}

#[test]
fn pick_defaults_to_unfiltered() {
    let cli = Cli::try_parse_from(["matjip", "pick"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Pick {
            lat: None,
            lng: None,
            place: None,
            radius: None,
            category: None,
            seed: None,
        })
    ));
}

#[test]
fn explore_parses_price_and_exclusions() {
    let cli = Cli::try_parse_from([
        "matjip", "explore", "--region", "서울", "--price", "고급", "--exclude", "3,7",
        "--exclude", "9",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Explore {
            region: Some(ref region),
            price: Some(matjip_core::PriceRange::Premium),
            ref exclude,
            shuffle: false,
            ..
        }) if region == "서울" && exclude == &vec![3, 7, 9]
    ));
}

#[test]
fn explore_rejects_unknown_price() {
    assert!(Cli::try_parse_from(["matjip", "explore", "--price", "free"]).is_err());
}

#[test]
fn explore_seed_requires_shuffle() {
    assert!(Cli::try_parse_from(["matjip", "explore", "--seed", "1"]).is_err());
}

#[test]
fn course_parses_keyword_params() {
    let cli = Cli::try_parse_from([
        "matjip",
        "course",
        "--region",
        "서울 성수/건대",
        "--mood",
        "Romantic",
        "--time",
        "evening",
        "--budget",
        "high",
        "--offline",
    ])
    .unwrap();
    let Some(Commands::Course(args)) = cli.command else {
        panic!("expected course command");
    };
    assert!(args.offline);
    let params = args.params();
    assert_eq!(params.region, "서울 성수/건대");
    assert_eq!(params.mood, Mood::Romantic);
    assert_eq!(params.budget, Some(Budget::High));
    assert_eq!(params.time, TimeOfDay::Evening);
    assert_eq!(params.extra, None);
}

#[test]
fn course_rejects_unknown_mood() {
    assert!(Cli::try_parse_from([
        "matjip", "course", "--region", "x", "--mood", "sleepy", "--time", "evening",
    ])
    .is_err());
}

#[test]
fn dataset_flag_is_global() {
    let cli = Cli::try_parse_from(["matjip", "stats", "--dataset", "data/other.yaml"]).unwrap();
    assert_eq!(cli.dataset, Some(PathBuf::from("data/other.yaml")));
    assert!(matches!(cli.command, Some(Commands::Stats)));
}

#[test]
fn resolve_origin_prefers_place_and_rejects_unknown() {
    let origin = browse::resolve_origin(None, None, Some("강남"))
        .unwrap()
        .expect("강남 is a known place");
    assert!(origin.lat > 37.0);
    assert!(browse::resolve_origin(None, None, Some("아틀란티스")).is_err());
    assert!(browse::resolve_origin(None, None, None).unwrap().is_none());
    assert_eq!(
        browse::resolve_origin(Some(1.0), Some(2.0), None).unwrap(),
        Some(matjip_engine::Coordinate::new(1.0, 2.0))
    );
}

#[test]
fn summary_line_skips_absent_fields() {
    let mut r = matjip_core::Restaurant::new(4, "와인바 밤");
    assert_eq!(browse::summary_line(&r), "[4] 와인바 밤");
    r.category = Some("바/와인".to_string());
    r.region = Some("서울".to_string());
    r.district = Some("마포구".to_string());
    assert_eq!(browse::summary_line(&r), "[4] 와인바 밤 · 바/와인 · 서울 마포구");
}

#[test]
fn nearby_zero_radius_is_unlimited() {
    let mut near = matjip_core::Restaurant::new(1, "성수 가게");
    near.neighborhood = Some("성수동".to_string());
    let mut far = matjip_core::Restaurant::new(2, "해운대 가게");
    far.neighborhood = Some("해운대".to_string());
    far.category = Some("일식".to_string());
    let records = vec![far, near];
    let origin = matjip_engine::Coordinate::new(37.5447, 127.0558);

    let ids = |hits: &[matjip_engine::Nearby<'_>]| -> Vec<u64> {
        hits.iter().map(|n| n.restaurant.id).collect()
    };
    assert_eq!(ids(&browse::nearby_within(&records, origin, 0.0, None)), vec![1, 2]);
    assert_eq!(ids(&browse::nearby_within(&records, origin, -5.0, None)), vec![1, 2]);
    assert_eq!(ids(&browse::nearby_within(&records, origin, 3_000.0, None)), vec![1]);
    assert_eq!(
        ids(&browse::nearby_within(&records, origin, 0.0, Some("일식"))),
        vec![2]
    );
}
