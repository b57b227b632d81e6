//! Named-place coordinates and great-circle distance helpers.
//!
//! Restaurants carry no coordinates of their own. A record's position is the
//! coordinate of its neighborhood, district or region (first hit wins) in a
//! static place table, falling back to central Seoul.

use matjip_core::Restaurant;
use serde::Serialize;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedPlace {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

const fn place(name: &'static str, lat: f64, lng: f64) -> NamedPlace {
    NamedPlace {
        name,
        coordinate: Coordinate::new(lat, lng),
    }
}

/// Used when none of a record's location fields are in the table.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate::new(37.5665, 126.9780);

/// Built-in place table. Iteration order matters for nearest-place ties.
pub const PLACES: &[NamedPlace] = &[
    // Seoul districts
    place("강남구", 37.5172, 127.0473),
    place("서초구", 37.4837, 127.0324),
    place("송파구", 37.5145, 127.1050),
    place("강동구", 37.5301, 127.1238),
    place("마포구", 37.5663, 126.9014),
    place("용산구", 37.5326, 126.9900),
    place("종로구", 37.5735, 126.9790),
    // Seoul 중구 only. A second, Busan 중구 entry would shadow this one.
    place("중구", 37.5641, 126.9979),
    place("성동구", 37.5634, 127.0369),
    place("광진구", 37.5385, 127.0823),
    place("동대문구", 37.5744, 127.0396),
    place("성북구", 37.5894, 127.0167),
    place("강북구", 37.6396, 127.0257),
    place("도봉구", 37.6688, 127.0471),
    place("노원구", 37.6542, 127.0568),
    place("은평구", 37.6027, 126.9291),
    place("서대문구", 37.5791, 126.9368),
    place("양천구", 37.5170, 126.8666),
    place("강서구", 37.5509, 126.8495),
    place("구로구", 37.4954, 126.8874),
    place("금천구", 37.4519, 126.8955),
    place("영등포구", 37.5264, 126.8963),
    place("동작구", 37.5124, 126.9393),
    place("관악구", 37.4784, 126.9516),
    place("강남", 37.4979, 127.0276),
    // Seoul neighborhoods
    place("홍대", 37.5563, 126.9220),
    place("이태원", 37.5345, 126.9946),
    place("성수", 37.5447, 127.0558),
    place("성수동", 37.5447, 127.0558),
    place("을지로", 37.5660, 126.9910),
    place("연남동", 37.5660, 126.9250),
    place("망원동", 37.5560, 126.9100),
    place("합정", 37.5496, 126.9139),
    place("압구정", 37.5270, 127.0280),
    place("청담동", 37.5200, 127.0470),
    place("신사동", 37.5230, 127.0230),
    place("삼청동", 37.5850, 126.9820),
    place("북촌", 37.5826, 126.9850),
    place("익선동", 37.5740, 126.9880),
    place("삼각지", 37.5350, 126.9720),
    place("한남동", 37.5340, 127.0000),
    place("서울숲", 37.5445, 127.0374),
    place("건대", 37.5404, 127.0692),
    place("왕십리", 37.5614, 127.0379),
    place("잠실", 37.5133, 127.1001),
    place("여의도", 37.5219, 126.9245),
    // Busan
    place("부산", 35.1796, 129.0756),
    place("해운대구", 35.1631, 129.1635),
    place("해운대", 35.1587, 129.1604),
    place("수영구", 35.1457, 129.1130),
    place("광안리", 35.1532, 129.1186),
    place("서면", 35.1578, 129.0599),
    place("남포동", 35.0982, 129.0324),
    place("부산진구", 35.1629, 129.0533),
    // Gyeonggi
    place("경기", 37.4138, 127.5183),
    place("성남시", 37.4449, 127.1389),
    place("분당", 37.3595, 127.1132),
    place("판교", 37.3947, 127.1119),
    place("수원시", 37.2636, 127.0286),
    place("용인시", 37.2410, 127.1775),
    place("고양시", 37.6584, 126.8320),
    // Incheon
    place("인천", 37.4563, 126.7052),
    place("연수구", 37.4100, 126.6783),
    place("송도", 37.3915, 126.6435),
    // Jeju
    place("제주", 33.4996, 126.5312),
    place("제주시", 33.4996, 126.5312),
    place("서귀포", 33.2541, 126.5600),
    place("서귀포시", 33.2541, 126.5600),
    // Metropolitan cities
    place("대구", 35.8714, 128.6014),
    place("광주", 35.1595, 126.8526),
    place("대전", 36.3504, 127.3845),
    place("울산", 35.5384, 129.3114),
    place("세종", 36.4800, 127.2890),
    // Provinces and smaller cities
    place("강원", 37.8228, 128.1555),
    place("강릉", 37.7519, 128.8761),
    place("속초", 38.2070, 128.5918),
    place("충북", 36.6357, 127.4912),
    place("충남", 36.5184, 126.8000),
    place("전북", 35.8203, 127.1088),
    place("전주", 35.8242, 127.1480),
    place("전남", 34.8161, 126.4629),
    place("여수", 34.7604, 127.6622),
    place("경북", 36.4919, 128.8889),
    place("경주", 35.8562, 129.2247),
    place("경남", 35.4606, 128.2132),
];

/// Great-circle distance in meters (Haversine, spherical Earth).
#[must_use]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// `"{n}m"` below one kilometer, `"{n.n}km"` from there on.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        // Ties round up: 1250 m is 1.3km.
        format!("{:.1}km", (meters / 100.0).round() / 10.0)
    }
}

/// A restaurant paired with its distance from a query origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nearby<'a> {
    pub restaurant: &'a Restaurant,
    pub distance_m: f64,
}

/// Lookup structure over a place table.
#[derive(Debug, Clone, Copy)]
pub struct GeoIndex<'a> {
    places: &'a [NamedPlace],
}

impl Default for GeoIndex<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GeoIndex<'static> {
    /// Index over the built-in [`PLACES`] table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { places: PLACES }
    }
}

impl<'a> GeoIndex<'a> {
    #[must_use]
    pub const fn new(places: &'a [NamedPlace]) -> Self {
        Self { places }
    }

    #[must_use]
    pub fn places(&self) -> &'a [NamedPlace] {
        self.places
    }

    /// Coordinate of the first table entry named exactly `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        self.places
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.coordinate)
    }

    /// Neighborhood, then district, then region; [`FALLBACK_COORDINATE`] otherwise.
    #[must_use]
    pub fn resolve_coordinate(&self, restaurant: &Restaurant) -> Coordinate {
        [
            restaurant.neighborhood.as_deref(),
            restaurant.district.as_deref(),
            restaurant.region.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find_map(|name| self.lookup(name))
        .unwrap_or(FALLBACK_COORDINATE)
    }

    /// Records within `max_meters` of `origin`, nearest first.
    ///
    /// Always filters. Callers that treat a zero radius as "no limit" must
    /// skip the call themselves.
    #[must_use]
    pub fn filter_by_radius<'r>(
        &self,
        restaurants: &'r [Restaurant],
        origin: Coordinate,
        max_meters: f64,
    ) -> Vec<Nearby<'r>> {
        let mut nearby: Vec<Nearby<'r>> = restaurants
            .iter()
            .map(|r| Nearby {
                restaurant: r,
                distance_m: distance_meters(origin, self.resolve_coordinate(r)),
            })
            .filter(|n| n.distance_m <= max_meters)
            .collect();
        nearby.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        nearby
    }

    /// Name of the closest table entry; the earliest entry wins ties.
    #[must_use]
    pub fn nearest_named_location(&self, point: Coordinate) -> Option<&'a str> {
        let mut best: Option<(&'a str, f64)> = None;
        for p in self.places {
            let d = distance_meters(point, p.coordinate);
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((p.name, d));
            }
        }
        best.map(|(name, _)| name)
    }
}

/// One row of the location picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationOption {
    CurrentPosition { label: &'static str },
    Anywhere { label: &'static str },
    Separator { label: &'static str },
    Place {
        id: &'static str,
        label: &'static str,
        coordinate: Coordinate,
    },
}

const PICKER_GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "서울",
        &[
            ("강남구", "강남구"),
            ("서초구", "서초구"),
            ("마포구", "마포구"),
            ("용산구", "용산구"),
            ("성동구", "성동구 (성수)"),
            ("종로구", "종로구"),
            ("중구", "중구 (을지로)"),
            ("송파구", "송파구 (잠실)"),
            ("영등포구", "영등포구 (여의도)"),
        ],
    ),
    (
        "수도권",
        &[("분당", "분당"), ("판교", "판교"), ("인천", "인천")],
    ),
    (
        "부산",
        &[("해운대", "해운대"), ("서면", "서면"), ("광안리", "광안리")],
    ),
    (
        "기타 지역",
        &[
            ("제주", "제주"),
            ("대구", "대구"),
            ("대전", "대전"),
            ("광주", "광주"),
            ("전주", "전주"),
            ("강릉", "강릉"),
        ],
    ),
];

/// The fixed location picker list: GPS, "anywhere", then grouped named places.
///
/// Picker entries missing from `geo` are skipped.
#[must_use]
pub fn selectable_locations(geo: &GeoIndex<'_>) -> Vec<LocationOption> {
    let mut options = vec![
        LocationOption::CurrentPosition {
            label: "현재 위치 (GPS)",
        },
        LocationOption::Anywhere {
            label: "전체 검색 (위치 제한 없음)",
        },
    ];
    for &(group, entries) in PICKER_GROUPS {
        options.push(LocationOption::Separator { label: group });
        for &(id, label) in entries {
            if let Some(coordinate) = geo.lookup(id) {
                options.push(LocationOption::Place {
                    id,
                    label,
                    coordinate,
                });
            }
        }
    }
    options
}
