//! Static lookup tables for course planning.

use matjip_core::{PriceRange, Restaurant};

use super::params::{Budget, Mood, TimeOfDay};

/// Geographic footprint of a picker region key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionArea {
    pub key: &'static str,
    pub region: &'static str,
    pub districts: &'static [&'static str],
    pub neighborhoods: &'static [&'static str],
}

pub const REGION_AREAS: &[RegionArea] = &[
    RegionArea {
        key: "서울 강남/역삼",
        region: "서울",
        districts: &["강남구"],
        neighborhoods: &["강남", "역삼", "청담동", "강남역"],
    },
    RegionArea {
        key: "서울 홍대/합정",
        region: "서울",
        districts: &["마포구"],
        neighborhoods: &["홍대", "합정", "연남동", "망원동"],
    },
    RegionArea {
        key: "서울 이태원/한남",
        region: "서울",
        districts: &["용산구"],
        neighborhoods: &["이태원", "한남동", "경리단길", "삼각지", "신용산"],
    },
    RegionArea {
        key: "서울 성수/건대",
        region: "서울",
        districts: &["성동구", "광진구"],
        neighborhoods: &["성수동", "건대", "뚝섬"],
    },
    RegionArea {
        key: "서울 여의도/영등포",
        region: "서울",
        districts: &["영등포구", "구로구", "금천구"],
        neighborhoods: &["여의도", "영등포", "문래동", "신도림", "구로", "금천", "대림", "가산"],
    },
    RegionArea {
        key: "서울 종로/광화문",
        region: "서울",
        districts: &["종로구", "중구"],
        neighborhoods: &[
            "익선동", "북촌", "삼청동", "안국", "광화문", "시청", "을지로", "명동", "종로3가", "충무로",
        ],
    },
    RegionArea {
        key: "서울 잠실/송파",
        region: "서울",
        districts: &["송파구"],
        neighborhoods: &["잠실", "송리단길", "석촌호수"],
    },
    RegionArea {
        key: "경기 판교/분당",
        region: "경기",
        districts: &["성남시", "수원시"],
        neighborhoods: &["판교", "분당", "수지", "광교", "행리단길", "인계동"],
    },
    RegionArea {
        key: "부산 해운대",
        region: "부산",
        districts: &["해운대구", "수영구"],
        neighborhoods: &["해운대", "광안리", "마린시티", "센텀시티"],
    },
    RegionArea {
        key: "부산 서면",
        region: "부산",
        districts: &["부산진구", "동래구", "영도구"],
        neighborhoods: &["서면", "전포카페거리", "동래", "영도"],
    },
    RegionArea {
        key: "제주도",
        region: "제주",
        districts: &["제주시", "서귀포시"],
        neighborhoods: &["제주", "서귀포", "성산", "한경면"],
    },
];

/// Area for a picker key, if the key is known.
#[must_use]
pub fn region_area(key: &str) -> Option<&'static RegionArea> {
    REGION_AREAS.iter().find(|a| a.key == key)
}

impl RegionArea {
    /// Exact region, district substring, or neighborhood/address substring.
    #[must_use]
    pub fn contains(&self, restaurant: &Restaurant) -> bool {
        let region_match = restaurant.region.as_deref() == Some(self.region);
        let district_match = self
            .districts
            .iter()
            .any(|d| field_contains(restaurant.district.as_deref(), d));
        let neighborhood_match = self.neighborhoods.iter().any(|n| {
            field_contains(restaurant.neighborhood.as_deref(), n)
                || field_contains(restaurant.address.as_deref(), n)
        });
        region_match || district_match || neighborhood_match
    }
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.contains(needle))
}

/// Average-price window and price buckets accepted for a budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBounds {
    pub min: f64,
    pub max: f64,
    pub price_ranges: &'static [PriceRange],
}

impl BudgetBounds {
    /// Price bucket in the allowed set, or average price inside
    /// `[min × 0.5, max × 1.5]`. Either alone is enough.
    #[must_use]
    pub fn admits(&self, restaurant: &Restaurant) -> bool {
        let bucket_match = restaurant
            .price_range
            .is_some_and(|p| self.price_ranges.contains(&p));
        let price_match = restaurant
            .avg_price
            .is_some_and(|p| p >= self.min * 0.5 && p <= self.max * 1.5);
        bucket_match || price_match
    }
}

impl Budget {
    #[must_use]
    pub fn bounds(self) -> BudgetBounds {
        use PriceRange::{Cheap, Luxury, Normal, Premium};
        match self {
            Budget::Low => BudgetBounds {
                min: 0.0,
                max: 15_000.0,
                price_ranges: &[Cheap, Normal],
            },
            Budget::Medium => BudgetBounds {
                min: 10_000.0,
                max: 35_000.0,
                price_ranges: &[Normal, Premium],
            },
            Budget::High => BudgetBounds {
                min: 25_000.0,
                max: 80_000.0,
                price_ranges: &[Normal, Premium],
            },
            Budget::Luxury => BudgetBounds {
                min: 50_000.0,
                max: f64::INFINITY,
                price_ranges: &[Premium, Luxury],
            },
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "5만원 이하 (저렴하게)",
            Budget::Medium => "5-10만원 (적당히)",
            Budget::High => "10-20만원 (여유롭게)",
            Budget::Luxury => "20만원 이상 (럭셔리하게)",
        }
    }
}

impl Mood {
    /// Record mood tags that count toward this mood.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Romantic => &["로맨틱", "데이트", "분위기좋은", "뷰맛집", "야경", "특별한날"],
            Mood::Active => &["핫플", "힙한", "체험", "등산", "서핑"],
            Mood::Chill => &["힐링", "카공", "한적한", "자연", "휴식", "산책"],
            Mood::Foodie => &["맛집", "가성비", "로컬", "노포", "시장"],
            Mood::Culture => &["전통", "한옥", "역사", "유네스코", "갤러리", "문화"],
            Mood::Night => &["야경", "바", "와인", "술집", "야식"],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mood::Romantic => "로맨틱한",
            Mood::Active => "활동적인",
            Mood::Chill => "힐링/여유로운",
            Mood::Foodie => "맛집 중심",
            Mood::Culture => "문화/예술",
            Mood::Night => "야경/밤 분위기",
        }
    }
}

impl TimeOfDay {
    /// Categories that earn the flat time-of-day bonus.
    #[must_use]
    pub fn preferred_categories(self) -> &'static [&'static str] {
        match self {
            TimeOfDay::Morning => &["베이커리/카페", "카페", "브런치"],
            TimeOfDay::Afternoon => &["카페", "베이커리/카페", "디저트", "한식", "양식", "일식"],
            TimeOfDay::Evening => &["한식", "양식", "일식", "고기/구이", "파인다이닝", "아시안"],
            TimeOfDay::Night => &["바/와인", "고기/구이", "한식", "아시안"],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "오전 (10시~12시)",
            TimeOfDay::Afternoon => "오후 (12시~18시)",
            TimeOfDay::Evening => "저녁 (18시~21시)",
            TimeOfDay::Night => "밤 (21시 이후)",
        }
    }

    fn slots(self) -> &'static [&'static str] {
        match self {
            TimeOfDay::Morning => &["10:00", "11:00", "12:00", "13:00", "14:00"],
            TimeOfDay::Afternoon => &["12:00", "14:00", "15:30", "17:00", "18:00"],
            TimeOfDay::Evening => &["18:00", "19:30", "21:00", "22:00", "23:00"],
            TimeOfDay::Night => &["20:00", "21:30", "23:00", "00:00", "01:00"],
        }
    }

    /// Time label for the stop at `index`. Past the table: `"{12 + 2i}:00"`.
    #[must_use]
    pub fn slot(self, index: usize) -> String {
        self.slots()
            .get(index)
            .map_or_else(|| format!("{}:00", 12 + 2 * index), |s| (*s).to_string())
    }
}

/// Itinerary role of a record, by category substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryBucket {
    Meal,
    Cafe,
    Bar,
    Other,
}

const MEAL_CATEGORIES: &[&str] = &[
    "한식", "양식", "일식", "중식", "아시안", "파인다이닝", "고기/구이", "브런치",
];
const CAFE_CATEGORIES: &[&str] = &["카페", "베이커리", "디저트"];
const BAR_CATEGORIES: &[&str] = &["바", "와인"];

impl CategoryBucket {
    /// Meal, then cafe, then bar; the first matching bucket wins.
    #[must_use]
    pub fn of(restaurant: &Restaurant) -> Self {
        if restaurant.category_contains_any(MEAL_CATEGORIES) {
            CategoryBucket::Meal
        } else if restaurant.category_contains_any(CAFE_CATEGORIES) {
            CategoryBucket::Cafe
        } else if restaurant.category_contains_any(BAR_CATEGORIES) {
            CategoryBucket::Bar
        } else {
            CategoryBucket::Other
        }
    }
}
