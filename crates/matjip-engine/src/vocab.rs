//! Fixed vocabularies recognised by the chat query parser.

use matjip_core::PriceRange;

/// Province / metropolitan names, matched case-sensitively as substrings.
pub const REGION_TERMS: &[&str] = &[
    "서울", "부산", "경기", "인천", "대구", "광주", "대전", "울산", "세종", "강원", "충북", "충남",
    "전북", "전남", "경북", "경남", "제주",
];

/// Frequently searched districts and neighborhoods.
pub const DISTRICT_TERMS: &[&str] = &[
    "강남", "홍대", "이태원", "성수", "을지로", "연남", "망원", "합정", "압구정", "청담", "신사",
    "삼청동", "북촌", "익선동", "해운대", "서면", "광안리", "전주", "경주", "강릉", "여수",
    "제주시", "서귀포",
];

/// Canonical category bucket followed by the phrases that select it.
pub const CATEGORY_SYNONYMS: &[(&str, &[&str])] = &[
    ("한식", &["한식", "한정식", "국밥", "찌개", "비빔밥", "냉면"]),
    ("양식", &["양식", "이탈리안", "파스타", "피자", "스테이크", "프렌치"]),
    ("일식", &["일식", "스시", "초밥", "라멘", "오마카세", "이자카야", "일본"]),
    ("중식", &["중식", "중국집", "짜장", "짬뽕", "딤섬", "훠궈"]),
    ("고기", &["고기", "삼겹살", "갈비", "소고기", "돼지고기", "bbq", "구이"]),
    ("카페", &["카페", "커피", "디저트", "케이크", "베이커리", "빵"]),
    ("아시안", &["아시안", "태국", "베트남", "쌀국수", "팟타이", "인도"]),
    ("파인다이닝", &["파인다이닝", "고급", "코스", "미슐랭"]),
    ("브런치", &["브런치", "아침", "모닝"]),
    ("술집", &["술집", "바", "이자카야", "와인바", "펍"]),
];

/// Mood tags, matched like regions (no synonyms).
pub const MOOD_TERMS: &[&str] = &[
    "로맨틱", "캐주얼", "힙한", "고급", "가성비", "분위기좋은", "핫플", "노포", "데이트", "혼밥",
    "단체", "비즈니스", "가족", "친구", "특별한날", "조용한",
];

pub const PRICE_SYNONYMS: &[(PriceRange, &[&str])] = &[
    (PriceRange::Cheap, &["저렴", "싼", "가성비", "착한"]),
    (PriceRange::Normal, &["보통", "적당"]),
    (PriceRange::Premium, &["고급", "비싼", "럭셔리"]),
    (PriceRange::Luxury, &["럭셔리", "프리미엄", "최고급"]),
];
