use matjip_core::Restaurant;

use super::params::CourseParams;

const MISSING: &str = "-";

/// Render candidates as `[id] name` blocks separated by blank lines.
///
/// Every candidate is emitted with its id so generator picks can be matched
/// back to records. Absent fields render as `-`.
#[must_use]
pub fn format_candidates(candidates: &[&Restaurant]) -> String {
    candidates
        .iter()
        .map(|r| format_candidate(r))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_candidate(r: &Restaurant) -> String {
    fn opt(v: Option<&str>) -> &str {
        v.unwrap_or(MISSING)
    }
    let price = r.price_range.map_or(MISSING, |p| p.label());
    let avg = r.avg_price.map_or_else(|| MISSING.to_string(), format_won);
    let mood = if r.mood.is_empty() {
        MISSING.to_string()
    } else {
        r.mood.join(", ")
    };
    let rating = r.rating.map_or_else(|| MISSING.to_string(), |v| v.to_string());

    format!(
        "[{id}] {name}\n\
         - 카테고리: {category}\n\
         - 위치: {neighborhood} ({address})\n\
         - 가격대: {price} (평균 {avg}원)\n\
         - 분위기: {mood}\n\
         - 시그니처: {signature}\n\
         - 평점: {rating}\n\
         - 설명: {description}\n\
         - 팁: {tip}",
        id = r.id,
        name = r.name,
        category = opt(r.category.as_deref()),
        neighborhood = opt(r.neighborhood.as_deref()),
        address = opt(r.address.as_deref()),
        signature = opt(r.signature.as_deref()),
        description = opt(r.description.as_deref()),
        tip = opt(r.tip.as_deref()),
    )
}

/// Whole won with thousands separators, e.g. `35,000`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn format_won(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Full planner prompt: conditions, candidate list, rules and the JSON contract.
#[must_use]
pub fn build_course_prompt(params: &CourseParams, candidates: &[&Restaurant]) -> String {
    let budget = params.budget.map_or("제한 없음", |b| b.label());

    let mut lines = vec![
        "당신은 데이트 코스 전문 플래너입니다.".to_string(),
        "아래 맛집/카페 리스트에서 선택하여 데이트 코스를 구성해주세요.".to_string(),
        String::new(),
        "## 조건".to_string(),
        format!("- 지역: {}", params.region),
        format!("- 분위기: {}", params.mood.label()),
        format!("- 예산: {budget}"),
        format!("- 시간대: {}", params.time.label()),
    ];
    if let Some(extra) = params.extra.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        lines.push(format!("- 추가 요청: {extra}"));
    }
    lines.push(String::new());
    lines.push("## 선택 가능한 맛집 리스트".to_string());
    lines.push(format_candidates(candidates));
    lines.push(String::new());
    lines.push(RULES_AND_CONTRACT.to_string());
    lines.join("\n")
}

const RULES_AND_CONTRACT: &str = r#"## 중요 지침
1. 반드시 위 리스트에서만 선택하세요
2. 각 장소의 [ID] 번호를 정확히 포함해주세요
3. 시간 순서대로 3-5개 장소를 구성하세요
4. 식사 → 카페 → 저녁/바 등 자연스러운 흐름으로 구성하세요
5. 총 예산이 조건에 맞게 조절하세요

## 응답 형식
반드시 아래 JSON 형식으로만 응답하세요. 다른 텍스트 없이 JSON만 출력하세요.

{
  "title": "코스 제목 (예: 성수동 감성 데이트)",
  "summary": "코스 한줄 설명 (왜 이 코스를 추천하는지)",
  "spots": [
    {
      "id": 숫자 (위 리스트의 ID),
      "time": "시작 시간 (예: 14:00)",
      "customDescription": "이 장소를 선택한 이유와 데이트 팁 (2-3문장)"
    }
  ],
  "totalBudget": "예상 총 비용 (예: 약 8만원)",
  "courseHighlight": "이 코스의 특별한 포인트 (예: 인생샷 스팟이 3곳이나!)"
}"#;
