//! Free-text query parsing into structured search conditions.
//!
//! Matching is plain substring containment against the raw query rather than
//! token equality: Korean queries rarely separate words the way Latin text does.

use matjip_core::PriceRange;
use serde::Serialize;

use crate::vocab::{CATEGORY_SYNONYMS, DISTRICT_TERMS, MOOD_TERMS, PRICE_SYNONYMS, REGION_TERMS};

/// Buckets of recognised vocabulary terms, each in vocabulary order and
/// without duplicates, plus leftover free keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionSet {
    pub regions: Vec<&'static str>,
    pub districts: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    pub moods: Vec<&'static str>,
    pub price_ranges: Vec<PriceRange>,
    pub keywords: Vec<String>,
}

impl ConditionSet {
    /// `true` when nothing at all was recognised, keywords included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.districts.is_empty()
            && self.categories.is_empty()
            && self.moods.is_empty()
            && self.price_ranges.is_empty()
            && self.keywords.is_empty()
    }
}

/// Parse `query` into a [`ConditionSet`].
///
/// Tokens (split on whitespace and commas) of two or more characters become
/// keywords unless they contain a matched region, district or mood term.
/// Category and price matches do not suppress keywords.
#[must_use]
pub fn parse_query(query: &str) -> ConditionSet {
    let lower = query.to_lowercase();

    let regions = direct_matches(query, REGION_TERMS);
    let districts = direct_matches(query, DISTRICT_TERMS);
    let moods = direct_matches(query, MOOD_TERMS);

    let categories: Vec<&'static str> = CATEGORY_SYNONYMS
        .iter()
        .filter(|(_, synonyms)| {
            synonyms
                .iter()
                .any(|s| lower.contains(s.to_lowercase().as_str()))
        })
        .map(|&(category, _)| category)
        .collect();

    let price_ranges: Vec<PriceRange> = PRICE_SYNONYMS
        .iter()
        .filter(|(_, synonyms)| synonyms.iter().any(|s| lower.contains(s)))
        .map(|&(price, _)| price)
        .collect();

    let keywords = query
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| {
            !regions
                .iter()
                .chain(&districts)
                .chain(&moods)
                .any(|term| t.contains(term))
        })
        .map(str::to_string)
        .collect();

    ConditionSet {
        regions,
        districts,
        categories,
        moods,
        price_ranges,
        keywords,
    }
}

fn direct_matches(query: &str, terms: &[&'static str]) -> Vec<&'static str> {
    terms
        .iter()
        .copied()
        .filter(|term| query.contains(term))
        .collect()
}
