use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Price bucket of a restaurant, serialized with the dataset's Korean labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "저렴")]
    Cheap,
    #[serde(rename = "보통")]
    Normal,
    #[serde(rename = "고급")]
    Premium,
    #[serde(rename = "럭셔리")]
    Luxury,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Cheap,
        PriceRange::Normal,
        PriceRange::Premium,
        PriceRange::Luxury,
    ];

    /// Dataset label (`저렴`, `보통`, `고급`, `럭셔리`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::Cheap => "저렴",
            PriceRange::Normal => "보통",
            PriceRange::Premium => "고급",
            PriceRange::Luxury => "럭셔리",
        }
    }

    /// Looks up a bucket by its dataset label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PriceRange {
    type Err = CoreError;

    /// Accepts either the dataset label or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(p) = Self::from_label(trimmed) {
            return Ok(p);
        }
        match trimmed.to_lowercase().as_str() {
            "cheap" => Ok(PriceRange::Cheap),
            "normal" => Ok(PriceRange::Normal),
            "premium" => Ok(PriceRange::Premium),
            "luxury" => Ok(PriceRange::Luxury),
            _ => Err(CoreError::InvalidPriceRange(s.to_string())),
        }
    }
}

/// One restaurant from the bundled dataset.
///
/// Only `id` and `name` are guaranteed. Everything else may be absent and
/// consumers treat absence as an empty / zero contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_price_range",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mood: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Restaurant {
    /// Minimal record with every optional field absent.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            region: None,
            district: None,
            neighborhood: None,
            address: None,
            price_range: None,
            avg_price: None,
            rating: None,
            mood: Vec::new(),
            signature: None,
            description: None,
            tip: None,
            image_url: None,
        }
    }

    /// `true` when the category string contains `needle`. Absent category never matches.
    #[must_use]
    pub fn category_contains(&self, needle: &str) -> bool {
        self.category.as_deref().is_some_and(|c| c.contains(needle))
    }

    /// `true` when the category contains any of `needles`.
    #[must_use]
    pub fn category_contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.category_contains(n))
    }
}

/// Unknown price labels degrade to `None` instead of rejecting the whole record.
fn lenient_price_range<'de, D>(deserializer: D) -> Result<Option<PriceRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PriceRange::from_label))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
