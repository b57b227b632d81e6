use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseParamError;

/// Requested atmosphere for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Romantic,
    Active,
    Chill,
    Foodie,
    Culture,
    Night,
}

/// Spending level. The course path treats an absent budget as [`Budget::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Inputs to course planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseParams {
    /// Picker key such as `서울 강남/역삼`. Unknown or empty keys disable the region gate.
    pub region: String,
    pub mood: Mood,
    #[serde(default)]
    pub budget: Option<Budget>,
    pub time: TimeOfDay,
    /// Free-text extra request passed through to the generator.
    #[serde(default)]
    pub extra: Option<String>,
}

macro_rules! keyword_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Lowercase identifier used on the command line and in JSON.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseParamError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| ParseParamError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: concat!($($key, " "),+),
                    })
            }
        }
    };
}

keyword_enum!(Mood, "mood", {
    Romantic => "romantic",
    Active => "active",
    Chill => "chill",
    Foodie => "foodie",
    Culture => "culture",
    Night => "night",
});

keyword_enum!(Budget, "budget", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Luxury => "luxury",
});

keyword_enum!(TimeOfDay, "time", {
    Morning => "morning",
    Afternoon => "afternoon",
    Evening => "evening",
    Night => "night",
});
