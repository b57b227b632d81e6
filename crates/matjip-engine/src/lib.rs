//! Recommendation and matching engine for matjip.
//!
//! Everything here is a pure function over an immutable restaurant slice,
//! except [`generate_course`], which awaits a [`CourseGenerator`].

pub mod course;
mod error;
mod explore;
pub mod geo;
mod pick;
mod query;
mod scoring;
mod search;
mod stats;
pub mod vocab;

pub use course::{
    build_fallback_course, filter_for_course, find_restaurant_by_name, generate_course,
    plan_offline, reconcile, select_diverse_subset, Budget, CourseGenerator, CourseParams,
    CoursePlan, CourseSpot, Mood, PlanSource, TimeOfDay,
};
pub use error::{CourseParseError, ParseParamError};
pub use explore::{explore, shuffle_deck, ExploreFilter};
pub use geo::{
    distance_meters, format_distance, selectable_locations, Coordinate, GeoIndex, LocationOption,
    Nearby,
};
pub use pick::{pick_random, random_candidates, RandomCandidate, RandomFilter};
pub use query::{parse_query, ConditionSet};
pub use scoring::{score_for_course_params, score_for_query, CourseCandidate, SearchHit};
pub use search::{describe_conditions, search, SearchOutcome, MAX_RESULTS};
pub use stats::{dataset_stats, DatasetStats};
