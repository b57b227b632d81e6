//! Shared domain model and configuration for matjip.
//!
//! Holds the restaurant record shape, the dataset loader, and the
//! environment-driven application config used by the CLI.

mod app_config;
mod config;
mod dataset;
mod error;
mod restaurant;

pub use app_config::{AppConfig, Environment, LlmSettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{
    load_restaurants, parse_restaurants_json, parse_restaurants_yaml, RestaurantDb,
    RestaurantsFile,
};
pub use error::{ConfigError, CoreError};
pub use restaurant::{PriceRange, Restaurant};
