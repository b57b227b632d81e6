mod browse;
mod course;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use matjip_core::{PriceRange, RestaurantDb};
use tracing_subscriber::EnvFilter;

use crate::course::CourseArgs;

#[derive(Debug, Parser)]
#[command(name = "matjip")]
#[command(about = "Restaurant search, nearby lookup and date-course planning")]
struct Cli {
    /// Dataset file to load instead of `MATJIP_DATASET_PATH`
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Free-text search, e.g. `matjip search 강남 데이트 한식`
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Restaurants within a radius of a point, nearest first
    Nearby {
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
        /// Named place (e.g. 강남, 해운대) instead of coordinates
        #[arg(long, conflicts_with_all = ["lat", "lng"])]
        place: Option<String>,
        /// Radius in meters; 0 means unlimited
        #[arg(long, default_value = "3000")]
        radius: f64,
        /// Category substring filter
        #[arg(long)]
        category: Option<String>,
    },
    /// Closest named place to a coordinate
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Pick one restaurant at random
    Pick {
        #[arg(long, allow_hyphen_values = true, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lng: Option<f64>,
        #[arg(long, conflicts_with_all = ["lat", "lng"])]
        place: Option<String>,
        /// Radius in meters; 0 or omitted means unlimited
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Browse the swipe deck with optional filters
    Explore {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// 저렴, 보통, 고급, 럭셔리 (or cheap, normal, premium, luxury)
        #[arg(long)]
        price: Option<PriceRange>,
        /// Already saved or passed ids to leave out
        #[arg(long = "exclude", value_delimiter = ',')]
        exclude: Vec<u64>,
        /// Shuffle the deck
        #[arg(long)]
        shuffle: bool,
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,
    },
    /// Plan a date course (JSON output)
    Course(CourseArgs),
    /// Dataset counts by region, category and price range
    Stats,
    /// The location picker list
    Locations,
}

fn load_db(
    cli_path: Option<&PathBuf>,
    config: &matjip_core::AppConfig,
) -> anyhow::Result<RestaurantDb> {
    let path = cli_path.unwrap_or(&config.dataset_path);
    matjip_core::load_restaurants(path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = matjip_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("matjip: run with --help to list commands");
        return Ok(());
    };

    let dataset = cli.dataset.as_ref();
    match command {
        Commands::Search { query } => {
            let db = load_db(dataset, &config)?;
            browse::run_search(&db, &query.join(" "));
        }
        Commands::Nearby {
            lat,
            lng,
            place,
            radius,
            category,
        } => {
            let origin = browse::resolve_origin(lat, lng, place.as_deref())?
                .ok_or_else(|| anyhow::anyhow!("nearby needs --lat/--lng or --place"))?;
            let db = load_db(dataset, &config)?;
            browse::run_nearby(&db, origin, radius, category.as_deref());
        }
        Commands::Nearest { lat, lng } => browse::run_nearest(lat, lng),
        Commands::Pick {
            lat,
            lng,
            place,
            radius,
            category,
            seed,
        } => {
            let origin = browse::resolve_origin(lat, lng, place.as_deref())?;
            let db = load_db(dataset, &config)?;
            browse::run_pick(&db, origin, radius, category.as_deref(), seed);
        }
        Commands::Explore {
            region,
            district,
            category,
            price,
            exclude,
            shuffle,
            seed,
        } => {
            let filter = matjip_engine::ExploreFilter {
                region,
                district,
                category,
                price_range: price,
            };
            let db = load_db(dataset, &config)?;
            browse::run_explore(&db, &filter, &exclude, shuffle, seed);
        }
        Commands::Course(args) => {
            let db = load_db(dataset, &config)?;
            course::run_course(&config, &db, &args).await?;
        }
        Commands::Stats => browse::run_stats(&load_db(dataset, &config)?),
        Commands::Locations => browse::run_locations(),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
