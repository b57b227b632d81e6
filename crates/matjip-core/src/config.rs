use crate::app_config::{AppConfig, Environment, LlmSettings};
use crate::ConfigError;

const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim().parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim().parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim().parse::<f32>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("MATJIP_ENV", "development"))?;
    let log_level = or_default("MATJIP_LOG_LEVEL", "info");
    let dataset_path = PathBuf::from(or_default(
        "MATJIP_DATASET_PATH",
        "./data/restaurants.json",
    ));

    let api_key = lookup("MATJIP_LLM_API_KEY")
        .or_else(|_| lookup("GROQ_API_KEY"))
        .ok()
        .filter(|k| !k.trim().is_empty());
    let base_url = or_default("MATJIP_LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
    let model = or_default("MATJIP_LLM_MODEL", DEFAULT_LLM_MODEL);

    let timeout_secs = parse_u64("MATJIP_LLM_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("MATJIP_LLM_MAX_RETRIES", "2")?;
    let backoff_base_ms = parse_u64("MATJIP_LLM_BACKOFF_BASE_MS", "1000")?;
    let temperature = parse_f32("MATJIP_LLM_TEMPERATURE", "0.7")?;
    let max_tokens = parse_u32("MATJIP_LLM_MAX_TOKENS", "1500")?;

    if !(0.0..=2.0).contains(&temperature) {
        return Err(invalid(
            "MATJIP_LLM_TEMPERATURE",
            format!("{temperature} is outside 0.0..=2.0"),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        dataset_path,
        llm: LlmSettings {
            api_key,
            base_url,
            model,
            timeout_secs,
            max_retries,
            backoff_base_ms,
            temperature,
            max_tokens,
        },
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MATJIP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
