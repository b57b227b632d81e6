use thiserror::Error;

/// Errors raised while loading configuration or the restaurant dataset.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset JSON: {0}")]
    DatasetJson(#[source] serde_json::Error),

    #[error("failed to parse dataset YAML: {0}")]
    DatasetYaml(#[source] serde_yaml::Error),

    #[error("dataset validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid price range: {0}")]
    InvalidPriceRange(String),
}
