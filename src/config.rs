//! Process configuration.
//!
//! Uses Figment to merge built-in defaults, an optional `config.toml` and a
//! fixed set of environment variables (highest precedence). Loaded once at
//! startup and never mutated afterwards.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variables read by [`Config::load`].
pub const ENV_KEYS: [&str; 4] = [
    "HTTP_SERVER_ADDRESS",
    "ELASTICSEARCH_SERVER_ADDRESS",
    "REFRESH_ON_WRITE",
    "SEED_SAMPLE_DATA",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub http_server_address: String,
    /// Base URL of the search engine. A single node; no credentials.
    pub elasticsearch_server_address: String,
    /// Block writes until they are visible to searches.
    pub refresh_on_write: bool,
    /// Upsert the classic sample books at startup.
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_server_address: "0.0.0.0:8000".to_string(),
            elasticsearch_server_address: "http://localhost:9200".to_string(),
            refresh_on_write: false,
            seed_sample_data: false,
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory (if present) and the environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_figment(Self::figment("config.toml"))
    }

    /// The provider stack behind [`Config::load`], with an explicit file path.
    pub fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::raw().only(&ENV_KEYS))
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
    }
}
