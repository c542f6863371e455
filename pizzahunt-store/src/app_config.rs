use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use pizzahunt_catalog::CatalogSettings;
use pizzahunt_shared::Masked;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub spoonacular: SpoonacularConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpoonacularConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<Masked<String>>,
    pub timeout_seconds: u64,
}

impl SpoonacularConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub query: String,
    pub number: u32,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::defaults()?
            // Shared settings, then the per-environment file
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(File::with_name("config/local").required(false))
            // Eg.. `PIZZAHUNT__SPOONACULAR__API_KEY=...` sets `spoonacular.api_key`
            .add_source(Environment::with_prefix("PIZZAHUNT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Built-in values every other source layers on top of.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.port", 8080)?
            .set_default("spoonacular.base_url", "https://api.spoonacular.com")?
            .set_default("spoonacular.timeout_seconds", 10)?
            .set_default("catalog.query", "pizza")?
            .set_default("catalog.number", 24)
    }

    /// Catalog engine settings; a blank API key counts as no key.
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            api_key: self
                .spoonacular
                .api_key
                .clone()
                .filter(|key| !key.expose().trim().is_empty()),
            query: self.catalog.query.clone(),
            number: self.catalog.number,
        }
    }
}
