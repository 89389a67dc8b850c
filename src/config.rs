//! Server configuration.
//!
//! Loaded once at startup from an optional TOML file (`GEOCHAT_CONFIG` path
//! or `geochat.toml` in the working directory), falling back to environment
//! variables, falling back to defaults.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_CATALOG_URL: &str = "https://eonet.gsfc.nasa.gov/api/v2.1";
const DEFAULT_MODEL_SERVICE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog_base_url: String,
    pub nasa_api_key: Option<String>,
    pub model_service_url: String,
    pub cache_ttl_secs: u64,
    pub cache_capacity: usize,
    pub rate_limit_per_minute: Option<u64>,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        match env::var("GEOCHAT_ENVIRONMENT") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    catalog: CatalogSection,
    #[serde(default)]
    cache: CacheSection,
    #[serde(default)]
    rate_limit: RateLimitSection,
    #[serde(default)]
    environment: Option<Environment>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogSection {
    #[serde(default = "default_catalog_url")]
    base_url: String,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default = "default_model_service_url")]
    model_service_url: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            api_key: None,
            model_service_url: default_model_service_url(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CacheSection {
    #[serde(default = "default_cache_ttl_secs")]
    ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    capacity: usize,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            capacity: default_cache_capacity(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RateLimitSection {
    #[serde(default)]
    requests_per_minute: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_model_service_url() -> String {
    DEFAULT_MODEL_SERVICE_URL.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_cache_capacity() -> usize {
    100
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(file_config) = load_from_file()? {
            return Ok(Self {
                host: file_config.server.host,
                port: file_config.server.port,
                catalog_base_url: file_config.catalog.base_url,
                nasa_api_key: file_config
                    .catalog
                    .api_key
                    .or_else(|| env::var("NASA_API_KEY").ok()),
                model_service_url: file_config.catalog.model_service_url,
                cache_ttl_secs: file_config.cache.ttl_secs,
                cache_capacity: file_config.cache.capacity,
                rate_limit_per_minute: file_config.rate_limit.requests_per_minute,
                environment: file_config.environment.unwrap_or_else(Environment::from_env),
            });
        }

        Ok(Self::from_env())
    }

    fn from_env() -> Self {
        let host = env::var("GEOCHAT_HOST").unwrap_or_else(|_| default_host());
        let port = env::var("GEOCHAT_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or_else(default_port);
        let catalog_base_url =
            env::var("EONET_BASE_URL").unwrap_or_else(|_| default_catalog_url());
        let nasa_api_key = env::var("NASA_API_KEY").ok();
        let model_service_url =
            env::var("MODEL_SERVICE_URL").unwrap_or_else(|_| default_model_service_url());
        let cache_ttl_secs = env::var("GEOCHAT_CACHE_TTL_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(default_cache_ttl_secs);
        let cache_capacity = env::var("GEOCHAT_CACHE_CAPACITY")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or_else(default_cache_capacity);
        let rate_limit_per_minute = env::var("GEOCHAT_RATE_LIMIT_RPM")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        Self {
            host,
            port,
            catalog_base_url,
            nasa_api_key,
            model_service_url,
            cache_ttl_secs,
            cache_capacity,
            rate_limit_per_minute,
            environment: Environment::from_env(),
        }
    }
}

fn load_from_file() -> anyhow::Result<Option<FileConfig>> {
    let config_path = env::var("GEOCHAT_CONFIG").ok();
    let path = if let Some(path) = config_path {
        Some(path)
    } else if Path::new("geochat.toml").exists() {
        Some("geochat.toml".to_string())
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;
    Ok(Some(parsed))
}
