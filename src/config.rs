use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;

use crate::models::domain::{DEFAULT_PREFIXES, DEFAULT_SUFFIXES, DEFAULT_TLDS};
use crate::models::Vocabulary;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub environment: String,
    pub rate_limit: RateLimitSettings,
    pub generator: GeneratorSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    pub window_secs: u64,
    pub max_requests: u32,
    #[serde(default)]
    pub trust_proxy: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub default_count: u32,
    pub max_count: u32,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub tlds: Vec<String>,
}

impl GeneratorSettings {
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary {
            prefixes: self.prefixes.clone(),
            suffixes: self.suffixes.clone(),
            tlds: self.tlds.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                workers: Some(4),
            },
            environment: "development".to_string(),
            rate_limit: RateLimitSettings {
                window_secs: 900,
                max_requests: 100,
                trust_proxy: false,
            },
            generator: GeneratorSettings {
                default_count: 10,
                max_count: 50,
                prefixes: DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect(),
                suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
                tlds: DEFAULT_TLDS.iter().map(|s| s.to_string()).collect(),
            },
            logging: LoggingSettings {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration files (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with BIZNAME__)
    /// 4. Plain `PORT` and `NODE_ENV`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BIZNAME__RATE_LIMIT__MAX_REQUESTS -> rate_limit.max_requests
            .add_source(prefixed_env())
            .build()?;

        apply_platform_env(settings, std::env::var("PORT").ok(), std::env::var("NODE_ENV").ok())?
            .try_deserialize()
    }

    /// Generator settings must be usable before the server starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gen = &self.generator;
        if gen.max_count == 0 || gen.default_count == 0 || gen.default_count > gen.max_count {
            return Err(ConfigError::Message(format!(
                "generator counts invalid: default_count={} max_count={}",
                gen.default_count, gen.max_count
            )));
        }
        if self.rate_limit.window_secs == 0 || self.rate_limit.max_requests == 0 {
            return Err(ConfigError::Message(
                "rate_limit window_secs and max_requests must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Word lists are comma separated, e.g. BIZNAME__GENERATOR__TLDS=.com,.io
fn prefixed_env() -> Environment {
    Environment::with_prefix("BIZNAME")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("generator.prefixes")
        .with_list_parse_key("generator.suffixes")
        .with_list_parse_key("generator.tlds")
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let d = Settings::default();
    builder
        .set_default("server.host", d.server.host)?
        .set_default("server.port", i64::from(d.server.port))?
        .set_default("server.workers", d.server.workers.unwrap_or(4) as i64)?
        .set_default("environment", d.environment)?
        .set_default("rate_limit.window_secs", d.rate_limit.window_secs as i64)?
        .set_default("rate_limit.max_requests", i64::from(d.rate_limit.max_requests))?
        .set_default("rate_limit.trust_proxy", d.rate_limit.trust_proxy)?
        .set_default("generator.default_count", i64::from(d.generator.default_count))?
        .set_default("generator.max_count", i64::from(d.generator.max_count))?
        .set_default("generator.prefixes", d.generator.prefixes)?
        .set_default("generator.suffixes", d.generator.suffixes)?
        .set_default("generator.tlds", d.generator.tlds)?
        .set_default("logging.level", d.logging.level)?
        .set_default("logging.format", d.logging.format)
}

/// `PORT` and `NODE_ENV` are what hosting platforms set, so they win
fn apply_platform_env(
    settings: Config,
    port: Option<String>,
    node_env: Option<String>,
) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT {:?}: {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Some(env) = node_env {
        builder = builder.set_override("environment", env)?;
    }

    builder.build()
}
