// Configuration module
// Layered configuration: coded defaults, optional formserve.toml, FORMSERVE_* environment overrides

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(rename = "static")]
    pub static_files: StaticConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Listener address
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static file serving
#[derive(Debug, Deserialize, Clone)]
pub struct StaticConfig {
    /// Public directory served verbatim on GET
    pub dir: String,
    /// File served for `/` and directory paths
    pub index: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    /// Load configuration from the default `formserve.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("formserve")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables such as
    /// `FORMSERVE__SERVER__PORT` override both the file and the defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("FORMSERVE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("static.dir", "public")?
            .set_default("static.index", "index.html")?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}
