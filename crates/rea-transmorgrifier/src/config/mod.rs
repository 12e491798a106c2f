mod culture;

pub use culture::{MoneyCulture, SymbolPosition};

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Caller supplied settings for one parse. Immutable for the duration of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransmorgrifierOptions {
    /// Used when a for-sale listing hides its price text and gives no text of its own.
    pub default_sale_price_text_if_missing: Option<String>,
    /// Used when a sold listing hides its sold price text.
    pub default_sold_price_text_if_missing: Option<String>,
    pub culture_for_money_parsing: MoneyCulture,
}

/// Top-level configuration for the host application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub parsing: TransmorgrifierOptions,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let culture_id = env::var("REA_MONEY_CULTURE").unwrap_or_else(|_| "en-AU".to_string());
        let culture_for_money_parsing = MoneyCulture::from_identifier(&culture_id)
            .ok_or(ConfigError::InvalidMoneyCulture { value: culture_id })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            parsing: TransmorgrifierOptions {
                default_sale_price_text_if_missing: non_blank_var("REA_DEFAULT_SALE_PRICE_TEXT"),
                default_sold_price_text_if_missing: non_blank_var("REA_DEFAULT_SOLD_PRICE_TEXT"),
                culture_for_money_parsing,
            },
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMoneyCulture { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMoneyCulture { value } => {
                write!(f, "REA_MONEY_CULTURE '{value}' is not a supported culture")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidMoneyCulture { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
