use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Resend send endpoint, overridden by `RESEND_API_URL`.
pub const DEFAULT_RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
pub const DEFAULT_SENDER: &str = "Leads <noreply@chesterfield.group>";
pub const DEFAULT_SITE_URL: &str = "https://chesterfield.group";

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub leads: LeadsConfig,
    pub site: SiteConfig,
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
        let format = match non_empty_var("APP_LOG_FORMAT") {
            Some(value) => LogFormat::from_str(&value)?,
            None if environment == AppEnvironment::Production => LogFormat::Json,
            None => LogFormat::Compact,
        };

        let leads = LeadsConfig {
            resend_api_key: non_empty_var("RESEND_API_KEY"),
            default_recipient: non_empty_var("LEADS_TO_EMAIL"),
            sender: non_empty_var("LEADS_FROM_EMAIL").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            resend_endpoint: non_empty_var("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_ENDPOINT.to_string()),
        };

        let site = SiteConfig::parse(
            non_empty_var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
        )?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, format },
            leads,
            site,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Output encoding for log lines; production defaults to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(value.to_string())),
        }
    }
}

/// Email provider settings for lead notifications.
///
/// A missing `resend_api_key` puts intake into fallback mode: leads are
/// logged instead of delivered.
#[derive(Clone)]
pub struct LeadsConfig {
    pub resend_api_key: Option<String>,
    pub default_recipient: Option<String>,
    pub sender: String,
    pub resend_endpoint: String,
}

impl LeadsConfig {
    pub fn provider_configured(&self) -> bool {
        self.resend_api_key.is_some()
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for LeadsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadsConfig")
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("default_recipient", &self.default_recipient)
            .field("sender", &self.sender)
            .field("resend_endpoint", &self.resend_endpoint)
            .finish()
    }
}

/// Public site settings used when generating absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Like [`SiteConfig::new`], but requires an `http://` or `https://` scheme.
    pub fn parse(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidSiteUrl(base_url));
        }
        Ok(Self::new(base_url))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSiteUrl(String),
    InvalidLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSiteUrl(value) => {
                write!(f, "SITE_URL must start with http:// or https:// (got '{value}')")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidSiteUrl(_)
            | ConfigError::InvalidLogFormat(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
