use std::env;
use std::fmt;
use std::net::{AddrParseError, IpAddr, SocketAddr};

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Deployment stage, read from `APP_ENV`. Anything unrecognized counts as
/// development so a bare checkout runs without setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_env() -> Self {
        let raw = env::var("APP_ENV").unwrap_or_default();
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the binary needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub calculator: CalculatorConfig,
    pub hubspot: HubSpotConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port_raw = env_or("APP_PORT", "3000");
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::Port { value: port_raw })?;

        Ok(Self {
            environment: AppEnvironment::from_env(),
            server: ServerConfig {
                host: env_or("APP_HOST", "127.0.0.1"),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: env_or("APP_LOG_LEVEL", "info"),
            },
            calculator: CalculatorConfig::from_env(),
            hubspot: HubSpotConfig::from_env(),
        })
    }
}

/// Listen address for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` is accepted as an alias for loopback; anything else must
    /// be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host.parse().map_err(|source| ConfigError::Host {
                value: self.host.clone(),
                source,
            })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Host-facing presentation settings for the calculator, plus the page
/// context reported alongside submissions. `class_name` is a styling hook
/// echoed back to the host and has no behavioral effect.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub title: String,
    pub subtitle: String,
    pub class_name: String,
    pub page_uri: String,
    pub page_name: String,
}

impl CalculatorConfig {
    pub fn from_env() -> Self {
        Self {
            title: env_or("QUIZ_TITLE", "ROI Calculator"),
            subtitle: env_or(
                "QUIZ_SUBTITLE",
                "What's the value of a purpose-built platform? Estimate hours and dollars saved and time to launch.",
            ),
            class_name: env_or("QUIZ_CLASS_NAME", ""),
            page_uri: env_or("QUIZ_PAGE_URI", "https://www.example.com/roi-calculator"),
            page_name: env_or("QUIZ_PAGE_NAME", "ROI Calculator"),
        }
    }
}

/// Coordinates of the CRM form that receives completed questionnaires.
#[derive(Debug, Clone)]
pub struct HubSpotConfig {
    pub portal_id: String,
    pub form_id: String,
    pub base_url: String,
}

impl HubSpotConfig {
    fn from_env() -> Self {
        Self {
            portal_id: env_or("HUBSPOT_PORTAL_ID", "21449360"),
            form_id: env_or("HUBSPOT_FORM_ID", "c7e82b43-5e1a-4f7d-9c0e-6b2a84d55f3a"),
            base_url: env_or(
                "HUBSPOT_BASE_URL",
                "https://api.hsforms.com/submissions/v3/integration/submit",
            ),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Port { value: String },
    Host { value: String, source: AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Port { value } => {
                write!(f, "APP_PORT value '{value}' is not a TCP port number")
            }
            ConfigError::Host { value, .. } => {
                write!(f, "APP_HOST value '{value}' is not an IP address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Port { .. } => None,
            ConfigError::Host { source, .. } => Some(source),
        }
    }
}
