use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const ENV_KEY: &str = "HARMONY_ENV";
const HOST_KEY: &str = "HARMONY_HOST";
const PORT_KEY: &str = "HARMONY_PORT";
const LOG_LEVEL_KEY: &str = "HARMONY_LOG_LEVEL";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage, used only for start-up logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Unrecognized names fall back to development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the `HARMONY_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, applying defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(ENV_KEY)
            .map(|raw| AppEnvironment::parse(&raw))
            .unwrap_or_default();

        let host = lookup(HOST_KEY).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup(LOG_LEVEL_KEY).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    value: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter used when `RUST_LOG` is absent.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "{PORT_KEY} must be a port number, got '{value}'")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "{HOST_KEY} must be an IP address or localhost, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults load");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HARMONY_ENV", " Production "),
            ("HARMONY_HOST", "0.0.0.0"),
            ("HARMONY_PORT", "9100"),
            ("HARMONY_LOG_LEVEL", "facial_harmony=debug"),
        ]))
        .expect("config loads");

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.telemetry.log_level, "facial_harmony=debug");
        assert_eq!(
            config.server.socket_addr().expect("address parses"),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9100)
        );
    }

    #[test]
    fn ci_counts_as_test_environment() {
        assert_eq!(AppEnvironment::parse("CI"), AppEnvironment::Test);
        assert_eq!(AppEnvironment::parse("staging"), AppEnvironment::Development);
    }

    #[test]
    fn port_outside_u16_is_rejected() {
        match AppConfig::from_lookup(lookup_from(&[("HARMONY_PORT", "70000")])) {
            Err(ConfigError::InvalidPort { value }) => assert_eq!(value, "70000"),
            other => panic!("expected invalid port, got {other:?}"),
        }
    }

    #[test]
    fn localhost_resolves_to_loopback() {
        let server = ServerConfig {
            host: "LocalHost".to_string(),
            port: 8000,
        };
        let addr = server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000));
    }

    #[test]
    fn unparsable_host_is_rejected() {
        let server = ServerConfig {
            host: "not-a-host".to_string(),
            port: 8000,
        };
        let error = server.socket_addr().expect_err("host is invalid");
        assert!(matches!(error, ConfigError::InvalidHost { .. }));
        assert!(error.to_string().contains("not-a-host"));
    }
}
