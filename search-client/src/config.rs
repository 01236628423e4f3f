//! Client configuration.

use std::env;

use tracing::debug;

/// Environment variable holding the engine base URL.
pub const ENV_SERVICE: &str = "SEARCH_SERVICE";
/// Environment variable holding the username for basic auth.
pub const ENV_USER: &str = "SEARCH_USER";
/// Environment variable holding the password for basic auth.
pub const ENV_PASSWORD: &str = "SEARCH_PASSWORD";
/// Environment variable holding PEM trust-anchor material. When set, the
/// transport validates the engine's certificate against it.
pub const ENV_CA_CERT: &str = "SEARCH_CA_CERT";

const DEFAULT_SERVICE: &str = "http://localhost:9200";
const DEFAULT_TLS_SERVICE: &str = "https://localhost:9200";
const DEFAULT_USERNAME: &str = "elastic";

/// Connection parameters for the search engine.
///
/// Immutable after construction; the facade turns it into a pooled
/// transport once and the config is not consulted again.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the engine, e.g. `http://localhost:9200`.
    pub service: String,
    pub username: String,
    pub password: String,
    /// PEM trust-anchor material. TLS certificate validation is enabled
    /// precisely when this is present.
    pub ca_cert: Option<String>,
}

impl Config {
    /// Create a config for a plain (non-TLS) endpoint.
    pub fn new(
        service: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            username: username.into(),
            password: password.into(),
            ca_cert: None,
        }
    }

    /// Attach PEM trust-anchor material, enabling TLS validation.
    pub fn with_ca_cert(mut self, pem: impl Into<String>) -> Self {
        self.ca_cert = Some(pem.into());
        self
    }

    /// Read the config from the environment, falling back to local
    /// development defaults. Retrieval of the certificate *file* is the
    /// deployment's job; `SEARCH_CA_CERT` carries the PEM text itself.
    pub fn from_env() -> Self {
        let ca_cert = env::var(ENV_CA_CERT).ok().filter(|pem| !pem.is_empty());

        let service = env::var(ENV_SERVICE).unwrap_or_else(|_| {
            let default = if ca_cert.is_some() {
                DEFAULT_TLS_SERVICE
            } else {
                DEFAULT_SERVICE
            };
            debug!(default = %default, "{} not set, using default", ENV_SERVICE);
            default.to_string()
        });

        let username = env::var(ENV_USER).unwrap_or_else(|_| {
            debug!(default = %DEFAULT_USERNAME, "{} not set, using default", ENV_USER);
            DEFAULT_USERNAME.to_string()
        });

        let password = env::var(ENV_PASSWORD).unwrap_or_default();

        Self {
            service,
            username,
            password,
            ca_cert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_construction() {
        let config = Config::new("https://search.example.com:9200", "elastic", "secret")
            .with_ca_cert("-----BEGIN CERTIFICATE-----");

        assert_eq!(config.service, "https://search.example.com:9200");
        assert_eq!(config.username, "elastic");
        assert!(config.ca_cert.is_some());
    }

    #[test]
    fn test_plain_config_has_no_trust_anchor() {
        let config = Config::new("http://localhost:9200", "elastic", "");
        assert!(config.ca_cert.is_none());
    }
}
