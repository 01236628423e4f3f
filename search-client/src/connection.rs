//! Transport construction.
//!
//! Turns a [`Config`] into the pooled HTTP transport all services share.
//! The transport is read-only after construction and safe for concurrent
//! use; services hold cheap clones of the client built on top of it.

use elasticsearch::auth::Credentials;
use elasticsearch::cert::{Certificate, CertificateValidation};
use elasticsearch::http::transport::{SingleNodeConnectionPool, Transport, TransportBuilder};
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::errors::ClientError;

/// Build the transport for the configured endpoint.
///
/// TLS certificate validation is enabled exactly when the config carries
/// trust-anchor material. A malformed service URL or unusable PEM surfaces
/// as a connection error.
pub fn create_transport(config: &Config) -> Result<Transport, ClientError> {
    let url = Url::parse(&config.service).map_err(|e| {
        ClientError::connection(format!("invalid service url {}: {}", config.service, e))
    })?;

    let pool = SingleNodeConnectionPool::new(url);
    let mut builder = TransportBuilder::new(pool).disable_proxy().auth(
        Credentials::Basic(config.username.clone(), config.password.clone()),
    );

    if let Some(pem) = &config.ca_cert {
        let cert = Certificate::from_pem(pem.as_bytes())
            .map_err(|e| ClientError::connection(format!("invalid trust anchor: {}", e)))?;
        builder = builder.cert_validation(CertificateValidation::Full(cert));
        info!(service = %config.service, "transport configured with TLS trust anchor");
    } else {
        info!(service = %config.service, "transport configured without TLS");
    }

    builder
        .build()
        .map_err(|e| ClientError::connection(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_url_is_a_connection_error() {
        let config = Config::new("hhttttt://sjdsj com", "", "");

        let result = create_transport(&config);

        assert!(matches!(result, Err(ClientError::Connection(_))));
    }

    #[test]
    fn test_plain_endpoint_builds() {
        let config = Config::new("http://localhost:9200", "elastic", "secret");

        assert!(create_transport(&config).is_ok());
    }

    #[test]
    fn test_garbage_trust_anchor_is_rejected() {
        let config =
            Config::new("https://localhost:9200", "elastic", "secret").with_ca_cert("not a pem");

        let result = create_transport(&config);

        assert!(matches!(result, Err(ClientError::Connection(_))));
    }
}
