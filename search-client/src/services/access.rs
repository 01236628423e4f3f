//! Security administration service.

use elasticsearch::security::{SecurityPutRoleParts, SecurityPutUserParts};
use elasticsearch::Elasticsearch;
use tracing::{error, info};

use crate::errors::ClientError;
use search_client_shared::{RoleSpec, UserSpec};

/// Upserts named roles and users at the engine's security endpoints.
#[derive(Clone)]
pub struct AccessService {
    client: Elasticsearch,
}

impl AccessService {
    pub(crate) fn new(client: Elasticsearch) -> Self {
        Self { client }
    }

    /// Upsert the role at `PUT /_security/role/{name}`.
    ///
    /// `Ok(true)` only when the engine answers with a success status; any
    /// failure, transport or otherwise, is an error.
    pub async fn create_role(&self, name: &str, role: &RoleSpec) -> Result<bool, ClientError> {
        let response = self
            .client
            .security()
            .put_role(SecurityPutRoleParts::Name(name))
            .body(role)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status_code();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            error!(role = %name, status = %status, "role upsert rejected");
            return Err(ClientError::request_failed(status, reason));
        }

        info!(role = %name, "role upserted");
        Ok(true)
    }

    /// Upsert the user at `PUT /_security/user/{name}`.
    ///
    /// Same success contract as [`AccessService::create_role`].
    pub async fn create_user(&self, name: &str, user: &UserSpec) -> Result<bool, ClientError> {
        let response = self
            .client
            .security()
            .put_user(SecurityPutUserParts::Username(name))
            .body(user)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status_code();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            error!(user = %name, status = %status, "user upsert rejected");
            return Err(ClientError::request_failed(status, reason));
        }

        info!(user = %name, "user upserted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SearchClient;
    use crate::config::Config;
    use search_client_shared::IndexPrivileges;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> SearchClient {
        SearchClient::new(&Config::new(server.uri(), "elastic", "secret")).unwrap()
    }

    fn test_role() -> RoleSpec {
        RoleSpec {
            indices: vec![IndexPrivileges {
                names: vec!["dictionary".to_string()],
                privileges: vec!["read".to_string()],
            }],
            ..Default::default()
        }
    }

    fn test_user() -> UserSpec {
        UserSpec {
            password: "password".to_string(),
            roles: vec!["admin".to_string()],
            full_name: Some("Alexandros Megalos".to_string()),
            email: Some("lex@megalos.com".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_role_success() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/_security/role/readers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "role": { "created": true } })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);

        let created = client
            .access()
            .create_role("readers", &test_role())
            .await
            .unwrap();
        assert!(created);
    }

    #[tokio::test]
    async fn test_create_role_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/_security/role/readers"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let err = client
            .access()
            .create_role("readers", &test_role())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_create_role_unreachable_host() {
        let client =
            SearchClient::new(&Config::new("http://localhost:9", "elastic", "secret")).unwrap();

        let err = client
            .access()
            .create_role("readers", &test_role())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/_security/user/lex"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "created": true })))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let created = client
            .access()
            .create_user("lex", &test_user())
            .await
            .unwrap();
        assert!(created);
    }

    #[tokio::test]
    async fn test_create_user_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/_security/user/lex"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = test_client(&server);

        let err = client
            .access()
            .create_user("lex", &test_user())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
    }
}
