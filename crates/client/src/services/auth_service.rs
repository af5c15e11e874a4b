use async_trait::async_trait;
use examdesk_common::{User, UserProfile};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{ClientError, Result};

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Remote authentication endpoint used by the session store.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User>;

    async fn profile(&self, token: &str) -> Result<UserProfile>;
}

pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for AuthService {
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(ClientError::InvalidInput(
                "Email and password must not be empty".to_string(),
            ));
        }

        let user: User = self.api.post_json("login", credentials).await.inspect_err(|e| {
            warn!(email = %credentials.email, error = %e, "Login request failed.");
        })?;

        if user.token.is_empty() {
            return Err(ClientError::InvalidResponse(
                "login response carries no token".to_string(),
            ));
        }

        info!(user_id = user.id, roles = ?user.role_names(), "Logged in.");
        Ok(user)
    }

    async fn profile(&self, token: &str) -> Result<UserProfile> {
        self.api
            .clone()
            .with_token(token)
            .get_json("users/me", &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_mock;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::time::Duration;

    async fn login_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["email"] == "a@b.com" && body["password"] == "pw" {
            (
                StatusCode::OK,
                Json(json!({ "id": 1, "fullName": "X", "token": "t", "roles": [{ "name": "Admin" }] })),
            )
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad credentials" })))
        }
    }

    async fn service() -> AuthService {
        let base = spawn_mock(Router::new().route("/login", post(login_handler))).await;
        AuthService::new(ApiClient::new(&base, Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = service().await.login(&Credentials::new("a@b.com", "pw")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.token, "t");
        assert!(user.is_in_role("Admin"));
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let err = service()
            .await
            .login(&Credentials::new("a@b.com", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "bad credentials"));
    }

    #[tokio::test]
    async fn test_empty_credentials_skip_network() {
        let auth = AuthService::new(ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap());
        let err = auth.login(&Credentials::new(" ", "pw")).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.com", "secret"));
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("secret"));
    }
}
