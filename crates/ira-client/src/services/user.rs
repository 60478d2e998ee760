use std::sync::Arc;

use ira_core::entities::{AuthToken, Credentials, ProfileUpdate, User};

use crate::transport::{HttpTransport, Transport};
use crate::{ApiClient, ApiError};

/// `/auth/*` and `/users/me`.
#[derive(Debug)]
pub struct UserService<T = HttpTransport> {
    client: Arc<ApiClient<T>>,
}

impl<T> Clone for UserService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> UserService<T> {
    pub const fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// `GET /auth/me`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client; a missing or expired token
    /// surfaces as an error for which [`ApiError::is_unauthorized`] holds.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.client.get("/auth/me").await
    }

    /// `PUT /users/me`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn update_profile(&self, changes: &ProfileUpdate) -> Result<User, ApiError> {
        self.client.put("/users/me", changes).await
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn register(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.client.post("/auth/register", credentials).await
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        self.client.post("/auth/login", credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn login_returns_token_and_user() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::POST,
            "/auth/login",
            json!({
                "access_token": "jwt",
                "user": {
                    "id": "u-1",
                    "display_name": "ana",
                    "role": "reader",
                    "is_active": true,
                    "created_at": "2025-01-01T00:00:00Z"
                }
            }),
        );
        let service = UserService::new(Arc::new(transport.client()));

        let token = service
            .login(&Credentials {
                display_name: "ana".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(token.access_token, "jwt");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.user.display_name, "ana");
    }

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u-2",
            "display_name": "bo",
            "role": "reader",
            "is_active": true,
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    fn sent_body(service: &UserService<RecordingTransport>) -> serde_json::Value {
        let sent = service.client.transport().requests();
        serde_json::from_slice(sent[0].body.as_ref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn register_posts_credentials() {
        let transport = RecordingTransport::new();
        transport.respond(Method::POST, "/auth/register", 201, user_json());
        let service = UserService::new(Arc::new(transport.client()));

        let user = service
            .register(&Credentials {
                display_name: "bo".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, "u-2");

        let sent = service.client.transport().requests();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(service.client.transport().paths(), vec!["/auth/register"]);
        assert_eq!(sent_body(&service), json!({"display_name": "bo", "password": "pw"}));
    }

    #[tokio::test]
    async fn update_profile_puts_partial_body() {
        let transport = RecordingTransport::new();
        transport.respond_json(Method::PUT, "/users/me", user_json());
        let service = UserService::new(Arc::new(transport.client()));

        service
            .update_profile(&ProfileUpdate {
                display_name: Some("bo".into()),
                password: None,
            })
            .await
            .unwrap();

        let sent = service.client.transport().requests();
        assert_eq!(sent[0].method, Method::PUT);
        assert_eq!(service.client.transport().paths(), vec!["/users/me"]);
        assert_eq!(sent_body(&service), json!({"display_name": "bo"}));
    }

    #[tokio::test]
    async fn profile_unauthorized() {
        let transport = RecordingTransport::new();
        transport.respond(Method::GET, "/auth/me", 401, json!({"detail": "Not authenticated"}));
        let service = UserService::new(Arc::new(transport.client()));

        assert!(service.profile().await.unwrap_err().is_unauthorized());
    }
}
