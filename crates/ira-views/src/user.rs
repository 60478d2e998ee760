use ira_client::{HttpTransport, Transport, UserService};
use ira_core::entities::User;

use crate::resource::{Resource, ResourceState};

/// The signed-in user.
///
/// An unauthorized profile response is not an error: it settles with no user,
/// meaning "not signed in". Any other failure is stored as the error.
#[derive(Debug)]
pub struct UserHook<T = HttpTransport> {
    service: UserService<T>,
    user: Resource<User>,
}

impl<T: Transport> UserHook<T> {
    pub const fn new(service: UserService<T>) -> Self {
        Self {
            service,
            user: Resource::new("Failed to fetch user"),
        }
    }

    pub async fn load(&self) {
        self.refetch().await;
    }

    pub async fn refetch(&self) {
        let round = self.user.begin();
        let outcome = match self.service.profile().await {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err.into()),
        };
        self.user.settle(round, outcome);
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<User> {
        self.user.state()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.data().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ira_client::Services;
    use ira_client::testing::RecordingTransport;
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn signed_in_user() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/auth/me",
            json!({
                "id": "u-1",
                "display_name": "ana",
                "role": "admin",
                "is_active": true,
                "created_at": "2025-01-01T00:00:00Z"
            }),
        );
        let hook = UserHook::new(Services::new(transport.client()).users);

        hook.load().await;
        assert!(hook.is_authenticated());
        assert_eq!(hook.state().data.unwrap().display_name, "ana");
    }

    #[tokio::test]
    async fn unauthorized_clears_user_without_error() {
        let transport = RecordingTransport::new();
        transport.respond_json(
            Method::GET,
            "/auth/me",
            json!({
                "id": "u-1",
                "display_name": "ana",
                "role": "admin",
                "is_active": true,
                "created_at": "2025-01-01T00:00:00Z"
            }),
        );
        transport.respond(Method::GET, "/auth/me", 401, json!({"detail": "expired"}));
        let hook = UserHook::new(Services::new(transport.client()).users);

        hook.load().await;
        assert!(hook.is_authenticated());
        hook.refetch().await;

        let state = hook.state();
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
        assert!(!state.loading);
        assert!(!hook.is_authenticated());
    }

    #[tokio::test]
    async fn other_failures_surface() {
        let transport = RecordingTransport::new();
        transport.fail(Method::GET, "/auth/me", "connection refused");
        let hook = UserHook::new(Services::new(transport.client()).users);

        hook.load().await;
        assert_eq!(hook.state().error.as_deref(), Some("connection refused"));
    }
}
