//! Client wrappers for the auth endpoints. Login and register cache the
//! returned user in the session context; logout always clears it.

use crate::{
    client::{ApiClient, AppError},
    features::auth::{
        state::SessionContext,
        types::{AuthResponse, LoginRequest, MessageResponse, RefreshResponse, RegisterRequest, User},
    },
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

/// Creates an account; the server also opens the cookie session.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn register(
    api: &ApiClient,
    session: &SessionContext,
    email: &str,
    username: &str,
    password: &SecretString,
) -> Result<AuthResponse, AppError> {
    let request = RegisterRequest {
        email,
        username,
        password: password.expose_secret(),
    };
    let response: AuthResponse = api.post_json("/auth/register", &request).await?;
    session.set_user(&response.user)?;
    Ok(response)
}

/// Logs in and caches the returned user as the session flag.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn login(
    api: &ApiClient,
    session: &SessionContext,
    email: &str,
    password: &SecretString,
) -> Result<AuthResponse, AppError> {
    let request = LoginRequest {
        email,
        password: password.expose_secret(),
    };
    let response: AuthResponse = api.post_json("/auth/login", &request).await?;
    session.set_user(&response.user)?;
    Ok(response)
}

/// Fetches the user behind the current cookie session.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged; 401 means no session.
pub async fn me(api: &ApiClient) -> Result<User, AppError> {
    api.get_json("/auth/me").await
}

/// Requests a fresh access token using the refresh cookie.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn refresh(api: &ApiClient) -> Result<RefreshResponse, AppError> {
    api.post_empty("/auth/refresh").await
}

/// Best-effort logout: the server call may fail, the local flag is cleared anyway.
///
/// Returns the server's reply when it answered successfully.
pub async fn logout(api: &ApiClient, session: &SessionContext) -> Option<MessageResponse> {
    let response = match api.post_empty::<MessageResponse>("/auth/logout").await {
        Ok(response) => Some(response),
        Err(err) => {
            warn!("logout request failed: {err}");
            None
        }
    };

    if let Err(err) = session.clear() {
        warn!("failed to clear session flag: {err}");
    }
    debug!("session flag cleared");

    response
}

#[cfg(test)]
mod tests {
    use super::{login, logout, me, register};
    use crate::client::{ApiClient, AppError, ClientConfig};
    use crate::features::auth::state::SessionContext;
    use secrecy::SecretString;
    use serde_json::{json, Value};
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn user_json() -> Value {
        json!({
            "id": 9,
            "email": "analyst@pandora.local",
            "username": "analyst",
            "plan": "pro",
            "daily_quota": 1000,
            "is_active": true,
            "is_admin": false
        })
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::new(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn login_caches_user() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .and(body_json(json!({"email": "analyst@pandora.local", "password": "hunter2"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Login successful", "user": user_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let session = SessionContext::in_memory();
        let password = SecretString::from("hunter2".to_string());

        let response = login(&api, &session, "analyst@pandora.local", &password)
            .await
            .unwrap();
        assert_eq!(response.user.id, 9);
        assert_eq!(session.user().map(|u| u.username), Some("analyst".to_string()));
    }

    #[tokio::test]
    async fn failed_login_leaves_flag_unset() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
            )
            .mount(&server)
            .await;

        let api = client_for(&server);
        let session = SessionContext::in_memory();
        let password = SecretString::from("wrong".to_string());

        let err = login(&api, &session, "analyst@pandora.local", &password)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn register_posts_all_fields() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .and(body_json(json!({
                "email": "analyst@pandora.local",
                "username": "analyst",
                "password": "hunter2"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"message": "Registration successful", "user": user_json()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let session = SessionContext::in_memory();
        let password = SecretString::from("hunter2".to_string());

        let response = register(&api, &session, "analyst@pandora.local", "analyst", &password)
            .await
            .unwrap();
        assert_eq!(response.message, "Registration successful");
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn me_propagates_unauthorized() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = me(&client_for(&server)).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Http {
                status: 401,
                message: "Unauthorized".to_string()
            }
        );
    }

    #[tokio::test]
    async fn logout_clears_flag_even_when_server_fails() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/logout"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let session = SessionContext::in_memory();
        session
            .set_user(&serde_json::from_value(user_json()).unwrap())
            .unwrap();

        assert!(logout(&api, &session).await.is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_flag_when_server_unreachable() {
        let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
        let api = ApiClient::new(&config).unwrap();
        let session = SessionContext::in_memory();
        session
            .set_user(&serde_json::from_value(user_json()).unwrap())
            .unwrap();

        assert!(logout(&api, &session).await.is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_returns_server_message() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/logout"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Logged out successfully"})),
            )
            .mount(&server)
            .await;

        let api = client_for(&server);
        let session = SessionContext::in_memory();
        let reply = logout(&api, &session).await.unwrap();
        assert_eq!(reply.message, "Logged out successfully");
    }
}
