//! Client helpers for current-user endpoints. The API key returned here is a
//! credential; callers must not log it.

use crate::{
    client::{ApiClient, AppError},
    features::{
        auth::types::MessageResponse,
        user::types::{ApiKey, ChangePasswordRequest, Profile, Quota, UpdateProfileRequest},
    },
};
use secrecy::{ExposeSecret, SecretString};

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_profile(api: &ApiClient) -> Result<Profile, AppError> {
    api.get_json("/user/profile").await
}

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn update_profile(
    api: &ApiClient,
    request: &UpdateProfileRequest,
) -> Result<Profile, AppError> {
    api.put_json("/user/profile", request).await
}

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn change_password(
    api: &ApiClient,
    current_password: &SecretString,
    new_password: &SecretString,
) -> Result<MessageResponse, AppError> {
    let request = ChangePasswordRequest {
        current_password: current_password.expose_secret(),
        new_password: new_password.expose_secret(),
    };
    api.post_json("/user/change-password", &request).await
}

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_quota(api: &ApiClient) -> Result<Quota, AppError> {
    api.get_json("/user/quota").await
}

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_api_key(api: &ApiClient) -> Result<ApiKey, AppError> {
    api.get_json("/user/api-key").await
}

/// Issues a new key; the previous one stops working server-side.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn regenerate_api_key(api: &ApiClient) -> Result<ApiKey, AppError> {
    api.post_empty("/user/api-key/regenerate").await
}

/// Deactivates the account.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn delete_account(api: &ApiClient) -> Result<MessageResponse, AppError> {
    api.delete_json("/user/account").await
}

#[cfg(test)]
mod tests {
    use super::{change_password, get_quota, regenerate_api_key, update_profile};
    use crate::client::{ApiClient, ClientConfig};
    use crate::features::user::types::UpdateProfileRequest;
    use secrecy::{ExposeSecret, SecretString};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::new(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn update_profile_sends_only_set_fields() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/user/profile"))
            .and(body_json(json!({"username": "renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2,
                "email": "analyst@pandora.local",
                "username": "renamed",
                "plan": "free",
                "daily_quota": 100,
                "is_active": true,
                "is_admin": false,
                "is_verified": false,
                "created_at": "2024-04-01T08:00:00+00:00",
                "last_login": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdateProfileRequest {
            username: Some("renamed".to_string()),
            email: None,
        };
        let profile = update_profile(&client_for(&server), &request).await.unwrap();
        assert_eq!(profile.username, "renamed");
        assert_eq!(profile.last_login, None);
    }

    #[tokio::test]
    async fn change_password_posts_both_passwords() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/user/change-password"))
            .and(body_json(json!({"current_password": "old", "new_password": "new"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Password changed successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = change_password(
            &client_for(&server),
            &SecretString::from("old".to_string()),
            &SecretString::from("new".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(reply.message, "Password changed successfully");
    }

    #[tokio::test]
    async fn quota_and_key_rotation() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/user/quota"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "daily_limit": 100,
                "used_today": 12,
                "remaining": 88,
                "reset_at": "2024-05-02T00:00:00+00:00"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/user/api-key/regenerate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "api_key": "pk_new",
                "created_at": "2024-05-01T12:00:00+00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        assert_eq!(get_quota(&api).await.unwrap().remaining, 88);
        let key = regenerate_api_key(&api).await.unwrap();
        assert_eq!(key.api_key.expose_secret(), "pk_new");
        assert!(!format!("{key:?}").contains("pk_new"));
    }
}
