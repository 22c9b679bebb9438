//! Request and response types for auth endpoints. Request payloads carry
//! passwords, so they are serialize-only and never implement `Debug`.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// User record returned by the API; this is what the session flag caches.
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub plan: String,
    pub daily_quota: i64,
    pub is_active: bool,
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_user_without_created_at() {
        let response: AuthResponse = serde_json::from_value(json!({
            "message": "Login successful",
            "user": {
                "id": 3,
                "email": "analyst@pandora.local",
                "username": "analyst",
                "plan": "free",
                "daily_quota": 100,
                "is_active": true,
                "is_admin": false
            }
        }))
        .expect("Failed to deserialize");

        assert_eq!(response.user.username, "analyst");
        assert_eq!(response.user.created_at, None);

        let cached = serde_json::to_value(&response.user).expect("Failed to serialize");
        assert!(cached.get("created_at").is_none());
    }

    #[test]
    fn register_request_field_names() {
        let request = RegisterRequest {
            email: "a@b.c",
            username: "alice",
            password: "secret",
        };
        assert_eq!(
            serde_json::to_value(&request).expect("Failed to serialize"),
            json!({"email": "a@b.c", "username": "alice", "password": "secret"})
        );
    }
}
