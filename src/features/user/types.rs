use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub plan: String,
    pub daily_quota: i64,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_verified: bool,
    pub created_at: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Partial profile update; only the fields that are set are sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quota {
    pub daily_limit: i64,
    pub used_today: i64,
    pub remaining: i64,
    pub reset_at: String,
}

/// `Debug` output redacts the key.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiKey {
    pub api_key: SecretString,
    pub created_at: String,
}
