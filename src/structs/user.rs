use serde::{Deserialize, Serialize};

/// Payload returned by the `/v1/userinfo` endpoint.
///
/// Every field is optional on the wire; a missing key deserializes to
/// `None` rather than failing. The model mirrors the wire shape and
/// performs no validation of its own.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfoResponse {
    pub meta: Option<Meta>,
    pub session: Option<Session>,
    pub user: Option<User>,
}

/// Response metadata (status code echo + message).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub code: Option<i32>,
    pub message: Option<String>,
}

/// Session information for the presented token.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Seconds until the session expires.
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: Option<i32>,
}

/// User profile returned as part of a successful userinfo call.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub external_id: Option<String>,
    pub user_name: Option<String>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub profile_url: Option<String>,
    pub title: Option<String>,
    pub user_type: Option<String>,
    pub preferred_language: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub active: Option<bool>,
    pub names: Option<Names>,
    pub photos: Vec<Photo>,
    /// Phone number records. Their schema is not fixed by this client.
    pub phone_numbers: Vec<serde_json::Value>,
    /// Address records. Their schema is not fixed by this client.
    pub addresses: Vec<serde_json::Value>,
    pub emails: Vec<Email>,
    pub verifications: Vec<Verification>,
    pub provider: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub environment_id: Option<String>,
}

/// Structured name components of a user.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Names {
    pub id: Option<String>,
    pub formatted: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub honorific_prefix: Option<String>,
    pub honorific_suffix: Option<String>,
}

/// A user photo entry.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub id: Option<String>,
    /// Photo URL.
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub photo_type: Option<String>,
}

/// A user email entry.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    pub id: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub email_type: Option<String>,
}

/// Email verification record.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Verification {
    pub id: Option<String>,
    pub email: Option<String>,
    pub verified: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Error body shape returned by the API on server failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
