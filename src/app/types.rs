//! Wire types for the remote API plus the top-level view enum.
//!
//! The API mixes camelCase (`fullName`) and snake_case (`profile_pic`) field
//! names, so renames are spelled out explicitly instead of relying on a
//! container-wide `rename_all`.

use serde::{Deserialize, Serialize};

/// Current app view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/signup screen
    Auth,
    /// Business directory (home)
    Directory,
    /// My Account profile editor
    Account,
}

/// Body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Success body of `POST /signup`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Success body of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/users/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
}

/// Success body of `POST /api/profiles`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSaveResponse {
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shared by all endpoints (`4xx {error}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One business directory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Envelope of `GET /api/businesses`.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Business>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope of `GET /api/businesses/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Business>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_field_names() {
        let request = SignupRequest {
            full_name: "JOHN SMITH".to_string(),
            email: "j@x.com".to_string(),
            password: "Abcd123!".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "JOHN SMITH");
        assert_eq!(json["email"], "j@x.com");
    }

    #[test]
    fn test_login_response_optional_fields() {
        let body = r#"{"id":1,"fullName":"A B","email":"a@b.co"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.id, 1);
        assert!(response.profile_pic.is_none());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_user_response_mixed_naming() {
        let body = r#"{"id":7,"fullName":"JANE","email":"jane@x.io","profile_pic":"p.png"}"#;
        let response: UserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.full_name, "JANE");
        assert_eq!(response.profile_pic.as_deref(), Some("p.png"));
        assert!(response.cover_photo.is_none());
    }

    #[test]
    fn test_business_list_defaults() {
        let body = r#"{"success":true}"#;
        let response: BusinessListResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert!(response.data.is_empty());
        assert_eq!(response.total, 0);
    }
}
