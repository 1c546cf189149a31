//! Submission Orchestrator
//!
//! Builds outbound requests from form state, calls the remote API and
//! interprets success/error responses. Local validation failures never reach
//! the network; server-provided error text is surfaced verbatim; transport
//! failures collapse into a single generic connectivity error.
//!
//! The callers own the in-flight flags; every function here is a plain async
//! task returning a tagged result.

use std::path::Path;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::app::config::Config;
use crate::app::forms::{AssetRef, AuthForm, AuthMode, PasswordField, ProfileForm};
use crate::app::session::Session;
use crate::app::types::{
    ErrorResponse, LoginResponse, ProfileSaveResponse, SignupResponse, UserResponse,
};

/// Fallback message when a failure response carries no readable error body.
const GENERIC_SERVER_ERROR: &str = "Something went wrong.";

/// Error taxonomy for a submission.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local validation failure; field-scoped when it belongs to a specific
    /// password field. Blocks submission, never reaches the network.
    #[error("{message}")]
    Validation {
        field: Option<PasswordField>,
        message: String,
    },
    /// The server rejected the request; `message` is its error text verbatim.
    #[error("{message}")]
    Server { message: String },
    /// Transport failure (DNS, timeout, connection reset).
    #[error("A network error occurred. Try again.")]
    Network {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { field: None, message: message.into() }
    }

    pub fn field(field: PasswordField, message: impl Into<String>) -> Self {
        Self::Validation { field: Some(field), message: message.into() }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server { message: message.into() }
    }
}

/// Classify a reqwest error: a body that failed to decode is a server
/// problem, everything else is connectivity.
fn transport(source: reqwest::Error) -> ApiError {
    if source.is_decode() {
        ApiError::server("Unexpected response from server")
    } else {
        ApiError::Network { source }
    }
}

/// Read the `{error}` body of a failure response, falling back to a generic
/// message when the body is unreadable.
async fn failure(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => ApiError::server(body.error),
        Err(e) => {
            debug!("unreadable error body for status {status}: {e}");
            ApiError::server(GENERIC_SERVER_ERROR)
        }
    }
}

/// Result of a successful auth submission.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Account created; the active tab should transition to login.
    SignedUp { message: String },
    /// Credentials accepted; the session store should take this identity.
    LoggedIn {
        session: Session,
        message: Option<String>,
    },
}

/// Submit the auth form for its active tab.
///
/// Re-checks field validity first and returns a [`ApiError::Validation`]
/// without any network access when blocked. The caller owns the `submitting`
/// flag and must reset it on every completion path.
pub async fn submit_auth(
    client: &Client,
    config: &Config,
    form: &AuthForm,
) -> Result<AuthOutcome, ApiError> {
    if let Some(message) = form.blocking_error() {
        return Err(ApiError::validation(message));
    }

    match form.mode {
        AuthMode::Signup => {
            let response = client
                .post(config.api_url("/signup"))
                .json(&form.signup_request())
                .send()
                .await
                .map_err(transport)?;
            if !response.status().is_success() {
                return Err(failure(response).await);
            }
            let body: SignupResponse = response.json().await.map_err(transport)?;
            Ok(AuthOutcome::SignedUp { message: body.message })
        }
        AuthMode::Login => {
            let response = client
                .post(config.api_url("/login"))
                .json(&form.login_request())
                .send()
                .await
                .map_err(transport)?;
            if !response.status().is_success() {
                return Err(failure(response).await);
            }
            let body: LoginResponse = response.json().await.map_err(transport)?;
            let message = body.message.clone();
            Ok(AuthOutcome::LoggedIn { session: Session::from(body), message })
        }
    }
}

/// Fetch a user record by id.
pub async fn fetch_user(
    client: &Client,
    config: &Config,
    id: i64,
) -> Result<UserResponse, ApiError> {
    let response = client
        .get(config.api_url(&format!("/api/users/{id}")))
        .send()
        .await
        .map_err(transport)?;
    if !response.status().is_success() {
        return Err(failure(response).await);
    }
    response.json().await.map_err(transport)
}

/// Submit the profile form as a multipart request.
///
/// The password-change sub-flow is re-validated first; any violation blocks
/// the network call. Password fields go out only when a new password was
/// entered, and image slots only when they hold a locally chosen file. The
/// server's wrong-old-password rejection comes back attached to the
/// old-password field.
pub async fn submit_profile(
    client: &Client,
    config: &Config,
    form: &ProfileForm,
    user_id: i64,
) -> Result<ProfileSaveResponse, ApiError> {
    if let Some((field, message)) = form.password_change_violation() {
        return Err(ApiError::field(field, message));
    }

    let mut multipart = reqwest::multipart::Form::new()
        .text("firstName", form.first_name.clone())
        .text("lastName", form.last_name.clone())
        .text("email", form.email.clone())
        .text("phone", form.phone.clone())
        .text("userId", user_id.to_string());

    if !form.new_password.is_empty() {
        multipart = multipart
            .text("password", form.new_password.clone())
            .text("oldPassword", form.old_password.clone());
    }
    if let Some(path) = form.profile_pic.as_ref().and_then(AssetRef::local_path) {
        multipart = multipart.part("profile_pic", file_part(path).await?);
    }
    if let Some(path) = form.cover_photo.as_ref().and_then(AssetRef::local_path) {
        multipart = multipart.part("cover_photo", file_part(path).await?);
    }

    let response = client
        .post(config.api_url("/api/profiles"))
        .multipart(multipart)
        .send()
        .await
        .map_err(transport)?;

    if !response.status().is_success() {
        return Err(match failure(response).await {
            ApiError::Server { message } if message == "Old password is incorrect" => {
                ApiError::field(PasswordField::Old, message)
            }
            other => other,
        });
    }
    response.json().await.map_err(transport)
}

async fn file_part(path: &Path) -> Result<reqwest::multipart::Part, ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ApiError::validation(format!("Could not read {}: {e}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(reqwest::multipart::Part::bytes(bytes).file_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_is_message() {
        let error = ApiError::validation("Email is required");
        assert_eq!(error.to_string(), "Email is required");
    }

    #[test]
    fn test_field_error_carries_field() {
        let error = ApiError::field(PasswordField::Old, "Old password is incorrect");
        match error {
            ApiError::Validation { field, message } => {
                assert_eq!(field, Some(PasswordField::Old));
                assert_eq!(message, "Old password is incorrect");
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn test_server_error_display_verbatim() {
        let error = ApiError::server("Email already registered");
        assert_eq!(error.to_string(), "Email already registered");
    }
}
