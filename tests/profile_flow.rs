//! Profile save integration tests against a mock API server.

mod common;

use assert_matches::assert_matches;
use bizdir::app::api::{self, ApiError};
use bizdir::app::forms::{MessageKind, PasswordField, ProfileForm};
use bizdir::app::state::AppState;
use bizdir::app::types::UserResponse;
use common::{config_for, sample_session, session_store_in};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loaded_form() -> ProfileForm {
    let mut form = ProfileForm::new();
    form.load_user(&UserResponse {
        id: 1,
        full_name: "JOHN SMITH".to_string(),
        email: "j@x.com".to_string(),
        phone: Some("555-0100".to_string()),
        profile_pic: Some("p.png".to_string()),
        cover_photo: None,
    });
    form
}

#[tokio::test]
async fn missing_old_password_blocks_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = reqwest::Client::new();
    let mut form = loaded_form();
    form.set_new_password("Abcd1234!");
    form.set_confirm_password("Abcd1234!");

    let result = api::submit_profile(&client, &config, &form, 1).await;
    assert_matches!(
        result,
        Err(ApiError::Validation { field: Some(PasswordField::Old), ref message })
            if message == "Old password is required when changing password"
    );
    server.verify().await;
}

#[tokio::test]
async fn password_fields_are_sent_only_when_changing() {
    let server = MockServer::start().await;
    // The mock only matches when the multipart body carries the password
    // fields; an unmatched request would 404 and fail the test.
    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .and(body_string_contains("name=\"oldPassword\""))
        .and(body_string_contains("name=\"password\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Profile updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = reqwest::Client::new();
    let mut form = loaded_form();
    form.set_old_password("Old1234!x");
    form.set_new_password("Abcd1234!");
    form.set_confirm_password("Abcd1234!");

    let result = api::submit_profile(&client, &config, &form, 1).await;
    assert!(result.is_ok());
    server.verify().await;
}

#[tokio::test]
async fn save_without_password_change_omits_password_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .and(body_string_contains("name=\"oldPassword\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Profile updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = reqwest::Client::new();
    let mut form = loaded_form();
    form.set_phone("555-0101");

    let result = api::submit_profile(&client, &config, &form, 1).await;
    assert!(result.is_ok());
    server.verify().await;
}

#[tokio::test]
async fn successful_save_merges_assets_and_clears_passwords() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "profile_pic": "p-2.png",
            "message": "Profile updated"
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = reqwest::Client::new();
    let mut form = loaded_form();
    form.set_old_password("Old1234!x");
    form.set_new_password("Abcd1234!");
    form.set_confirm_password("Abcd1234!");

    let result = api::submit_profile(&client, &config, &form, 1).await;

    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::with_parts(config, session_store_in(&dir));
    state.session.log_in(sample_session());
    state.profile_form = form;
    state.profile_form.begin_submit();
    state.apply_profile_result(result);

    assert!(!state.profile_form.submitting);
    assert!(!state.profile_form.dirty);
    assert!(state.profile_form.old_password.is_empty());
    assert!(state.profile_form.new_password.is_empty());
    assert!(state.profile_form.confirm_password.is_empty());

    let message = state.profile_form.message.clone().unwrap();
    assert_eq!(message.kind, MessageKind::Info);
    assert_eq!(message.text, "Profile updated");

    // The session picked up the new filename; the untouched cover remained.
    let session = state.session.current().unwrap();
    assert_eq!(session.profile_pic.as_deref(), Some("p-2.png"));
    assert_eq!(session.cover_photo.as_deref(), Some("cover.png"));
}

#[tokio::test]
async fn wrong_old_password_lands_on_the_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "Old password is incorrect"})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = reqwest::Client::new();
    let mut form = loaded_form();
    form.set_old_password("WrongOld1!");
    form.set_new_password("Abcd1234!");
    form.set_confirm_password("Abcd1234!");

    let result = api::submit_profile(&client, &config, &form, 1).await;
    assert_matches!(
        result,
        Err(ApiError::Validation { field: Some(PasswordField::Old), .. })
    );

    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::with_parts(config, session_store_in(&dir));
    state.profile_form = form;
    state.profile_form.begin_submit();
    state.apply_profile_result(result);

    assert!(!state.profile_form.submitting);
    assert_eq!(
        state.profile_form.old_password_error.as_deref(),
        Some("Old password is incorrect")
    );
    assert!(state.profile_form.message.is_none(), "field error, not a global message");
}
