//! Shared helpers for the integration suites.

use bizdir::app::{Config, Session, SessionStore};
use wiremock::MockServer;

/// Config pointing at a mock API server.
pub fn config_for(server: &MockServer) -> Config {
    Config::with_server_url(server.uri())
}

/// Session store backed by a temp directory.
pub fn session_store_in(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::with_path(dir.path().join("session.json"))
}

/// A known logged-in identity.
pub fn sample_session() -> Session {
    Session {
        id: 1,
        full_name: "JOHN SMITH".to_string(),
        email: "j@x.com".to_string(),
        phone: None,
        profile_pic: Some("p.png".to_string()),
        cover_photo: Some("cover.png".to_string()),
    }
}
