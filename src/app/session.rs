//! Session Store
//!
//! Process-wide identity state: the currently logged-in user, or anonymous.
//! The identity is persisted as JSON in the platform data directory so a
//! restart keeps the user logged in. A corrupt or unreadable file is dropped
//! and the store starts anonymous; persistence problems are logged, never
//! surfaced as fatal errors.
//!
//! Every operation updates the persisted copy and the in-memory copy inside
//! the same synchronous call, so no reader ever observes them divergent
//! across an await point.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::app::api;
use crate::app::config::Config;
use crate::app::types::{LoginResponse, UserResponse};

const SESSION_FILE: &str = "session.json";

/// The client-held representation of the authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
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

impl From<LoginResponse> for Session {
    fn from(value: LoginResponse) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
            email: value.email,
            phone: None,
            profile_pic: value.profile_pic,
            cover_photo: None,
        }
    }
}

impl From<UserResponse> for Session {
    fn from(value: UserResponse) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            profile_pic: value.profile_pic,
            cover_photo: value.cover_photo,
        }
    }
}

/// Owner of the current identity, shared by every view through `AppState`.
#[derive(Debug)]
pub struct SessionStore {
    current: Option<Session>,
    path: PathBuf,
}

impl SessionStore {
    /// Open the store at the default platform location and hydrate it from
    /// any previously persisted identity.
    pub fn new() -> Self {
        let dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(dir.join("bizdir").join(SESSION_FILE))
    }

    /// Open the store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        let current = Self::hydrate(&path);
        Self { current, path }
    }

    /// Read a persisted identity, treating absence or corruption as anonymous.
    fn hydrate(path: &Path) -> Option<Session> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("no persisted session at {}: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("dropping corrupt persisted session: {e}");
                let _ = std::fs::remove_file(path);
                None
            }
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Persist and set the identity.
    pub fn log_in(&mut self, identity: Session) {
        self.persist(&identity);
        self.current = Some(identity);
    }

    /// Clear the persisted identity and the in-memory state unconditionally.
    pub fn log_out(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            debug!("removing persisted session: {e}");
        }
        self.current = None;
    }

    /// Best-effort re-fetch of the identity from the server. A no-op when
    /// anonymous; on any failure the existing identity is left untouched.
    pub async fn refresh(&mut self, client: &reqwest::Client, config: &Config) {
        let Some(id) = self.current.as_ref().map(|session| session.id) else {
            return;
        };
        match api::fetch_user(client, config, id).await {
            Ok(user) => self.merge_server(user),
            Err(e) => warn!("session refresh failed, keeping cached identity: {e}"),
        }
    }

    /// Merge a server user record into the identity: server fields take
    /// precedence, fields the server left unset keep their prior values.
    pub fn merge_server(&mut self, user: UserResponse) {
        let Some(prior) = self.current.take() else {
            return;
        };
        let merged = Session {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone.or(prior.phone),
            profile_pic: user.profile_pic.or(prior.profile_pic),
            cover_photo: user.cover_photo.or(prior.cover_photo),
        };
        self.persist(&merged);
        self.current = Some(merged);
    }

    /// Merge asset filenames returned by a profile save.
    pub fn merge_assets(&mut self, profile_pic: Option<String>, cover_photo: Option<String>) {
        let Some(prior) = self.current.take() else {
            return;
        };
        let merged = Session {
            profile_pic: profile_pic.or(prior.profile_pic),
            cover_photo: cover_photo.or(prior.cover_photo),
            ..prior
        };
        self.persist(&merged);
        self.current = Some(merged);
    }

    fn persist(&self, session: &Session) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("creating session directory: {e}");
                return;
            }
        }
        let serialized = match serde_json::to_string(session) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("serializing session: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!("persisting session: {e}");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::with_path(dir.path().join(SESSION_FILE))
    }

    fn sample_session() -> Session {
        Session {
            id: 1,
            full_name: "JOHN SMITH".to_string(),
            email: "j@x.com".to_string(),
            phone: None,
            profile_pic: Some("old.png".to_string()),
            cover_photo: Some("cover.png".to_string()),
        }
    }

    #[test]
    fn test_starts_anonymous_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_corrupt_file_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::with_path(path.clone());
        assert!(!store.is_authenticated());
        assert!(!path.exists(), "corrupt session file should be removed");
    }

    #[test]
    fn test_log_in_persists_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.log_in(sample_session());
        assert!(store.is_authenticated());

        let reopened = store_in(&dir);
        assert_eq!(reopened.current(), Some(&sample_session()));
    }

    #[test]
    fn test_log_out_clears_memory_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.log_in(sample_session());
        store.log_out();

        assert!(!store.is_authenticated());
        let reopened = store_in(&dir);
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn test_merge_server_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.log_in(sample_session());

        store.merge_server(UserResponse {
            id: 1,
            full_name: "JOHN SMITH".to_string(),
            email: "j@x.com".to_string(),
            phone: Some("555-1234".to_string()),
            profile_pic: Some("new.png".to_string()),
            cover_photo: None,
        });

        let session = store.current().unwrap();
        assert_eq!(session.phone.as_deref(), Some("555-1234"));
        assert_eq!(session.profile_pic.as_deref(), Some("new.png"));
        // Unspecified server field keeps the prior value.
        assert_eq!(session.cover_photo.as_deref(), Some("cover.png"));
    }

    #[test]
    fn test_merge_assets_when_anonymous_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.merge_assets(Some("p.png".to_string()), None);
        assert!(!store.is_authenticated());
    }
}
