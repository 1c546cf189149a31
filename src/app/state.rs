//! Central application state shared across views.
//!
//! All state mutation happens on the UI thread. Network work runs on short-
//! lived worker threads that own their own tokio runtime and post a tagged
//! result back over an mpsc channel; `poll_results` drains those channels
//! once per frame. Dropping a receiver (view change, logout) simply discards
//! the eventual response, so late completions can never touch stale state.

use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{info, warn};

use crate::app::api::{self, ApiError, AuthOutcome};
use crate::app::business::{self, BusinessFilters, BusinessPage};
use crate::app::config::Config;
use crate::app::forms::{AuthForm, AuthMode, FormMessage, ProfileForm};
use crate::app::session::SessionStore;
use crate::app::types::{AppView, Business, ProfileSaveResponse, UserResponse};

/// How long the signup success message stays up before the tab switches.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1000);
/// How long the login success message stays up before navigating home.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(500);

/// Navigation scheduled to happen after a short, fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingRedirect {
    SwitchToLogin,
    GoHome,
}

/// Which image slot the next dropped file should fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlot {
    Profile,
    Cover,
}

/// Directory listing state.
#[derive(Debug, Default)]
pub struct DirectoryState {
    pub filters: BusinessFilters,
    pub businesses: Vec<Business>,
    pub total: u64,
    pub selected: Option<Business>,
    pub loading: bool,
    pub error: Option<String>,
    loaded_once: bool,
}

/// Central application state.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub view: AppView,
    pub auth_form: AuthForm,
    pub profile_form: ProfileForm,
    pub directory: DirectoryState,
    /// Armed by the "change photo" buttons; consumed by the next file drop.
    pub pending_photo_slot: Option<PhotoSlot>,

    auth_result: Option<Receiver<Result<AuthOutcome, ApiError>>>,
    profile_result: Option<Receiver<Result<ProfileSaveResponse, ApiError>>>,
    account_result: Option<Receiver<Result<UserResponse, ApiError>>>,
    refresh_result: Option<Receiver<Result<UserResponse, ApiError>>>,
    directory_result: Option<Receiver<Result<BusinessPage, ApiError>>>,
    business_result: Option<Receiver<Result<Business, ApiError>>>,
    redirect: Option<(Instant, PendingRedirect)>,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self::with_parts(Config::new(), SessionStore::new());
        if state.session.is_authenticated() {
            state.spawn_session_refresh();
        }
        state
    }

    /// Assemble state from explicit parts. Used by tests to inject a mock
    /// server URL and a temp-dir session store; performs no network work.
    pub fn with_parts(config: Config, session: SessionStore) -> Self {
        let view = if session.is_authenticated() {
            AppView::Directory
        } else {
            AppView::Auth
        };
        Self {
            config,
            session,
            view,
            auth_form: AuthForm::new(),
            profile_form: ProfileForm::new(),
            directory: DirectoryState::default(),
            pending_photo_slot: None,
            auth_result: None,
            profile_result: None,
            account_result: None,
            refresh_result: None,
            directory_result: None,
            business_result: None,
            redirect: None,
        }
    }

    /// Navigate, cancelling any pending redirect and kicking off the loads
    /// the target view needs.
    pub fn set_view(&mut self, view: AppView) {
        self.redirect = None;
        self.view = view;
        match view {
            AppView::Account => self.load_account(),
            AppView::Directory => self.ensure_directory_loaded(),
            AppView::Auth => {}
        }
    }

    pub fn logout(&mut self) {
        info!("logging out");
        self.session.log_out();
        self.auth_form = AuthForm::new();
        self.profile_form = ProfileForm::new();
        self.pending_photo_slot = None;
        self.directory = DirectoryState::default();
        self.auth_result = None;
        self.profile_result = None;
        self.account_result = None;
        self.refresh_result = None;
        self.redirect = None;
        self.view = AppView::Auth;
    }

    // ----- auth -----

    /// Submit the auth form for its active tab. Validation failures surface
    /// on the form without spawning any work.
    pub fn handle_auth_submit(&mut self) {
        if !self.auth_form.validate_for_submit() {
            return;
        }
        if !self.auth_form.begin_submit() {
            return;
        }

        let config = self.config.clone();
        let form = self.auth_form.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_api(async {
                let client = Client::new();
                api::submit_auth(&client, &config, &form).await
            });
            let _ = tx.send(result);
        });
        self.auth_result = Some(rx);
    }

    /// Reconcile auth submission completion with the form and session store.
    pub fn apply_auth_result(&mut self, result: Result<AuthOutcome, ApiError>) {
        self.auth_form.finish_submit();
        match result {
            Ok(AuthOutcome::SignedUp { message }) => {
                info!("signup accepted");
                self.auth_form.message =
                    Some(FormMessage::info(format!("{message} Redirecting to login...")));
                self.redirect =
                    Some((Instant::now() + SIGNUP_REDIRECT_DELAY, PendingRedirect::SwitchToLogin));
            }
            Ok(AuthOutcome::LoggedIn { session, message }) => {
                info!("logged in as {}", session.email);
                self.session.log_in(session);
                if let Some(message) = message {
                    self.auth_form.message = Some(FormMessage::info(message));
                }
                self.redirect =
                    Some((Instant::now() + LOGIN_REDIRECT_DELAY, PendingRedirect::GoHome));
            }
            Err(e) => {
                warn!("auth submission failed: {e}");
                self.auth_form.message = Some(FormMessage::error(e.to_string()));
            }
        }
    }

    // ----- account -----

    /// Load the user record backing the My Account view.
    pub fn load_account(&mut self) {
        let Some(id) = self.session.current().map(|session| session.id) else {
            return;
        };
        self.profile_form = ProfileForm::new();
        self.pending_photo_slot = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_api(async {
                let client = Client::new();
                api::fetch_user(&client, &config, id).await
            });
            let _ = tx.send(result);
        });
        self.account_result = Some(rx);
    }

    /// Submit the profile form. The password-change sub-flow is validated
    /// locally first; a violation blocks without spawning any work.
    pub fn handle_profile_submit(&mut self) {
        let Some(user_id) = self.session.current().map(|session| session.id) else {
            return;
        };
        if self.profile_form.validate_password_change().is_err() {
            return;
        }
        if !self.profile_form.can_submit() {
            return;
        }
        if !self.profile_form.begin_submit() {
            return;
        }

        let config = self.config.clone();
        let form = self.profile_form.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_api(async {
                let client = Client::new();
                api::submit_profile(&client, &config, &form, user_id).await
            });
            let _ = tx.send(result);
        });
        self.profile_result = Some(rx);
    }

    /// Reconcile profile save completion with the form and session store.
    pub fn apply_profile_result(&mut self, result: Result<ProfileSaveResponse, ApiError>) {
        self.profile_form.finish_submit();
        match result {
            Ok(saved) => {
                self.session
                    .merge_assets(saved.profile_pic.clone(), saved.cover_photo.clone());
                self.profile_form.apply_saved(&saved);
                let message = saved
                    .message
                    .unwrap_or_else(|| "Profile saved successfully!".to_string());
                self.profile_form.message = Some(FormMessage::info(message));
                // Pick up anything else the server changed.
                self.spawn_session_refresh();
            }
            Err(ApiError::Validation { field: Some(field), message }) => {
                self.profile_form.password_error(field, message);
            }
            Err(e) => {
                warn!("profile save failed: {e}");
                self.profile_form.message = Some(FormMessage::error(e.to_string()));
            }
        }
    }

    /// Best-effort re-fetch of the session identity.
    pub fn spawn_session_refresh(&mut self) {
        let Some(id) = self.session.current().map(|session| session.id) else {
            return;
        };
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_api(async {
                let client = Client::new();
                api::fetch_user(&client, &config, id).await
            });
            let _ = tx.send(result);
        });
        self.refresh_result = Some(rx);
    }

    // ----- directory -----

    pub fn ensure_directory_loaded(&mut self) {
        if !self.directory.loaded_once {
            self.reload_directory();
        }
    }

    pub fn reload_directory(&mut self) {
        if self.directory.loading {
            return;
        }
        self.directory.loading = true;
        self.directory.error = None;

        let config = self.config.clone();
        let filters = self.directory.filters.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_api(async {
                let client = Client::new();
                business::list_businesses(&client, &config, &filters).await
            });
            let _ = tx.send(result);
        });
        self.directory_result = Some(rx);
    }

    pub fn open_business(&mut self, id: i64) {
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_api(async {
                let client = Client::new();
                business::fetch_business(&client, &config, id).await
            });
            let _ = tx.send(result);
        });
        self.business_result = Some(rx);
    }

    pub fn close_business(&mut self) {
        self.directory.selected = None;
    }

    // ----- per-frame plumbing -----

    /// Drain completed background work. Called once per frame.
    pub fn poll_results(&mut self) {
        if let Some(rx) = &self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.apply_auth_result(result);
            }
        }
        if let Some(rx) = &self.profile_result {
            if let Ok(result) = rx.try_recv() {
                self.profile_result = None;
                self.apply_profile_result(result);
            }
        }
        if let Some(rx) = &self.account_result {
            if let Ok(result) = rx.try_recv() {
                self.account_result = None;
                match result {
                    Ok(user) => self.profile_form.load_user(&user),
                    Err(e) => {
                        warn!("loading account failed: {e}");
                        self.profile_form.message = Some(FormMessage::error(e.to_string()));
                    }
                }
            }
        }
        if let Some(rx) = &self.refresh_result {
            if let Ok(result) = rx.try_recv() {
                self.refresh_result = None;
                match result {
                    Ok(user) => self.session.merge_server(user),
                    // Refresh is best-effort: keep the cached identity.
                    Err(e) => warn!("session refresh failed: {e}"),
                }
            }
        }
        if let Some(rx) = &self.directory_result {
            if let Ok(result) = rx.try_recv() {
                self.directory_result = None;
                self.directory.loading = false;
                match result {
                    Ok(page) => {
                        self.directory.businesses = page.businesses;
                        self.directory.total = page.total;
                        self.directory.loaded_once = true;
                    }
                    Err(e) => self.directory.error = Some(e.to_string()),
                }
            }
        }
        if let Some(rx) = &self.business_result {
            if let Ok(result) = rx.try_recv() {
                self.business_result = None;
                match result {
                    Ok(b) => self.directory.selected = Some(b),
                    Err(e) => self.directory.error = Some(e.to_string()),
                }
            }
        }
    }

    /// Fire the pending redirect once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some((when, action)) = self.redirect.take() {
            if now < when {
                self.redirect = Some((when, action));
                return;
            }
            match action {
                PendingRedirect::SwitchToLogin => {
                    self.auth_form.switch_mode(AuthMode::Login);
                }
                PendingRedirect::GoHome => {
                    self.auth_form = AuthForm::new();
                    self.set_view(AppView::Directory);
                }
            }
        }
    }

    /// Whether a redirect is scheduled (the success message is still up).
    pub fn redirect_pending(&self) -> bool {
        self.redirect.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run an API future to completion on a fresh single-threaded runtime.
/// Workers call this from their own thread, never from the UI thread.
fn block_on_api<T>(
    future: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(future),
        Err(e) => Err(ApiError::server(format!("Internal error: {e}"))),
    }
}
