//! BizDir desktop client.
//!
//! The module layout follows the data flow: user input runs through the
//! validators into the form controllers, submissions go through the
//! orchestrator in `api`, and auth success lands in the session store.
//!
//! - **`config`** - Server URL configuration
//! - **`types`** - Wire types for the remote API
//! - **`validation`** - Pure field validators and password strength scoring
//! - **`forms`** - Auth and profile form state controllers
//! - **`session`** - Persisted session identity store
//! - **`api`** - Submission orchestrator (auth, profile, user lookup)
//! - **`business`** - Business directory service
//! - **`state`** - Central app state, background work and redirect timers
//! - **`views`** - egui rendering
//! - **`theme`** - Color constants

pub mod api;
pub mod business;
pub mod config;
pub mod forms;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod validation;
pub mod views;

// Re-export commonly used types
pub use api::{ApiError, AuthOutcome};
pub use config::Config;
pub use forms::{AuthForm, AuthMode, ProfileForm};
pub use session::{Session, SessionStore};
pub use state::AppState;
pub use types::AppView;
