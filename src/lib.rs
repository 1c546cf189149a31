//! BizDir - Business Directory Client
//!
//! BizDir is a native desktop front end (egui/eframe) for a business
//! directory service: users sign up and log in, edit their profile (name,
//! contact info, password, avatar and cover images) and browse a searchable
//! directory served by a remote HTTP API.
//!
//! # Overview
//!
//! The interesting part of the client is the session and form-validation
//! state machine:
//!
//! - Pure field validators run synchronously on every keystroke and feed
//!   per-field error state, including a five-criteria password strength
//!   meter with weak-pattern detection.
//! - Each view owns transient draft form state with an in-flight flag that
//!   serializes submissions.
//! - A single session store owns the persisted identity; views read it and
//!   mutate it only through its operations.
//! - The submission orchestrator builds JSON or multipart requests from form
//!   state, maps server errors back onto fields or the status message, and
//!   reconciles the session store on success.
//!
//! All state lives on the UI thread; network calls run on worker threads
//! that post tagged results back over channels.
//!
//! # Error Handling
//!
//! Local validation errors never reach the network; server and transport
//! errors surface as status messages or field annotations; a corrupt
//! persisted session falls back to anonymous. Nothing in the client is
//! fatal - the worst outcome is an anonymous session and an editable,
//! retryable form.

/// Desktop application: state, forms, session, API client and views.
pub mod app;
