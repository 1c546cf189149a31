//! Login / signup form state.
//!
//! One form instance backs both tabs. Switching tabs clears errors, the
//! status message and the strength meter but keeps entered values, so an
//! email typed on one tab is still there on the other.

use crate::app::forms::{collapse_whitespace, FormMessage};
use crate::app::types::{LoginRequest, SignupRequest};
use crate::app::validation::{check_password, validate_email, validate_name, PasswordCheck};

/// Which auth tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Draft state for the auth view.
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub password_check: PasswordCheck,
    pub message: Option<FormMessage>,
    pub submitting: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            show_password: false,
            name_error: None,
            email_error: None,
            password_check: PasswordCheck::default(),
            message: None,
            submitting: false,
        }
    }

    /// Store a full-name edit: collapse repeated interior whitespace, then
    /// re-validate.
    pub fn set_full_name(&mut self, raw: &str) {
        self.full_name = collapse_whitespace(raw);
        self.name_error = validate_name(&self.full_name);
    }

    /// Store an email edit: trim, then re-validate.
    pub fn set_email(&mut self, raw: &str) {
        self.email = raw.trim().to_string();
        self.email_error = validate_email(&self.email);
    }

    /// Store a password edit verbatim. The strength meter and criteria only
    /// apply to signup; the login tab takes the password as-is.
    pub fn set_password(&mut self, raw: &str) {
        self.password = raw.to_string();
        self.password_check = match self.mode {
            AuthMode::Signup => check_password(&self.password),
            AuthMode::Login => PasswordCheck::default(),
        };
    }

    /// Switch between the login and signup tabs. Errors, the status message
    /// and the strength state are cleared; entered values are kept.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.name_error = None;
        self.email_error = None;
        self.password_check = PasswordCheck::default();
        self.message = None;
    }

    /// The first validation error relevant to the active tab, if any.
    /// Login ignores signup-only fields.
    pub fn blocking_error(&self) -> Option<String> {
        match self.mode {
            AuthMode::Login => validate_email(&self.email),
            AuthMode::Signup => validate_name(&self.full_name)
                .or_else(|| validate_email(&self.email))
                .or_else(|| password_block(&self.password)),
        }
    }

    /// Whether a submission may start right now.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.blocking_error().is_none()
    }

    /// Re-run the validators for the active tab and surface their errors on
    /// the form. Returns [`Self::can_submit`].
    pub fn validate_for_submit(&mut self) -> bool {
        match self.mode {
            AuthMode::Login => {
                self.email_error = validate_email(&self.email);
            }
            AuthMode::Signup => {
                self.name_error = validate_name(&self.full_name);
                self.email_error = validate_email(&self.email);
                self.password_check = check_password(&self.password);
                if let Some(error) = password_block(&self.password) {
                    self.password_check.error = Some(error);
                }
            }
        }
        self.can_submit()
    }

    /// Mark a submission in flight. Returns false when one already is; a
    /// second submit while in flight is a no-op.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.message = None;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Signup payload; the name is uppercased on the way out.
    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            full_name: self.full_name.to_uppercase(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

fn password_block(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    check_password(password).error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::forms::MessageKind;

    fn filled_signup_form() -> AuthForm {
        let mut form = AuthForm::new();
        form.switch_mode(AuthMode::Signup);
        form.set_full_name("JOHN SMITH");
        form.set_email("j@x.com");
        form.set_password("Abcd123!");
        form
    }

    #[test]
    fn test_set_full_name_collapses_whitespace() {
        let mut form = AuthForm::new();
        form.switch_mode(AuthMode::Signup);
        form.set_full_name("john   smith");
        assert_eq!(form.full_name, "john smith");
        assert_eq!(form.name_error, None);
    }

    #[test]
    fn test_set_email_trims() {
        let mut form = AuthForm::new();
        form.set_email("  j@x.com  ");
        assert_eq!(form.email, "j@x.com");
        assert_eq!(form.email_error, None);
    }

    #[test]
    fn test_switch_mode_keeps_email_clears_errors() {
        let mut form = AuthForm::new();
        form.set_email("not-an-email");
        assert!(form.email_error.is_some());
        form.message = Some(FormMessage::error("boom"));

        form.switch_mode(AuthMode::Signup);
        assert_eq!(form.email, "not-an-email");
        assert!(form.email_error.is_none());
        assert!(form.message.is_none());
        assert_eq!(form.password_check.strength, 0.0);
    }

    #[test]
    fn test_login_ignores_signup_fields() {
        let mut form = AuthForm::new();
        form.set_email("j@x.com");
        form.set_password("anything");
        // Name never entered, which would block signup but not login.
        assert!(form.can_submit());
        form.switch_mode(AuthMode::Signup);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_signup_blocked_by_weak_password() {
        let mut form = filled_signup_form();
        form.set_password("short");
        assert!(!form.can_submit());
        assert!(form.validate_for_submit() == false);
        assert!(form.password_check.error.is_some());
    }

    #[test]
    fn test_signup_with_valid_fields_can_submit() {
        let form = filled_signup_form();
        assert!(form.can_submit());
    }

    #[test]
    fn test_no_concurrent_submissions() {
        let mut form = filled_signup_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(!form.can_submit());
        form.finish_submit();
        assert!(form.can_submit());
    }

    #[test]
    fn test_begin_submit_clears_message() {
        let mut form = filled_signup_form();
        form.message = Some(FormMessage::error("stale"));
        assert!(form.begin_submit());
        assert!(form.message.is_none());
        assert_ne!(
            Some(MessageKind::Error),
            form.message.as_ref().map(|m| m.kind)
        );
    }

    #[test]
    fn test_signup_request_uppercases_name() {
        let mut form = filled_signup_form();
        form.set_full_name("john smith");
        let request = form.signup_request();
        assert_eq!(request.full_name, "JOHN SMITH");
    }
}
