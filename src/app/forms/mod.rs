//! Form State Controllers
//!
//! Draft, per-view input state for the auth and profile forms. Each form owns
//! its field values, per-field validation errors, a submitting flag and a
//! status message; validators run synchronously on every change and the
//! submission orchestrator reconciles the form after each network round trip.

pub mod auth_form;
pub mod profile_form;

pub use auth_form::{AuthForm, AuthMode};
pub use profile_form::{AssetRef, PasswordField, ProfileForm};

/// Kind of the form-level status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Form-level status message shown under the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Collapse runs of two or more whitespace characters into a single space.
/// A lone whitespace character is kept as typed.
pub fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut run = 0usize;
    for c in value.chars() {
        if c.is_whitespace() {
            run += 1;
            match run {
                1 => out.push(c),
                2 => {
                    out.pop();
                    out.push(' ');
                }
                _ => {}
            }
        } else {
            run = 0;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("john smith"), "john smith");
        assert_eq!(collapse_whitespace("john   smith"), "john smith");
        assert_eq!(collapse_whitespace("  a  b  "), " a b ");
        assert_eq!(collapse_whitespace(""), "");
    }
}
