//! Field Validators
//!
//! Pure validation functions for the auth and profile forms. Every function
//! here is total: it maps a raw input string to either "valid" (`None`) or a
//! human-readable error message, and never panics. The password checker also
//! produces the criteria set and strength score that drive the signup
//! strength meter.

/// Special characters accepted by the password `special` criterion.
pub const SPECIAL_CHARS: &str = "@$!%*?&#+-_=<>{}[]|~`^().,;:'\"/\\";

/// Special characters that earn the strength bonus. Deliberately a different
/// set from [`SPECIAL_CHARS`]; the bonus is additive on top of the criterion.
const BONUS_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~`";

/// The five boolean password criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordCriteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordCriteria {
    pub fn met_count(&self) -> u32 {
        [self.length, self.uppercase, self.lowercase, self.number, self.special]
            .iter()
            .filter(|met| **met)
            .count() as u32
    }

    pub fn all_met(&self) -> bool {
        self.met_count() == 5
    }

    /// Labels of unmet criteria, in the fixed display order.
    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.length {
            missing.push("at least 8 characters");
        }
        if !self.uppercase {
            missing.push("uppercase letter");
        }
        if !self.lowercase {
            missing.push("lowercase letter");
        }
        if !self.number {
            missing.push("number");
        }
        if !self.special {
            missing.push("special character");
        }
        missing
    }
}

/// Result of checking a password: criteria, strength score (0.0..=5.0) and
/// the error message to show, if any.
#[derive(Debug, Clone, Default)]
pub struct PasswordCheck {
    pub criteria: PasswordCriteria,
    pub strength: f32,
    pub error: Option<String>,
}

/// Validate a full name. Letters only, with single spaces, hyphens or
/// apostrophes between word groups; each space-separated word must be fully
/// upper- or fully lower-case.
pub fn validate_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("Name is required".to_string());
    }
    let len = name.chars().count();
    if len < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    if len > 50 {
        return Some("Name must not exceed 50 characters".to_string());
    }
    if !name_shape_ok(name) {
        return Some("Invalid name format".to_string());
    }
    for word in name.split(' ') {
        if word != word.to_uppercase() && word != word.to_lowercase() {
            return Some("Each word must be all uppercase or all lowercase".to_string());
        }
    }
    None
}

/// Letter groups separated by single ` `, `'` or `-`; no leading, trailing
/// or doubled separators.
fn name_shape_ok(name: &str) -> bool {
    let mut prev: Option<char> = None;
    for c in name.chars() {
        match c {
            'A'..='Z' | 'a'..='z' => {}
            ' ' | '\'' | '-' => match prev {
                Some(p) if p.is_ascii_alphabetic() => {}
                _ => return false,
            },
            _ => return false,
        }
        prev = Some(c);
    }
    matches!(prev, Some(p) if p.is_ascii_alphabetic())
}

/// Validate an email address: `local@domain.tld` shaped, no whitespace,
/// TLD of at least two characters, at most 254 characters overall.
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !email_shape_ok(email) {
        return Some("Invalid email format".to_string());
    }
    if email.chars().count() > 254 {
        return Some("Email must not exceed 254 characters".to_string());
    }
    None
}

fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.chars().count() >= 2
}

/// Check a password against the five criteria, compute the strength score and
/// produce an error message for missing criteria or common weak patterns.
///
/// An empty password yields an empty check (no criteria met, no error); the
/// forms treat "not entered yet" differently from "entered and weak".
pub fn check_password(password: &str) -> PasswordCheck {
    if password.is_empty() {
        return PasswordCheck::default();
    }

    let len = password.chars().count();
    let criteria = PasswordCriteria {
        length: len >= 8,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    };

    let mut strength = criteria.met_count() as f32;
    if len >= 12 {
        strength += 0.5;
    }
    if len >= 16 {
        strength += 0.5;
    }
    if password.chars().any(|c| BONUS_SPECIAL_CHARS.contains(c)) {
        strength += 0.5;
    }
    if !has_repeated_pair(password) {
        strength += 0.5;
    }
    // A password missing any criterion never scores above 4; bonuses can only
    // push a fully-compliant password towards the 5.0 cap.
    let cap = if criteria.all_met() { 5.0 } else { 4.0 };
    let strength = strength.min(cap);

    let missing = criteria.missing();
    let error = if !missing.is_empty() {
        Some(format!("Password needs: {}", missing.join(", ")))
    } else if has_weak_pattern(password) {
        Some("Password contains common patterns. Use a stronger combination.".to_string())
    } else {
        None
    };

    PasswordCheck { criteria, strength, error }
}

/// Whether any two-character substring reappears later in the password
/// (a gap between the occurrences is allowed).
fn has_repeated_pair(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < 4 {
        return false;
    }
    for i in 0..chars.len() - 3 {
        let pair = &chars[i..i + 2];
        if chars[i + 2..].windows(2).any(|w| w == pair) {
            return true;
        }
    }
    false
}

fn has_weak_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    password.contains("123456")
        || lower.contains("password")
        || lower.contains("qwerty")
        || lower.contains("abc123")
        || has_char_run(password, 3)
        || password.chars().all(|c| c.is_ascii_alphabetic())
        || password.chars().all(|c| c.is_ascii_digit())
}

/// Whether any character appears `run` or more times consecutively.
fn has_char_run(password: &str, run: usize) -> bool {
    let mut count = 0usize;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            count += 1;
        } else {
            count = 1;
        }
        if count >= run {
            return true;
        }
        prev = Some(c);
    }
    false
}

/// Confirm-password check. Only meaningful once both sides are non-empty.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<String> {
    if password.is_empty() || confirmation.is_empty() {
        return None;
    }
    if password != confirmation {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Display label for a strength score.
pub fn strength_label(strength: f32) -> &'static str {
    if strength <= 2.0 {
        "Weak"
    } else if strength < 4.0 {
        "Medium"
    } else {
        "Strong"
    }
}
