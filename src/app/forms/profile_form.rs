//! My Account profile form state.
//!
//! Holds the profile scalars, the password-change trio and the two image
//! slots. The password-change sub-flow is only validated when a new password
//! was actually entered; leaving the trio empty saves the profile without
//! touching the password.

use std::path::{Path, PathBuf};

use crate::app::forms::FormMessage;
use crate::app::types::{ProfileSaveResponse, UserResponse};
use crate::app::validation::{check_password, validate_confirmation};

/// Reference to a profile/cover image: either a server-assigned filename
/// (display only) or a locally chosen file that has not been uploaded yet.
/// Only a local file is ever included in an outbound multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Server(String),
    Local(PathBuf),
}

impl AssetRef {
    pub fn server_name(&self) -> Option<&str> {
        match self {
            AssetRef::Server(name) => Some(name),
            AssetRef::Local(_) => None,
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            AssetRef::Server(_) => None,
            AssetRef::Local(path) => Some(path),
        }
    }
}

/// The three password-change fields, used for field-scoped errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Old,
    New,
    Confirm,
}

/// Draft state for the My Account view.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub profile_pic: Option<AssetRef>,
    pub cover_photo: Option<AssetRef>,
    pub old_password_error: Option<String>,
    pub new_password_error: Option<String>,
    pub confirm_password_error: Option<String>,
    pub message: Option<FormMessage>,
    pub dirty: bool,
    pub submitting: bool,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the form from a fetched user record. The first name is the first
    /// word of the stored full name; image refs become display-only server
    /// filenames. Loading does not mark the form dirty.
    pub fn load_user(&mut self, user: &UserResponse) {
        self.first_name = user
            .full_name
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_string();
        self.email = user.email.clone();
        self.phone = user.phone.clone().unwrap_or_default();
        self.profile_pic = user.profile_pic.clone().map(AssetRef::Server);
        self.cover_photo = user.cover_photo.clone().map(AssetRef::Server);
    }

    pub fn set_last_name(&mut self, raw: &str) {
        self.last_name = raw.to_string();
        self.dirty = true;
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.phone = raw.to_string();
        self.dirty = true;
    }

    /// Typing in the old-password field clears its error; it is only
    /// validated on submit.
    pub fn set_old_password(&mut self, raw: &str) {
        self.old_password = raw.to_string();
        self.old_password_error = None;
        self.dirty = true;
    }

    /// New-password edits re-validate strength immediately and re-check the
    /// confirmation field, since the two depend on each other.
    pub fn set_new_password(&mut self, raw: &str) {
        self.new_password = raw.to_string();
        self.new_password_error = if self.new_password.is_empty() {
            None
        } else {
            check_password(&self.new_password).error
        };
        self.old_password_error = None;
        self.confirm_password_error =
            validate_confirmation(&self.new_password, &self.confirm_password);
        self.dirty = true;
    }

    pub fn set_confirm_password(&mut self, raw: &str) {
        self.confirm_password = raw.to_string();
        self.confirm_password_error =
            validate_confirmation(&self.new_password, &self.confirm_password);
        self.dirty = true;
    }

    pub fn choose_profile_pic(&mut self, path: PathBuf) {
        self.profile_pic = Some(AssetRef::Local(path));
        self.dirty = true;
    }

    pub fn choose_cover_photo(&mut self, path: PathBuf) {
        self.cover_photo = Some(AssetRef::Local(path));
        self.dirty = true;
    }

    /// Whether the user is attempting a password change.
    pub fn wants_password_change(&self) -> bool {
        !self.new_password.is_empty() || !self.confirm_password.is_empty()
    }

    /// The first violated rule of the password-change sub-flow, if any.
    /// Pure; does not touch the error fields.
    pub fn password_change_violation(&self) -> Option<(PasswordField, String)> {
        if !self.wants_password_change() {
            return None;
        }
        if self.old_password.is_empty() {
            return Some((
                PasswordField::Old,
                "Old password is required when changing password".to_string(),
            ));
        }
        if let Some(error) = check_password(&self.new_password).error {
            return Some((PasswordField::New, error));
        }
        if self.new_password != self.confirm_password {
            return Some((PasswordField::Confirm, "Passwords do not match".to_string()));
        }
        if self.new_password == self.old_password {
            return Some((
                PasswordField::New,
                "New password must be different from old password".to_string(),
            ));
        }
        None
    }

    /// Validate the password-change sub-flow before a save and surface the
    /// first violated rule on its field; the caller must not hit the network
    /// on `Err`.
    pub fn validate_password_change(&mut self) -> Result<(), (PasswordField, String)> {
        self.old_password_error = None;
        self.new_password_error = None;
        self.confirm_password_error = None;

        match self.password_change_violation() {
            None => Ok(()),
            Some((field, message)) => Err(self.password_error(field, message)),
        }
    }

    /// Attach an error to one of the password fields (also used for the
    /// server-reported wrong-old-password case).
    pub fn password_error(
        &mut self,
        field: PasswordField,
        message: impl Into<String>,
    ) -> (PasswordField, String) {
        let message = message.into();
        match field {
            PasswordField::Old => self.old_password_error = Some(message.clone()),
            PasswordField::New => self.new_password_error = Some(message.clone()),
            PasswordField::Confirm => self.confirm_password_error = Some(message.clone()),
        }
        (field, message)
    }

    pub fn can_submit(&self) -> bool {
        self.dirty && !self.submitting
    }

    /// Mark a submission in flight; a second submit while in flight is a
    /// no-op.
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

    /// Reconcile the form after a successful save: merge server-assigned
    /// asset filenames, clear the password trio and mark the form clean.
    pub fn apply_saved(&mut self, response: &ProfileSaveResponse) {
        self.profile_pic = merge_asset(self.profile_pic.take(), response.profile_pic.clone());
        self.cover_photo = merge_asset(self.cover_photo.take(), response.cover_photo.clone());
        self.old_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        self.old_password_error = None;
        self.new_password_error = None;
        self.confirm_password_error = None;
        self.dirty = false;
    }
}

/// A server-returned filename replaces whatever was there; otherwise a
/// now-uploaded local file is dropped and a prior server ref is kept.
fn merge_asset(prior: Option<AssetRef>, saved: Option<String>) -> Option<AssetRef> {
    match (saved, prior) {
        (Some(name), _) => Some(AssetRef::Server(name)),
        (None, Some(AssetRef::Local(_))) => None,
        (None, keep) => keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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

    #[test]
    fn test_load_user_splits_first_name_and_stays_clean() {
        let form = loaded_form();
        assert_eq!(form.first_name, "JOHN");
        assert_eq!(form.phone, "555-0100");
        assert_eq!(form.profile_pic, Some(AssetRef::Server("p.png".to_string())));
        assert!(!form.dirty);
    }

    #[test]
    fn test_no_password_change_validates_clean() {
        let mut form = loaded_form();
        form.set_phone("555-0101");
        assert_eq!(form.validate_password_change(), Ok(()));
    }

    #[test]
    fn test_old_password_required() {
        let mut form = loaded_form();
        form.set_new_password("Abcd1234!");
        form.set_confirm_password("Abcd1234!");

        let err = form.validate_password_change().unwrap_err();
        assert_eq!(
            err,
            (
                PasswordField::Old,
                "Old password is required when changing password".to_string()
            )
        );
        assert!(form.old_password_error.is_some());
    }

    #[test]
    fn test_weak_new_password_blocked() {
        let mut form = loaded_form();
        form.set_old_password("Old1234!x");
        form.set_new_password("weak");
        form.set_confirm_password("weak");

        let (field, message) = form.validate_password_change().unwrap_err();
        assert_eq!(field, PasswordField::New);
        assert!(message.starts_with("Password needs:"));
    }

    #[test]
    fn test_mismatch_blocked() {
        let mut form = loaded_form();
        form.set_old_password("Old1234!x");
        form.set_new_password("Abcd1234!");
        form.set_confirm_password("Abcd1234?");

        let (field, message) = form.validate_password_change().unwrap_err();
        assert_eq!(field, PasswordField::Confirm);
        assert_eq!(message, "Passwords do not match");
    }

    #[test]
    fn test_new_must_differ_from_old() {
        let mut form = loaded_form();
        form.set_old_password("Abcd1234!");
        form.set_new_password("Abcd1234!");
        form.set_confirm_password("Abcd1234!");

        let (field, message) = form.validate_password_change().unwrap_err();
        assert_eq!(field, PasswordField::New);
        assert_eq!(message, "New password must be different from old password");
    }

    #[test]
    fn test_confirm_revalidated_when_new_changes() {
        let mut form = loaded_form();
        form.set_confirm_password("Abcd1234!");
        assert!(form.confirm_password_error.is_none(), "new side still empty");

        form.set_new_password("Different1!");
        assert_eq!(
            form.confirm_password_error,
            Some("Passwords do not match".to_string())
        );

        form.set_new_password("Abcd1234!");
        assert!(form.confirm_password_error.is_none());
    }

    #[test]
    fn test_apply_saved_resets_password_and_merges_assets() {
        let mut form = loaded_form();
        form.choose_cover_photo(PathBuf::from("/tmp/cover.jpg"));
        form.set_old_password("Old1234!x");
        form.set_new_password("Abcd1234!");
        form.set_confirm_password("Abcd1234!");

        form.apply_saved(&ProfileSaveResponse {
            profile_pic: None,
            cover_photo: Some("cover-7.jpg".to_string()),
            message: Some("Profile saved".to_string()),
        });

        assert_eq!(form.cover_photo, Some(AssetRef::Server("cover-7.jpg".to_string())));
        // No new filename for the untouched slot: prior server ref kept.
        assert_eq!(form.profile_pic, Some(AssetRef::Server("p.png".to_string())));
        assert!(form.old_password.is_empty());
        assert!(form.new_password.is_empty());
        assert!(form.confirm_password.is_empty());
        assert!(!form.dirty);
    }

    #[test]
    fn test_unreturned_local_file_is_dropped() {
        let mut form = loaded_form();
        form.choose_profile_pic(PathBuf::from("/tmp/me.png"));
        form.apply_saved(&ProfileSaveResponse {
            profile_pic: None,
            cover_photo: None,
            message: None,
        });
        assert_eq!(form.profile_pic, None);
    }

    #[test]
    fn test_no_concurrent_submissions() {
        let mut form = loaded_form();
        form.set_phone("555-0101");
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        form.finish_submit();
        assert!(form.can_submit());
    }
}
