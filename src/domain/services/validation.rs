#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;

use std::collections::BTreeMap;

use strum::EnumIter;
use strum::IntoEnumIterator;

use crate::domain::models::Language;
use crate::domain::models::UiText;

const USERNAME_MIN_LENGTH: usize = 3;
const PASSWORD_MIN_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, EnumIter, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    Username,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn parse(text: &str) -> Option<FormField> {
        return FormField::iter().find(|e| return e.to_string() == text);
    }
}

/// Field-level validation for the login and register forms. A field is
/// valid exactly when it has no entry in the error map. The composite
/// validators run every rule so each invalid field gets its message, even
/// when an earlier field already failed.
pub struct FormValidator {
    language: Language,
    errors: BTreeMap<FormField, String>,
}

impl FormValidator {
    pub fn new(language: Language) -> FormValidator {
        return FormValidator {
            language,
            errors: BTreeMap::new(),
        };
    }

    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        return &self.errors;
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        return self.errors.get(&field).map(|e| return e.as_str());
    }

    pub fn set_field_error(&mut self, field: FormField, text: UiText) {
        self.errors
            .insert(field, text.localized(self.language).to_string());
    }

    pub fn clear_field_error(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn clear_all_errors(&mut self) {
        self.errors.clear();
    }

    pub fn validate_username(&mut self, username: &str) -> bool {
        if username.trim().is_empty() {
            self.set_field_error(FormField::Username, UiText::UsernameRequired);
            return false;
        }
        if username.len() < USERNAME_MIN_LENGTH {
            self.set_field_error(FormField::Username, UiText::UsernameMinLength);
            return false;
        }

        self.clear_field_error(FormField::Username);
        return true;
    }

    pub fn validate_password(&mut self, password: &str) -> bool {
        if password.trim().is_empty() {
            self.set_field_error(FormField::Password, UiText::PasswordRequired);
            return false;
        }
        if password.len() < PASSWORD_MIN_LENGTH {
            self.set_field_error(FormField::Password, UiText::PasswordMinLength);
            return false;
        }

        self.clear_field_error(FormField::Password);
        return true;
    }

    pub fn validate_confirm_password(&mut self, password: &str, confirm_password: &str) -> bool {
        if confirm_password.trim().is_empty() {
            self.set_field_error(FormField::ConfirmPassword, UiText::ConfirmPasswordRequired);
            return false;
        }
        if password != confirm_password {
            self.set_field_error(FormField::ConfirmPassword, UiText::PasswordMismatch);
            return false;
        }

        self.clear_field_error(FormField::ConfirmPassword);
        return true;
    }

    pub fn validate_login_form(&mut self, username: &str, password: &str) -> bool {
        let username_valid = self.validate_username(username);
        let password_valid = self.validate_password(password);

        return username_valid && password_valid;
    }

    pub fn validate_register_form(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> bool {
        let username_valid = self.validate_username(username);
        let password_valid = self.validate_password(password);
        let confirm_valid = self.validate_confirm_password(password, confirm_password);

        return username_valid && password_valid && confirm_valid;
    }
}
