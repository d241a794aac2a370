#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod tests;

use anyhow::Result;

use super::FormValidator;
use super::TokenStore;
use crate::domain::models::ApiError;
use crate::domain::models::FlowState;
use crate::domain::models::FoodApi;
use crate::domain::models::Language;
use crate::domain::models::UiText;

/// Delay between a successful login and the navigation home.
pub const LOGIN_REDIRECT_MILLIS: u64 = 1000;

/// Orchestrates login and register submissions: local validation first,
/// then the request, then mapping the outcome onto [`FlowState`]. A failed
/// field validation never issues a request.
pub struct AuthFlow {
    language: Language,
    pub validator: FormValidator,
    pub state: FlowState,
}

impl AuthFlow {
    pub fn new(language: Language) -> AuthFlow {
        return AuthFlow {
            language,
            validator: FormValidator::new(language),
            state: FlowState::Idle,
        };
    }

    /// Returns true when a session was established.
    pub async fn login(
        &mut self,
        api: &dyn FoodApi,
        store: &TokenStore,
        username: &str,
        password: &str,
    ) -> Result<bool> {
        if self.state.is_submitting() {
            return Ok(false);
        }

        self.validator.clear_all_errors();
        self.state = FlowState::Idle;

        if !self.validator.validate_login_form(username, password) {
            return Ok(false);
        }

        self.state = FlowState::Submitting;

        match api.login(username, password).await {
            Ok(body) if body.success => {
                let token = body.access_token.unwrap_or_default();
                let session_username = body.username.unwrap_or_else(|| return username.to_string());

                if let Err(err) = store.set_tokens(&token, &session_username) {
                    tracing::error!(err = ?err, "Failed to persist session");
                    self.state = FlowState::Failed(
                        UiText::GenericError.localized(self.language).to_string(),
                    );
                    return Err(err);
                }

                self.state = FlowState::Succeeded(
                    UiText::LoginSuccess.localized(self.language).to_string(),
                );
                return Ok(true);
            }
            Ok(body) => {
                let message = body.message.unwrap_or_default();
                self.state = FlowState::Failed(self.localize_server_message(&message));
                return Ok(false);
            }
            Err(err) => {
                tracing::error!(err = ?err, "Login request failed");
                self.state = FlowState::Failed(self.transport_message(&err));
                return Ok(false);
            }
        }
    }

    /// Returns true when the account was created and the caller should
    /// switch to the login view. Registration never authenticates.
    pub async fn register(
        &mut self,
        api: &dyn FoodApi,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<bool> {
        if self.state.is_submitting() {
            return Ok(false);
        }

        self.validator.clear_all_errors();
        self.state = FlowState::Idle;

        if !self
            .validator
            .validate_register_form(username, password, confirm_password)
        {
            return Ok(false);
        }

        self.state = FlowState::Submitting;

        match api.register(username, password).await {
            Ok(body) if body.success => {
                self.state = FlowState::Succeeded(
                    UiText::RegisterSuccess.localized(self.language).to_string(),
                );
                return Ok(true);
            }
            Ok(body) => {
                let message = body.message.unwrap_or_default();
                self.state = FlowState::Failed(self.localize_server_message(&message));
                return Ok(false);
            }
            Err(err) => {
                tracing::error!(err = ?err, "Register request failed");
                self.state = FlowState::Failed(self.transport_message(&err));
                return Ok(false);
            }
        }
    }

    /// Known server literals map to their localized equivalents, anything
    /// else passes through verbatim.
    fn localize_server_message(&self, message: &str) -> String {
        if message == "Invalid username or password" {
            return UiText::InvalidCredentials
                .localized(self.language)
                .to_string();
        }
        if message == "Username already exists" {
            return UiText::UsernameExists.localized(self.language).to_string();
        }
        if message.is_empty() {
            return UiText::GenericError.localized(self.language).to_string();
        }

        return message.to_string();
    }

    fn transport_message(&self, err: &ApiError) -> String {
        let text = match err {
            ApiError::RateLimited => UiText::RateLimitError.localized(self.language).to_string(),
            ApiError::Timeout | ApiError::Network => {
                UiText::NetworkError.localized(self.language).to_string()
            }
            ApiError::Server(message) => self.localize_server_message(message),
        };

        return text;
    }
}
