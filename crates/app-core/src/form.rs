//! Submit-time validation of the edit-profile form
//!
//! A submission moves `Idle → Submitted → {Blocked, Allowed}`. On
//! `Blocked` the event's default action is canceled and exactly one
//! blocking alert is raised. On `Allowed` nothing is touched and the host
//! lets the submission proceed.

use serde::{Deserialize, Serialize};

use crate::validation::{FormCredentials, ValidationError};

/// Page elements the validator reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Id of the form whose submissions are intercepted
    pub form_id: String,
    /// Id of the email input
    pub email_field: String,
    /// Id of the password input
    pub password_field: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "editProfileForm".to_string(),
            email_field: "email".to_string(),
            password_field: "password".to_string(),
        }
    }
}

/// The form as seen by the validator
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface {
    /// Current value of an input, `None` if the page has no such input
    fn field_value(&self, field_id: &str) -> Option<String>;

    /// Show a blocking message and wait for the user to dismiss it
    fn alert(&mut self, message: &str);
}

/// A cancelable submit event
#[cfg_attr(test, mockall::automock)]
pub trait SubmitEvent {
    /// Cancel the browser's default submit action
    fn prevent_default(&mut self);
}

/// Result of handling one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Default action proceeds
    Allowed,
    /// Default action canceled, user told why
    Blocked(ValidationError),
}

impl SubmitDecision {
    /// Whether the submission was stopped
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitDecision::Blocked(_))
    }
}

/// Intercepts edit-profile submissions
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    config: FormConfig,
}

impl FormValidator {
    /// Create a validator for the default form layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for a custom form layout
    pub fn with_config(config: FormConfig) -> Self {
        Self { config }
    }

    /// Form layout this validator reads
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Read the credentials currently entered in the form
    ///
    /// Missing inputs read as empty.
    pub fn read_credentials(&self, form: &dyn FormSurface) -> FormCredentials {
        FormCredentials {
            email: form.field_value(&self.config.email_field).unwrap_or_default(),
            password: form.field_value(&self.config.password_field).unwrap_or_default(),
        }
    }

    /// Handle a submit event
    pub fn handle_submit(
        &self,
        form: &mut dyn FormSurface,
        event: &mut dyn SubmitEvent,
    ) -> SubmitDecision {
        let credentials = self.read_credentials(form);

        match credentials.validate() {
            Ok(()) => {
                tracing::debug!(form = %self.config.form_id, "Submission allowed");
                SubmitDecision::Allowed
            }
            Err(reason) => {
                tracing::debug!(form = %self.config.form_id, ?reason, "Submission blocked");
                form.alert(&reason.to_string());
                event.prevent_default();
                SubmitDecision::Blocked(reason)
            }
        }
    }
}
