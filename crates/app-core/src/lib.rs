//! Core application logic for Guide Portal
//!
//! This crate contains the client-side checks run when a user submits the
//! edit-profile form.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod form;
pub mod validation;

pub use form::{FormConfig, FormSurface, FormValidator, SubmitDecision, SubmitEvent};
pub use validation::{validate_email, validate_password, FormCredentials, ValidationError};
