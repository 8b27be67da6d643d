//! Page startup and event handlers
//!
//! The host calls [`initialize`] once the page structure is ready. It
//! applies the stored theme a single time and hands back the handlers the
//! host wires to the theme selector and the edit-profile form.

use app_core::{FormSurface, FormValidator, SubmitDecision, SubmitEvent};
use app_ui::{AppliedTheme, DisplayAdapter, ThemeController, ThemeError};
use std::sync::Arc;
use storage::SettingsService;

use crate::config::PortalConfig;

/// Handlers registered for the lifetime of a page
pub struct PageHandlers {
    theme: ThemeController,
    form: FormValidator,
    initial_theme: AppliedTheme,
}

/// Run page-ready setup and return the page's event handlers
///
/// Applies the stored theme to `display` before returning.
pub fn initialize(
    settings: Arc<dyn SettingsService>,
    display: &mut dyn DisplayAdapter,
    config: &PortalConfig,
) -> PageHandlers {
    let theme = ThemeController::with_config(settings, config.theme.clone());
    let form = FormValidator::with_config(config.form.clone());

    let initial_theme = theme.apply_theme(display);
    tracing::info!(theme = %initial_theme.preference, "Page initialized");

    PageHandlers { theme, form, initial_theme }
}

impl PageHandlers {
    /// Theme applied when the page became ready
    pub fn initial_theme(&self) -> &AppliedTheme {
        &self.initial_theme
    }

    /// Theme controller, for hosts that re-apply on their own triggers
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Form validator
    pub fn form(&self) -> &FormValidator {
        &self.form
    }

    /// Handler for the theme selector's save action
    pub fn on_save_theme(
        &self,
        display: &mut dyn DisplayAdapter,
    ) -> Result<AppliedTheme, ThemeError> {
        self.theme.save_theme(display)
    }

    /// Handler for submissions of the edit-profile form
    pub fn on_submit(
        &self,
        form: &mut dyn FormSurface,
        event: &mut dyn SubmitEvent,
    ) -> SubmitDecision {
        self.form.handle_submit(form, event)
    }
}
