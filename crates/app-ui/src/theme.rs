//! Theme controller for Guide Portal pages
//!
//! Applies the user's stored theme to the page root and keeps body text
//! readable against whatever background that theme renders.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use app_ui::display::StaticDisplay;
//! use app_ui::theme::ThemeController;
//! use app_ui::color::TextColor;
//! use storage::MemoryStore;
//!
//! let controller = ThemeController::new(Arc::new(MemoryStore::new()));
//! let mut display = StaticDisplay::new("rgb(255, 255, 255)");
//!
//! let applied = controller.apply_theme(&mut display);
//! assert_eq!(applied.preference.as_str(), "light");
//! assert_eq!(applied.text_color, TextColor::Black);
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{KvError, SettingsService, THEME_KEY};
use thiserror::Error;

use crate::color::{brightness_of, TextColor, DEFAULT_FALLBACK_BRIGHTNESS};
use crate::display::DisplayAdapter;

/// Theme used when nothing readable is stored
pub const DEFAULT_THEME: &str = "light";

/// Theme operation error types
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Preference store error
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

// =============================================================================
// Theme Preference
// =============================================================================

/// The user's chosen theme identifier
///
/// The set of names is open: whatever the selector offers is accepted and
/// handed to the page as its appearance class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemePreference(String);

impl ThemePreference {
    /// Create a preference from a theme name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The theme name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_string())
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemePreference {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ThemePreference {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Theme controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Settings slot holding the preference
    pub storage_key: String,
    /// Theme applied when the slot is empty or unreadable
    pub default_theme: ThemePreference,
    /// Brightness assumed when the background cannot be read
    pub fallback_brightness: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_KEY.to_string(),
            default_theme: ThemePreference::default(),
            fallback_brightness: DEFAULT_FALLBACK_BRIGHTNESS,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Outcome of applying a theme to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    /// Theme set as the appearance class
    pub preference: ThemePreference,
    /// Text color chosen for the rendered background
    pub text_color: TextColor,
}

/// Applies and persists the page theme
pub struct ThemeController {
    settings: Arc<dyn SettingsService>,
    config: ThemeConfig,
}

impl ThemeController {
    /// Create a controller with the default configuration
    pub fn new(settings: Arc<dyn SettingsService>) -> Self {
        Self::with_config(settings, ThemeConfig::default())
    }

    /// Create a controller with a custom configuration
    pub fn with_config(settings: Arc<dyn SettingsService>, config: ThemeConfig) -> Self {
        Self { settings, config }
    }

    /// Controller configuration
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Effective theme preference
    ///
    /// Missing, empty or unreadable values resolve to the default theme.
    pub fn current_preference(&self) -> ThemePreference {
        match self.settings.get(&self.config.storage_key) {
            Ok(Some(name)) if !name.is_empty() => ThemePreference::from(name),
            Ok(_) => self.config.default_theme.clone(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference, using default: {}", e);
                self.config.default_theme.clone()
            }
        }
    }

    /// Apply the stored theme to the page, then fix up the text color
    pub fn apply_theme(&self, display: &mut dyn DisplayAdapter) -> AppliedTheme {
        let preference = self.current_preference();
        display.set_appearance_class(preference.as_str());
        let text_color = self.adjust_text_color(display);

        tracing::debug!(theme = %preference, text = %text_color, "Applied theme");
        AppliedTheme { preference, text_color }
    }

    /// Pick white or black text from the rendered background brightness
    pub fn adjust_text_color(&self, display: &mut dyn DisplayAdapter) -> TextColor {
        let background = display.background_color();
        let brightness = brightness_of(&background, self.config.fallback_brightness);
        let text_color = TextColor::for_brightness(brightness);

        display.set_text_color(text_color);
        text_color
    }

    /// Store the theme chosen in the selector and apply it immediately
    ///
    /// Without a selector on the page nothing is stored and the current
    /// theme is re-applied.
    pub fn save_theme(&self, display: &mut dyn DisplayAdapter) -> Result<AppliedTheme> {
        match display.selected_theme() {
            Some(theme) => {
                self.settings.set(&self.config.storage_key, &theme)?;
                tracing::debug!(theme = %theme, "Saved theme preference");
            }
            None => tracing::warn!("No theme selector on page, nothing saved"),
        }
        Ok(self.apply_theme(display))
    }

    /// Forget the stored theme and fall back to the default
    pub fn reset_theme(&self, display: &mut dyn DisplayAdapter) -> Result<AppliedTheme> {
        self.settings.remove(&self.config.storage_key)?;
        Ok(self.apply_theme(display))
    }
}
