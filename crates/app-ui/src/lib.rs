//! User interface behaviours for Guide Portal
//!
//! This crate keeps page text readable across themes: it parses the
//! rendered background, computes its perceived brightness and switches the
//! text between white and black.
//!
//! # Modules
//!
//! - [`color`] - Color parsing, perceived brightness, text color choice
//! - [`display`] - Adapter trait over the rendered page root
//! - [`theme`] - Theme preference and the theme controller
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_ui::{StaticDisplay, TextColor, ThemeController};
//! use storage::{MemoryStore, SettingsService, THEME_KEY};
//!
//! let settings = Arc::new(MemoryStore::new());
//! settings.set(THEME_KEY, "dark").unwrap();
//!
//! let controller = ThemeController::new(settings);
//! let mut display = StaticDisplay::new("rgb(255, 255, 255)")
//!     .with_background("dark", "rgb(20, 20, 20)");
//!
//! let applied = controller.apply_theme(&mut display);
//! assert_eq!(applied.text_color, TextColor::White);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod display;
pub mod theme;

// Re-export commonly used types
pub use color::{brightness_of, ComputedBackground, Rgb, TextColor};
pub use display::{DisplayAdapter, StaticDisplay, THEME_SELECTOR_ID};
pub use theme::{AppliedTheme, ThemeConfig, ThemeController, ThemeError, ThemePreference};
