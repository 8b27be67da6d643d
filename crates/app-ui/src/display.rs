//! Rendering adapter between the theme controller and the page
//!
//! The controller never touches a live document. Hosts implement
//! [`DisplayAdapter`] over whatever renders the page (a browser binding, a
//! webview, a test double).

use crate::color::TextColor;

/// Element id of the theme selector control
pub const THEME_SELECTOR_ID: &str = "theme";

/// Narrow view of the page root used for theming
#[cfg_attr(test, mockall::automock)]
pub trait DisplayAdapter {
    /// Background color of the page root as currently rendered
    ///
    /// This is the resolved value (e.g. `rgb(255, 255, 255)`), not the raw
    /// style declaration.
    fn background_color(&self) -> String;

    /// Set the text color of the page root
    fn set_text_color(&mut self, color: TextColor);

    /// Replace the appearance class of the page root
    fn set_appearance_class(&mut self, class: &str);

    /// Value of the theme selector control, `None` if the page has none
    fn selected_theme(&self) -> Option<String>;
}

/// In-memory page root for hosts without a renderer
///
/// Backgrounds are looked up per appearance class, so switching class
/// changes what [`DisplayAdapter::background_color`] reports the way a
/// stylesheet would.
#[derive(Debug, Clone, Default)]
pub struct StaticDisplay {
    backgrounds: Vec<(String, String)>,
    default_background: String,
    class: String,
    text_color: Option<TextColor>,
    selected: Option<String>,
}

impl StaticDisplay {
    /// Create a display whose background is `default_background` for every class
    pub fn new(default_background: impl Into<String>) -> Self {
        Self { default_background: default_background.into(), ..Default::default() }
    }

    /// Register the resolved background for an appearance class
    pub fn with_background(mut self, class: impl Into<String>, color: impl Into<String>) -> Self {
        self.backgrounds.push((class.into(), color.into()));
        self
    }

    /// Set the theme selector's current value
    pub fn select_theme(&mut self, theme: impl Into<String>) {
        self.selected = Some(theme.into());
    }

    /// Current appearance class
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Current text color, `None` until the first adjustment
    pub fn text_color(&self) -> Option<TextColor> {
        self.text_color
    }
}

impl DisplayAdapter for StaticDisplay {
    fn background_color(&self) -> String {
        self.backgrounds
            .iter()
            .find(|(class, _)| *class == self.class)
            .map(|(_, color)| color.clone())
            .unwrap_or_else(|| self.default_background.clone())
    }

    fn set_text_color(&mut self, color: TextColor) {
        self.text_color = Some(color);
    }

    fn set_appearance_class(&mut self, class: &str) {
        self.class = class.to_string();
    }

    fn selected_theme(&self) -> Option<String> {
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_display_background_per_class() {
        let mut display = StaticDisplay::new("rgb(255, 255, 255)")
            .with_background("dark", "rgb(16, 16, 16)");

        assert_eq!(display.background_color(), "rgb(255, 255, 255)");

        display.set_appearance_class("dark");
        assert_eq!(display.class(), "dark");
        assert_eq!(display.background_color(), "rgb(16, 16, 16)");

        display.set_appearance_class("sepia");
        assert_eq!(display.background_color(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_static_display_text_color() {
        let mut display = StaticDisplay::new("rgb(0, 0, 0)");
        assert_eq!(display.text_color(), None);

        display.set_text_color(TextColor::White);
        assert_eq!(display.text_color(), Some(TextColor::White));
    }

    #[test]
    fn test_static_display_selector() {
        let mut display = StaticDisplay::new("rgb(0, 0, 0)");
        assert_eq!(display.selected_theme(), None);

        display.select_theme("dark");
        assert_eq!(display.selected_theme(), Some("dark".to_string()));
    }
}
