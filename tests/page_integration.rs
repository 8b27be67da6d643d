//! Page Integration Tests
//!
//! End-to-end tests for page startup, theme persistence across page loads,
//! and edit-profile form submissions.

use app_core::{FormSurface, SubmitDecision, SubmitEvent, ValidationError};
use app_ui::{StaticDisplay, TextColor};
use guide_portal::{initialize, PortalConfig};
use std::collections::HashMap;
use std::sync::Arc;
use storage::{KvConfig, KvStore, MemoryStore, OriginStore, SettingsService, THEME_KEY};
use tempfile::TempDir;

struct ProfileForm {
    fields: HashMap<String, String>,
    alerts: Vec<String>,
}

impl ProfileForm {
    fn new(email: &str, password: &str) -> Self {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), email.to_string());
        fields.insert("password".to_string(), password.to_string());
        Self { fields, alerts: Vec::new() }
    }
}

impl FormSurface for ProfileForm {
    fn field_value(&self, field_id: &str) -> Option<String> {
        self.fields.get(field_id).cloned()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[derive(Default)]
struct Submit {
    prevented: bool,
}

impl SubmitEvent for Submit {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }
}

fn styled_page() -> StaticDisplay {
    StaticDisplay::new("rgb(255, 255, 255)")
        .with_background("dark", "rgb(24, 24, 27)")
        .with_background("midnight", "#0B1026")
        .with_background("glass", "rgba(0, 0, 0, 0)")
}

fn disk_config(dir: &TempDir) -> PortalConfig {
    let mut config = PortalConfig::default();
    config.storage.path = Some(dir.path().join("prefs.db"));
    config.storage.origin = "https://guides.example".to_string();
    config.storage.flush_every_ms = None;
    config
}

/// A saved theme is applied on the next page load
#[test]
fn test_theme_survives_page_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config = disk_config(&temp_dir);

    // First load: nothing stored, user picks a dark theme
    {
        let mut page = styled_page();
        let handlers = initialize(config.open_settings().unwrap(), &mut page, &config);
        assert_eq!(handlers.initial_theme().preference.as_str(), "light");
        assert_eq!(page.text_color(), Some(TextColor::Black));

        page.select_theme("midnight");
        let applied = handlers.on_save_theme(&mut page).unwrap();
        assert_eq!(applied.text_color, TextColor::White);
    }

    // Second load: stored theme is applied at startup
    {
        let mut page = styled_page();
        let handlers = initialize(config.open_settings().unwrap(), &mut page, &config);
        assert_eq!(handlers.initial_theme().preference.as_str(), "midnight");
        assert_eq!(page.class(), "midnight");
        assert_eq!(page.text_color(), Some(TextColor::White));
    }
}

/// A stored value that is not a string falls back to the default theme
#[test]
fn test_malformed_stored_theme_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let config = disk_config(&temp_dir);

    {
        let path = config.storage.path.clone().unwrap();
        let kv = KvStore::new(KvConfig::new(path.to_string_lossy()).flush_every_ms(None)).unwrap();
        let kv = Arc::new(kv);
        OriginStore::new(kv.clone(), "https://guides.example").set(THEME_KEY, &42u32).unwrap();
        kv.flush().unwrap();
    }

    let mut page = styled_page();
    let handlers = initialize(config.open_settings().unwrap(), &mut page, &config);

    assert_eq!(handlers.initial_theme().preference.as_str(), "light");
    assert_eq!(page.class(), "light");
    assert_eq!(page.text_color(), Some(TextColor::Black));
}

/// A transparent background resolves to black text
#[test]
fn test_transparent_background_uses_black_text() {
    let settings = Arc::new(MemoryStore::with_slots([(THEME_KEY, "glass")]));
    let mut page = styled_page();

    let handlers = initialize(settings, &mut page, &PortalConfig::default());

    assert_eq!(handlers.initial_theme().text_color, TextColor::Black);
}

/// Saving the same selection repeatedly leaves the page in the same state
#[test]
fn test_repeated_save_is_idempotent() {
    let settings = Arc::new(MemoryStore::new());
    let mut page = styled_page();
    let handlers = initialize(settings.clone(), &mut page, &PortalConfig::default());

    page.select_theme("dark");
    let first = handlers.on_save_theme(&mut page).unwrap();
    let first_class = page.class().to_string();

    for _ in 0..3 {
        let again = handlers.on_save_theme(&mut page).unwrap();
        assert_eq!(again, first);
        assert_eq!(handlers.theme().apply_theme(&mut page), first);
    }

    assert_eq!(page.class(), first_class);
    assert_eq!(settings.get(THEME_KEY).unwrap(), Some("dark".to_string()));
}

/// Form submissions are blocked or allowed according to the field rules
#[test]
fn test_profile_form_submissions() {
    let mut page = styled_page();
    let handlers = initialize(Arc::new(MemoryStore::new()), &mut page, &PortalConfig::default());

    let cases = [
        ("a@b.co", "", None),
        ("a@b.co", "Abcdefg1", None),
        ("not-an-email", "", Some(ValidationError::InvalidEmailFormat)),
        ("a@b", "Abcdefg1", Some(ValidationError::InvalidEmailFormat)),
        ("a@b.co", "abcdefgh", Some(ValidationError::WeakPassword)),
        ("bad", "bad", Some(ValidationError::InvalidEmailFormat)),
    ];

    for (email, password, expected) in cases {
        let mut form = ProfileForm::new(email, password);
        let mut event = Submit::default();

        let decision = handlers.on_submit(&mut form, &mut event);

        match expected {
            None => {
                assert_eq!(decision, SubmitDecision::Allowed, "{email} / {password}");
                assert!(!event.prevented);
                assert!(form.alerts.is_empty());
            }
            Some(reason) => {
                assert_eq!(decision, SubmitDecision::Blocked(reason), "{email} / {password}");
                assert!(event.prevented);
                assert_eq!(form.alerts, vec![reason.to_string()]);
            }
        }
    }
}

/// Theme handling and form handling do not affect each other
#[test]
fn test_form_submission_leaves_theme_alone() {
    let settings = Arc::new(MemoryStore::with_slots([(THEME_KEY, "dark")]));
    let mut page = styled_page();
    let handlers = initialize(settings.clone(), &mut page, &PortalConfig::default());

    let mut form = ProfileForm::new("not-an-email", "");
    let mut event = Submit::default();
    handlers.on_submit(&mut form, &mut event);

    assert_eq!(page.class(), "dark");
    assert_eq!(settings.get(THEME_KEY).unwrap(), Some("dark".to_string()));
}
