//! Guide Portal page behaviours
//!
//! Wires the theme controller and the edit-profile form validator for a
//! hosting application: load [`PortalConfig`], open the settings service,
//! install tracing, then call [`initialize`] once the page is ready.
//!
//! # Example
//!
//! ```rust
//! use guide_portal::{initialize, PortalConfig};
//! use app_ui::StaticDisplay;
//!
//! let config = PortalConfig::from_json("{}").unwrap();
//! let settings = config.open_settings().unwrap();
//! let mut display = StaticDisplay::new("rgb(255, 255, 255)");
//!
//! let handlers = initialize(settings, &mut display, &config);
//! assert_eq!(handlers.initial_theme().preference.as_str(), "light");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod page;

pub use config::{PortalConfig, StorageConfig};
pub use page::{initialize, PageHandlers};

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured filter. Fails if a subscriber is
/// already installed.
pub fn init_tracing(config: &PortalConfig) -> anyhow::Result<()> {
    let fallback = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
