//! Storage layer for Guide Portal
//!
//! This crate provides the preference store behind the page behaviours:
//! a sled-backed key-value store and the settings service trait that
//! theme handling reads and writes through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod settings;

pub use kv::{KvConfig, KvError, KvStore, OriginStore};
pub use settings::{MemoryStore, SettingsService, THEME_KEY};
