//! dashmon: configurable widgets for an administrative monitoring dashboard
//!
//! This library provides:
//! - Settings and a JSON file-backed widget config store
//! - Built-in system widgets
//! - Serializable widget views for the admin UI

pub mod config;
pub mod view;
pub mod widgets;

// Re-export commonly used types
pub use config::{AppSettings, JsonFileConfigStore};
pub use dashmon_core::{Widget, WidgetContext, WidgetCore};
pub use view::WidgetView;
