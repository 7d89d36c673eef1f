//! dashmon-types: Shared data types for dashmon dashboard widgets.
//!
//! Pure data: config values and schemas, output rows, charts and button
//! actions. No store or URL handling lives here.

pub mod action;
pub mod config_value;
pub mod output;
pub mod schema;

pub use action::{ButtonAction, OnClick};
pub use config_value::ConfigValue;
pub use output::{ChartSpec, ChartType, OutputRow};
pub use schema::{ConfigEntry, InputKind, Lookup, WidgetConfigSchema};
