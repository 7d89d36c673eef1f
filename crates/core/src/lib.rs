//! dashmon-core: Widget configuration and action dispatch for dashmon.
//!
//! This crate contains the [`Widget`] trait and its [`WidgetCore`] state,
//! config key derivation, the store and URL seams, and the logic turning
//! button targets into navigation or callback actions.

mod action_link;
pub mod constants;
mod controller;
mod error;
mod key;
mod store;
mod url;
mod widget;

pub use action_link::ActionLinkBuilder;
pub use constants::{
    AJAX_CALLBACK_ROUTE, AJAX_REFRESH_ROUTE, CALLBACK_MARKER, CONFIG_DISPLAY_PRIO,
    CONFIG_KEY_PREFIX, CONFIG_START_COLLAPSED, DEFAULT_DISPLAY_PRIO, DEFAULT_SCOPE,
    DEFAULT_SCOPE_ID, DEFAULT_START_COLLAPSED,
};
pub use controller::{ConfigController, PostedValues};
pub use error::{StoreError, WidgetError};
pub use key::{PersistedConfigKey, WidgetId};
pub use store::{ConfigStore, MemoryConfigStore, ScopedSlot};
pub use url::{param_is_truthy, widget_url, RouteUrlResolver, UrlParams, UrlResolver};
pub use widget::{add_base_config, BoxedWidget, Widget, WidgetContext, WidgetCore};

// Re-export types used in trait signatures for convenience
pub use dashmon_types::{
    ButtonAction, ChartSpec, ChartType, ConfigEntry, ConfigValue, InputKind, Lookup, OnClick,
    OutputRow, WidgetConfigSchema,
};
