//! Shared constants for widget configuration and actions

/// Root node of every persisted widget config key
pub const CONFIG_KEY_PREFIX: &str = "widgets/";

/// Action target prefix marking an asynchronous widget callback
pub const CALLBACK_MARKER: &str = "cb:";

/// Built-in config key: render the widget collapsed on page load
pub const CONFIG_START_COLLAPSED: &str = "collapsed";

/// Built-in config key: dashboard display priority (0 = top)
pub const CONFIG_DISPLAY_PRIO: &str = "display_prio";

pub const DEFAULT_START_COLLAPSED: bool = false;
pub const DEFAULT_DISPLAY_PRIO: i64 = 10;

/// Route executing a widget callback
pub const AJAX_CALLBACK_ROUTE: &str = "*/widgetAjax/execCallback";

/// Route re-rendering a single widget
pub const AJAX_REFRESH_ROUTE: &str = "*/widgetAjax/refreshWidget";

/// URL parameter carrying the widget id on ajax routes
pub const WIDGET_ID_PARAM: &str = "widgetId";

/// URL parameter asking for a widget refresh after a callback
pub const REFRESH_AFTER_PARAM: &str = "refreshAfter";

/// Store scope used for all widget config writes
pub const DEFAULT_SCOPE: &str = "default";
pub const DEFAULT_SCOPE_ID: u32 = 0;

pub const DEFAULT_BUTTON_CLASS: &str = "f-right";
pub const BUTTON_TYPE: &str = "button";
