//! Widget identity and persisted config key derivation

use crate::constants::CONFIG_KEY_PREFIX;
use crate::error::WidgetError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Identifies a widget type; namespace of all its config keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WidgetId(Cow<'static, str>);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Result<Self, WidgetError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(WidgetError::EmptyId);
        }
        Ok(Self(Cow::Owned(id)))
    }

    /// Compile-time widget id, for use in `const` items
    pub const fn from_static(id: &'static str) -> Self {
        assert!(!id.is_empty(), "widget id must not be empty");
        Self(Cow::Borrowed(id))
    }

    /// Id derived from a Rust type path, `a::b::Type` becoming `a_b_Type`.
    ///
    /// `std::any::type_name` is not guaranteed stable across compiler
    /// releases, so widgets with persisted config should prefer
    /// [`WidgetId::from_static`].
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Owned(std::any::type_name::<T>().replace("::", "_")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully qualified store key of one widget config entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersistedConfigKey(String);

impl PersistedConfigKey {
    /// `widgets/` followed by `<widget id>_<config key>`, lowercased, with
    /// every underscore turned into a path separator.
    ///
    /// Existing stores were written with this exact layout.
    pub fn derive(widget_id: &WidgetId, config_key: &str) -> Self {
        let path = format!("{}_{}", widget_id, config_key)
            .replace('_', "/")
            .to_lowercase();
        Self(format!("{}{}", CONFIG_KEY_PREFIX, path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersistedConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersistedConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let id = WidgetId::from_static("Vendor_Monitoring_Model_Widget_System");
        let key = PersistedConfigKey::derive(&id, "collapsed");
        assert_eq!(
            key.as_str(),
            "widgets/vendor/monitoring/model/widget/system/collapsed"
        );
    }

    #[test]
    fn test_key_underscores_in_config_key() {
        let id = WidgetId::from_static("Acme_Cache");
        let key = PersistedConfigKey::derive(&id, "display_prio");
        assert_eq!(key.as_str(), "widgets/acme/cache/display/prio");
    }

    #[test]
    fn test_key_lowercases_config_key() {
        let id = WidgetId::from_static("Stats");
        let key = PersistedConfigKey::derive(&id, "MaxRows");
        assert_eq!(key.as_str(), "widgets/stats/maxrows");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(WidgetId::new(""), Err(WidgetError::EmptyId)));
        assert!(matches!(WidgetId::new("  "), Err(WidgetError::EmptyId)));
        assert_eq!(WidgetId::new("Acme").unwrap().as_str(), "Acme");
    }

    #[test]
    fn test_id_from_type_path() {
        struct Probe;
        let id = WidgetId::of::<Probe>();
        assert!(!id.as_str().contains("::"));
        assert!(id.as_str().ends_with("_Probe"));
        assert_eq!(id, WidgetId::of::<Probe>());
    }
}
