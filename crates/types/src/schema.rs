//! Widget configuration schema types

use crate::config_value::ConfigValue;
use serde::{Deserialize, Serialize};

/// Form input used to edit a config entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Checkbox,
    Textarea,
    Select,
    Password,
}

/// One named, typed, labeled setting belonging to a widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub label: String,
    pub value: ConfigValue,
    #[serde(rename = "type")]
    pub input_kind: InputKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub tooltip: Option<String>,
}

/// Result of looking up a config key
///
/// Absent keys are a normal outcome, not an error, and must not be
/// confused with a stored value that happens to be empty or zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

/// Ordered set of config entries for one widget
///
/// Insertion order is display order. Re-adding an existing key replaces
/// the entry in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetConfigSchema {
    entries: Vec<ConfigEntry>,
}

impl WidgetConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry, keeping its original position
    pub fn add_config(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<ConfigValue>,
        input_kind: InputKind,
        required: bool,
        tooltip: Option<&str>,
    ) -> &mut Self {
        let entry = ConfigEntry {
            key: key.into(),
            label: label.into(),
            value: default.into(),
            input_kind,
            required,
            tooltip: tooltip.map(str::to_string),
        };
        self.insert(entry)
    }

    /// Insert or overwrite a prepared entry
    pub fn insert(&mut self, entry: ConfigEntry) -> &mut Self {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn entry(&self, key: &str) -> Lookup<&ConfigEntry> {
        self.entries.iter().find(|e| e.key == key).into()
    }

    pub fn value(&self, key: &str) -> Lookup<&ConfigValue> {
        self.entry(key).map(|e| &e.value)
    }

    /// Replace the value of an existing entry; returns false if the key is unknown
    pub fn set_value(&mut self, key: &str, value: ConfigValue) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ConfigEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WidgetConfigSchema {
    type Item = &'a ConfigEntry;
    type IntoIter = std::slice::Iter<'a, ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
