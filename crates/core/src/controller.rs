//! Load, save and delete widget config against a store

use crate::constants::{DEFAULT_SCOPE, DEFAULT_SCOPE_ID};
use crate::error::StoreError;
use crate::key::{PersistedConfigKey, WidgetId};
use crate::store::ConfigStore;
use dashmon_types::{ConfigValue, WidgetConfigSchema};
use std::collections::HashMap;

/// Values submitted from a widget config form, keyed by config key
pub type PostedValues = HashMap<String, ConfigValue>;

/// Moves one widget's config between its schema and a [`ConfigStore`]
///
/// Each operation walks the schema entry by entry. A store error aborts
/// the walk; keys already written or deleted stay that way.
pub struct ConfigController<'a> {
    widget_id: &'a WidgetId,
    store: &'a dyn ConfigStore,
}

impl<'a> ConfigController<'a> {
    pub fn new(widget_id: &'a WidgetId, store: &'a dyn ConfigStore) -> Self {
        Self { widget_id, store }
    }

    fn key(&self, config_key: &str) -> PersistedConfigKey {
        PersistedConfigKey::derive(self.widget_id, config_key)
    }

    /// Override schema defaults with stored values.
    ///
    /// Stored values that are not set (empty, zero, false) keep the default.
    pub fn load(&self, schema: &mut WidgetConfigSchema) -> Result<(), StoreError> {
        let mut overridden = 0;
        for entry in schema.iter_mut() {
            let key = self.key(&entry.key);
            match self.store.get(&key)? {
                Some(value) if value.is_set() => {
                    log::debug!("{}: using stored value {}", key, value);
                    entry.value = value;
                    overridden += 1;
                }
                _ => log::trace!("{}: keeping default", key),
            }
        }
        log::info!(
            "Loaded config for {} ({} of {} entries stored)",
            self.widget_id,
            overridden,
            schema.len()
        );
        Ok(())
    }

    /// Write every schema entry, using an empty string for keys missing
    /// from `posted`
    pub fn save(&self, schema: &WidgetConfigSchema, posted: &PostedValues) -> Result<(), StoreError> {
        let empty = ConfigValue::empty();
        for entry in schema {
            let key = self.key(&entry.key);
            let value = posted.get(&entry.key).unwrap_or(&empty);
            log::debug!("{}: saving {}", key, value);
            self.store.set(&key, value, DEFAULT_SCOPE, DEFAULT_SCOPE_ID)?;
        }
        log::info!("Saved {} config entries for {}", schema.len(), self.widget_id);
        Ok(())
    }

    /// Remove every schema entry from the store
    pub fn delete(&self, schema: &WidgetConfigSchema) -> Result<(), StoreError> {
        for entry in schema {
            let key = self.key(&entry.key);
            log::debug!("{}: deleting", key);
            self.store.delete(&key, DEFAULT_SCOPE, DEFAULT_SCOPE_ID)?;
        }
        log::info!("Deleted {} config entries for {}", schema.len(), self.widget_id);
        Ok(())
    }
}
