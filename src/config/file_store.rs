//! Config store persisted as a JSON file

use dashmon_core::{
    ConfigStore, ConfigValue, PersistedConfigKey, StoreError, DEFAULT_SCOPE, DEFAULT_SCOPE_ID,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// scope -> scope id -> key path -> value
type ScopeTable = BTreeMap<String, BTreeMap<u32, BTreeMap<String, ConfigValue>>>;

/// [`ConfigStore`] keeping every scope in one pretty-printed JSON file
///
/// The whole table is read on open and rewritten after each change.
#[derive(Debug)]
pub struct JsonFileConfigStore {
    path: PathBuf,
    table: RwLock<ScopeTable>,
}

impl JsonFileConfigStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|err| StoreError::Serialization(err.to_string()))?
        } else {
            log::info!("No config store at {}, starting empty", path.display());
            ScopeTable::new()
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    fn persist(&self, table: &ScopeTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(table)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        std::fs::write(&self.path, content)?;
        log::trace!("Wrote config store {}", self.path.display());
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("file store lock poisoned".to_string())
}

impl ConfigStore for JsonFileConfigStore {
    fn get(&self, key: &PersistedConfigKey) -> Result<Option<ConfigValue>, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table
            .get(DEFAULT_SCOPE)
            .and_then(|ids| ids.get(&DEFAULT_SCOPE_ID))
            .and_then(|values| values.get(key.as_str()))
            .cloned())
    }

    fn set(
        &self,
        key: &PersistedConfigKey,
        value: &ConfigValue,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        let mut updated = table.clone();
        updated
            .entry(scope.to_string())
            .or_default()
            .entry(scope_id)
            .or_default()
            .insert(key.as_str().to_string(), value.clone());
        // Only publish the change once it is on disk
        self.persist(&updated)?;
        *table = updated;
        Ok(())
    }

    fn delete(
        &self,
        key: &PersistedConfigKey,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        let mut updated = table.clone();
        let removed = updated
            .get_mut(scope)
            .and_then(|ids| ids.get_mut(&scope_id))
            .and_then(|values| values.remove(key.as_str()))
            .is_some();
        if removed {
            self.persist(&updated)?;
            *table = updated;
        }
        Ok(())
    }
}
