//! Config store abstraction and an in-memory implementation

use crate::constants::{DEFAULT_SCOPE, DEFAULT_SCOPE_ID};
use crate::error::StoreError;
use crate::key::PersistedConfigKey;
use dashmon_types::ConfigValue;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Scoped key/value persistence for widget configuration
///
/// Reads always resolve against the default scope. Scope and scope id
/// are passed through by callers; the widget core never varies them.
pub trait ConfigStore: Send + Sync {
    /// Fetch a value; `Ok(None)` when nothing is stored
    fn get(&self, key: &PersistedConfigKey) -> Result<Option<ConfigValue>, StoreError>;

    fn set(
        &self,
        key: &PersistedConfigKey,
        value: &ConfigValue,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError>;

    /// Remove a value; removing a missing key is not an error
    fn delete(&self, key: &PersistedConfigKey, scope: &str, scope_id: u32)
        -> Result<(), StoreError>;
}

/// Storage slot of one value: scope, scope id, key path
pub type ScopedSlot = (String, u32, String);

/// Volatile store, mainly for tests and previews
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: RwLock<BTreeMap<ScopedSlot, ConfigValue>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all scopes
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of everything stored, ordered by slot
    pub fn snapshot(&self) -> BTreeMap<ScopedSlot, ConfigValue> {
        self.values.read().map(|v| v.clone()).unwrap_or_default()
    }
}

fn slot(key: &PersistedConfigKey, scope: &str, scope_id: u32) -> ScopedSlot {
    (scope.to_string(), scope_id, key.as_str().to_string())
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &PersistedConfigKey) -> Result<Option<ConfigValue>, StoreError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(&slot(key, DEFAULT_SCOPE, DEFAULT_SCOPE_ID)).cloned())
    }

    fn set(
        &self,
        key: &PersistedConfigKey,
        value: &ConfigValue,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(slot(key, scope, scope_id), value.clone());
        Ok(())
    }

    fn delete(
        &self,
        key: &PersistedConfigKey,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.remove(&slot(key, scope, scope_id));
        Ok(())
    }
}
