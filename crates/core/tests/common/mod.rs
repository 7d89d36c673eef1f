#![allow(dead_code)]

use anyhow::Result;
use dashmon_core::{
    add_base_config, ConfigStore, ConfigValue, InputKind, MemoryConfigStore, PersistedConfigKey,
    RouteUrlResolver, StoreError, Widget, WidgetConfigSchema, WidgetContext, WidgetCore, WidgetId,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const STATS_ID: WidgetId = WidgetId::from_static("Acme_Stats");

pub fn context(store: Arc<dyn ConfigStore>) -> WidgetContext {
    WidgetContext::new(store, Arc::new(RouteUrlResolver::new("http://localhost/admin")))
}

pub fn memory_context() -> (Arc<MemoryConfigStore>, WidgetContext) {
    let store = Arc::new(MemoryConfigStore::new());
    let ctx = context(store.clone());
    (store, ctx)
}

/// Widget declaring one extra entry and counting `init_config` calls
pub struct StatsWidget {
    core: WidgetCore,
    pub init_calls: Arc<AtomicUsize>,
    keep_base: bool,
}

impl StatsWidget {
    pub fn new(context: WidgetContext) -> Self {
        Self {
            core: WidgetCore::new(STATS_ID, "Stats", context),
            init_calls: Arc::new(AtomicUsize::new(0)),
            keep_base: true,
        }
    }

    /// Variant that leaves out the built-in entries
    pub fn without_base(context: WidgetContext) -> Self {
        Self {
            keep_base: false,
            ..Self::new(context)
        }
    }

    pub fn init_count(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

impl Widget for StatsWidget {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn init_config(&self, schema: &mut WidgetConfigSchema) {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if self.keep_base {
            add_base_config(schema);
        }
        schema.add_config(
            "threshold",
            "Warning threshold",
            "",
            InputKind::Text,
            false,
            Some("Percent"),
        );
    }

    fn render(&mut self) -> Result<()> {
        self.core
            .add_row("stats_hits", "Hits", Some("42"), None)
            .add_row("stats_misses", "Misses", Some("7"), None)
            .add_button("stats_reset", "Reset", "cb:reset", None, Some("Reset?"), None);
        Ok(())
    }

    fn exec_callback(&mut self, callback: &str) -> Result<Option<String>> {
        match callback {
            "reset" => Ok(Some("Stats reset".to_string())),
            _ => Err(dashmon_core::WidgetError::UnknownCallback {
                widget: self.id().to_string(),
                callback: callback.to_string(),
            }
            .into()),
        }
    }
}

/// Widget relying entirely on trait defaults
pub struct PlainWidget {
    core: WidgetCore,
}

impl PlainWidget {
    pub fn new(context: WidgetContext) -> Self {
        Self {
            core: WidgetCore::new(WidgetId::of::<PlainWidget>(), "Plain", context),
        }
    }
}

impl Widget for PlainWidget {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn render(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Store wrapper that fails every write after `writes_allowed` successes
/// and every read when `fail_reads` is set
pub struct FailingStore {
    pub inner: MemoryConfigStore,
    writes_allowed: usize,
    writes: AtomicUsize,
    fail_reads: bool,
}

impl FailingStore {
    pub fn failing_writes_after(writes_allowed: usize) -> Self {
        Self {
            inner: MemoryConfigStore::new(),
            writes_allowed,
            writes: AtomicUsize::new(0),
            fail_reads: false,
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::failing_writes_after(usize::MAX)
        }
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.writes.fetch_add(1, Ordering::SeqCst) >= self.writes_allowed {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }
}

impl ConfigStore for FailingStore {
    fn get(&self, key: &PersistedConfigKey) -> Result<Option<ConfigValue>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        self.inner.get(key)
    }

    fn set(
        &self,
        key: &PersistedConfigKey,
        value: &ConfigValue,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError> {
        self.check_write()?;
        self.inner.set(key, value, scope, scope_id)
    }

    fn delete(
        &self,
        key: &PersistedConfigKey,
        scope: &str,
        scope_id: u32,
    ) -> Result<(), StoreError> {
        self.check_write()?;
        self.inner.delete(key, scope, scope_id)
    }
}
