//! Built-in widgets

mod memory;
mod system_info;

pub use memory::MemoryWidget;
pub use system_info::SystemInfoWidget;

use anyhow::{anyhow, Result};
use dashmon_core::{BoxedWidget, WidgetContext};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use sysinfo::System;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Shared sysinfo::System instance for all built-in widgets.
static SHARED_SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| {
    log::info!("Creating shared sysinfo::System instance");
    Mutex::new(System::new())
});

fn shared_system() -> Result<MutexGuard<'static, System>> {
    SHARED_SYSTEM
        .lock()
        .map_err(|_| anyhow!("shared system info lock poisoned"))
}

/// Short names accepted by [`create`]
pub const BUILTIN_WIDGETS: &[&str] = &["memory", "system"];

/// Create a built-in widget by short name
pub fn create(name: &str, context: WidgetContext) -> Result<BoxedWidget> {
    match name {
        "memory" => Ok(Box::new(MemoryWidget::new(context))),
        "system" => Ok(Box::new(SystemInfoWidget::new(context))),
        _ => Err(anyhow!(
            "Unknown widget: {} (expected one of: {})",
            name,
            BUILTIN_WIDGETS.join(", ")
        )),
    }
}

/// Create every built-in widget, in declaration order
pub fn create_all(context: &WidgetContext) -> Result<Vec<(&'static str, BoxedWidget)>> {
    BUILTIN_WIDGETS
        .iter()
        .map(|name| -> Result<(&'static str, BoxedWidget)> {
            Ok((*name, create(name, context.clone())?))
        })
        .collect()
}
