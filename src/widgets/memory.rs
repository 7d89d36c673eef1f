//! Memory (RAM and swap) widget

use super::{shared_system, BYTES_PER_GB, BYTES_PER_MB};
use anyhow::Result;
use dashmon_core::{
    add_base_config, ChartSpec, ChartType, ConfigValue, InputKind, UrlParams, Widget, WidgetConfigSchema,
    WidgetContext, WidgetCore, WidgetError, WidgetId,
};
use serde_json::json;

const WIDGET_ID: WidgetId = WidgetId::from_static("Dashmon_Widget_Memory");

const CONFIG_UNIT: &str = "unit";
const CONFIG_WARN_PERCENT: &str = "warn_percent";
const DEFAULT_WARN_PERCENT: i64 = 90;

const CALLBACK_REFRESH: &str = "refreshStats";

/// Snapshot of memory counters, in bytes
#[derive(Debug, Clone, Copy, Default)]
struct MemoryStats {
    total: u64,
    used: u64,
    total_swap: u64,
    used_swap: u64,
}

impl MemoryStats {
    fn read() -> Result<Self> {
        let mut system = shared_system()?;
        system.refresh_memory();
        Ok(Self {
            total: system.total_memory(),
            used: system.used_memory(),
            total_swap: system.total_swap(),
            used_swap: system.used_swap(),
        })
    }
}

fn percent(part: u64, total: u64) -> u32 {
    if total > 0 {
        (part as f64 / total as f64 * 100.0) as u32
    } else {
        0
    }
}

/// Format bytes in the configured unit (anything but "MB" means GB)
fn format_bytes(bytes: u64, unit: &str) -> String {
    if unit.eq_ignore_ascii_case("MB") {
        format!("{:.0} MB", bytes as f64 / BYTES_PER_MB)
    } else {
        format!("{:.2} GB", bytes as f64 / BYTES_PER_GB)
    }
}

/// RAM and swap usage with a usage chart and a refresh button
pub struct MemoryWidget {
    core: WidgetCore,
}

impl MemoryWidget {
    pub fn new(context: WidgetContext) -> Self {
        Self {
            core: WidgetCore::new(WIDGET_ID, "Memory", context),
        }
    }

    fn unit(&mut self) -> String {
        self.config_value(CONFIG_UNIT)
            .into_option()
            .map(ConfigValue::to_string)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "GB".to_string())
    }

    fn warn_percent(&mut self) -> i64 {
        self.config_value(CONFIG_WARN_PERCENT)
            .into_option()
            .and_then(ConfigValue::as_i64)
            .unwrap_or(DEFAULT_WARN_PERCENT)
    }

    fn render_stats(&mut self, stats: MemoryStats) {
        let unit = self.unit();
        let warn_percent = self.warn_percent();

        let used_percent = percent(stats.used, stats.total);
        let chart = ChartSpec::new(
            "mem_chart",
            json!([
                { "label": "Used", "value": stats.used, "color": "#d9534f" },
                { "label": "Free", "value": stats.total.saturating_sub(stats.used), "color": "#5cb85c" },
            ]),
        );
        let ram = format!(
            "{} of {} ({}%)",
            format_bytes(stats.used, &unit),
            format_bytes(stats.total, &unit),
            used_percent
        );
        self.core.add_row("mem_ram", "RAM used", Some(&ram), Some(chart));

        if stats.total_swap > 0 {
            let swap = format!(
                "{} of {} ({}%)",
                format_bytes(stats.used_swap, &unit),
                format_bytes(stats.total_swap, &unit),
                percent(stats.used_swap, stats.total_swap)
            );
            let chart = ChartSpec::new(
                "mem_swap_chart",
                json!([
                    { "label": "Used", "value": stats.used_swap },
                    { "label": "Free", "value": stats.total_swap.saturating_sub(stats.used_swap) },
                ]),
            )
            .with_type(ChartType::Bar)
            .with_size(120, 16);
            self.core.add_row("mem_swap", "Swap used", Some(&swap), Some(chart));
        } else {
            self.core.add_row("mem_swap", "Swap used", Some("no swap configured"), None);
        }

        if i64::from(used_percent) >= warn_percent {
            let warning = format!("Memory usage above {}%", warn_percent);
            self.core.add_row("mem_warning", "Warning", Some(&warning), None);
        }

        let mut params = UrlParams::new();
        params.insert("refreshAfter".to_string(), json!(true));
        self.core.add_button(
            "mem_refresh",
            "Refresh",
            &format!("cb:{}", CALLBACK_REFRESH),
            Some(&params),
            None,
            None,
        );
    }
}

impl Widget for MemoryWidget {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn init_config(&self, schema: &mut WidgetConfigSchema) {
        add_base_config(schema)
            .add_config(
                CONFIG_UNIT,
                "Unit (MB or GB):",
                "GB",
                InputKind::Text,
                true,
                None,
            )
            .add_config(
                CONFIG_WARN_PERCENT,
                "Warn above usage (%):",
                DEFAULT_WARN_PERCENT,
                InputKind::Text,
                false,
                Some("Adds a warning row when RAM usage reaches this percentage"),
            );
    }

    fn render(&mut self) -> Result<()> {
        let stats = MemoryStats::read()?;
        self.render_stats(stats);
        Ok(())
    }

    fn exec_callback(&mut self, callback: &str) -> Result<Option<String>> {
        match callback {
            CALLBACK_REFRESH => {
                let stats = MemoryStats::read()?;
                log::info!("Memory stats refreshed ({}% used)", percent(stats.used, stats.total));
                Ok(Some("Memory statistics refreshed".to_string()))
            }
            _ => Err(WidgetError::UnknownCallback {
                widget: self.id().to_string(),
                callback: callback.to_string(),
            }
            .into()),
        }
    }
}
