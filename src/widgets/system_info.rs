//! Host, OS and uptime widget

use anyhow::Result;
use chrono::{DateTime, Local};
use dashmon_core::{
    add_base_config, InputKind, Lookup, UrlParams, Widget, WidgetConfigSchema, WidgetContext,
    WidgetCore, WidgetId,
};
use serde_json::json;
use sysinfo::System;

const WIDGET_ID: WidgetId = WidgetId::from_static("Dashmon_Widget_SystemInfo");

const CONFIG_HIDE_LOAD: &str = "hide_load";

#[derive(Debug, Clone, Default)]
struct HostInfo {
    host_name: Option<String>,
    os: Option<String>,
    kernel: Option<String>,
    uptime_secs: u64,
    boot_time: u64,
    load: (f64, f64, f64),
}

impl HostInfo {
    fn read() -> Self {
        let load = System::load_average();
        Self {
            host_name: System::host_name(),
            os: System::long_os_version(),
            kernel: System::kernel_version(),
            uptime_secs: System::uptime(),
            boot_time: System::boot_time(),
            load: (load.one, load.five, load.fifteen),
        }
    }
}

/// `3d 4h 5m` style duration
fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

fn format_timestamp(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    DateTime::from_timestamp(secs, 0).map(|utc| {
        utc.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
}

/// Host name, OS, kernel, uptime and load average
pub struct SystemInfoWidget {
    core: WidgetCore,
}

impl SystemInfoWidget {
    pub fn new(context: WidgetContext) -> Self {
        Self {
            core: WidgetCore::new(WIDGET_ID, "System Information", context),
        }
    }

    fn hide_load(&mut self) -> bool {
        match self.config_value(CONFIG_HIDE_LOAD) {
            Lookup::Found(value) => value.is_set(),
            Lookup::NotFound => false,
        }
    }

    fn render_info(&mut self, info: &HostInfo) {
        let unknown = "unknown";
        let show_load = !self.hide_load();

        self.core
            .add_row(
                "sys_host",
                "Host name",
                Some(info.host_name.as_deref().unwrap_or(unknown)),
                None,
            )
            .add_row(
                "sys_os",
                "Operating system",
                Some(info.os.as_deref().unwrap_or(unknown)),
                None,
            )
            .add_row(
                "sys_kernel",
                "Kernel",
                Some(info.kernel.as_deref().unwrap_or(unknown)),
                None,
            )
            .add_row(
                "sys_uptime",
                "Uptime",
                Some(&format_uptime(info.uptime_secs)),
                None,
            );

        if let Some(booted) = format_timestamp(info.boot_time) {
            self.core.add_row("sys_boot", "Booted at", Some(&booted), None);
        }

        if show_load {
            let (one, five, fifteen) = info.load;
            let load = format!("{:.2} / {:.2} / {:.2}", one, five, fifteen);
            self.core.add_row("sys_load", "Load (1/5/15 min)", Some(&load), None);
        }

        let checked = Local::now().format("%H:%M:%S").to_string();
        self.core.add_row("sys_checked", "Checked at", Some(&checked), None);

        let mut params = UrlParams::new();
        params.insert("section".to_string(), json!("dashmon"));
        self.core.add_button(
            "sys_settings",
            "Dashboard settings",
            "adminhtml/system_config/edit",
            Some(&params),
            Some("Leave the dashboard?"),
            Some("f-right scalable"),
        );
    }
}

impl Widget for SystemInfoWidget {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn init_config(&self, schema: &mut WidgetConfigSchema) {
        add_base_config(schema).add_config(
            CONFIG_HIDE_LOAD,
            "Hide load average?",
            false,
            InputKind::Checkbox,
            false,
            None,
        );
    }

    fn render(&mut self) -> Result<()> {
        let info = HostInfo::read();
        self.render_info(&info);
        Ok(())
    }
}
