//! Widget trait and the per-instance state it is built on

use crate::action_link::ActionLinkBuilder;
use crate::constants::{
    BUTTON_TYPE, CONFIG_DISPLAY_PRIO, CONFIG_START_COLLAPSED, DEFAULT_BUTTON_CLASS,
    DEFAULT_DISPLAY_PRIO, DEFAULT_START_COLLAPSED,
};
use crate::controller::{ConfigController, PostedValues};
use crate::error::{StoreError, WidgetError};
use crate::key::WidgetId;
use crate::store::ConfigStore;
use crate::url::{UrlParams, UrlResolver};
use anyhow::Result;
use dashmon_types::{
    ButtonAction, ChartSpec, ConfigEntry, ConfigValue, InputKind, Lookup, OutputRow,
    WidgetConfigSchema,
};
use std::sync::Arc;

/// Collaborators injected into every widget
#[derive(Clone)]
pub struct WidgetContext {
    pub store: Arc<dyn ConfigStore>,
    pub urls: Arc<dyn UrlResolver>,
}

impl WidgetContext {
    pub fn new(store: Arc<dyn ConfigStore>, urls: Arc<dyn UrlResolver>) -> Self {
        Self { store, urls }
    }
}

/// State shared by all widgets: identity, output, buttons and the lazily
/// built config schema
pub struct WidgetCore {
    id: WidgetId,
    name: String,
    context: WidgetContext,
    rows: Vec<OutputRow>,
    buttons: Vec<ButtonAction>,
    schema: Option<WidgetConfigSchema>,
}

impl WidgetCore {
    pub fn new(id: WidgetId, name: impl Into<String>, context: WidgetContext) -> Self {
        Self {
            id,
            name: name.into(),
            context,
            rows: Vec::new(),
            buttons: Vec::new(),
            schema: None,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an output row
    pub fn add_row(
        &mut self,
        element_id: &str,
        label: &str,
        value: Option<&str>,
        chart: Option<ChartSpec>,
    ) -> &mut Self {
        self.rows.push(OutputRow {
            element_id: element_id.to_string(),
            label: label.to_string(),
            value: value.map(str::to_string),
            chart,
        });
        self
    }

    /// Append a button. `target` is a controller route, or a callback
    /// name prefixed with the callback marker.
    pub fn add_button(
        &mut self,
        button_id: &str,
        label: &str,
        target: &str,
        url_params: Option<&UrlParams>,
        confirm_message: Option<&str>,
        css_class: Option<&str>,
    ) -> &mut Self {
        let on_click = ActionLinkBuilder::new(self.context.urls.as_ref()).on_click(
            &self.id,
            &self.name,
            target,
            url_params,
            confirm_message,
        );
        self.buttons.push(ButtonAction {
            button_id: button_id.to_string(),
            label: label.to_string(),
            on_click,
            css_class: css_class.unwrap_or(DEFAULT_BUTTON_CLASS).to_string(),
            button_type: BUTTON_TYPE.to_string(),
        });
        self
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    /// Buttons added so far, or `None` when there are none
    pub fn buttons(&self) -> Option<&[ButtonAction]> {
        if self.buttons.is_empty() {
            None
        } else {
            Some(&self.buttons)
        }
    }

    pub fn clear_output(&mut self) {
        self.rows.clear();
        self.buttons.clear();
    }

    pub fn is_config_loaded(&self) -> bool {
        self.schema.is_some()
    }
}

/// Declare the `collapsed` and `display_prio` entries every widget has by default
pub fn add_base_config(schema: &mut WidgetConfigSchema) -> &mut WidgetConfigSchema {
    schema
        .add_config(
            CONFIG_START_COLLAPSED,
            "Do not render widget on pageload?",
            DEFAULT_START_COLLAPSED,
            InputKind::Checkbox,
            false,
            None,
        )
        .add_config(
            CONFIG_DISPLAY_PRIO,
            "Display priority (0=top):",
            DEFAULT_DISPLAY_PRIO,
            InputKind::Text,
            false,
            None,
        )
}

/// A dashboard widget
///
/// Implementors embed a [`WidgetCore`] and fill it in [`Widget::render`].
/// Everything else has a default built on the core.
pub trait Widget: Send {
    fn core(&self) -> &WidgetCore;

    fn core_mut(&mut self) -> &mut WidgetCore;

    /// Produce rows and buttons for one render pass
    fn render(&mut self) -> Result<()>;

    fn id(&self) -> &WidgetId {
        self.core().id()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn is_active(&self) -> bool {
        true
    }

    /// Declare config entries. Called once per instance, on first access.
    ///
    /// Overrides normally call [`add_base_config`] first; skipping it
    /// leaves the built-in entries out.
    fn init_config(&self, schema: &mut WidgetConfigSchema) {
        add_base_config(schema);
    }

    /// Run a named callback. Returns an optional message for the user.
    fn exec_callback(&mut self, callback: &str) -> Result<Option<String>> {
        Err(WidgetError::UnknownCallback {
            widget: self.id().to_string(),
            callback: callback.to_string(),
        }
        .into())
    }

    /// Schema, built on first use
    fn config_mut(&mut self) -> &mut WidgetConfigSchema {
        if !self.core().is_config_loaded() {
            let mut schema = WidgetConfigSchema::new();
            self.init_config(&mut schema);
            log::debug!("Initialized {} config entries for {}", schema.len(), self.id());
            self.core_mut().schema = Some(schema);
        }
        self.core_mut()
            .schema
            .get_or_insert_with(WidgetConfigSchema::new)
    }

    fn config(&mut self) -> &WidgetConfigSchema {
        self.config_mut()
    }

    fn config_value(&mut self, key: &str) -> Lookup<&ConfigValue> {
        self.config_mut().value(key)
    }

    fn config_entry(&mut self, key: &str) -> Lookup<&ConfigEntry> {
        self.config_mut().entry(key)
    }

    /// Insert or overwrite a config entry; chain further entries on the result
    fn add_config(
        &mut self,
        key: &str,
        label: &str,
        default: ConfigValue,
        input_kind: InputKind,
        required: bool,
        tooltip: Option<&str>,
    ) -> &mut WidgetConfigSchema {
        self.config_mut()
            .add_config(key, label, default, input_kind, required, tooltip)
    }

    /// Apply stored values over the schema defaults
    fn load_config(&mut self) -> Result<&WidgetConfigSchema, StoreError> {
        self.config_mut();
        let WidgetCore {
            id,
            context,
            schema,
            ..
        } = self.core_mut();
        let schema = schema.get_or_insert_with(WidgetConfigSchema::new);
        ConfigController::new(id, context.store.as_ref()).load(schema)?;
        Ok(&*schema)
    }

    /// Persist posted values; schema keys missing from `posted` are cleared
    fn save_config(&mut self, posted: &PostedValues) -> Result<(), StoreError> {
        self.config_mut();
        let core = self.core();
        match core.schema.as_ref() {
            Some(schema) => {
                ConfigController::new(&core.id, core.context.store.as_ref()).save(schema, posted)
            }
            None => Ok(()),
        }
    }

    /// Remove every persisted key of this widget
    fn delete_config(&mut self) -> Result<(), StoreError> {
        self.config_mut();
        let core = self.core();
        match core.schema.as_ref() {
            Some(schema) => {
                ConfigController::new(&core.id, core.context.store.as_ref()).delete(schema)
            }
            None => Ok(()),
        }
    }

    fn display_collapsed(&mut self) -> bool {
        match self.config_value(CONFIG_START_COLLAPSED) {
            Lookup::Found(value) => value.is_set(),
            Lookup::NotFound => false,
        }
    }

    /// Display priority, `None` if the entry is absent or not numeric
    fn display_prio(&mut self) -> Option<i64> {
        self.config_value(CONFIG_DISPLAY_PRIO)
            .into_option()
            .and_then(ConfigValue::as_i64)
    }

    /// Run one render pass and return its rows
    fn output(&mut self) -> Result<&[OutputRow]> {
        self.core_mut().clear_output();
        self.render()?;
        Ok(self.core().rows())
    }

    fn buttons(&self) -> Option<&[ButtonAction]> {
        self.core().buttons()
    }
}

/// Type-erased widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;
