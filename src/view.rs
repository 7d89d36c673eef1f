//! Serializable snapshot of a rendered widget

use anyhow::Result;
use dashmon_core::{ButtonAction, OutputRow, Widget};
use serde::Serialize;

/// Everything the admin UI needs to paint one widget
#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub id: String,
    pub name: String,
    pub collapsed: bool,
    pub display_prio: Option<i64>,
    pub rows: Vec<OutputRow>,
    /// None when the widget has no buttons
    pub buttons: Option<Vec<ButtonAction>>,
}

impl WidgetView {
    /// Load the widget's config and run one render pass.
    ///
    /// Collapsed widgets are not rendered.
    pub fn build(widget: &mut dyn Widget) -> Result<Self> {
        widget.load_config()?;
        let collapsed = widget.display_collapsed();
        let display_prio = widget.display_prio();

        let rows = if collapsed {
            Vec::new()
        } else {
            widget.output()?.to_vec()
        };

        Ok(Self {
            id: widget.id().to_string(),
            name: widget.name().to_string(),
            collapsed,
            display_prio,
            rows,
            buttons: widget.buttons().map(<[ButtonAction]>::to_vec),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::MemoryWidget;
    use dashmon_core::{
        ConfigValue, MemoryConfigStore, PostedValues, RouteUrlResolver, WidgetContext,
    };
    use std::sync::Arc;

    fn context() -> WidgetContext {
        WidgetContext::new(
            Arc::new(MemoryConfigStore::new()),
            Arc::new(RouteUrlResolver::new("http://localhost/admin")),
        )
    }

    #[test]
    fn test_collapsed_widget_is_not_rendered() {
        let ctx = context();
        let mut posted = PostedValues::new();
        posted.insert("collapsed".to_string(), ConfigValue::from("1"));
        posted.insert("display_prio".to_string(), ConfigValue::from("3"));
        MemoryWidget::new(ctx.clone()).save_config(&posted).unwrap();

        let mut widget = MemoryWidget::new(ctx);
        let view = WidgetView::build(&mut widget).unwrap();
        assert!(view.collapsed);
        assert_eq!(view.display_prio, Some(3));
        assert!(view.rows.is_empty());
        assert!(view.buttons.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "Dashmon_Widget_Memory");
        assert!(json["buttons"].is_null());
    }
}
