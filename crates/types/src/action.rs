//! Buttons and the click behavior handed to the rendering layer

use serde::{Deserialize, Serialize};

/// What happens when a button is clicked
///
/// The rendering layer turns this into client-side behavior; nothing in
/// the core ever produces script text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OnClick {
    /// Go to a page, optionally after the user confirms
    Navigate {
        url: String,
        #[serde(default)]
        confirm: Option<String>,
    },
    /// Call a widget callback asynchronously, optionally refreshing the widget afterwards
    InvokeCallback {
        widget_id: String,
        widget_name: String,
        callback: String,
        callback_url: String,
        #[serde(default)]
        refresh_url: Option<String>,
        #[serde(default)]
        confirm: Option<String>,
    },
}

impl OnClick {
    /// Confirmation prompt shown before the action runs, if any
    pub fn confirm_message(&self) -> Option<&str> {
        match self {
            OnClick::Navigate { confirm, .. } | OnClick::InvokeCallback { confirm, .. } => {
                confirm.as_deref()
            }
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, OnClick::InvokeCallback { .. })
    }
}

/// A button shown in the widget footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonAction {
    pub button_id: String,
    pub label: String,
    pub on_click: OnClick,
    pub css_class: String,
    pub button_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_click_tagging() {
        let click = OnClick::Navigate {
            url: "http://localhost/admin/index".to_string(),
            confirm: None,
        };
        let json = serde_json::to_value(&click).unwrap();
        assert_eq!(json["action"], "navigate");

        let click = OnClick::InvokeCallback {
            widget_id: "w".to_string(),
            widget_name: "W".to_string(),
            callback: "flush".to_string(),
            callback_url: "u".to_string(),
            refresh_url: None,
            confirm: Some("Sure?".to_string()),
        };
        let json = serde_json::to_value(&click).unwrap();
        assert_eq!(json["action"], "invoke_callback");
        assert!(json["refresh_url"].is_null());
        assert_eq!(click.confirm_message(), Some("Sure?"));
    }
}
