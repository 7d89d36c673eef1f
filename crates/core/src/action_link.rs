//! Turns button targets into click actions

use crate::constants::{AJAX_CALLBACK_ROUTE, AJAX_REFRESH_ROUTE, CALLBACK_MARKER, REFRESH_AFTER_PARAM};
use crate::key::WidgetId;
use crate::url::{param_is_truthy, widget_url, UrlParams, UrlResolver};
use dashmon_types::OnClick;

/// Builds [`OnClick`] descriptors for a widget's buttons
///
/// A target starting with [`CALLBACK_MARKER`] becomes an asynchronous
/// callback on the widget; anything else is a controller route to
/// navigate to. No state is kept between calls.
pub struct ActionLinkBuilder<'a> {
    urls: &'a dyn UrlResolver,
}

impl<'a> ActionLinkBuilder<'a> {
    pub fn new(urls: &'a dyn UrlResolver) -> Self {
        Self { urls }
    }

    pub fn on_click(
        &self,
        widget_id: &WidgetId,
        widget_name: &str,
        target: &str,
        url_params: Option<&UrlParams>,
        confirm_message: Option<&str>,
    ) -> OnClick {
        // "" and "0" mean no confirmation, same as other falsy settings
        let confirm = confirm_message
            .filter(|m| !m.is_empty() && *m != "0")
            .map(str::to_string);

        if let Some(callback) = target.strip_prefix(CALLBACK_MARKER) {
            // An empty callback name is passed through as-is.
            let refresh_url = url_params
                .filter(|params| param_is_truthy(params, REFRESH_AFTER_PARAM))
                .map(|_| widget_url(self.urls, AJAX_REFRESH_ROUTE, widget_id));

            log::debug!(
                "Callback '{}' for widget {} (refresh: {})",
                callback,
                widget_id,
                refresh_url.is_some()
            );

            return OnClick::InvokeCallback {
                widget_id: widget_id.to_string(),
                widget_name: widget_name.to_string(),
                callback: callback.to_string(),
                callback_url: widget_url(self.urls, AJAX_CALLBACK_ROUTE, widget_id),
                refresh_url,
                confirm,
            };
        }

        let empty = UrlParams::new();
        let url = self.urls.resolve_url(target, url_params.unwrap_or(&empty));
        OnClick::Navigate { url, confirm }
    }
}
