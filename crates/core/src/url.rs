//! URL resolution for controller routes

use crate::constants::WIDGET_ID_PARAM;
use crate::key::WidgetId;
use serde_json::Value;
use std::collections::BTreeMap;

/// Route parameters, kept sorted so generated URLs are deterministic
pub type UrlParams = BTreeMap<String, Value>;

/// Turns a controller route plus parameters into a URL
pub trait UrlResolver: Send + Sync {
    fn resolve_url(&self, route: &str, params: &UrlParams) -> String;
}

/// Resolves `module/controller/action` routes below a base URL as
/// `{base}/{route}/{param}/{value}/`
#[derive(Debug, Clone)]
pub struct RouteUrlResolver {
    base_url: String,
}

impl RouteUrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl UrlResolver for RouteUrlResolver {
    fn resolve_url(&self, route: &str, params: &UrlParams) -> String {
        let mut url = format!("{}/{}/", self.base_url, route.trim_matches('/'));
        for (name, value) in params {
            url.push_str(name);
            url.push('/');
            url.push_str(&param_to_string(value));
            url.push('/');
        }
        url
    }
}

fn param_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Loose truthiness of a route parameter: missing, null, false, zero,
/// empty or `"0"` strings and empty collections are all false
pub fn param_is_truthy(params: &UrlParams, name: &str) -> bool {
    match params.get(name) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// URL of a widget-scoped route, carrying the widget id as parameter
pub fn widget_url(urls: &dyn UrlResolver, route: &str, widget_id: &WidgetId) -> String {
    let mut params = UrlParams::new();
    params.insert(
        WIDGET_ID_PARAM.to_string(),
        Value::String(widget_id.to_string()),
    );
    urls.resolve_url(route, &params)
}
