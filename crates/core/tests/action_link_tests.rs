mod common;

use common::{memory_context, StatsWidget, STATS_ID};
use dashmon_core::{ActionLinkBuilder, OnClick, RouteUrlResolver, UrlParams, Widget};
use serde_json::json;

fn urls() -> RouteUrlResolver {
    RouteUrlResolver::new("http://localhost/admin")
}

fn refresh_after(value: serde_json::Value) -> UrlParams {
    let mut params = UrlParams::new();
    params.insert("refreshAfter".to_string(), value);
    params
}

#[test]
fn callback_with_refresh() {
    let urls = urls();
    let params = refresh_after(json!(true));
    let click = ActionLinkBuilder::new(&urls).on_click(
        &STATS_ID,
        "Stats",
        "cb:refreshStats",
        Some(&params),
        None,
    );

    assert_eq!(
        click,
        OnClick::InvokeCallback {
            widget_id: "Acme_Stats".to_string(),
            widget_name: "Stats".to_string(),
            callback: "refreshStats".to_string(),
            callback_url: "http://localhost/admin/*/widgetAjax/execCallback/widgetId/Acme_Stats/"
                .to_string(),
            refresh_url: Some(
                "http://localhost/admin/*/widgetAjax/refreshWidget/widgetId/Acme_Stats/"
                    .to_string()
            ),
            confirm: None,
        }
    );
}

#[test]
fn callback_without_params_has_no_refresh() {
    let urls = urls();
    let click =
        ActionLinkBuilder::new(&urls).on_click(&STATS_ID, "Stats", "cb:refreshStats", None, None);

    match click {
        OnClick::InvokeCallback {
            callback,
            refresh_url,
            confirm,
            ..
        } => {
            assert_eq!(callback, "refreshStats");
            assert_eq!(refresh_url, None);
            assert_eq!(confirm, None);
        }
        other => panic!("expected callback, got {:?}", other),
    }
}

#[test]
fn falsy_refresh_flag_is_ignored() {
    let urls = urls();
    for value in [json!(false), json!(0), json!("0"), json!("")] {
        let params = refresh_after(value);
        let click = ActionLinkBuilder::new(&urls).on_click(
            &STATS_ID,
            "Stats",
            "cb:refreshStats",
            Some(&params),
            None,
        );
        assert!(matches!(
            click,
            OnClick::InvokeCallback {
                refresh_url: None,
                ..
            }
        ));
    }
}

#[test]
fn callback_with_confirmation() {
    let urls = urls();
    let click = ActionLinkBuilder::new(&urls).on_click(
        &STATS_ID,
        "Stats",
        "cb:flush",
        None,
        Some("Flush all?"),
    );
    assert!(click.is_callback());
    assert_eq!(click.confirm_message(), Some("Flush all?"));
}

#[test]
fn falsy_confirmation_is_dropped() {
    let urls = urls();
    let builder = ActionLinkBuilder::new(&urls);
    for message in ["", "0"] {
        let click = builder.on_click(&STATS_ID, "Stats", "cb:flush", None, Some(message));
        assert_eq!(click.confirm_message(), None);

        let click = builder.on_click(&STATS_ID, "Stats", "adminhtml/index/save", None, Some(message));
        assert_eq!(click.confirm_message(), None);
    }

    let click = builder.on_click(&STATS_ID, "Stats", "cb:flush", None, Some("00"));
    assert_eq!(click.confirm_message(), Some("00"));
}

#[test]
fn empty_callback_name_passes_through() {
    let urls = urls();
    let click = ActionLinkBuilder::new(&urls).on_click(&STATS_ID, "Stats", "cb:", None, None);
    assert!(matches!(
        click,
        OnClick::InvokeCallback { ref callback, .. } if callback.is_empty()
    ));
}

#[test]
fn navigation_with_confirmation() {
    let urls = urls();
    let click = ActionLinkBuilder::new(&urls).on_click(
        &STATS_ID,
        "Stats",
        "adminhtml/index/save",
        None,
        Some("Are you sure?"),
    );
    assert_eq!(
        click,
        OnClick::Navigate {
            url: "http://localhost/admin/adminhtml/index/save/".to_string(),
            confirm: Some("Are you sure?".to_string()),
        }
    );
}

#[test]
fn plain_navigation_keeps_params() {
    let urls = urls();
    let mut params = UrlParams::new();
    params.insert("type".to_string(), json!("config"));
    let click = ActionLinkBuilder::new(&urls).on_click(
        &STATS_ID,
        "Stats",
        "adminhtml/cache/flush",
        Some(&params),
        Some(""),
    );
    assert_eq!(
        click,
        OnClick::Navigate {
            url: "http://localhost/admin/adminhtml/cache/flush/type/config/".to_string(),
            confirm: None,
        }
    );
}

#[test]
fn marker_must_be_a_prefix() {
    let urls = urls();
    let click =
        ActionLinkBuilder::new(&urls).on_click(&STATS_ID, "Stats", "adminhtml/cb:x", None, None);
    assert!(!click.is_callback());
}

#[test]
fn widget_buttons_use_widget_identity() {
    let (_, ctx) = memory_context();
    let mut widget = StatsWidget::new(ctx);
    widget.output().unwrap();

    let button = &widget.buttons().unwrap()[0];
    assert_eq!(button.button_id, "stats_reset");
    match &button.on_click {
        OnClick::InvokeCallback {
            widget_id,
            widget_name,
            callback,
            confirm,
            ..
        } => {
            assert_eq!(widget_id, "Acme_Stats");
            assert_eq!(widget_name, "Stats");
            assert_eq!(callback, "reset");
            assert_eq!(confirm.as_deref(), Some("Reset?"));
        }
        other => panic!("expected callback, got {:?}", other),
    }
}
