//! Inbound event vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use deckbridge_core::protocol::event::{
    decode_event, ApplicationDidLaunch, ApplicationDidTerminate, ApplicationPayload,
    DeviceDidConnect, DeviceDidDisconnect, DidReceiveGlobalSettings, DidReceiveSettings, Event,
    InstancePayload, KeyDown, KeyPayload, KeyUp, PropertyInspectorDidAppear,
    PropertyInspectorDidDisappear, SendToPlugin, SystemDidWakeUp, TitleParametersDidChange,
    TitlePayload, WillAppear, WillDisappear,
};
use deckbridge_core::protocol::types::{
    Coordinates, DeviceInfo, DeviceType, Settings, Size, TitleAlignment, TitleParameters,
};
use deckbridge_core::DeckError;

use vector_loader::load;

#[test]
fn event_vectors() {
    let files = [
        "system_did_wake_up.json",
        "device_did_disconnect.json",
        "device_did_connect.json",
        "device_did_connect_bad_type.json",
        "key_down.json",
        "key_up_extra_fields.json",
        "key_down_missing_settings.json",
        "key_down_bad_coordinates.json",
        "key_down_no_payload.json",
        "will_appear_multi_action.json",
        "title_parameters_did_change.json",
        "title_bad_alignment.json",
        "application_did_launch.json",
        "send_to_plugin.json",
        "did_receive_global_settings.json",
        "unknown_event.json",
        "did_receive_settings.json",
        "will_disappear.json",
        "application_did_terminate.json",
        "property_inspector_did_appear.json",
        "property_inspector_did_disappear.json",
        "property_inspector_no_device.json",
        "device_did_connect_no_info.json",
        "global_settings_no_payload.json",
        "send_to_plugin_no_payload.json",
    ];

    for f in files {
        let v = load(f);
        let res = decode_event(v.envelope);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let ev = res.unwrap_or_else(|e| panic!("vector={}: {e}", v.description));
        let ex = v.expect.expect("missing expect block");

        assert_eq!(ev.name(), ex.name, "vector={}", v.description);
        assert_eq!(ev.action(), ex.action.as_deref(), "vector={}", v.description);
        assert_eq!(
            ev.context().map(|c| c.as_str()),
            ex.context.as_deref(),
            "vector={}",
            v.description
        );
        assert_eq!(ev.device(), ex.device.as_deref(), "vector={}", v.description);
    }
}

#[test]
fn key_down_mixed_layout() {
    let Event::KeyDown(ev) = decode_event(load("key_down.json").envelope).unwrap() else {
        panic!("expected keyDown");
    };
    assert_eq!(ev.action, "a1");
    assert_eq!(ev.context.as_str(), "c");
    assert_eq!(ev.device, "d");
    assert!(ev.payload.settings.is_empty());
    assert_eq!(ev.payload.coordinates, Some(Coordinates { column: 3, row: 1 }));
    assert_eq!(ev.payload.state, 1);
    assert_eq!(ev.payload.user_desired_state, Some(1));
    assert!(ev.payload.is_in_multi_action);
}

#[test]
fn key_up_ignores_extras() {
    let Event::KeyUp(ev) = decode_event(load("key_up_extra_fields.json").envelope).unwrap() else {
        panic!("expected keyUp");
    };
    assert_eq!(ev.payload.settings.get("count"), Some(&json!(4)));
    assert_eq!(ev.payload.user_desired_state, None);
    assert!(!ev.payload.is_in_multi_action);
}

#[test]
fn device_did_connect_reads_device_info_not_payload() {
    let Event::DeviceDidConnect(ev) =
        decode_event(load("device_did_connect.json").envelope).unwrap()
    else {
        panic!("expected deviceDidConnect");
    };
    let info = ev.device_info.expect("deviceInfo");
    assert_eq!(ev.device, "device");
    assert_eq!(info.name, "Device Name");
    assert_eq!(info.device_type, DeviceType::StreamDeckMini);
    assert_eq!(info.size, Size { columns: 5, rows: 3 });

    // Device metadata under `payload` is not where this variant looks.
    let Event::DeviceDidConnect(ev) = decode_event(json!({
        "event": "deviceDidConnect",
        "device": "device",
        "payload": {"deviceInfo": {"name": "n", "type": 0, "size": {"rows": 1, "columns": 1}}}
    }))
    .unwrap() else {
        panic!("expected deviceDidConnect");
    };
    assert_eq!(ev.device_info, None);
}

#[test]
fn absent_optional_fields_decode_to_defaults() {
    let Event::DeviceDidConnect(ev) =
        decode_event(load("device_did_connect_no_info.json").envelope).unwrap()
    else {
        panic!("expected deviceDidConnect");
    };
    assert_eq!(ev, DeviceDidConnect { device: "d".into(), device_info: None });

    let Event::DidReceiveGlobalSettings(ev) =
        decode_event(load("global_settings_no_payload.json").envelope).unwrap()
    else {
        panic!("expected didReceiveGlobalSettings");
    };
    assert!(ev.payload.is_null());
    assert_eq!(ev.settings(), None);

    let Event::SendToPlugin(ev) =
        decode_event(load("send_to_plugin_no_payload.json").envelope).unwrap()
    else {
        panic!("expected sendToPlugin");
    };
    assert!(ev.payload.is_null());

    let Event::PropertyInspectorDidAppear(ev) =
        decode_event(load("property_inspector_no_device.json").envelope).unwrap()
    else {
        panic!("expected propertyInspectorDidAppear");
    };
    assert_eq!(ev.device, None);
}

#[test]
fn global_settings_keep_the_whole_payload() {
    let Event::DidReceiveGlobalSettings(ev) = decode_event(json!({
        "event": "didReceiveGlobalSettings",
        "payload": {"settings": {"theme": "dark"}, "revision": 3}
    }))
    .unwrap() else {
        panic!("expected didReceiveGlobalSettings");
    };
    assert_eq!(ev.payload["revision"], json!(3));
    assert_eq!(ev.settings().and_then(|s| s.get("theme")), Some(&json!("dark")));
}

fn settings(v: serde_json::Value) -> Settings {
    serde_json::from_value(v).unwrap()
}

fn instance_payload() -> InstancePayload {
    InstancePayload {
        settings: Settings::new(),
        coordinates: Some(Coordinates { column: 3, row: 1 }),
        state: 1,
        is_in_multi_action: true,
    }
}

/// Every variant, compared as a whole value against what the vector holds.
#[test]
fn every_variant_decodes_field_by_field() {
    let action = "com.elgato.example.action1".to_string();
    let cases: Vec<(&str, Event)> = vec![
        (
            "did_receive_settings.json",
            Event::DidReceiveSettings(DidReceiveSettings {
                action: action.clone(),
                context: "context".into(),
                device: "device".into(),
                payload: instance_payload(),
            }),
        ),
        (
            "did_receive_global_settings.json",
            Event::DidReceiveGlobalSettings(DidReceiveGlobalSettings { payload: json!({}) }),
        ),
        (
            "key_down.json",
            Event::KeyDown(KeyDown {
                action: "a1".into(),
                context: "c".into(),
                device: "d".into(),
                payload: KeyPayload {
                    settings: Settings::new(),
                    coordinates: Some(Coordinates { column: 3, row: 1 }),
                    state: 1,
                    user_desired_state: Some(1),
                    is_in_multi_action: true,
                },
            }),
        ),
        (
            "key_up_extra_fields.json",
            Event::KeyUp(KeyUp {
                action: action.clone(),
                context: "context".into(),
                device: "device".into(),
                payload: KeyPayload {
                    settings: settings(json!({"count": 4})),
                    coordinates: Some(Coordinates { column: 2, row: 0 }),
                    state: 0,
                    user_desired_state: None,
                    is_in_multi_action: false,
                },
            }),
        ),
        (
            "will_appear_multi_action.json",
            Event::WillAppear(WillAppear {
                action: action.clone(),
                context: "context".into(),
                device: "device".into(),
                payload: InstancePayload {
                    settings: settings(json!({"mode": "up"})),
                    coordinates: None,
                    state: 0,
                    is_in_multi_action: true,
                },
            }),
        ),
        (
            "will_disappear.json",
            Event::WillDisappear(WillDisappear {
                action: action.clone(),
                context: "context".into(),
                device: "device".into(),
                payload: instance_payload(),
            }),
        ),
        (
            "title_parameters_did_change.json",
            Event::TitleParametersDidChange(TitleParametersDidChange {
                action: action.clone(),
                context: "context".into(),
                device: "device".into(),
                payload: TitlePayload {
                    settings: Settings::new(),
                    coordinates: Some(Coordinates { column: 3, row: 1 }),
                    state: 1,
                    title: "title".into(),
                    title_parameters: TitleParameters {
                        font_family: "fontFamily".into(),
                        font_size: 12,
                        font_style: "fontStyle".into(),
                        font_underline: true,
                        show_title: true,
                        title_alignment: TitleAlignment::Bottom,
                        title_color: "#ffffff".into(),
                    },
                },
            }),
        ),
        (
            "device_did_connect.json",
            Event::DeviceDidConnect(DeviceDidConnect {
                device: "device".into(),
                device_info: Some(DeviceInfo {
                    name: "Device Name".into(),
                    device_type: DeviceType::StreamDeckMini,
                    size: Size { columns: 5, rows: 3 },
                }),
            }),
        ),
        (
            "device_did_disconnect.json",
            Event::DeviceDidDisconnect(DeviceDidDisconnect { device: "device".into() }),
        ),
        (
            "application_did_launch.json",
            Event::ApplicationDidLaunch(ApplicationDidLaunch {
                payload: ApplicationPayload { application: "com.apple.mail".into() },
            }),
        ),
        (
            "application_did_terminate.json",
            Event::ApplicationDidTerminate(ApplicationDidTerminate {
                payload: ApplicationPayload { application: "com.apple.mail".into() },
            }),
        ),
        ("system_did_wake_up.json", Event::SystemDidWakeUp(SystemDidWakeUp {})),
        (
            "property_inspector_did_appear.json",
            Event::PropertyInspectorDidAppear(PropertyInspectorDidAppear {
                action: action.clone(),
                context: "context".into(),
                device: Some("device".into()),
            }),
        ),
        (
            "property_inspector_did_disappear.json",
            Event::PropertyInspectorDidDisappear(PropertyInspectorDidDisappear {
                action: action.clone(),
                context: "context".into(),
                device: Some("device".into()),
            }),
        ),
        (
            "send_to_plugin.json",
            Event::SendToPlugin(SendToPlugin {
                action,
                context: "context".into(),
                payload: json!({"reset": true}),
            }),
        ),
    ];

    assert_eq!(cases.len(), deckbridge_core::protocol::EVENT_NAMES.len());
    for (file, want) in cases {
        let got = decode_event(load(file).envelope).unwrap_or_else(|e| panic!("{file}: {e}"));
        assert_eq!(got, want, "vector={file}");
    }
}

#[test]
fn title_parameters() {
    let Event::TitleParametersDidChange(ev) =
        decode_event(load("title_parameters_did_change.json").envelope).unwrap()
    else {
        panic!("expected titleParametersDidChange");
    };
    assert_eq!(ev.payload.title, "title");
    assert_eq!(ev.payload.state, 1);
    assert_eq!(
        ev.payload.title_parameters,
        TitleParameters {
            font_family: "fontFamily".into(),
            font_size: 12,
            font_style: "fontStyle".into(),
            font_underline: true,
            show_title: true,
            title_alignment: TitleAlignment::Bottom,
            title_color: "#ffffff".into(),
        }
    );
}

#[test]
fn multi_action_instance_has_no_coordinates() {
    let Event::WillAppear(ev) =
        decode_event(load("will_appear_multi_action.json").envelope).unwrap()
    else {
        panic!("expected willAppear");
    };
    assert_eq!(ev.payload.coordinates, None);
    assert_eq!(ev.payload.state, 0);
    assert_eq!(ev.payload.settings.get("mode"), Some(&json!("up")));
}

#[test]
fn application_and_plugin_messages() {
    let Event::ApplicationDidLaunch(ev) =
        decode_event(load("application_did_launch.json").envelope).unwrap()
    else {
        panic!("expected applicationDidLaunch");
    };
    assert_eq!(ev.payload.application, "com.apple.mail");

    let Event::SendToPlugin(ev) = decode_event(load("send_to_plugin.json").envelope).unwrap()
    else {
        panic!("expected sendToPlugin");
    };
    assert_eq!(ev.payload, json!({"reset": true}));
}

#[test]
fn malformed_payload_carries_event_and_raw() {
    let v = load("key_down_bad_coordinates.json");
    let raw = v.envelope.clone();
    match decode_event(v.envelope).unwrap_err() {
        DeckError::MalformedPayload { event, raw: got, reason } => {
            assert_eq!(event, "keyDown");
            assert_eq!(got, raw);
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}
