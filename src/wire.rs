//! Wire codec for key actions.
//!
//! The device client exchanges actions as JSON values shaped like the serde
//! encoding of [`KeyAction`]. Decoding classifies failures: a tag this build
//! does not know yields [`RemapKitError::UnknownVariant`] carrying the tag, so
//! the caller can surface the entry as unrecognized instead of dropping the
//! whole keymap.

use serde_json::Value;

use crate::keycode::{KeyAction, KeyCode};
use crate::{RemapKitError, RkResult};

const ACTION_TAGS: [&str; 6] = [
    "Inherit", "Normal", "Normal2", "TapHold", "OneShot", "TapDance",
];
const CODE_TAGS: [&str; 7] = [
    "None", "Key", "Modifier", "Mouse", "Media", "Special", "Layer",
];
/// Action variants whose payload is one or more key codes.
const CODE_CARRYING: [&str; 4] = ["Normal", "Normal2", "TapHold", "OneShot"];

pub fn encode_action(action: &KeyAction) -> RkResult<Value> {
    Ok(serde_json::to_value(action)?)
}

pub fn decode_action(value: &Value) -> RkResult<KeyAction> {
    match serde_json::from_value::<KeyAction>(value.clone()) {
        Ok(action) => Ok(action),
        Err(err) => Err(classify_action(value, err)),
    }
}

/// Externally-tagged enums encode as either a bare string (unit variant) or a
/// single-key object (payload variant).
fn variant_tag(value: &Value) -> Option<&str> {
    match value {
        Value::String(tag) => Some(tag.as_str()),
        Value::Object(map) if map.len() == 1 => map.keys().next().map(String::as_str),
        _ => None,
    }
}

fn classify_action(value: &Value, err: serde_json::Error) -> RemapKitError {
    let Some(tag) = variant_tag(value) else {
        return RemapKitError::Json(err);
    };
    if !ACTION_TAGS.contains(&tag) {
        return RemapKitError::UnknownVariant {
            kind: "KeyAction",
            tag: tag.to_string(),
        };
    }
    if CODE_CARRYING.contains(&tag) {
        if let Value::Object(map) = value {
            if let Some(payload) = map.values().next() {
                let codes: Vec<&Value> = match payload {
                    Value::Array(items) => items.iter().collect(),
                    other => vec![other],
                };
                for code in codes {
                    if let Some(code_err) = classify_code(code) {
                        return code_err;
                    }
                }
            }
        }
    }
    RemapKitError::Json(err)
}

fn classify_code(value: &Value) -> Option<RemapKitError> {
    if serde_json::from_value::<KeyCode>(value.clone()).is_ok() {
        return None;
    }
    let tag = variant_tag(value)?;
    if !CODE_TAGS.contains(&tag) {
        return Some(RemapKitError::UnknownVariant {
            kind: "KeyCode",
            tag: tag.to_string(),
        });
    }
    // Known code family with an unrecognized member, e.g. {"Key": "Hyper"}.
    let inner = match value {
        Value::Object(map) => map.values().next().cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    };
    let inner_tag = variant_tag(&inner)
        .map(str::to_string)
        .unwrap_or_else(|| inner.to_string());
    Some(RemapKitError::UnknownVariant {
        kind: code_kind(tag),
        tag: inner_tag,
    })
}

fn code_kind(tag: &str) -> &'static str {
    match tag {
        "Key" => "Key",
        "Modifier" => "Modifier",
        "Mouse" => "Mouse",
        "Media" => "Media",
        "Special" => "Special",
        "Layer" => "Layer",
        _ => "KeyCode",
    }
}
