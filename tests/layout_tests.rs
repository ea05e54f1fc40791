mod support;

use rstest::rstest;
use remapkit::keycode::KeyAction;
use remapkit::layout::{LayoutDescription, PhysicalKey};
use remapkit::session::EditSession;
use remapkit::snapshot::JoinPolicy;
use remapkit::RemapKitError;
use support::{loc, shape_at, MockDeviceClient};

#[test]
fn kle_cursor_math_places_keys() {
    // "0,0" at x=0; {x:1} shifts the cursor before "0,1" lands at x=2;
    // {w:1.5} widens "0,2" and advances the cursor accordingly.
    let json = r#"{
        "keymap": [
            ["0,0", {"x": 1}, "0,1", {"w": 1.5}, "0,2"],
            [{"y": 0.5}, "1,0"]
        ]
    }"#;

    let layout = LayoutDescription::from_kle_json(json).unwrap();
    assert_eq!(layout.keys.len(), 4);

    assert_eq!(layout.keys[0].label.as_deref(), Some("0,0"));
    assert_eq!(layout.keys[0].shape.x, 0.0);

    assert_eq!(layout.keys[1].shape.x, 2.0);

    assert_eq!(layout.keys[2].shape.x, 3.0);
    assert_eq!(layout.keys[2].shape.width, 1.5);

    // Second row: y advanced by one row plus the 0.5 shift.
    assert_eq!(layout.keys[3].shape.y, 1.5);
    assert_eq!(layout.keys[3].shape.x, 0.0);
}

#[test]
fn kle_multiline_legend_uses_first_line() {
    let json = r#"{"keymap": [["2,3\nextra"]]}"#;
    let layout = LayoutDescription::from_kle_json(json).unwrap();
    assert_eq!(layout.keys[0].matrix_position().unwrap(), (2, 3));
}

#[test]
fn invalid_layout_json_is_a_parse_error() {
    let err = LayoutDescription::from_kle_json("not json").unwrap_err();
    assert!(matches!(err, RemapKitError::Parse(_)));
}

#[rstest]
#[case("0,0", 0, 0)]
#[case("12,3", 12, 3)]
#[case(" 2 , 10 ", 2, 10)]
fn well_formed_matrix_labels_parse(#[case] label: &str, #[case] row: u8, #[case] col: u8) {
    let key = PhysicalKey {
        label: Some(label.to_string()),
        shape: shape_at(0, 0),
    };
    assert_eq!(key.matrix_position().unwrap(), (row, col));
}

#[rstest]
#[case("A")]
#[case("4")]
#[case("x,y")]
#[case("300,0")]
#[case("1,")]
fn malformed_matrix_labels_are_parse_errors(#[case] label: &str) {
    let key = PhysicalKey {
        label: Some(label.to_string()),
        shape: shape_at(0, 0),
    };
    assert!(matches!(key.matrix_position().unwrap_err(), RemapKitError::Parse(_)));
}

#[test]
fn missing_matrix_label_is_a_parse_error() {
    let key = PhysicalKey {
        label: None,
        shape: shape_at(0, 0),
    };
    assert!(matches!(key.matrix_position().unwrap_err(), RemapKitError::Parse(_)));
}

#[test]
fn missing_label_fails_the_whole_fetch() {
    let mut client = MockDeviceClient::with_entries(&[(0, 0, 0, KeyAction::Inherit)]);
    client.layout.keys.push(PhysicalKey {
        label: None,
        shape: shape_at(0, 1),
    });

    let err = EditSession::connect(client, JoinPolicy::SkipUnmatched).unwrap_err();
    assert!(matches!(err, RemapKitError::Parse(_)));
}

#[test]
fn join_orders_by_layout_key_then_ascending_layer() {
    // Layout lists (1,0) before (0,0); the device reports layers shuffled.
    let mut client = MockDeviceClient::with_entries(&[
        (1, 0, 1, KeyAction::Inherit),
        (1, 0, 0, KeyAction::Inherit),
        (0, 0, 1, KeyAction::Inherit),
        (0, 0, 0, KeyAction::Inherit),
    ]);
    // with_entries derives layout keys in first-seen order: (1,0), (0,0).
    assert_eq!(client.layout.keys[0].label.as_deref(), Some("1,0"));

    let session = EditSession::connect(client, JoinPolicy::Strict).unwrap();

    let order: Vec<_> = session
        .snapshot()
        .entries()
        .iter()
        .map(|entry| entry.loc)
        .collect();
    assert_eq!(
        order,
        vec![loc(1, 0, 0), loc(1, 0, 1), loc(0, 0, 0), loc(0, 0, 1)]
    );
}

#[test]
fn duplicate_layout_labels_fail_the_join() {
    let mut client = MockDeviceClient::with_entries(&[(0, 0, 0, KeyAction::Inherit)]);
    let dup = client.layout.keys[0].clone();
    client.layout.keys.push(dup);

    let err = EditSession::connect(client, JoinPolicy::Strict).unwrap_err();
    assert!(matches!(err, RemapKitError::Join(_)));
}
