#![cfg(feature = "serde")]

use serde_json::json;
use ubx_codec::{Mode, TypeTag, Value};

#[test]
fn test_serialize_parsed_message() {
    let msg = ubx_codec::parse(b"\xb5\x62\x05\x01\x02\x00\x06\x01\x0f\x38").unwrap();
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["name"], "ACK-ACK");
    assert_eq!(json["class"], 5);
    assert_eq!(json["mode"], "Get");
    assert_eq!(json["payload"], json!([6, 1]));
    assert_eq!(json["fields"][0], json!(["clsID", { "Unsigned": 6 }]));
}

#[test]
fn test_value_and_tag_round_trip() {
    let value = Value::Array(vec![Value::Signed(-1), Value::Float(0.5), Value::Bool(true)]);
    let text = serde_json::to_string(&value).unwrap();
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), value);

    let tag = TypeTag::A(ubx_codec::Elem::U2, 6);
    let text = serde_json::to_string(&tag).unwrap();
    assert_eq!(serde_json::from_str::<TypeTag>(&text).unwrap(), tag);

    assert_eq!(serde_json::from_str::<Mode>("\"Poll\"").unwrap(), Mode::Poll);
}
