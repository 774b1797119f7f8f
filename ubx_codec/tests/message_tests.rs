//! End-to-end building and parsing of complete frames.

use byteorder::{LittleEndian, WriteBytesExt};
use pretty_assertions::assert_eq;
use ubx_codec::{
    calc_checksum, CfgLayerSet, CfgTransaction, Mode, ParseOptions, PayloadSchema, Registry,
    SchemaItem, TypeTag, UbxError, Value,
};

/// Wraps a payload into a frame with sync chars, length and checksum.
fn frame(class: u8, id: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0xb5, 0x62, class, id];
    frame
        .write_u16::<LittleEndian>(payload.len() as u16)
        .unwrap();
    frame.extend_from_slice(payload);
    let checksum = calc_checksum(&frame[2..]);
    frame.extend_from_slice(&checksum);
    frame
}

fn text(s: &str, width: usize) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize(width, 0);
    bytes
}

#[test]
fn test_cfg_msg_poll_end_to_end() {
    let msg = ubx_codec::build(
        "CFG",
        "CFG-MSG",
        Mode::Poll,
        &[("msgClass", Value::from(240u8)), ("msgID", Value::from(5u8))],
    )
    .unwrap();
    let bytes = msg.to_bytes();
    assert_eq!(bytes[2], 0x06);
    assert_eq!(bytes[3], 0x01);
    assert_eq!(msg.length(), 2);
    assert_eq!(msg.mode(), Mode::Poll);

    let parsed = ubx_codec::parse(&bytes).unwrap();
    assert_eq!(parsed.msg_cls(), 0x06);
    assert_eq!(parsed.msg_id(), 0x01);
    assert_eq!(parsed.length(), 2);
    assert_eq!(parsed.mode(), Mode::Poll);
    assert_eq!(parsed.class_name(), "CFG");
    assert_eq!(
        parsed.fields().collect::<Vec<_>>(),
        msg.fields().collect::<Vec<_>>()
    );
}

#[test]
fn test_ack_nak() {
    let parsed = ubx_codec::parse(&frame(0x05, 0x00, &[0x06, 0x8a])).unwrap();
    assert_eq!(parsed.identity(), "ACK-NAK");
    assert_eq!(parsed.mode(), Mode::Get);
    assert_eq!(parsed.to_string(), "<UBX(ACK-NAK, clsID=6, msgID=138)>");
}

#[test]
fn test_mon_ver_extensions() {
    let mut payload = text("ROM CORE 3.01 (107888)", 30);
    payload.extend(text("00080000", 10));
    payload.extend(text("FWVER=SPG 3.01", 30));
    payload.extend(text("PROTVER=18.00", 30));

    let parsed = ubx_codec::parse(&frame(0x0a, 0x04, &payload)).unwrap();
    assert_eq!(parsed.identity(), "MON-VER");
    assert_eq!(parsed.length(), 100);
    let text_of = |name| parsed.get(name).and_then(Value::as_text);
    assert_eq!(text_of("swVersion"), Some("ROM CORE 3.01 (107888)"));
    assert_eq!(text_of("hwVersion"), Some("00080000"));
    assert_eq!(text_of("extension_01"), Some("FWVER=SPG 3.01"));
    assert_eq!(text_of("extension_02"), Some("PROTVER=18.00"));
    assert_eq!(parsed.get("extension_03"), None);

    // an extension cut short matches no layout
    let truncated = &payload[..payload.len() - 1];
    assert!(matches!(
        ubx_codec::parse(&frame(0x0a, 0x04, truncated)),
        Err(UbxError::PayloadLength { len: 99, .. })
    ));
}

#[test]
fn test_inf_notice_text() {
    let parsed = ubx_codec::parse(&frame(0x04, 0x02, b"ANTSTATUS=OK")).unwrap();
    assert_eq!(parsed.identity(), "INF-NOTICE");
    assert_eq!(
        parsed.get("message").and_then(Value::as_text),
        Some("ANTSTATUS=OK")
    );
}

#[test]
fn test_nav_pvt_bit_fields() {
    let msg = ubx_codec::build(
        "NAV",
        "NAV-PVT",
        Mode::Get,
        &[
            ("iTOW", Value::from(387_092_000u32)),
            ("year", Value::from(2024u16)),
            ("validDate", Value::from(true)),
            ("validTime", Value::from(1u8)),
            ("fixType", Value::from(3u8)),
            ("gnssFixOk", Value::from(1u8)),
            ("carrSoln", Value::from(2u8)),
            ("numSV", Value::from(12u8)),
            ("lon", Value::from(-21_865_040i32)),
            ("lat", Value::from(534_516_670i32)),
        ],
    )
    .unwrap();
    assert_eq!(msg.length(), 92);
    let payload = msg.payload();
    assert_eq!(payload[11], 0b0000_0011);
    assert_eq!(payload[20], 3);
    assert_eq!(payload[21], 0b1000_0001);
    assert_eq!(payload[23], 12);

    let parsed = ubx_codec::parse(&msg.to_bytes()).unwrap();
    assert_eq!(parsed.mode(), Mode::Get);
    assert_eq!(parsed.get("carrSoln"), Some(&Value::Unsigned(2)));
    assert_eq!(parsed.get("psmState"), Some(&Value::Unsigned(0)));
    assert_eq!(parsed.get("lon"), Some(&Value::Signed(-21_865_040)));
    assert_eq!(
        ubx_codec::itow2utc(parsed.get("iTOW").and_then(Value::as_u64).unwrap() as u32)
            .to_string(),
        "11:31:14"
    );

    let poll = ubx_codec::build("NAV", "NAV-PVT", Mode::Poll, &[]).unwrap();
    assert_eq!(poll.to_bytes(), [0xb5, 0x62, 0x01, 0x07, 0x00, 0x00, 0x08, 0x19]);
    assert_eq!(ubx_codec::parse(&poll.to_bytes()).unwrap().mode(), Mode::Poll);
}

#[test]
fn test_mon_rf_blocks() {
    let mut payload = vec![0x00, 0x02, 0x00, 0x00];
    for (block_id, jamming, noise) in [(0u8, 1u8, 87u16), (1, 2, 93)] {
        payload.write_u8(block_id).unwrap();
        payload.write_u8(jamming).unwrap();
        payload.write_u8(2).unwrap(); // antStatus OK
        payload.write_u8(1).unwrap(); // antPower ON
        payload.write_u32::<LittleEndian>(0).unwrap();
        payload.write_u32::<LittleEndian>(0).unwrap();
        payload.write_u16::<LittleEndian>(noise).unwrap();
        payload.write_u16::<LittleEndian>(5000).unwrap();
        payload.write_u8(10).unwrap();
        payload.write_i8(-3).unwrap();
        payload.write_u8(120).unwrap();
        payload.write_i8(4).unwrap();
        payload.write_u8(121).unwrap();
        payload.extend_from_slice(&[0; 3]);
    }
    let parsed = ubx_codec::parse(&frame(0x0a, 0x38, &payload)).unwrap();
    assert_eq!(parsed.get("nBlocks"), Some(&Value::Unsigned(2)));
    assert_eq!(parsed.get("jammingState_02"), Some(&Value::Unsigned(2)));
    assert_eq!(parsed.get("noisePerMS_01"), Some(&Value::Unsigned(87)));
    assert_eq!(parsed.get("ofsI_02"), Some(&Value::Signed(-3)));
    assert_eq!(
        parsed.get("reserved2_01"),
        Some(&Value::Array(vec![Value::Unsigned(0); 3]))
    );
}

#[test]
fn test_build_ignores_unknown_and_zero_fills_missing() {
    let msg = ubx_codec::build(
        "CFG",
        "CFG-RATE",
        Mode::Set,
        &[("measRate", Value::from(1000u16)), ("bogus", Value::from(9u8))],
    )
    .unwrap();
    assert_eq!(msg.payload(), [0xe8, 0x03, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(msg.get("bogus"), None);
    assert_eq!(msg.get("navRate"), Some(&Value::Unsigned(0)));
}

#[test]
fn test_build_rejects_out_of_range_values() {
    assert!(matches!(
        ubx_codec::build("CFG", "CFG-RATE", Mode::Set, &[("measRate", Value::from(70_000u32))]),
        Err(UbxError::InvalidType { .. })
    ));
    // psmState is three bits wide
    assert!(matches!(
        ubx_codec::build("NAV", "NAV-PVT", Mode::Get, &[("psmState", Value::from(8u8))]),
        Err(UbxError::InvalidType { .. })
    ));
}

#[test]
fn test_cfg_valget_response() {
    let mut payload = vec![0x01, 0x00, 0x00, 0x00];
    payload.write_u32::<LittleEndian>(0x40520001).unwrap();
    payload.write_u32::<LittleEndian>(115_200).unwrap();
    payload.write_u32::<LittleEndian>(0x10650001).unwrap();
    payload.write_u8(1).unwrap();

    let parsed = ubx_codec::parse(&frame(0x06, 0x8b, &payload)).unwrap();
    assert_eq!(parsed.mode(), Mode::Get);
    assert_eq!(
        parsed.get("CFG_UART1_BAUDRATE"),
        Some(&Value::Unsigned(115_200))
    );
    assert_eq!(parsed.get("CFG_USB_ENABLED"), Some(&Value::Bool(true)));

    // a key the registry does not know cannot be skipped
    payload.write_u32::<LittleEndian>(0x10ff_0fff).unwrap();
    payload.write_u8(1).unwrap();
    assert!(ubx_codec::parse(&frame(0x06, 0x8b, &payload)).is_err());
}

#[test]
fn test_config_set_and_poll_frames() {
    let registry = Registry::global();
    let set = registry
        .config_set(
            CfgLayerSet::RAM | CfgLayerSet::FLASH,
            CfgTransaction::None,
            &[
                ("CFG_NAVSPG_DYNMODEL", Value::from(4u8)),
                ("CFG_USB_ENABLED", Value::from(true)),
            ],
        )
        .unwrap();
    assert_eq!(
        set.payload(),
        [0x00, 0x05, 0x00, 0x00, 0x21, 0x00, 0x11, 0x20, 0x04, 0x01, 0x00, 0x65, 0x10, 0x01]
    );

    let poll = registry
        .config_poll(ubx_codec::CfgLayerGet::Ram, 0, &["CFG_NAVSPG_DYNMODEL"])
        .unwrap();
    let parsed = registry
        .parse_with(
            &poll.to_bytes(),
            ParseOptions::default().with_mode(Mode::Poll),
        )
        .unwrap();
    assert_eq!(parsed.get("keys_01"), Some(&Value::Unsigned(0x20110021)));
}

#[test]
fn test_custom_registry() {
    const TIM_TM2_POLL: PayloadSchema = PayloadSchema::new(&[]);
    const TIM_TM2: PayloadSchema = PayloadSchema::new(&[
        SchemaItem::Field("ch", TypeTag::U1),
        SchemaItem::Field("count", TypeTag::U2),
    ]);
    let registry = Registry::builder()
        .class(0x0d, "TIM")
        .message(0x0d, 0x03, "TIM-TM2")
        .schema(Mode::Poll, "TIM-TM2", TIM_TM2_POLL)
        .schema(Mode::Get, "TIM-TM2", TIM_TM2)
        .build()
        .unwrap();

    let msg = registry
        .build("TIM", "TIM-TM2", Mode::Get, &[("count", Value::from(513u16))])
        .unwrap();
    assert_eq!(msg.payload(), [0x00, 0x01, 0x02]);
    let parsed = registry.parse(&msg.to_bytes()).unwrap();
    assert_eq!(parsed, msg);

    // the standard tables know nothing about this registry
    assert_eq!(
        Registry::global().parse(&msg.to_bytes()),
        Err(UbxError::UnknownMessage { class: 0x0d, id: 0x03 })
    );
}
