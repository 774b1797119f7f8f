/// Message classes, name to class byte
pub(crate) const UBX_CLASSES: &[(u8, &str)] = &[
    (0x01, "NAV"),
    (0x02, "RXM"),
    (0x04, "INF"),
    (0x05, "ACK"),
    (0x06, "CFG"),
    (0x09, "UPD"),
    (0x0a, "MON"),
    (0x0b, "AID"),
    (0x0d, "TIM"),
    (0x10, "ESF"),
    (0x13, "MGA"),
    (0x21, "LOG"),
    (0x27, "SEC"),
    (0x28, "HNR"),
    (0x29, "NAV2"),
];

/// Messages, (class, id) to message name
pub(crate) const UBX_MSGIDS: &[((u8, u8), &str)] = &[
    // ACK
    ((0x05, 0x00), "ACK-NAK"),
    ((0x05, 0x01), "ACK-ACK"),
    // CFG
    ((0x06, 0x00), "CFG-PRT"),
    ((0x06, 0x01), "CFG-MSG"),
    ((0x06, 0x02), "CFG-INF"),
    ((0x06, 0x04), "CFG-RST"),
    ((0x06, 0x08), "CFG-RATE"),
    ((0x06, 0x09), "CFG-CFG"),
    ((0x06, 0x24), "CFG-NAV5"),
    ((0x06, 0x3e), "CFG-GNSS"),
    ((0x06, 0x8a), "CFG-VALSET"),
    ((0x06, 0x8b), "CFG-VALGET"),
    ((0x06, 0x8c), "CFG-VALDEL"),
    // INF
    ((0x04, 0x00), "INF-ERROR"),
    ((0x04, 0x01), "INF-WARNING"),
    ((0x04, 0x02), "INF-NOTICE"),
    ((0x04, 0x03), "INF-TEST"),
    ((0x04, 0x04), "INF-DEBUG"),
    // MON
    ((0x0a, 0x02), "MON-IO"),
    ((0x0a, 0x04), "MON-VER"),
    ((0x0a, 0x06), "MON-MSGPP"),
    ((0x0a, 0x07), "MON-RXBUF"),
    ((0x0a, 0x08), "MON-TXBUF"),
    ((0x0a, 0x09), "MON-HW"),
    ((0x0a, 0x38), "MON-RF"),
    // NAV
    ((0x01, 0x01), "NAV-POSECEF"),
    ((0x01, 0x02), "NAV-POSLLH"),
    ((0x01, 0x03), "NAV-STATUS"),
    ((0x01, 0x04), "NAV-DOP"),
    ((0x01, 0x07), "NAV-PVT"),
    ((0x01, 0x12), "NAV-VELNED"),
    ((0x01, 0x20), "NAV-TIMEGPS"),
    ((0x01, 0x21), "NAV-TIMEUTC"),
    ((0x01, 0x22), "NAV-CLOCK"),
    ((0x01, 0x35), "NAV-SAT"),
    ((0x01, 0x61), "NAV-EOE"),
    // TIM
    ((0x0d, 0x01), "TIM-TP"),
];
