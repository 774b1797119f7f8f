//! A proptest generator for U-Blox NAV-SAT messages.
//!
//! NAV-SAT carries a counted group of satellite blocks, each with a
//! 32-bit flags field, so it covers repeated groups and bit-field
//! splitting in one message.

use byteorder::{LittleEndian, WriteBytesExt};
use proptest::prelude::*;
use ubx_codec::Value;

/// One satellite block of NAV-SAT, 12 bytes.
#[derive(Debug, Clone)]
pub struct NavSatSvInfo {
    pub gnss_id: u8,
    pub sv_id: u8,
    pub cno: u8,
    pub elev: i8,
    pub azim: i16,
    pub pr_res: i16,
    pub flags: u32,
}

#[derive(Debug, Clone)]
pub struct NavSatPayload {
    pub itow: u32,
    pub version: u8,
    pub reserved0: u16,
    pub svs: Vec<NavSatSvInfo>,
}

impl NavSatPayload {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut wtr = Vec::with_capacity(8 + 12 * self.svs.len());
        wtr.write_u32::<LittleEndian>(self.itow).unwrap();
        wtr.write_u8(self.version).unwrap();
        wtr.write_u8(self.svs.len() as u8).unwrap();
        wtr.write_u16::<LittleEndian>(self.reserved0).unwrap();
        for sv in &self.svs {
            wtr.write_u8(sv.gnss_id).unwrap();
            wtr.write_u8(sv.sv_id).unwrap();
            wtr.write_u8(sv.cno).unwrap();
            wtr.write_i8(sv.elev).unwrap();
            wtr.write_i16::<LittleEndian>(sv.azim).unwrap();
            wtr.write_i16::<LittleEndian>(sv.pr_res).unwrap();
            wtr.write_u32::<LittleEndian>(sv.flags).unwrap();
        }
        wtr
    }
}

fn calculate_checksum(data: &[u8]) -> (u8, u8) {
    let mut ck_a: u8 = 0;
    let mut ck_b: u8 = 0;
    for byte in data {
        ck_a = ck_a.wrapping_add(*byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }
    (ck_a, ck_b)
}

fn sv_info_strategy() -> impl Strategy<Value = NavSatSvInfo> {
    (
        0u8..7,
        any::<u8>(),
        any::<u8>(),
        -90i8..=90,
        0i16..360,
        any::<i16>(),
        any::<u32>(),
    )
        .prop_map(|(gnss_id, sv_id, cno, elev, azim, pr_res, flags)| NavSatSvInfo {
            gnss_id,
            sv_id,
            cno,
            elev,
            azim,
            pr_res,
            flags,
        })
}

fn nav_sat_payload_strategy() -> impl Strategy<Value = NavSatPayload> {
    (
        any::<u32>(),
        any::<u8>(),
        any::<u16>(),
        prop::collection::vec(sv_info_strategy(), 0..12),
    )
        .prop_map(|(itow, version, reserved0, svs)| NavSatPayload {
            itow,
            version,
            reserved0,
            svs,
        })
}

pub fn ubx_nav_sat_frame_strategy() -> impl Strategy<Value = (NavSatPayload, Vec<u8>)> {
    nav_sat_payload_strategy().prop_map(|payload_struct| {
        let payload = payload_struct.to_bytes();

        let mut frame_core = Vec::with_capacity(4 + payload.len());
        frame_core.push(0x01);
        frame_core.push(0x35);
        frame_core
            .write_u16::<LittleEndian>(payload.len() as u16)
            .unwrap();
        frame_core.extend_from_slice(&payload);

        let (ck_a, ck_b) = calculate_checksum(&frame_core);

        let mut final_frame = Vec::with_capacity(8 + payload.len());
        final_frame.push(0xB5);
        final_frame.push(0x62);
        final_frame.extend_from_slice(&frame_core);
        final_frame.push(ck_a);
        final_frame.push(ck_b);

        (payload_struct, final_frame)
    })
}

fn unsigned(v: impl Into<u64>) -> Option<Value> {
    Some(Value::Unsigned(v.into()))
}

proptest! {
    #[test]
    fn test_parse_generated_nav_sat_frames((expected, frame) in ubx_nav_sat_frame_strategy()) {
        let msg = ubx_codec::parse(&frame).unwrap();
        prop_assert_eq!(msg.identity(), "NAV-SAT");
        prop_assert_eq!(msg.get("iTOW").cloned(), unsigned(expected.itow));
        prop_assert_eq!(msg.get("numSvs").cloned(), unsigned(expected.svs.len() as u8));

        for (i, sv) in expected.svs.iter().enumerate() {
            let field = |name: &str| msg.get(&format!("{}_{:02}", name, i + 1)).cloned();
            prop_assert_eq!(field("gnssId"), unsigned(sv.gnss_id));
            prop_assert_eq!(field("svId"), unsigned(sv.sv_id));
            prop_assert_eq!(field("elev"), Some(Value::Signed(sv.elev.into())));
            prop_assert_eq!(field("azim"), Some(Value::Signed(sv.azim.into())));
            prop_assert_eq!(field("prRes"), Some(Value::Signed(sv.pr_res.into())));
            prop_assert_eq!(field("qualityInd"), unsigned(sv.flags & 0x7));
            prop_assert_eq!(field("svUsed"), unsigned((sv.flags >> 3) & 0x1));
            prop_assert_eq!(field("health"), unsigned((sv.flags >> 4) & 0x3));
            prop_assert_eq!(field("orbitSource"), unsigned((sv.flags >> 8) & 0x7));
            prop_assert_eq!(field("sbasCorrUsed"), unsigned((sv.flags >> 16) & 0x1));
            prop_assert_eq!(field("doCorrUsed"), unsigned((sv.flags >> 22) & 0x1));
        }
        let first_missing = format!("svId_{:02}", expected.svs.len() + 1);
        prop_assert!(msg.get(&first_missing).is_none());
    }

    #[test]
    fn test_nav_sat_fields_rebuild_known_bits((expected, frame) in ubx_nav_sat_frame_strategy()) {
        let msg = ubx_codec::parse(&frame).unwrap();
        let fields: Vec<(&str, Value)> = msg.fields().map(|(n, v)| (n, v.clone())).collect();
        let rebuilt = ubx_codec::build("NAV", "NAV-SAT", msg.mode(), &fields).unwrap();

        // only the reserved flag bits are lost on a rebuild
        const KNOWN_FLAGS: u32 = 0x007f_7fff;
        let mut masked = expected.clone();
        for sv in &mut masked.svs {
            sv.flags &= KNOWN_FLAGS;
        }
        let expected_payload = masked.to_bytes();
        prop_assert_eq!(rebuilt.payload(), expected_payload.as_slice());
    }
}
