use crate::constants::{
    UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_HEADER_LEN, UBX_LENGTH_OFFSET, UBX_SYNC_CHAR_1,
    UBX_SYNC_CHAR_2,
};
use crate::error::UbxError;

/// Running UBX checksum, two 8-bit [Fletcher](https://en.wikipedia.org/wiki/Fletcher%27s_checksum)
/// accumulators over the class, id, length and payload bytes.
#[derive(Default, Debug, Clone, Copy)]
pub struct UbxChecksumCalc {
    ck_a: u8,
    ck_b: u8,
}

impl UbxChecksumCalc {
    pub const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    pub const fn update_byte(&mut self, byte: u8) {
        self.ck_a = self.ck_a.wrapping_add(byte);
        self.ck_b = self.ck_b.wrapping_add(self.ck_a);
    }

    /// `(ck_a, ck_b)` as they appear on the wire
    pub const fn result(self) -> (u8, u8) {
        (self.ck_a, self.ck_b)
    }
}

/// Checksum over a class, id, length and payload span
pub const fn calc_checksum(span: &[u8]) -> [u8; 2] {
    let mut calc = UbxChecksumCalc::new();
    calc.update(span);
    let (ck_a, ck_b) = calc.result();
    [ck_a, ck_b]
}

/// Checks the sync chars and that the length field agrees with the frame
/// size. Returns the payload length.
pub(crate) fn check_framing(frame: &[u8]) -> Result<usize, UbxError> {
    if frame.len() < UBX_HEADER_LEN + UBX_CHECKSUM_LEN {
        return Err(UbxError::Framing("frame shorter than header and checksum"));
    }
    if frame[0] != UBX_SYNC_CHAR_1 || frame[1] != UBX_SYNC_CHAR_2 {
        return Err(UbxError::Framing("missing sync chars"));
    }
    let pack_len =
        usize::from(u16::from_le_bytes([frame[UBX_LENGTH_OFFSET], frame[UBX_LENGTH_OFFSET + 1]]));
    if frame.len() != UBX_HEADER_LEN + pack_len + UBX_CHECKSUM_LEN {
        return Err(UbxError::Framing("length field disagrees with frame size"));
    }
    Ok(pack_len)
}

/// Checks framing and the trailing checksum of a frame.
pub(crate) fn validate_frame(frame: &[u8]) -> Result<(), UbxError> {
    let end = UBX_HEADER_LEN + check_framing(frame)?;
    let got = calc_checksum(&frame[UBX_CLASS_OFFSET..end]);
    let expect = [frame[end], frame[end + 1]];
    if got != expect {
        return Err(UbxError::Checksum {
            expect: u16::from_le_bytes(expect),
            got: u16::from_le_bytes(got),
        });
    }
    Ok(())
}

/// Recomputes the checksum of a complete frame and compares it with the
/// trailing two bytes.
///
/// Returns `false` rather than failing for truncated frames, bad sync
/// chars or a length field that disagrees with the frame size.
pub fn isvalid_checksum(frame: &[u8]) -> bool {
    validate_frame(frame).is_ok()
}
