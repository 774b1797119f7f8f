use crate::error::{Result, UbxError};

/// Reads the bits selected by `mask` out of `bytes`.
///
/// The bytes are read as one big-endian unsigned integer in the order
/// given, masked, then shifted right by the number of trailing zero bits of
/// the mask. A zero mask yields zero; a mask reaching past the input is an
/// error.
pub fn get_bits(bytes: &[u8], mask: u64) -> Result<u64> {
    let width = bytes.len();
    if width < 8 && mask >> (8 * width) != 0 {
        return Err(UbxError::InvalidBitMask { mask, width });
    }
    if mask == 0 {
        return Ok(0);
    }
    let tail = &bytes[width.saturating_sub(8)..];
    let value = tail
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
    Ok((value & mask) >> mask.trailing_zeros())
}

/// Mask covering `len` bits starting at bit `offset`
pub(crate) const fn bit_mask(offset: u32, len: u32) -> u64 {
    if len >= 64 {
        u64::MAX << offset
    } else {
        ((1u64 << len) - 1) << offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_masks() {
        assert_eq!(get_bits(b"\x89", 192), Ok(2));
        assert_eq!(get_bits(b"\xc9", 3), Ok(1));
        assert_eq!(get_bits(b"\x89", 9), Ok(9));
        assert_eq!(get_bits(b"\xc9", 9), Ok(9));
    }

    #[test]
    fn multi_byte_masks() {
        assert_eq!(get_bits(b"\x18\x18", 8), Ok(1));
        assert_eq!(get_bits(b"\x18\x20", 8), Ok(0));
        // mask spanning the byte boundary
        assert_eq!(get_bits(b"\x01\x80", 0x0180), Ok(0b11));
        assert_eq!(get_bits(b"\xab\xcd\xef", 0x0ff0_00), Ok(0xbc));
    }

    #[test]
    fn zero_mask() {
        assert_eq!(get_bits(b"\xff\xff", 0), Ok(0));
        assert_eq!(get_bits(b"", 0), Ok(0));
    }

    #[test]
    fn mask_wider_than_input() {
        assert_eq!(
            get_bits(b"\xff", 0x100),
            Err(UbxError::InvalidBitMask {
                mask: 0x100,
                width: 1
            })
        );
        assert!(get_bits(b"", 1).is_err());
    }

    #[test]
    fn long_input_uses_low_bytes() {
        let bytes = [0xaa, 0, 0, 0, 0, 0, 0, 0, 0x80];
        assert_eq!(get_bits(&bytes, 0x80), Ok(1));
        assert_eq!(get_bits(&bytes, u64::MAX), Ok(0x80));
    }

    #[test]
    fn masks() {
        assert_eq!(bit_mask(0, 1), 0b1);
        assert_eq!(bit_mask(3, 2), 0b1_1000);
        assert_eq!(bit_mask(0, 64), u64::MAX);
    }
}
