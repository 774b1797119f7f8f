use crate::{constants::MAX_CFG_KEYS, schema::Mode, value::TypeTag};

/// Every failure the codec can report.
///
/// Checksum validation through [`crate::isvalid_checksum`] never produces
/// one of these; it answers with a `bool` so stream readers can skip
/// corrupt frames.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UbxError {
    /// Unknown type tag text, a value of the wrong kind or out of range
    #[error("invalid type {tag}: {reason}")]
    InvalidType { tag: String, reason: String },

    /// Byte slice does not have the width the tag requires
    #[error("cannot decode {got} bytes as {tag}, expect {expect}")]
    DecodeLength {
        tag: TypeTag,
        expect: usize,
        got: usize,
    },

    #[error("bit mask {mask:#x} is wider than the {width} input bytes")]
    InvalidBitMask { mask: u64, width: usize },

    #[error("{0} not found")]
    NotFound(String),

    #[error("unknown message class {class:#04x} id {id:#04x}")]
    UnknownMessage { class: u8, id: u8 },

    #[error("no {mode} payload definition for {message}")]
    NoSchema { message: &'static str, mode: Mode },

    #[error("{message}: no payload definition matches {len} payload bytes")]
    PayloadLength { message: String, len: usize },

    #[error("malformed frame: {0}")]
    Framing(&'static str),

    #[error("not valid frame checksum, expect {expect:#06x}, got {got:#06x}")]
    Checksum { expect: u16, got: u16 },

    #[error("unknown configuration key {0}")]
    UnknownKey(String),

    #[error("duplicate table entry {0}")]
    DuplicateEntry(String),

    #[error("{0} configuration keys requested, at most {max} allowed", max = MAX_CFG_KEYS)]
    TooManyConfigKeys(usize),
}

impl UbxError {
    pub(crate) fn invalid_type(tag: impl ToString, reason: impl Into<String>) -> Self {
        UbxError::InvalidType {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, UbxError>;
