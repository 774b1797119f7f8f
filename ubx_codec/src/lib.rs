//! # ubx_codec
//!
//! Builds and parses binary frames of the u-blox UBX protocol from symbolic
//! message definitions.
//!
//! Messages are described at runtime by payload layouts held in a
//! [`Registry`]. The built-in registry covers the common ACK, CFG, INF, MON,
//! NAV and TIM messages together with a table of configuration keys.
//!
//! Constructing Packets
//! ====================
//!
//! ```
//! use ubx_codec::{Mode, Value};
//!
//! let msg = ubx_codec::build(
//!     "CFG",
//!     "CFG-MSG",
//!     Mode::Poll,
//!     &[("msgClass", Value::from(0xf0u8)), ("msgID", Value::from(0x05u8))],
//! )
//! .unwrap();
//! assert_eq!(msg.to_bytes(), b"\xb5\x62\x06\x01\x02\x00\xf0\x05\xfe\x16");
//! ```
//!
//! Parsing Packets
//! ===============
//!
//! `parse` takes one complete frame. Finding frame boundaries in a byte
//! stream is left to the caller.
//! ```
//! let msg = ubx_codec::parse(b"\xb5\x62\x05\x01\x02\x00\x06\x01\x0f\x38").unwrap();
//! assert_eq!(msg.identity(), "ACK-ACK");
//! assert_eq!(msg.get("clsID").and_then(|v| v.as_u64()), Some(6));
//! ```
//!
//! Configuration Keys
//! ==================
//!
//! ```
//! use ubx_codec::TypeTag;
//!
//! assert_eq!(ubx_codec::cfgname2key("CFG_NMEA_PROTVER"), Ok((0x20930001, TypeTag::E1)));
//! assert_eq!(ubx_codec::cfgkey2name(0x20510001), Ok(("CFG_I2C_ADDRESS", TypeTag::U1)));
//! ```

#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    bits::get_bits,
    cfg_msg::{CfgLayerGet, CfgLayerSet, CfgTransaction},
    cfg_val::{ConfigKey, ConfigKeyRegistry, StorageSize},
    checksum::{calc_checksum, isvalid_checksum, UbxChecksumCalc},
    constants::*,
    error::{Result, UbxError},
    helpers::{dop2str, gnss2str, gpsfix2str, itow2utc},
    message::{ParseOptions, UbxMessage},
    registry::{Registry, RegistryBuilder},
    schema::{BitPart, Mode, PayloadSchema, Repeat, SchemaItem},
    symbols::{key_from_val, SymbolTable},
    value::{decode, encode, Elem, TypeTag, Value},
};

mod bits;
mod cfg_msg;
mod cfg_val;
mod checksum;
mod constants;
mod error;
mod helpers;
mod message;
mod registry;
mod schema;
mod symbols;
mod ubx_packets;
mod value;

/// Builds a message with the [global registry](Registry::global).
pub fn build(
    class_name: &str,
    msg_name: &str,
    mode: Mode,
    fields: &[(&str, Value)],
) -> Result<UbxMessage> {
    Registry::global().build(class_name, msg_name, mode, fields)
}

/// Parses one complete frame with the [global registry](Registry::global).
pub fn parse(frame: &[u8]) -> Result<UbxMessage> {
    Registry::global().parse(frame)
}

/// Class and id bytes of a message in the [global registry](Registry::global).
pub fn msgstr2bytes(class_name: &str, msg_name: &str) -> Result<(u8, u8)> {
    Registry::global().msgstr2bytes(class_name, msg_name)
}

/// Key and type of a named configuration item.
pub fn cfgname2key(name: &str) -> Result<(u32, TypeTag)> {
    Registry::global().cfgname2key(name)
}

/// Name and type registered for a configuration key.
pub fn cfgkey2name(key: u32) -> Result<(&'static str, TypeTag)> {
    Registry::global().cfgkey2name(key)
}
