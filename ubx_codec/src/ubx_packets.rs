//! Built-in UBX tables: classes, message ids, payload layouts and
//! configuration keys.

mod cfg_keys;
mod classes;
mod payloads;

pub(crate) use cfg_keys::{CFG_KEYS, CFG_MSGOUT};
pub(crate) use classes::{UBX_CLASSES, UBX_MSGIDS};
pub(crate) use payloads::{UBX_PAYLOADS_GET, UBX_PAYLOADS_POLL, UBX_PAYLOADS_SET};
