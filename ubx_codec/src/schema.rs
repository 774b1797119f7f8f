//! Payload layouts and the generic machinery that applies them.

use core::fmt;

use crate::{
    bits::{bit_mask, get_bits},
    cfg_val::ConfigKeyRegistry,
    constants::MAX_CFG_KEYS,
    error::{Result, UbxError},
    value::{decode, encode, TypeTag, Value},
};

/// Direction a payload layout applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mode {
    /// Output from the receiver
    Get = 0,
    /// Command sent to the receiver
    Set = 1,
    /// Request for output
    Poll = 2,
}

impl Mode {
    /// Order in which layouts are tried when the mode is not known
    pub const ALL: [Mode; 3] = [Mode::Get, Mode::Set, Mode::Poll];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Get => "GET",
            Mode::Set => "SET",
            Mode::Poll => "POLL",
        })
    }
}

impl TryFrom<u8> for Mode {
    type Error = UbxError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Mode::Get),
            1 => Ok(Mode::Set),
            2 => Ok(Mode::Poll),
            _ => Err(UbxError::NotFound(format!("mode {}", v))),
        }
    }
}

/// One slice of a bit-field, least significant bits first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitPart {
    Bit(&'static str, u32),
    /// Unnamed reserved bits, zero on encode and skipped on decode
    Gap(u32),
}

impl BitPart {
    const fn len(self) -> u32 {
        match self {
            BitPart::Bit(_, n) | BitPart::Gap(n) => n,
        }
    }
}

/// How often a repeat group occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Count taken from an earlier field
    Count(&'static str),
    /// Repeated until the payload is exhausted
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaItem {
    Field(&'static str, TypeTag),
    /// Little-endian bit-field of the given byte width split into parts
    Bits(usize, &'static [BitPart]),
    /// Repeat group; field names inside get a `_01`, `_02`, ... suffix
    Group(Repeat, &'static [SchemaItem]),
    /// Remaining payload bytes as one raw value
    Tail(&'static str),
    /// Configuration key/value pairs filling the rest of the payload
    CfgData,
}

/// Ordered field layout for one (class, id, mode)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadSchema {
    items: &'static [SchemaItem],
}

pub(crate) type Fields = Vec<(String, Value)>;

impl PayloadSchema {
    pub const fn new(items: &'static [SchemaItem]) -> Self {
        Self { items }
    }

    pub const fn items(&self) -> &'static [SchemaItem] {
        self.items
    }

    /// Payload length if the layout has no variable part
    pub fn fixed_len(&self) -> Option<usize> {
        fixed_width(self.items)
    }

    /// Encodes named values in layout order. Missing values encode as zero
    /// and names the layout does not know are ignored.
    pub(crate) fn encode(
        &self,
        fields: &[(&str, Value)],
        cfg: &ConfigKeyRegistry,
    ) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.fixed_len().unwrap_or(0));
        encode_items(self.items, fields, "", &mut out, cfg)?;
        Ok(out)
    }

    /// Decodes a payload. `Ok(None)` means the layout does not fit the
    /// payload length.
    pub(crate) fn decode(&self, payload: &[u8], cfg: &ConfigKeyRegistry) -> Result<Option<Fields>> {
        let mut out = Vec::new();
        let mut offset = 0;
        if !decode_items(self.items, payload, &mut offset, "", &mut out, cfg)?
            || offset != payload.len()
        {
            return Ok(None);
        }
        Ok(Some(out))
    }
}

fn fixed_width(items: &[SchemaItem]) -> Option<usize> {
    items.iter().try_fold(0, |acc, item| match item {
        SchemaItem::Field(_, tag) => Some(acc + tag.width()),
        SchemaItem::Bits(width, _) => Some(acc + width),
        _ => None,
    })
}

fn check_bits_width(width: usize) -> Result<()> {
    if width > 8 {
        return Err(UbxError::invalid_type(
            TypeTag::X(width),
            "bit-fields wider than 8 bytes cannot be split",
        ));
    }
    Ok(())
}

fn lookup<'a>(fields: &'a [(&str, Value)], name: &str) -> Option<&'a Value> {
    fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
}

fn has_any_field(items: &[SchemaItem], fields: &[(&str, Value)], suffix: &str) -> bool {
    items.iter().any(|item| match item {
        SchemaItem::Field(name, _) => lookup(fields, &format!("{}{}", name, suffix)).is_some(),
        SchemaItem::Bits(_, parts) => parts.iter().any(|part| match part {
            BitPart::Bit(name, _) => lookup(fields, &format!("{}{}", name, suffix)).is_some(),
            BitPart::Gap(_) => false,
        }),
        _ => false,
    })
}

fn encode_items(
    items: &[SchemaItem],
    fields: &[(&str, Value)],
    suffix: &str,
    out: &mut Vec<u8>,
    cfg: &ConfigKeyRegistry,
) -> Result<()> {
    for item in items {
        match *item {
            SchemaItem::Field(name, tag) => match lookup(fields, &format!("{}{}", name, suffix)) {
                Some(value) => out.extend(encode(value, tag)?),
                None => out.resize(out.len() + tag.width(), 0),
            },
            SchemaItem::Bits(width, parts) => {
                check_bits_width(width)?;
                let mut raw = 0u64;
                let mut shift = 0;
                for part in parts {
                    if let BitPart::Bit(name, len) = *part {
                        let value = match lookup(fields, &format!("{}{}", name, suffix)) {
                            Some(v) => v.as_u64().ok_or_else(|| {
                                UbxError::invalid_type(TypeTag::X(width), format!("{} for {}", v, name))
                            })?,
                            None => 0,
                        };
                        if value & !bit_mask(0, len) != 0 {
                            return Err(UbxError::invalid_type(
                                TypeTag::X(width),
                                format!("{} does not fit the {} bits of {}", value, len, name),
                            ));
                        }
                        raw |= value << shift;
                    }
                    shift += part.len();
                }
                out.extend_from_slice(&raw.to_le_bytes()[..width]);
            },
            SchemaItem::Group(Repeat::Count(count_field), inner) => {
                let count = lookup(fields, &format!("{}{}", count_field, suffix))
                    .and_then(Value::as_u64)
                    .unwrap_or(0);
                for i in 1..=count {
                    encode_items(inner, fields, &format!("{}_{:02}", suffix, i), out, cfg)?;
                }
            },
            SchemaItem::Group(Repeat::Rest, inner) => {
                let mut i = 1;
                loop {
                    let suffix = format!("{}_{:02}", suffix, i);
                    if !has_any_field(inner, fields, &suffix) {
                        break;
                    }
                    encode_items(inner, fields, &suffix, out, cfg)?;
                    i += 1;
                }
            },
            SchemaItem::Tail(name) => match lookup(fields, &format!("{}{}", name, suffix)) {
                Some(Value::Bytes(bytes)) => out.extend_from_slice(bytes),
                Some(other) => {
                    return Err(UbxError::invalid_type(
                        TypeTag::C(0),
                        format!("{} for {} is not raw bytes", other, name),
                    ))
                },
                None => {},
            },
            SchemaItem::CfgData => {
                let pairs: Vec<_> = fields
                    .iter()
                    .filter(|(name, _)| cfg.cfgname2key(name).is_ok())
                    .collect();
                if pairs.len() > MAX_CFG_KEYS {
                    return Err(UbxError::TooManyConfigKeys(pairs.len()));
                }
                for (name, value) in pairs {
                    out.extend(cfg.encode_pair(name, value)?);
                }
            },
        }
    }
    Ok(())
}

fn decode_items(
    items: &[SchemaItem],
    payload: &[u8],
    offset: &mut usize,
    suffix: &str,
    out: &mut Fields,
    cfg: &ConfigKeyRegistry,
) -> Result<bool> {
    for item in items {
        match *item {
            SchemaItem::Field(name, tag) => {
                let Some(bytes) = payload.get(*offset..*offset + tag.width()) else {
                    return Ok(false);
                };
                out.push((format!("{}{}", name, suffix), decode(bytes, tag)?));
                *offset += tag.width();
            },
            SchemaItem::Bits(width, parts) => {
                check_bits_width(width)?;
                let Some(bytes) = payload.get(*offset..*offset + width) else {
                    return Ok(false);
                };
                // the extractor reads big-endian, the wire is little-endian
                let msb_first: Vec<u8> = bytes.iter().rev().copied().collect();
                let mut shift = 0;
                for part in parts {
                    if let BitPart::Bit(name, len) = *part {
                        let value = get_bits(&msb_first, bit_mask(shift, len))?;
                        out.push((format!("{}{}", name, suffix), Value::Unsigned(value)));
                    }
                    shift += part.len();
                }
                *offset += width;
            },
            SchemaItem::Group(repeat, inner) => {
                let count = match repeat {
                    Repeat::Count(count_field) => {
                        let count_name = format!("{}{}", count_field, suffix);
                        out.iter()
                            .rev()
                            .find(|(n, _)| *n == count_name)
                            .and_then(|(_, v)| v.as_u64())
                            .ok_or(UbxError::NotFound(count_name))?
                    },
                    Repeat::Rest => {
                        let width = fixed_width(inner).ok_or_else(|| {
                            UbxError::invalid_type("group", "open-ended group must have a fixed width")
                        })?;
                        let remaining = payload.len().saturating_sub(*offset);
                        if width == 0 || remaining % width != 0 {
                            return Ok(false);
                        }
                        (remaining / width) as u64
                    },
                };
                for i in 1..=count {
                    let suffix = format!("{}_{:02}", suffix, i);
                    if !decode_items(inner, payload, offset, &suffix, out, cfg)? {
                        return Ok(false);
                    }
                }
            },
            SchemaItem::Tail(name) => {
                let rest = payload.get(*offset..).unwrap_or_default();
                out.push((format!("{}{}", name, suffix), Value::Bytes(rest.to_vec())));
                *offset = payload.len();
            },
            SchemaItem::CfgData => {
                let rest = payload.get(*offset..).unwrap_or_default();
                match cfg.decode_pairs(rest)? {
                    Some(pairs) => out.extend(pairs),
                    None => return Ok(false),
                }
                *offset = payload.len();
            },
        }
    }
    Ok(true)
}
