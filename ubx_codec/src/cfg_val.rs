//! Configuration key codec.
//!
//! Names are never derived from the key bits: the registry is the
//! authority, and both directions of the translation go through it.

use std::collections::HashMap;

use crate::{
    error::{Result, UbxError},
    symbols::SymbolTable,
    value::{decode, encode, TypeTag, Value},
};

/// 32-bit configuration item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigKey(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageSize {
    OneBit,
    OneByte,
    TwoBytes,
    FourBytes,
    EightBytes,
}

impl StorageSize {
    pub const fn to_usize(self) -> usize {
        match self {
            Self::OneBit | Self::OneByte => 1,
            Self::TwoBytes => 2,
            Self::FourBytes => 4,
            Self::EightBytes => 8,
        }
    }

    /// Size class a value of type `tag` must be stored with
    pub const fn for_tag(tag: TypeTag) -> Option<Self> {
        match tag {
            TypeTag::L => Some(Self::OneBit),
            _ => match tag.width() {
                1 => Some(Self::OneByte),
                2 => Some(Self::TwoBytes),
                4 => Some(Self::FourBytes),
                8 => Some(Self::EightBytes),
                _ => None,
            },
        }
    }
}

impl ConfigKey {
    pub(crate) const SIZE: usize = 4;

    /// Storage size class held in bits 28..30
    pub const fn storage_size(self) -> Option<StorageSize> {
        match (self.0 >> 28) & 0b111 {
            1 => Some(StorageSize::OneBit),
            2 => Some(StorageSize::OneByte),
            3 => Some(StorageSize::TwoBytes),
            4 => Some(StorageSize::FourBytes),
            5 => Some(StorageSize::EightBytes),
            _ => None,
        }
    }

    /// Group id held in bits 16..23
    pub const fn group_id(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Item id held in bits 0..11
    pub const fn item_id(self) -> u16 {
        (self.0 & 0x0fff) as u16
    }
}

/// Authoritative name ↔ key ↔ type registry
#[derive(Debug, Clone)]
pub struct ConfigKeyRegistry {
    names: SymbolTable<u32, &'static str>,
    types: HashMap<u32, TypeTag>,
}

impl ConfigKeyRegistry {
    /// Builds the registry. Every entry's key must carry the storage size
    /// class matching its type, and names and keys must be unique.
    pub fn from_entries(entries: &[(&'static str, u32, TypeTag)]) -> Result<Self> {
        for (name, key, tag) in entries {
            let expect = StorageSize::for_tag(*tag);
            if expect.is_none() || ConfigKey(*key).storage_size() != expect {
                return Err(UbxError::invalid_type(
                    tag,
                    format!("{} key {:#010x} has a mismatching size class", name, key),
                ));
            }
        }
        let names = SymbolTable::from_pairs(entries.iter().map(|(name, key, _)| (*key, *name)))?;
        let types = entries.iter().map(|(_, key, tag)| (*key, *tag)).collect();
        Ok(Self { names, types })
    }

    pub fn cfgname2key(&self, name: &str) -> Result<(u32, TypeTag)> {
        let key = self
            .names
            .key_from_val(name)
            .map_err(|_| UbxError::UnknownKey(name.to_string()))?;
        Ok((key, self.types[&key]))
    }

    pub fn cfgkey2name(&self, key: u32) -> Result<(&'static str, TypeTag)> {
        let name = self
            .names
            .get(&key)
            .ok_or_else(|| UbxError::UnknownKey(format!("{:#010x}", key)))?;
        Ok((name, self.types[&key]))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, key, type)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32, TypeTag)> + '_ {
        self.names
            .iter()
            .map(move |(key, name)| (name, key, self.types[&key]))
    }

    /// Key followed by the encoded value, as carried by CFG-VALSET
    pub(crate) fn encode_pair(&self, name: &str, value: &Value) -> Result<Vec<u8>> {
        let (key, tag) = self.cfgname2key(name)?;
        let mut bytes = key.to_le_bytes().to_vec();
        bytes.extend(encode(value, tag)?);
        Ok(bytes)
    }

    /// Splits a key/value list into named values.
    ///
    /// `Ok(None)` means the bytes end inside a key or value.
    pub(crate) fn decode_pairs(&self, mut bytes: &[u8]) -> Result<Option<Vec<(String, Value)>>> {
        let mut out = Vec::new();
        while !bytes.is_empty() {
            if bytes.len() < ConfigKey::SIZE {
                return Ok(None);
            }
            let key = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            let (name, tag) = self.cfgkey2name(key)?;
            let end = ConfigKey::SIZE + tag.width();
            if bytes.len() < end {
                return Ok(None);
            }
            out.push((name.to_string(), decode(&bytes[ConfigKey::SIZE..end], tag)?));
            bytes = &bytes[end..];
        }
        Ok(Some(out))
    }
}
