//! Helpers for the CFG-VALSET, CFG-VALDEL and CFG-VALGET configuration
//! interface.

use bitflags::bitflags;

use crate::{
    constants::MAX_CFG_KEYS,
    error::{Result, UbxError},
    message::UbxMessage,
    registry::Registry,
    schema::Mode,
    value::Value,
};

bitflags! {
    /// A mask describing where configuration is applied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CfgLayerSet: u8 {
        const RAM = 0b001;
        const BBR = 0b010;
        const FLASH = 0b100;
    }
}

impl Default for CfgLayerSet {
    fn default() -> Self {
        Self::RAM | Self::BBR | Self::FLASH
    }
}

/// The configuration layer to read from.
///
/// The configuration system of the receiver is stacked, so an item may be
/// empty in a particular layer, in which case the receiver answers with a NAK.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfgLayerGet {
    Ram = 0,
    /// Battery backed RAM
    Bbr = 1,
    Flash = 2,
    /// The current configuration from the active source
    Default = 7,
}

/// Groups several configuration messages into one atomic change
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfgTransaction {
    /// Apply immediately, no transaction
    #[default]
    None = 0,
    Begin = 1,
    Continue = 2,
    /// Apply and end the transaction
    End = 3,
}

impl CfgTransaction {
    /// Message version carrying this transaction state
    const fn version(self) -> u8 {
        match self {
            CfgTransaction::None => 0,
            _ => 1,
        }
    }
}

fn check_key_count(count: usize) -> Result<()> {
    if count > MAX_CFG_KEYS {
        return Err(UbxError::TooManyConfigKeys(count));
    }
    Ok(())
}

impl Registry {
    /// Numbered `keys_NN` fields for a list of configuration names
    fn key_fields(&self, names: &[&str]) -> Result<Vec<(String, Value)>> {
        check_key_count(names.len())?;
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let (key, _) = self.cfgname2key(name)?;
                Ok((format!("keys_{:02}", i + 1), Value::from(key)))
            })
            .collect()
    }

    /// CFG-VALSET setting each named item to its value
    pub fn config_set(
        &self,
        layers: CfgLayerSet,
        transaction: CfgTransaction,
        cfg_data: &[(&str, Value)],
    ) -> Result<UbxMessage> {
        check_key_count(cfg_data.len())?;
        for (name, _) in cfg_data {
            self.cfgname2key(name)?;
        }
        let mut fields = vec![
            ("version", Value::from(transaction.version())),
            ("ram", Value::from(layers.contains(CfgLayerSet::RAM))),
            ("bbr", Value::from(layers.contains(CfgLayerSet::BBR))),
            ("flash", Value::from(layers.contains(CfgLayerSet::FLASH))),
            ("action", Value::from(transaction as u8)),
        ];
        fields.extend(cfg_data.iter().cloned());
        self.build("CFG", "CFG-VALSET", Mode::Set, &fields)
    }

    /// CFG-VALDEL removing the named items from the BBR and flash layers.
    /// The RAM layer cannot be deleted from and is ignored.
    pub fn config_del(
        &self,
        layers: CfgLayerSet,
        transaction: CfgTransaction,
        keys: &[&str],
    ) -> Result<UbxMessage> {
        let keys = self.key_fields(keys)?;
        let mut fields = vec![
            ("version", Value::from(transaction.version())),
            ("bbr", Value::from(layers.contains(CfgLayerSet::BBR))),
            ("flash", Value::from(layers.contains(CfgLayerSet::FLASH))),
            ("action", Value::from(transaction as u8)),
        ];
        fields.extend(keys.iter().map(|(n, v)| (n.as_str(), v.clone())));
        self.build("CFG", "CFG-VALDEL", Mode::Set, &fields)
    }

    /// CFG-VALGET poll for the named items, starting at `position` in the
    /// result list.
    pub fn config_poll(
        &self,
        layer: CfgLayerGet,
        position: u16,
        keys: &[&str],
    ) -> Result<UbxMessage> {
        let keys = self.key_fields(keys)?;
        let mut fields = vec![
            ("version", Value::from(0u8)),
            ("layer", Value::from(layer as u8)),
            ("position", Value::from(position)),
        ];
        fields.extend(keys.iter().map(|(n, v)| (n.as_str(), v.clone())));
        self.build("CFG", "CFG-VALGET", Mode::Poll, &fields)
    }
}
