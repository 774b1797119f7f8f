use std::{collections::HashMap, sync::OnceLock};

use crate::{
    cfg_val::ConfigKeyRegistry,
    error::{Result, UbxError},
    schema::{Mode, PayloadSchema},
    symbols::SymbolTable,
    ubx_packets::{
        CFG_KEYS, CFG_MSGOUT, UBX_CLASSES, UBX_MSGIDS, UBX_PAYLOADS_GET, UBX_PAYLOADS_POLL,
        UBX_PAYLOADS_SET,
    },
    value::TypeTag,
};

/// Frozen set of tables the builder and parser work from.
///
/// A registry is immutable once built and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Registry {
    classes: SymbolTable<u8, &'static str>,
    messages: SymbolTable<(u8, u8), &'static str>,
    schemas: [HashMap<&'static str, PayloadSchema>; 3],
    cfg: ConfigKeyRegistry,
}

/// Collects tables for a [`Registry`]
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    classes: Vec<(u8, &'static str)>,
    messages: Vec<((u8, u8), &'static str)>,
    schemas: [Vec<(&'static str, PayloadSchema)>; 3],
    cfg_keys: Vec<(&'static str, u32, TypeTag)>,
}

impl RegistryBuilder {
    pub fn class(mut self, class: u8, name: &'static str) -> Self {
        self.classes.push((class, name));
        self
    }

    pub fn classes(mut self, classes: &[(u8, &'static str)]) -> Self {
        self.classes.extend_from_slice(classes);
        self
    }

    pub fn message(mut self, class: u8, id: u8, name: &'static str) -> Self {
        self.messages.push(((class, id), name));
        self
    }

    pub fn messages(mut self, messages: &[((u8, u8), &'static str)]) -> Self {
        self.messages.extend_from_slice(messages);
        self
    }

    pub fn schema(mut self, mode: Mode, name: &'static str, schema: PayloadSchema) -> Self {
        self.schemas[mode.index()].push((name, schema));
        self
    }

    pub fn schemas(mut self, mode: Mode, schemas: &[(&'static str, PayloadSchema)]) -> Self {
        self.schemas[mode.index()].extend_from_slice(schemas);
        self
    }

    pub fn cfg_keys(mut self, keys: &[(&'static str, u32, TypeTag)]) -> Self {
        self.cfg_keys.extend_from_slice(keys);
        self
    }

    /// Indexes every table in both directions.
    ///
    /// Fails on repeated codes or names, on a message whose class is not
    /// registered and on a payload layout for an unknown message.
    pub fn build(self) -> Result<Registry> {
        let classes = SymbolTable::from_pairs(self.classes)?;
        let messages = SymbolTable::from_pairs(self.messages)?;
        for ((class, _), name) in messages.iter() {
            if classes.get(&class).is_none() {
                return Err(UbxError::NotFound(format!("class {:#04x} of {}", class, name)));
            }
        }

        let mut schemas: [HashMap<&'static str, PayloadSchema>; 3] = Default::default();
        for (mode, table) in Mode::ALL.into_iter().zip(self.schemas) {
            let by_name = &mut schemas[mode.index()];
            for (name, schema) in table {
                if messages.key_from_val(name).is_err() {
                    return Err(UbxError::NotFound(format!("{} message {}", mode, name)));
                }
                if by_name.insert(name, schema).is_some() {
                    return Err(UbxError::DuplicateEntry(format!("{} {}", mode, name)));
                }
            }
        }

        let cfg = ConfigKeyRegistry::from_entries(&self.cfg_keys)?;
        Ok(Registry {
            classes,
            messages,
            schemas,
            cfg,
        })
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry over the built-in tables
    pub fn standard() -> Result<Self> {
        let msgout: Vec<_> = CFG_MSGOUT.iter().flatten().copied().collect();
        Self::builder()
            .classes(UBX_CLASSES)
            .messages(UBX_MSGIDS)
            .schemas(Mode::Get, UBX_PAYLOADS_GET)
            .schemas(Mode::Set, UBX_PAYLOADS_SET)
            .schemas(Mode::Poll, UBX_PAYLOADS_POLL)
            .cfg_keys(CFG_KEYS)
            .cfg_keys(&msgout)
            .build()
    }

    /// Process-wide standard registry, built on first use
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Self::standard().expect("built-in UBX tables are consistent"))
    }

    pub fn class_table(&self) -> &SymbolTable<u8, &'static str> {
        &self.classes
    }

    pub fn message_table(&self) -> &SymbolTable<(u8, u8), &'static str> {
        &self.messages
    }

    pub fn config_keys(&self) -> &ConfigKeyRegistry {
        &self.cfg
    }

    /// Class and id bytes of a message, e.g. `("CFG", "CFG-MSG")` gives
    /// `(0x06, 0x01)`.
    pub fn msgstr2bytes(&self, class_name: &str, msg_name: &str) -> Result<(u8, u8)> {
        let class = self.classes.key_from_val(class_name)?;
        let (msg_class, id) = self.messages.key_from_val(msg_name)?;
        if msg_class != class {
            return Err(UbxError::NotFound(format!("{} in class {}", msg_name, class_name)));
        }
        Ok((class, id))
    }

    /// Class and message name registered for a class/id pair
    pub fn message_name(&self, class: u8, id: u8) -> Result<(&'static str, &'static str)> {
        let unknown = UbxError::UnknownMessage { class, id };
        let name = self.messages.get(&(class, id)).ok_or(unknown.clone())?;
        let class_name = self.classes.get(&class).ok_or(unknown)?;
        Ok((class_name, name))
    }

    pub fn schema(&self, msg_name: &str, mode: Mode) -> Option<&PayloadSchema> {
        self.schemas[mode.index()].get(msg_name)
    }

    pub fn cfgname2key(&self, name: &str) -> Result<(u32, TypeTag)> {
        self.cfg.cfgname2key(name)
    }

    pub fn cfgkey2name(&self, key: u32) -> Result<(&'static str, TypeTag)> {
        self.cfg.cfgkey2name(key)
    }
}
