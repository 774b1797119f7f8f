use core::{borrow::Borrow, fmt, hash::Hash};
use std::collections::HashMap;

use crate::error::{Result, UbxError};

/// Read-only bidirectional map between codes and symbols.
///
/// Both directions are indexed when the table is built, so forward and
/// reverse lookups are constant time.
#[derive(Debug, Clone)]
pub struct SymbolTable<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
    order: Vec<K>,
}

impl<K, V> SymbolTable<K, V>
where
    K: Copy + Eq + Hash + fmt::Debug,
    V: Copy + Eq + Hash + fmt::Debug,
{
    /// Builds the table, rejecting repeated keys or repeated values.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let (lower, _) = pairs.size_hint();
        let mut table = Self {
            forward: HashMap::with_capacity(lower),
            reverse: HashMap::with_capacity(lower),
            order: Vec::with_capacity(lower),
        };
        for (key, value) in pairs {
            if table.forward.insert(key, value).is_some() {
                return Err(UbxError::DuplicateEntry(format!("{:?}", key)));
            }
            if table.reverse.insert(value, key).is_some() {
                return Err(UbxError::DuplicateEntry(format!("{:?}", value)));
            }
            table.order.push(key);
        }
        Ok(table)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key).copied()
    }

    /// Reverse lookup, value to key
    pub fn key_from_val<Q>(&self, value: &Q) -> Result<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.reverse
            .get(value)
            .copied()
            .ok_or_else(|| UbxError::NotFound(format!("{:?}", value)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in the order they were declared
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.order.iter().map(move |k| (*k, self.forward[k]))
    }
}

/// Free-function form of [`SymbolTable::key_from_val`].
pub fn key_from_val<K, V, Q>(table: &SymbolTable<K, V>, value: &Q) -> Result<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
    V: Copy + Eq + Hash + fmt::Debug + Borrow<Q>,
    Q: Hash + Eq + fmt::Debug + ?Sized,
{
    table.key_from_val(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> SymbolTable<u8, &'static str> {
        SymbolTable::from_pairs([(0x01, "NAV"), (0x05, "ACK"), (0x0a, "MON")]).unwrap()
    }

    #[test]
    fn forward_and_reverse() {
        let table = classes();
        assert_eq!(table.get(&0x05), Some("ACK"));
        assert_eq!(table.get(&0x06), None);
        assert_eq!(key_from_val(&table, "MON"), Ok(0x0a));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            classes().key_from_val("XYZ"),
            Err(UbxError::NotFound("\"XYZ\"".to_string()))
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        assert!(matches!(
            SymbolTable::from_pairs([(1u8, "A"), (1u8, "B")]),
            Err(UbxError::DuplicateEntry(_))
        ));
        assert!(matches!(
            SymbolTable::from_pairs([(1u8, "A"), (2u8, "A")]),
            Err(UbxError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let keys: Vec<u8> = classes().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [0x01, 0x05, 0x0a]);
    }
}
