//! Symbol table
//!
//! The result of one extraction: symbol names mapped to their resolved ids. Names are unique;
//! inserting a name again overwrites its value but keeps the position it was first seen at.
//! Output always goes through [`SymbolTable::sorted_by_value`], which orders by id and falls
//! back to insertion order for symbols sharing an id.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A resolved enumerator: name plus id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub value: i64,
}

/// Insertion-ordered mapping from symbol name to id
///
/// Equality compares the name to id pairs only; insertion order is ignored.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` with `value`, overwriting any earlier entry for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.symbols[slot].value = value,
            None => {
                self.index.insert(name.clone(), self.symbols.len());
                self.symbols.push(Symbol { name, value });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&slot| self.symbols[slot].value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in the order their names were first inserted
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Symbols ascending by id; ties keep insertion order
    pub fn sorted_by_value(&self) -> Vec<&Symbol> {
        let mut sorted: Vec<&Symbol> = self.symbols.iter().collect();
        sorted.sort_by_key(|symbol| symbol.value);
        sorted
    }
}

impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .symbols
                .iter()
                .all(|symbol| other.get(&symbol.name) == Some(symbol.value))
    }
}

impl Eq for SymbolTable {}

impl<N: Into<String>> FromIterator<(N, i64)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (N, i64)>>(iter: T) -> Self {
        let mut table = SymbolTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

/// Serializes as a map in id order, so structured formats list symbols the same way the
/// python literal does.
impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sorted = self.sorted_by_value();
        let mut map = serializer.serialize_map(Some(sorted.len()))?;
        for symbol in sorted {
            map.serialize_entry(&symbol.name, &symbol.value)?;
        }
        map.end()
    }
}
