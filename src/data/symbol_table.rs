// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

use fnv::FnvHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Represents an unique string symbol
/// The id can be used as a fast comparison key for symbols
#[derive(Clone, Debug, Eq)]
pub struct Symbol {
    /// The unique id of the symbol
    pub(crate) id: usize,

    /// The name of the symbol
    name: Arc<String>,
}

impl Symbol {
    fn new(id: usize, name: &Arc<String>) -> Symbol {
        Symbol {
            id,
            name: Arc::clone(name),
        }
    }

    /// Return the name of the symbol with the case it was declared in
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl PartialEq for Symbol {
    /// Symbols are compared just based on the id
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

/// A case insensitive symbol table to allocate unique id:s to symbols
/// which are equal during case insensitive comparison
///
/// Extended identifiers (`\name\`) keep their case and are only equal to
/// themselves.
#[derive(Default)]
pub struct SymbolTable {
    name_to_symbol: RwLock<FnvHashMap<Arc<String>, Symbol>>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        let name_to_symbol = self.name_to_symbol.read();
        name_to_symbol.get(&name.to_owned()).cloned()
    }

    /// Insert a new symbol and return it. If a symbol already exists
    /// that matches the case insensitive name it is returned
    pub fn insert(&self, name: &str) -> Symbol {
        if let Some(symbol) = self.lookup(name) {
            symbol
        } else {
            self.insert_new(name)
        }
    }

    fn insert_new(&self, name: &str) -> Symbol {
        let mut name_to_symbol = self.name_to_symbol.write();

        // Lookup again after taking the lock to avoid a race where the
        // same symbol is created in parallel
        if let Some(sym) = name_to_symbol.get(&name.to_owned()) {
            return sym.clone();
        }

        let is_extended = name.starts_with('\\');
        let name = Arc::new(name.to_owned());
        if is_extended {
            let id = name_to_symbol.len();
            let sym = Symbol::new(id, &name);
            name_to_symbol.insert(name, sym.clone());
            return sym;
        }

        // Symbol does not exist with the given case, try normalized case
        let normal_name = Arc::new(name.to_lowercase());

        match name_to_symbol.get(&normal_name).cloned() {
            // Symbol exists in normalized case, copy its id
            Some(normal_sym) => {
                let sym = Symbol::new(normal_sym.id, &name);
                name_to_symbol.insert(name, sym.clone());
                sym
            }

            None => {
                let id = name_to_symbol.len();

                if normal_name != name {
                    let sym = Symbol::new(id, &normal_name);
                    name_to_symbol.insert(normal_name, sym);
                }

                let sym = Symbol::new(id, &name);
                name_to_symbol.insert(name, sym.clone());
                sym
            }
        }
    }
}
