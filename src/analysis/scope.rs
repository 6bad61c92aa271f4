// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

use crate::data::Symbol;
use crate::named_entity::AnyDeclaration;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::sync::Arc;

/// Read-only lookup into a declarative region.
///
/// Name resolution never mutates a region; registration of declarations
/// happens in a strictly preceding phase owned by the embedding driver.
/// Lookup is case insensitive through [Symbol](crate::Symbol) identity.
pub trait DeclarativeRegion {
    fn lookup(&self, designator: &Symbol) -> Option<AnyDeclaration>;
}

/// A basic declarative region backed by a hash map, with an optional
/// enclosing region searched on misses.
#[derive(Default)]
pub struct Region {
    parent: Option<Arc<Region>>,
    entries: RefCell<FnvHashMap<Symbol, AnyDeclaration>>,
}

impl Region {
    pub fn new() -> Region {
        Region::default()
    }

    pub fn nested(parent: Arc<Region>) -> Region {
        Region {
            parent: Some(parent),
            entries: RefCell::default(),
        }
    }

    pub fn add(&self, designator: Symbol, declaration: AnyDeclaration) {
        self.entries.borrow_mut().insert(designator, declaration);
    }
}

impl DeclarativeRegion for Region {
    fn lookup(&self, designator: &Symbol) -> Option<AnyDeclaration> {
        if let Some(declaration) = self.entries.borrow().get(designator).cloned() {
            Some(declaration)
        } else {
            self.parent.as_ref()?.lookup(designator)
        }
    }
}
