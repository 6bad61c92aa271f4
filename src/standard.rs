// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

use crate::data::SymbolTable;
use crate::named_entity::{TypeDeclaration, TypeMark};
use std::sync::Arc;

/// Type marks of the predefined `std.standard` package.
///
/// Only the types the resolver itself needs are provided; the full
/// standard package is registered into scope by the embedding driver.
#[derive(Clone)]
pub struct Standard {
    pub boolean: TypeMark,
    pub bit: TypeMark,
    pub integer: TypeMark,
    pub string: TypeMark,
}

impl Standard {
    pub fn new(symbols: &SymbolTable) -> Standard {
        let type_mark = |name: &str| Arc::new(TypeDeclaration::new(symbols.insert(name)));
        Standard {
            boolean: type_mark("boolean"),
            bit: type_mark("bit"),
            integer: type_mark("integer"),
            string: type_mark("string"),
        }
    }
}
