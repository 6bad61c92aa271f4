// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Shared setup for the analysis tests.

use crate::analysis::analyze::ResolveContext;
use crate::analysis::names::RawName;
use crate::analysis::scope::Region;
use crate::ast::{
    AbstractLiteral, Direction, DiscreteRange, Expression, Literal, Range, RangeConstraint,
};
use crate::config::Settings;
use crate::data::{Position, SrcPos, Symbol, SymbolTable};
use crate::named_entity::{
    AnyDeclaration, EntityDeclaration, EnumerationLiteral, FunctionDeclaration,
    ObjectDeclaration, PhysicalUnit, TypeDeclaration,
};
use std::sync::Arc;

pub(crate) struct TestSetup {
    pub symbols: Arc<SymbolTable>,
    pub root: Arc<Region>,
}

impl TestSetup {
    pub fn new() -> TestSetup {
        TestSetup {
            symbols: Arc::new(SymbolTable::new()),
            root: Arc::new(Region::new()),
        }
    }

    pub fn pos() -> SrcPos {
        SrcPos::new(Position::new(0, 0), Position::new(0, 1))
    }

    pub fn symbol(&self, name: &str) -> Symbol {
        self.symbols.insert(name)
    }

    pub fn scope(&self) -> &Region {
        &self.root
    }

    /// A context that records diagnostics but does not print them.
    pub fn ctx(&self) -> ResolveContext {
        let settings = Settings {
            emit_resolve_errors: true,
            print_errors: false,
            ..Settings::default()
        };
        ResolveContext::new(settings, Arc::clone(&self.symbols))
    }

    pub fn ctx_without_placeholders(&self) -> ResolveContext {
        let settings = Settings {
            create_placeholders: false,
            emit_resolve_errors: true,
            print_errors: false,
            ..Settings::default()
        };
        ResolveContext::new(settings, Arc::clone(&self.symbols))
    }

    pub fn ctx_silent(&self) -> ResolveContext {
        let settings = Settings {
            print_errors: false,
            ..Settings::default()
        };
        ResolveContext::new(settings, Arc::clone(&self.symbols))
    }

    /// Build a raw name from its dotted text.
    pub fn name(&self, dotted: &str) -> RawName {
        let mut idents = dotted.split('.');
        let mut name = RawName::simple(
            self.symbol(idents.next().expect("at least a prefix")),
            Self::pos(),
        );
        for ident in idents {
            name.push(crate::analysis::names::Part::Selected(self.symbol(ident)));
        }
        name
    }

    pub fn add_signal(&self, name: &str) -> Arc<ObjectDeclaration> {
        let declaration = Arc::new(ObjectDeclaration::signal(self.symbol(name), None));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::Object(Arc::clone(&declaration)),
        );
        declaration
    }

    pub fn add_variable(&self, name: &str) -> Arc<ObjectDeclaration> {
        let declaration = Arc::new(ObjectDeclaration::variable(self.symbol(name), None));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::Object(Arc::clone(&declaration)),
        );
        declaration
    }

    pub fn add_type(&self, name: &str) -> Arc<TypeDeclaration> {
        let declaration = Arc::new(TypeDeclaration::new(self.symbol(name)));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::Type(Arc::clone(&declaration)),
        );
        declaration
    }

    pub fn add_entity(&self, name: &str) -> Arc<EntityDeclaration> {
        let declaration = Arc::new(EntityDeclaration::new(self.symbol(name)));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::Entity(Arc::clone(&declaration)),
        );
        declaration
    }

    pub fn add_function(&self, name: &str) -> Arc<FunctionDeclaration> {
        let declaration = Arc::new(FunctionDeclaration::new(self.symbol(name)));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::Function(Arc::clone(&declaration)),
        );
        declaration
    }

    pub fn add_enumeration_literal(&self, name: &str) -> Arc<EnumerationLiteral> {
        let declaration = Arc::new(EnumerationLiteral::new(self.symbol(name)));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::EnumerationLiteral(Arc::clone(&declaration)),
        );
        declaration
    }

    pub fn add_physical_unit(&self, name: &str) -> Arc<PhysicalUnit> {
        let declaration = Arc::new(PhysicalUnit::new(self.symbol(name)));
        self.root.add(
            self.symbol(name),
            AnyDeclaration::PhysicalUnit(Arc::clone(&declaration)),
        );
        declaration
    }

    /// Register a nested region, such as a library or package, under the
    /// given name.
    pub fn add_region(&self, name: &str) -> Arc<Region> {
        let region = Arc::new(Region::new());
        self.root.add(
            self.symbol(name),
            AnyDeclaration::Region(Arc::clone(&region) as Arc<dyn super::DeclarativeRegion>),
        );
        region
    }

    pub fn int(value: u64) -> Expression {
        Expression::Literal(Literal::Abstract(AbstractLiteral::Integer(value)))
    }

    pub fn to_range(left: u64, right: u64) -> RangeConstraint {
        RangeConstraint {
            direction: Direction::Ascending,
            left_expr: Box::new(Self::int(left)),
            right_expr: Box::new(Self::int(right)),
        }
    }

    pub fn downto(left: u64, right: u64) -> DiscreteRange {
        DiscreteRange::Range(Range::Range(RangeConstraint {
            direction: Direction::Descending,
            left_expr: Box::new(Self::int(left)),
            right_expr: Box::new(Self::int(right)),
        }))
    }
}
