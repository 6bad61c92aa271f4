// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Raw compound names and their disambiguation.
//!
//! The grammar reduces every compound name to a prefix followed by
//! suffixes; what a suffix means is only decidable against a scope.
//! `foo(bar)` is indexing, a slice, a type conversion or a call depending
//! on what `foo` denotes. Each `to_*` entry point below makes a strict
//! attempt to read the whole part sequence as one construct and falls back
//! to a diagnostic plus an optional placeholder, so conversion can always
//! proceed.

use crate::analysis::analyze::ResolveContext;
use crate::analysis::scope::DeclarativeRegion;
use crate::ast::{AssociationElement, DiscreteRange, Expression, ObjectClass, Signature};
use crate::data::{ErrorKind, SrcPos, Symbol};
use crate::named_entity::{
    AnyDeclaration, ComponentDeclaration, ConfigurationDeclaration, EntityDeclaration,
    ObjectDeclaration, TypeDeclaration, TypeMark,
};
use std::cell::Cell;
use std::sync::Arc;

/// The attribute suffix of a name, `'designator[(expr)]` with an optional
/// signature on the prefix.
#[derive(PartialEq, Debug, Clone)]
pub struct AttributePart {
    pub designator: Symbol,
    pub expr: Option<Expression>,
    pub signature: Option<Signature>,
}

/// One syntactic fragment of a compound name, classified by the grammar.
///
/// Which construct a part denotes is decided during resolution.
#[derive(PartialEq, Debug, Clone)]
pub enum Part {
    /// `.suffix`, or the leading simple name
    Selected(Symbol),
    /// Parenthesized positional expressions
    Indexed(Vec<Expression>),
    /// An explicit slice suffix
    Slice(DiscreteRange),
    Attribute(AttributePart),
    /// Parenthesized named or positional association
    Association(Vec<AssociationElement>),
    /// An operator symbol used as a bare name, such as `"+"`
    OperatorSymbol(String),
}

/// An immutable part sequence read through a resettable forward cursor.
///
/// Resolution never removes or reorders parts; reinterpreting the same
/// sequence against a different target starts over with [PartList::reset].
#[derive(Default, Debug)]
pub struct PartList {
    parts: Vec<Part>,
    current: Cell<usize>,
}

impl PartList {
    fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn reset(&self) {
        self.current.set(0);
    }

    pub fn remaining(&self) -> usize {
        self.parts.len() - self.current.get()
    }

    /// Has the cursor consumed every part?
    ///
    /// Distinguishes "fully consumed, success" from "trailing parts left
    /// unexplained" after a lookup succeeded.
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek(&self) -> Option<&Part> {
        self.parts.get(self.current.get())
    }

    pub fn next(&self) -> Option<&Part> {
        let part = self.parts.get(self.current.get());
        if part.is_some() {
            self.current.set(self.current.get() + 1);
        }
        part
    }

    /// The next part, if it is the only one remaining.
    pub fn only_remaining(&self) -> Option<&Part> {
        if self.remaining() == 1 {
            self.peek()
        } else {
            None
        }
    }
}

/// A compound name as delivered by the grammar, before resolution.
///
/// Always starts with exactly one selected or operator-symbol prefix.
#[derive(Debug)]
pub struct RawName {
    pub(crate) parts: PartList,
    pub(crate) pos: SrcPos,
}

impl RawName {
    /// A name starting with a simple prefix.
    pub fn simple(prefix: Symbol, pos: SrcPos) -> RawName {
        let mut parts = PartList::default();
        parts.push(Part::Selected(prefix));
        RawName { parts, pos }
    }

    /// A name consisting of an operator symbol, such as `"+"`.
    pub fn operator(literal: impl Into<String>, pos: SrcPos) -> RawName {
        let mut parts = PartList::default();
        parts.push(Part::OperatorSymbol(literal.into()));
        RawName { parts, pos }
    }

    /// Append a suffix part.
    ///
    /// Panics on an operator-symbol suffix: the grammar only produces
    /// operator symbols as the name prefix, anything else is an upstream
    /// contract violation.
    pub fn push(&mut self, part: Part) {
        assert!(
            !matches!(part, Part::OperatorSymbol(..)),
            "operator symbol must be the prefix of a name"
        );
        self.parts.push(part);
    }

    pub fn pos(&self) -> SrcPos {
        self.pos
    }

    pub fn parts(&self) -> &PartList {
        &self.parts
    }

    /// Flatten the leading selected parts to their dotted text.
    ///
    /// Used for diagnostics and placeholder identifiers; leaves the cursor
    /// at the first non-selected part.
    pub fn to_identifier(&self) -> String {
        self.parts.reset();

        let mut identifier = String::new();
        while let Some(Part::Selected(suffix)) = self.parts.peek() {
            if !identifier.is_empty() {
                identifier.push('.');
            }
            identifier.push_str(suffix.name());
            self.parts.next();
        }

        if identifier.is_empty() {
            "unknown".to_owned()
        } else {
            identifier
        }
    }

    /// The dotted text of the whole name, `None` unless every part is a
    /// selected part.
    ///
    /// This is what use clauses and subprogram names expect.
    pub fn to_selected_name(&self) -> Option<String> {
        self.parts.reset();

        let mut name = String::new();
        while let Some(part) = self.parts.next() {
            let Part::Selected(suffix) = part else {
                return None;
            };
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(suffix.name());
        }

        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Walk the leading selected parts through the scope until the filter
    /// accepts a declaration.
    ///
    /// A declaration of the wrong kind is only stepped into when it is a
    /// nested region; any other mismatch, a missing declaration or a
    /// non-selected part ends the attempt. On success the cursor sits just
    /// past the matched part, so the caller can check
    /// [PartList::is_finished] or keep consuming decomposition suffixes.
    pub(crate) fn resolve_filtered<T>(
        &self,
        scope: &dyn DeclarativeRegion,
        filter: impl Fn(&AnyDeclaration) -> Option<T>,
    ) -> Option<T> {
        self.parts.reset();

        let mut nested: Option<Arc<dyn DeclarativeRegion>> = None;
        while let Some(Part::Selected(suffix)) = self.parts.peek() {
            let declaration = match nested.as_ref() {
                Some(region) => region.lookup(suffix),
                None => scope.lookup(suffix),
            }?;
            self.parts.next();

            if let Some(found) = filter(&declaration) {
                return Some(found);
            } else if let AnyDeclaration::Region(region) = declaration {
                nested = Some(region);
            } else {
                return None;
            }
        }

        None
    }

    pub fn to_entity(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Arc<EntityDeclaration>> {
        let entity = self.resolve_filtered(scope, AnyDeclaration::as_entity);
        if self.parts.is_finished() {
            if let Some(entity) = entity {
                return Some(entity);
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownEntity, &identifier);

        if ctx.settings().create_placeholders {
            Some(Arc::new(EntityDeclaration::new(
                ctx.symbols().insert(&identifier),
            )))
        } else {
            None
        }
    }

    pub fn to_configuration(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Arc<ConfigurationDeclaration>> {
        let configuration = self.resolve_filtered(scope, AnyDeclaration::as_configuration);
        if self.parts.is_finished() {
            if let Some(configuration) = configuration {
                return Some(configuration);
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownConfiguration, &identifier);

        if ctx.settings().create_placeholders {
            Some(Arc::new(ConfigurationDeclaration::new(
                ctx.symbols().insert(&identifier),
            )))
        } else {
            None
        }
    }

    pub fn to_component(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Arc<ComponentDeclaration>> {
        let component = self.resolve_filtered(scope, AnyDeclaration::as_component);
        if self.parts.is_finished() {
            if let Some(component) = component {
                return Some(component);
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownComponent, &identifier);

        if ctx.settings().create_placeholders {
            Some(Arc::new(ComponentDeclaration::new(
                ctx.symbols().insert(&identifier),
            )))
        } else {
            None
        }
    }

    pub fn to_signal(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Arc<ObjectDeclaration>> {
        let signal = self.resolve_filtered(scope, |declaration| {
            declaration
                .as_object()
                .filter(|object| object.class == ObjectClass::Signal)
        });
        if self.parts.is_finished() {
            if let Some(signal) = signal {
                return Some(signal);
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownSignal, &identifier);

        if ctx.settings().create_placeholders {
            Some(Arc::new(ObjectDeclaration::signal(
                ctx.symbols().insert(&identifier),
                None,
            )))
        } else {
            None
        }
    }

    pub fn to_type_mark(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<TypeMark> {
        let type_mark = self.resolve_filtered(scope, AnyDeclaration::as_type);
        if self.parts.is_finished() {
            if let Some(type_mark) = type_mark {
                return Some(type_mark);
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownType, &identifier);

        if ctx.settings().create_placeholders {
            Some(Arc::new(TypeDeclaration::new(
                ctx.symbols().insert(&identifier),
            )))
        } else {
            None
        }
    }
}

/// The actual expressions of an association list, in order, skipping
/// `open` elements.
pub(crate) fn association_actuals(elements: &[AssociationElement]) -> Vec<Expression> {
    elements
        .iter()
        .filter_map(|element| match &element.actual {
            crate::ast::ActualPart::Expression(expr) => Some(expr.clone()),
            crate::ast::ActualPart::Open => None,
        })
        .collect()
}
