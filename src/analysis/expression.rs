// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Resolution of names used as values.
//!
//! This is where the grammar is most ambiguous: `foo(bar)` can be
//! indexing, a type conversion or a function call. The prefix decides;
//! each step below short-circuits on success.

use super::names::{association_actuals, Part, RawName};
use crate::analysis::analyze::ResolveContext;
use crate::analysis::scope::DeclarativeRegion;
use crate::ast::{
    ActualPart, AssociationElement, FunctionCall, Literal, ObjectReference, Primary,
    SubtypeIndication, TypeConversion,
};
use crate::data::ErrorKind;
use crate::named_entity::{AnyDeclaration, ObjectDeclaration};
use std::sync::Arc;

impl RawName {
    /// Apply the remaining parts as decomposition steps, attributes
    /// included.
    fn add_primary_parts(&self, base: ObjectReference) -> ObjectReference {
        let mut reference = base;
        while let Some(part) = self.parts.next() {
            match part {
                Part::Association(elements) => {
                    reference = reference.array_element(association_actuals(elements));
                }
                Part::Indexed(indices) => {
                    reference = reference.array_element(indices.clone());
                }
                Part::Selected(suffix) => {
                    reference = reference.record_element(suffix.clone());
                }
                Part::Slice(range) => {
                    reference = reference.slice(range.clone());
                }
                Part::Attribute(attribute) => {
                    // @TODO attribute signatures are parsed but not yet
                    // carried into the built expression
                    reference = reference
                        .attribute(attribute.designator.clone(), attribute.expr.clone());
                }
                // an operator-symbol prefix has no decomposition; only
                // reachable on the placeholder path
                Part::OperatorSymbol(..) => {}
            }
        }
        reference
    }

    /// Resolve a name used as a value.
    ///
    /// `in_element_association` marks the choice position of an aggregate,
    /// where a lone simple name is a record element name and must not be
    /// resolved against the scope.
    ///
    /// A prefix denoting a function always yields a call, even with no
    /// parameter list; whether the context allows a bare function name is
    /// not validated here.
    pub fn to_primary(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
        in_element_association: bool,
    ) -> Option<Primary> {
        if in_element_association {
            self.parts.reset();
            if let Some(Part::Selected(suffix)) = self.parts.only_remaining() {
                let placeholder = ObjectDeclaration::signal(
                    suffix.clone(),
                    Some(SubtypeIndication::new(ctx.standard().string.clone())),
                );
                return Some(Primary::Object(ObjectReference::Object(Arc::new(
                    placeholder,
                ))));
            }
        }

        // Any declared object: the remaining parts are decomposition
        if let Some(object) = self.resolve_filtered(scope, AnyDeclaration::as_object) {
            let reference = self.add_primary_parts(ObjectReference::Object(object));
            return Some(Primary::Object(reference));
        }

        // A type mark: a single parenthesized argument is a conversion,
        // never indexing
        if let Some(type_mark) = self.resolve_filtered(scope, AnyDeclaration::as_type) {
            if let Some(part) = self.parts.only_remaining() {
                match part {
                    Part::Attribute(attribute) => {
                        let placeholder = Arc::new(ObjectDeclaration::signal(
                            type_mark.ident.clone(),
                            None,
                        ));
                        let reference = ObjectReference::Object(placeholder)
                            .attribute(attribute.designator.clone(), attribute.expr.clone());
                        return Some(Primary::Object(reference));
                    }
                    Part::Association(elements) => {
                        if let [AssociationElement {
                            formal: None,
                            actual: ActualPart::Expression(actual),
                        }] = elements.as_slice()
                        {
                            return Some(Primary::TypeConversion(TypeConversion {
                                type_mark,
                                expression: Box::new(actual.clone()),
                            }));
                        }
                    }
                    Part::Indexed(indices) => {
                        if let [index] = indices.as_slice() {
                            return Some(Primary::TypeConversion(TypeConversion {
                                type_mark,
                                expression: Box::new(index.clone()),
                            }));
                        }
                    }
                    _ => {}
                }
            }
        }

        if let Some(function) = self.resolve_filtered(scope, AnyDeclaration::as_function) {
            if self.parts.is_finished() {
                return Some(Primary::FunctionCall(FunctionCall {
                    function,
                    parameters: Vec::new(),
                }));
            }
            if let Some(part) = self.parts.only_remaining() {
                match part {
                    Part::Association(elements) => {
                        return Some(Primary::FunctionCall(FunctionCall {
                            function,
                            parameters: elements.clone(),
                        }));
                    }
                    Part::Indexed(indices) => {
                        return Some(Primary::FunctionCall(FunctionCall {
                            function,
                            parameters: indices
                                .iter()
                                .cloned()
                                .map(AssociationElement::positional)
                                .collect(),
                        }));
                    }
                    _ => {}
                }
            }
        }

        // A lone suffix may be an enumeration literal or a physical unit;
        // literals are not regions, so look it up directly
        self.parts.reset();
        if let Some(part) = self.parts.only_remaining() {
            match part {
                Part::Selected(suffix) => match scope.lookup(suffix) {
                    Some(AnyDeclaration::EnumerationLiteral(literal)) => {
                        return Some(Primary::EnumerationLiteral(literal));
                    }
                    Some(AnyDeclaration::PhysicalUnit(unit)) => {
                        return Some(Primary::PhysicalUnit(unit));
                    }
                    _ => {}
                },
                Part::OperatorSymbol(literal) => {
                    return Some(Primary::Literal(Literal::String(literal.clone())));
                }
                _ => {}
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownOther, &identifier);

        if ctx.settings().create_placeholders {
            let placeholder = Arc::new(ObjectDeclaration::signal(
                ctx.symbols().insert(&identifier),
                None,
            ));
            let reference = self.add_primary_parts(ObjectReference::Object(placeholder));
            Some(Primary::Object(reference))
        } else {
            None
        }
    }
}
