// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! References to declared objects and their decompositions.

use super::{DiscreteRange, Expression, Mode, ObjectClass, SubtypeIndication};
use crate::data::Symbol;
use crate::named_entity::ObjectDeclaration;
use std::sync::Arc;

/// An array element of a base reference, `base(idx0, idx1)`
#[derive(PartialEq, Debug, Clone)]
pub struct ArrayElement {
    pub base: Box<ObjectReference>,
    pub indices: Vec<Expression>,
}

/// A slice of a base reference, `base(0 to 3)`
#[derive(PartialEq, Debug, Clone)]
pub struct Slice {
    pub base: Box<ObjectReference>,
    pub range: DiscreteRange,
}

/// A record element of a base reference, `base.element`
#[derive(PartialEq, Debug, Clone)]
pub struct RecordElement {
    pub base: Box<ObjectReference>,
    pub element: Symbol,
}

/// An attribute of a base reference, `base'attr(param)`
///
/// Never assignable.
#[derive(PartialEq, Debug, Clone)]
pub struct AttributeExpression {
    pub base: Box<ObjectReference>,
    pub attr: Symbol,
    pub parameter: Option<Expression>,
}

/// A reference to a declared object or a decomposition of one.
///
/// Every non-root variant owns exactly one base reference, forming a
/// strictly acyclic chain down to the declaration; identity queries
/// forward to that root.
#[derive(PartialEq, Debug, Clone)]
pub enum ObjectReference {
    Object(Arc<ObjectDeclaration>),
    ArrayElement(ArrayElement),
    Slice(Slice),
    RecordElement(RecordElement),
    Attribute(AttributeExpression),
}

impl ObjectReference {
    /// The base reference one decomposition step up, `None` for the root.
    pub fn base(&self) -> Option<&ObjectReference> {
        match self {
            ObjectReference::Object(..) => None,
            ObjectReference::ArrayElement(elem) => Some(&elem.base),
            ObjectReference::Slice(slice) => Some(&slice.base),
            ObjectReference::RecordElement(elem) => Some(&elem.base),
            ObjectReference::Attribute(attr) => Some(&attr.base),
        }
    }

    /// The declaration of the innermost root object.
    pub fn declaration(&self) -> &Arc<ObjectDeclaration> {
        match self {
            ObjectReference::Object(decl) => decl,
            other => other
                .base()
                .expect("non-root variants have a base")
                .declaration(),
        }
    }

    pub fn identifier(&self) -> &Symbol {
        &self.declaration().ident
    }

    pub fn object_class(&self) -> ObjectClass {
        self.declaration().class
    }

    pub fn mode(&self) -> Option<Mode> {
        self.declaration().mode
    }

    pub fn subtype(&self) -> Option<&SubtypeIndication> {
        self.declaration().subtype.as_ref()
    }

    /// May this reference appear on the left-hand side of an assignment?
    pub fn can_be_assigned_to(&self) -> bool {
        if matches!(self, ObjectReference::Attribute(..)) {
            return false;
        }
        matches!(
            self.object_class(),
            ObjectClass::Signal | ObjectClass::Variable | ObjectClass::SharedVariable
        )
    }

    pub fn array_element(self, indices: Vec<Expression>) -> ObjectReference {
        ObjectReference::ArrayElement(ArrayElement {
            base: Box::new(self),
            indices,
        })
    }

    pub fn slice(self, range: DiscreteRange) -> ObjectReference {
        ObjectReference::Slice(Slice {
            base: Box::new(self),
            range,
        })
    }

    pub fn record_element(self, element: Symbol) -> ObjectReference {
        ObjectReference::RecordElement(RecordElement {
            base: Box::new(self),
            element,
        })
    }

    pub fn attribute(self, attr: Symbol, parameter: Option<Expression>) -> ObjectReference {
        ObjectReference::Attribute(AttributeExpression {
            base: Box::new(self),
            attr,
            parameter,
        })
    }
}

/// An object reference usable as an assignment target.
///
/// The constructor enforces [ObjectReference::can_be_assigned_to], so a
/// value of this type is assignable by construction.
#[derive(PartialEq, Debug, Clone)]
pub struct Target {
    reference: ObjectReference,
}

impl Target {
    pub fn new(reference: ObjectReference) -> Option<Target> {
        if reference.can_be_assigned_to() {
            Some(Target { reference })
        } else {
            None
        }
    }

    pub fn reference(&self) -> &ObjectReference {
        &self.reference
    }

    pub fn into_reference(self) -> ObjectReference {
        self.reference
    }
}
