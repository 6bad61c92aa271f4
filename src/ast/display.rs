// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Implementation of Display
//!
//! Rendering only depends on the structure of the resolved graph, never on
//! how a reference was resolved, and is deterministic.

use super::*;
use crate::data::WithPos;
use crate::named_entity::{
    ComponentDeclaration, ConfigurationDeclaration, EntityDeclaration, TypeDeclaration,
};
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

impl<T: Display> Display for WithPos<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", &self.item)
    }
}

impl Display for ObjectClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.describe())
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::In => write!(f, "in"),
            Mode::Out => write!(f, "out"),
            Mode::InOut => write!(f, "inout"),
            Mode::Buffer => write!(f, "buffer"),
            Mode::Linkage => write!(f, "linkage"),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Operator::And => write!(f, "and"),
            Operator::Or => write!(f, "or"),
            Operator::Nand => write!(f, "nand"),
            Operator::Nor => write!(f, "nor"),
            Operator::Xor => write!(f, "xor"),
            Operator::Xnor => write!(f, "xnor"),
            Operator::EQ => write!(f, "="),
            Operator::NE => write!(f, "/="),
            Operator::LT => write!(f, "<"),
            Operator::LTE => write!(f, "<="),
            Operator::GT => write!(f, ">"),
            Operator::GTE => write!(f, ">="),
            Operator::SLL => write!(f, "sll"),
            Operator::SRL => write!(f, "srl"),
            Operator::SLA => write!(f, "sla"),
            Operator::SRA => write!(f, "sra"),
            Operator::ROL => write!(f, "rol"),
            Operator::ROR => write!(f, "ror"),
            Operator::Plus => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
            Operator::Concat => write!(f, "&"),
            Operator::Times => write!(f, "*"),
            Operator::Div => write!(f, "/"),
            Operator::Mod => write!(f, "mod"),
            Operator::Rem => write!(f, "rem"),
            Operator::Pow => write!(f, "**"),
            Operator::Abs => write!(f, "abs"),
            Operator::Not => write!(f, "not"),
        }
    }
}

impl Display for AbstractLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AbstractLiteral::Integer(value) => write!(f, "{value}"),
            AbstractLiteral::Real(value) => write!(f, "{value}"),
        }
    }
}

impl Display for PhysicalLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.value, self.unit.ident)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Literal::String(value) => write!(f, "\"{value}\""),
            Literal::Character(chr) => write!(f, "'{chr}'"),
            Literal::Abstract(literal) => write!(f, "{literal}"),
            Literal::Physical(literal) => write!(f, "{literal}"),
            Literal::Null => write!(f, "null"),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Binary(op, ref left, ref right) => write!(f, "{left} {op} {right}"),
            Expression::Unary(op, ref expr) => {
                if matches!(op, Operator::Abs | Operator::Not) {
                    write!(f, "{op} {expr}")
                } else {
                    write!(f, "{op}{expr}")
                }
            }
            Expression::Literal(ref literal) => write!(f, "{literal}"),
            Expression::Primary(ref primary) => write!(f, "{primary}"),
        }
    }
}

impl Display for ActualPart {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ActualPart::Expression(expr) => write!(f, "{expr}"),
            ActualPart::Open => write!(f, "open"),
        }
    }
}

impl Display for AssociationElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(ref formal) = self.formal {
            write!(f, "{formal} => ")?;
        }
        write!(f, "{}", self.actual)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Signature::Function(args, ref ret) => {
                write!(f, "[{} return {}]", args.iter().map(|t| &t.ident).format(", "), ret.ident)
            }
            Signature::Procedure(args) => {
                write!(f, "[{}]", args.iter().map(|t| &t.ident).format(", "))
            }
        }
    }
}

impl Display for RangeAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RangeAttribute::Range => write!(f, "range"),
            RangeAttribute::ReverseRange => write!(f, "reverse_range"),
        }
    }
}

impl Display for RangeAttributeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}'{}", self.prefix, self.attr)?;
        if let Some(ref expr) = self.expr {
            write!(f, "({expr})")
        } else {
            Ok(())
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Direction::Ascending => write!(f, "to"),
            Direction::Descending => write!(f, "downto"),
        }
    }
}

impl Display for RangeConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} {}", self.left_expr, self.direction, self.right_expr)
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Range::Range(constraint) => write!(f, "{constraint}"),
            Range::Attribute(attr) => write!(f, "{attr}"),
        }
    }
}

impl Display for DiscreteRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DiscreteRange::Discrete(subtype) => write!(f, "{subtype}"),
            DiscreteRange::Range(range) => write!(f, "{range}"),
        }
    }
}

impl Display for SubtypeIndication {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.type_mark.ident)?;
        match self.constraint.as_deref() {
            Some(SubtypeConstraint::Range(range)) => write!(f, " range {range}"),
            Some(SubtypeConstraint::Array(ranges)) => {
                write!(f, "({})", ranges.iter().format(", "))
            }
            None => Ok(()),
        }
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.function.ident)?;
        let mut first = true;
        for parameter in &self.parameters {
            if first {
                write!(f, "({parameter}")?;
            } else {
                write!(f, ", {parameter}")?;
            }
            first = false;
        }
        if !first {
            write!(f, ")")
        } else {
            Ok(())
        }
    }
}

impl Display for TypeConversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}({})", self.type_mark.ident, self.expression)
    }
}

impl Display for Primary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Primary::Object(reference) => write!(f, "{reference}"),
            Primary::FunctionCall(call) => write!(f, "{call}"),
            Primary::TypeConversion(conversion) => write!(f, "{conversion}"),
            Primary::EnumerationLiteral(literal) => write!(f, "{}", literal.ident),
            Primary::PhysicalUnit(unit) => write!(f, "{}", unit.ident),
            Primary::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl Display for ObjectReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ObjectReference::Object(decl) => write!(f, "{}", decl.ident),
            ObjectReference::ArrayElement(elem) => {
                write!(f, "{}({})", elem.base, elem.indices.iter().format(", "))
            }
            ObjectReference::Slice(slice) => write!(f, "{}({})", slice.base, slice.range),
            ObjectReference::RecordElement(elem) => write!(f, "{}.{}", elem.base, elem.element),
            ObjectReference::Attribute(attr) => {
                write!(f, "{}'{}", attr.base, attr.attr)?;
                if let Some(ref parameter) = attr.parameter {
                    write!(f, "({parameter})")
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.reference())
    }
}

impl Display for TypeDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.ident)
    }
}

impl Display for EntityDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.ident)
    }
}

impl Display for ConfigurationDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.ident)
    }
}

impl Display for ComponentDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.ident)
    }
}
