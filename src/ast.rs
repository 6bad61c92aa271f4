// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Abstract syntax tree built by name resolution.

mod display;
mod object;

pub use object::{ArrayElement, AttributeExpression, ObjectReference, RecordElement, Slice, Target};

use crate::named_entity::{EnumerationLiteral, FunctionDeclaration, PhysicalUnit, TypeMark};
use crate::data::Symbol;
use std::sync::Arc;
use strum::EnumString;

/// LRM 6.4.2 Object declarations
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ObjectClass {
    Constant,
    Signal,
    Variable,
    SharedVariable,
    File,
}

impl ObjectClass {
    pub fn describe(&self) -> &'static str {
        use ObjectClass::*;
        match self {
            Constant => "constant",
            Signal => "signal",
            Variable => "variable",
            SharedVariable => "shared variable",
            File => "file",
        }
    }
}

/// LRM 6.5.2 Interface object declarations
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Mode {
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

/// LRM 9.2 Operators
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Operator {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,

    EQ,
    NE,
    LT,
    LTE,
    GT,
    GTE,

    SLL,
    SRL,
    SLA,
    SRA,
    ROL,
    ROR,

    Plus,
    Minus,
    Concat,

    Times,
    Div,
    Mod,
    Rem,

    Pow,
    Abs,
    Not,
}

/// LRM 15.5 Abstract literals
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum AbstractLiteral {
    Integer(u64),
    Real(f64),
}

/// LRM 5.2.4 Physical types
#[derive(PartialEq, Debug, Clone)]
pub struct PhysicalLiteral {
    pub value: AbstractLiteral,
    pub unit: Arc<PhysicalUnit>,
}

/// LRM 9.3.2 Literals
#[derive(PartialEq, Debug, Clone)]
pub enum Literal {
    String(String),
    Character(char),
    Abstract(AbstractLiteral),
    Physical(PhysicalLiteral),
    Null,
}

/// LRM 9. Expressions
///
/// Expression operands reach this crate fully built by the external
/// parser; they are carried as payloads of parts, indices and actuals.
#[derive(PartialEq, Debug, Clone)]
pub enum Expression {
    Binary(Operator, Box<Expression>, Box<Expression>),
    Unary(Operator, Box<Expression>),
    Literal(Literal),
    Primary(Box<Primary>),
}

/// LRM 6.5.7 Association lists
#[derive(PartialEq, Debug, Clone)]
pub enum ActualPart {
    Expression(Expression),
    Open,
}

/// LRM 6.5.7 Association lists
#[derive(PartialEq, Debug, Clone)]
pub struct AssociationElement {
    pub formal: Option<Symbol>,
    pub actual: ActualPart,
}

impl AssociationElement {
    pub fn positional(actual: Expression) -> AssociationElement {
        AssociationElement {
            formal: None,
            actual: ActualPart::Expression(actual),
        }
    }
}

/// LRM 4.5.3 Signatures
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Signature {
    Function(Vec<TypeMark>, TypeMark),
    Procedure(Vec<TypeMark>),
}

/// The two range attributes of array and scalar prefixes.
///
/// The attribute designator is matched case insensitively.
#[derive(PartialEq, Eq, Debug, Clone, Copy, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RangeAttribute {
    #[strum(serialize = "range")]
    Range,
    #[strum(serialize = "reverse_range")]
    ReverseRange,
}

/// LRM 8.6 Attribute names denoting a range, such as `arr'reverse_range`
#[derive(PartialEq, Debug, Clone)]
pub struct RangeAttributeName {
    pub prefix: Symbol,
    pub attr: RangeAttribute,
    pub expr: Option<Box<Expression>>,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Direction {
    Ascending,
    Descending,
}

/// LRM 5.2.1 `simple_expression direction simple_expression`
#[derive(PartialEq, Debug, Clone)]
pub struct RangeConstraint {
    pub direction: Direction,
    pub left_expr: Box<Expression>,
    pub right_expr: Box<Expression>,
}

#[derive(PartialEq, Debug, Clone)]
pub enum Range {
    Range(RangeConstraint),
    Attribute(Box<RangeAttributeName>),
}

/// LRM 5.3.2.1 `discrete_range ::= discrete_subtype_indication | range`
#[derive(PartialEq, Debug, Clone)]
pub enum DiscreteRange {
    Discrete(SubtypeIndication),
    Range(Range),
}

#[derive(PartialEq, Debug, Clone)]
pub enum SubtypeConstraint {
    Range(Range),
    Array(Vec<DiscreteRange>),
}

/// LRM 6.3 Subtype declarations
#[derive(PartialEq, Debug, Clone)]
pub struct SubtypeIndication {
    pub type_mark: TypeMark,
    pub constraint: Option<Box<SubtypeConstraint>>,
}

impl SubtypeIndication {
    pub fn new(type_mark: TypeMark) -> SubtypeIndication {
        SubtypeIndication {
            type_mark,
            constraint: None,
        }
    }
}

/// LRM 9.3.4 Function calls
#[derive(PartialEq, Debug, Clone)]
pub struct FunctionCall {
    pub function: Arc<FunctionDeclaration>,
    pub parameters: Vec<AssociationElement>,
}

/// LRM 9.3.6 Type conversions
#[derive(PartialEq, Debug, Clone)]
pub struct TypeConversion {
    pub type_mark: TypeMark,
    pub expression: Box<Expression>,
}

/// LRM 9.3 Primaries
///
/// The typed result of resolving a name used as a value.
#[derive(PartialEq, Debug, Clone)]
pub enum Primary {
    Object(ObjectReference),
    FunctionCall(FunctionCall),
    TypeConversion(TypeConversion),
    EnumerationLiteral(Arc<EnumerationLiteral>),
    PhysicalUnit(Arc<PhysicalUnit>),
    Literal(Literal),
}
