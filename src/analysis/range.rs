// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Resolution of range names and discrete ranges.

use super::names::{Part, RawName};
use crate::analysis::analyze::ResolveContext;
use crate::analysis::scope::DeclarativeRegion;
use crate::ast::{
    DiscreteRange, Expression, Range, RangeAttribute, RangeAttributeName, SubtypeConstraint,
    SubtypeIndication,
};
use crate::data::{ErrorKind, Symbol};
use crate::named_entity::{AnyDeclaration, TypeDeclaration};
use std::str::FromStr;
use std::sync::Arc;

impl RawName {
    /// Read the only remaining part as a `'range`/`'reverse_range`
    /// attribute of the given prefix, matched case insensitively.
    fn to_range_attribute_name(&self, prefix: Symbol) -> Option<RangeAttributeName> {
        let Part::Attribute(attribute) = self.parts.only_remaining()? else {
            return None;
        };
        let attr = RangeAttribute::from_str(attribute.designator.name()).ok()?;
        Some(RangeAttributeName {
            prefix,
            attr,
            expr: attribute.expr.clone().map(Box::new),
        })
    }

    /// A range attribute on an object or type-mark prefix.
    fn resolve_range_name(&self, scope: &dyn DeclarativeRegion) -> Option<RangeAttributeName> {
        if let Some(object) = self.resolve_filtered(scope, AnyDeclaration::as_object) {
            return self.to_range_attribute_name(object.ident.clone());
        }

        let type_mark = self.resolve_filtered(scope, AnyDeclaration::as_type)?;
        self.to_range_attribute_name(type_mark.ident.clone())
    }

    pub fn to_range_name(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Range> {
        if let Some(name) = self.resolve_range_name(scope) {
            return Some(Range::Attribute(Box::new(name)));
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownOther, &identifier);

        if ctx.settings().create_placeholders {
            let prefix = ctx.symbols().insert(&identifier);
            let name = self
                .to_range_attribute_name(prefix.clone())
                .unwrap_or_else(|| RangeAttributeName {
                    prefix,
                    attr: RangeAttribute::Range,
                    expr: None,
                });
            Some(Range::Attribute(Box::new(name)))
        } else {
            None
        }
    }

    pub fn to_discrete_range(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<DiscreteRange> {
        if let Some(name) = self.resolve_range_name(scope) {
            return Some(DiscreteRange::Range(Range::Attribute(Box::new(name))));
        }

        if let Some(type_mark) = self.resolve_filtered(scope, AnyDeclaration::as_type) {
            if self.parts.is_finished() {
                // the range is the type's own range
                return Some(DiscreteRange::Discrete(SubtypeIndication::new(type_mark)));
            }
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownOther, &identifier);

        if ctx.settings().create_placeholders {
            let prefix = ctx.symbols().insert(&identifier);
            if let Some(name) = self.to_range_attribute_name(prefix.clone()) {
                return Some(DiscreteRange::Range(Range::Attribute(Box::new(name))));
            }
            Some(DiscreteRange::Discrete(SubtypeIndication::new(Arc::new(
                TypeDeclaration::new(prefix),
            ))))
        } else {
            None
        }
    }

    /// A discrete range from this name as a type mark with explicit index
    /// constraints, such as `matrix(1 to 4, 1 to 4)`.
    pub fn to_discrete_range_indexed(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
        indices: Vec<DiscreteRange>,
    ) -> Option<DiscreteRange> {
        let type_mark = self.to_type_mark(scope, ctx)?;
        Some(DiscreteRange::Discrete(SubtypeIndication {
            type_mark,
            constraint: Some(Box::new(SubtypeConstraint::Array(indices))),
        }))
    }

    /// A discrete range from this name as a type mark with an explicit
    /// range constraint, such as `integer range 0 to 7`.
    pub fn to_discrete_range_constrained(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
        range: Range,
    ) -> Option<DiscreteRange> {
        let type_mark = self.to_type_mark(scope, ctx)?;
        Some(DiscreteRange::Discrete(SubtypeIndication {
            type_mark,
            constraint: Some(Box::new(SubtypeConstraint::Range(range))),
        }))
    }

    /// Classify a parenthesized group whose content is itself a name.
    ///
    /// `arr(sub_type)` and `arr(idx'range)` are slices, `arr(idx)` is
    /// indexing; only the scope can tell.
    pub fn into_indexed_or_slice_part(
        self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Part {
        if let Some(type_mark) = self.resolve_filtered(scope, AnyDeclaration::as_type) {
            if self.parts.is_finished() {
                return Part::Slice(DiscreteRange::Discrete(SubtypeIndication::new(type_mark)));
            }
        }

        if let Some(name) = self.resolve_range_name(scope) {
            return Part::Slice(DiscreteRange::Range(Range::Attribute(Box::new(name))));
        }

        let indices = self
            .to_primary(scope, ctx, false)
            .map(|primary| Expression::Primary(Box::new(primary)))
            .into_iter()
            .collect();
        Part::Indexed(indices)
    }
}
