// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Resolution of assignment targets
//!
//! examples:
//!   target <= '1';
//!   target(0).elem := 1;

use super::names::{association_actuals, Part, RawName};
use crate::analysis::analyze::ResolveContext;
use crate::analysis::scope::DeclarativeRegion;
use crate::ast::{ObjectClass, ObjectReference, Target};
use crate::data::ErrorKind;
use crate::named_entity::ObjectDeclaration;
use std::sync::Arc;

impl RawName {
    /// Apply the remaining parts as decomposition steps.
    ///
    /// In strict mode an attribute part fails the whole attempt, since
    /// attribute expressions are not assignable; otherwise it is skipped.
    pub(crate) fn add_target_parts(
        &self,
        base: ObjectReference,
        strict: bool,
    ) -> Option<ObjectReference> {
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
                // Attribute expressions are not assignable; an operator
                // symbol prefix has no decomposition at all. Both fail a
                // strict attempt and are skipped on the placeholder path.
                Part::Attribute(..) | Part::OperatorSymbol(..) => {
                    if strict {
                        return None;
                    }
                }
            }
        }
        Some(reference)
    }

    fn to_target(&self, scope: &dyn DeclarativeRegion, class: ObjectClass) -> Option<Target> {
        let object = self.resolve_filtered(scope, |declaration| {
            declaration
                .as_object()
                .filter(|object| object.class == class)
        })?;

        let reference = self.add_target_parts(ObjectReference::Object(object), true)?;
        Target::new(reference)
    }

    pub fn to_signal_target(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Target> {
        if let Some(target) = self.to_target(scope, ObjectClass::Signal) {
            return Some(target);
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(self.pos, ErrorKind::UnknownSignalAssignmentTarget, &identifier);

        if ctx.settings().create_placeholders {
            let placeholder = Arc::new(ObjectDeclaration::signal(
                ctx.symbols().insert(&identifier),
                None,
            ));
            let reference = self.add_target_parts(ObjectReference::Object(placeholder), false)?;
            Target::new(reference)
        } else {
            None
        }
    }

    pub fn to_variable_target(
        &self,
        scope: &dyn DeclarativeRegion,
        ctx: &mut ResolveContext,
    ) -> Option<Target> {
        if let Some(target) = self.to_target(scope, ObjectClass::Variable) {
            return Some(target);
        }

        let identifier = self.to_identifier();
        ctx.resolve_error(
            self.pos,
            ErrorKind::UnknownVariableAssignmentTarget,
            &identifier,
        );

        if ctx.settings().create_placeholders {
            let placeholder = Arc::new(ObjectDeclaration::variable(
                ctx.symbols().insert(&identifier),
                None,
            ));
            let reference = self.add_target_parts(ObjectReference::Object(placeholder), false)?;
            Target::new(reference)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test::TestSetup;
    use crate::analysis::AttributePart;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_signal_as_target() {
        let setup = TestSetup::new();
        setup.add_signal("clk");

        let mut ctx = setup.ctx();
        let target = setup
            .name("clk")
            .to_signal_target(setup.scope(), &mut ctx)
            .unwrap();
        assert_matches!(target.reference(), ObjectReference::Object(..));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn decomposed_signal_as_target() {
        let setup = TestSetup::new();
        setup.add_signal("buf");

        let mut name = setup.name("buf");
        name.push(Part::Selected(setup.symbol("data")));
        name.push(Part::Indexed(vec![TestSetup::int(0)]));
        name.push(Part::Slice(TestSetup::downto(3, 0)));

        let mut ctx = setup.ctx();
        let target = name.to_signal_target(setup.scope(), &mut ctx).unwrap();
        assert_eq!(target.to_string(), "buf.data(0)(3 downto 0)");
        assert_eq!(target.reference().identifier(), &setup.symbol("buf"));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn association_part_becomes_array_element() {
        let setup = TestSetup::new();
        setup.add_variable("mem");

        let mut name = setup.name("mem");
        name.push(Part::Association(vec![
            crate::ast::AssociationElement::positional(TestSetup::int(7)),
        ]));

        let mut ctx = setup.ctx();
        let target = name.to_variable_target(setup.scope(), &mut ctx).unwrap();
        assert_eq!(target.to_string(), "mem(7)");
    }

    #[test]
    fn attribute_part_rejects_the_strict_attempt() {
        let setup = TestSetup::new();
        setup.add_signal("sig");

        let mut name = setup.name("sig");
        name.push(Part::Attribute(AttributePart {
            designator: setup.symbol("stable"),
            expr: None,
            signature: None,
        }));

        // Even though the base resolves, the attribute makes it fail
        // strictly; the placeholder path skips the attribute part.
        let mut ctx = setup.ctx();
        let target = name.to_signal_target(setup.scope(), &mut ctx).unwrap();
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(
            ctx.diagnostics()[0].kind,
            ErrorKind::UnknownSignalAssignmentTarget
        );
        assert_matches!(target.reference(), ObjectReference::Object(..));

        // With placeholders disabled it fails outright
        let mut ctx = setup.ctx_without_placeholders();
        assert_matches!(name.to_signal_target(setup.scope(), &mut ctx), None);
    }

    #[test]
    fn class_mismatch_falls_back() {
        let setup = TestSetup::new();
        setup.add_signal("sig");

        let mut ctx = setup.ctx();
        let target = setup
            .name("sig")
            .to_variable_target(setup.scope(), &mut ctx)
            .unwrap();
        assert_eq!(target.reference().object_class(), ObjectClass::Variable);
        assert_eq!(
            ctx.diagnostics()[0].show(),
            "line 1: unknown variable assignment target: sig"
        );
    }

    #[test]
    fn placeholder_target_keeps_decomposition() {
        let setup = TestSetup::new();

        let mut name = setup.name("missing");
        name.push(Part::Selected(setup.symbol("field")));
        name.push(Part::Indexed(vec![TestSetup::int(1)]));

        let mut ctx = setup.ctx();
        let target = name.to_signal_target(setup.scope(), &mut ctx).unwrap();
        assert_eq!(target.to_string(), "missing.field(1)");
        // the whole dotted prefix becomes the placeholder identifier
        assert_eq!(target.reference().identifier().name(), "missing.field");
    }
}
