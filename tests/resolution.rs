// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! End-to-end resolution through the public API.

use std::sync::Arc;

use vhdl_ast::ast::{AbstractLiteral, Expression, Literal, Primary};
use vhdl_ast::{
    AnyDeclaration, Message, ObjectDeclaration, Part, Position, RawName, Region, ResolveContext,
    Settings, SrcPos, Symbol, SymbolTable, TypeDeclaration, WithPos,
};

struct Project {
    symbols: Arc<SymbolTable>,
    root: Arc<Region>,
}

impl Project {
    /// A root scope holding `work.pkg` with a signal `data` and a type
    /// `word` inside the package.
    fn new() -> Project {
        let symbols = Arc::new(SymbolTable::new());
        let root = Arc::new(Region::new());

        let work = Arc::new(Region::new());
        let pkg = Arc::new(Region::new());

        pkg.add(
            symbols.insert("data"),
            AnyDeclaration::Object(Arc::new(ObjectDeclaration::signal(
                symbols.insert("data"),
                None,
            ))),
        );
        pkg.add(
            symbols.insert("word"),
            AnyDeclaration::Type(Arc::new(TypeDeclaration::new(symbols.insert("word")))),
        );

        work.add(
            symbols.insert("pkg"),
            AnyDeclaration::Region(pkg as Arc<dyn vhdl_ast::DeclarativeRegion>),
        );
        root.add(
            symbols.insert("work"),
            AnyDeclaration::Region(work as Arc<dyn vhdl_ast::DeclarativeRegion>),
        );

        Project { symbols, root }
    }

    fn symbol(&self, name: &str) -> Symbol {
        self.symbols.insert(name)
    }

    fn pos(line: u32) -> SrcPos {
        SrcPos::new(Position::new(line, 0), Position::new(line, 8))
    }

    fn name(&self, dotted: &str, line: u32) -> RawName {
        let mut idents = dotted.split('.');
        let mut name = RawName::simple(self.symbol(idents.next().unwrap()), Self::pos(line));
        for ident in idents {
            name.push(Part::Selected(self.symbol(ident)));
        }
        name
    }
}

fn int(value: u64) -> Expression {
    Expression::Literal(Literal::Abstract(AbstractLiteral::Integer(value)))
}

#[test]
fn resolves_names_through_nested_regions() {
    let project = Project::new();
    let mut ctx = ResolveContext::new(Settings::default(), Arc::clone(&project.symbols));

    let mut indexed = project.name("work.pkg.data", 0);
    indexed.push(Part::Indexed(vec![int(3)]));
    let primary = indexed
        .to_primary(project.root.as_ref(), &mut ctx, false)
        .unwrap();
    assert_eq!(primary.to_string(), "data(3)");

    // the same shape on a type prefix is a conversion
    let mut converted = project.name("work.pkg.word", 1);
    converted.push(Part::Indexed(vec![int(3)]));
    let primary = converted
        .to_primary(project.root.as_ref(), &mut ctx, false)
        .unwrap();
    assert!(matches!(primary, Primary::TypeConversion(..)));
    assert_eq!(primary.to_string(), "word(3)");

    // rendering resolved results is deterministic and position
    // annotation does not change it
    let annotated: WithPos<Primary> = ctx.with_pos(primary, Project::pos(1));
    assert_eq!(annotated.to_string(), annotated.item.to_string());
}

#[test]
fn failed_resolutions_are_reported_once_at_finish() {
    let project = Project::new();
    let settings = Settings {
        emit_resolve_errors: true,
        ..Settings::default()
    };
    let mut ctx = ResolveContext::new(settings, Arc::clone(&project.symbols));

    let target = project
        .name("work.pkg.missing", 4)
        .to_signal_target(project.root.as_ref(), &mut ctx)
        .unwrap();
    assert_eq!(target.to_string(), "work.pkg.missing");

    let mut messages: Vec<Message> = Vec::new();
    let diagnostics = ctx.finish(&mut messages);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        messages,
        vec![Message::error(
            "line 5: unknown signal assignment target: work.pkg.missing"
        )]
    );
}

#[test]
fn disabled_placeholders_yield_absence_everywhere() {
    let project = Project::new();
    let settings = Settings {
        create_placeholders: false,
        print_errors: false,
        ..Settings::default()
    };
    let mut ctx = ResolveContext::new(settings, Arc::clone(&project.symbols));
    let scope = project.root.as_ref();

    assert!(project.name("nope", 0).to_entity(scope, &mut ctx).is_none());
    assert!(project.name("nope", 0).to_signal(scope, &mut ctx).is_none());
    assert!(project
        .name("nope", 0)
        .to_primary(scope, &mut ctx, false)
        .is_none());
    assert!(project
        .name("nope", 0)
        .to_variable_target(scope, &mut ctx)
        .is_none());
    assert!(project
        .name("nope", 0)
        .to_discrete_range(scope, &mut ctx)
        .is_none());
}
