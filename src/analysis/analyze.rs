// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

use crate::config::Settings;
use crate::data::{
    Diagnostic, ErrorKind, Message, MessageHandler, SrcPos, SymbolTable, WithPos,
};
use crate::standard::Standard;
use std::sync::Arc;

/// State shared by all name resolutions of one conversion session.
///
/// Owns the diagnostic accumulator: there is exactly one writer and the
/// diagnostics are handed back once when the session finishes.
pub struct ResolveContext {
    settings: Settings,
    symbols: Arc<SymbolTable>,
    standard: Standard,
    diagnostics: Vec<Diagnostic>,
}

impl ResolveContext {
    pub fn new(settings: Settings, symbols: Arc<SymbolTable>) -> ResolveContext {
        let standard = Standard::new(&symbols);
        ResolveContext {
            settings,
            symbols,
            standard,
            diagnostics: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn standard(&self) -> &Standard {
        &self.standard
    }

    /// Record a resolution failure, if emission is enabled.
    ///
    /// Failures are never fatal; callers continue with or without a
    /// placeholder result.
    pub(crate) fn resolve_error(&mut self, pos: SrcPos, kind: ErrorKind, name: impl Into<String>) {
        if self.settings.emit_resolve_errors {
            self.diagnostics.push(Diagnostic::new(pos, kind, name));
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Annotate a produced node with its source position.
    ///
    /// When position information is disabled the node carries a null
    /// position instead, so downstream consumers need no second code path.
    pub fn with_pos<T>(&self, item: T, pos: SrcPos) -> WithPos<T> {
        let pos = if self.settings.add_position_information {
            pos
        } else {
            SrcPos::default()
        };
        WithPos { item, pos }
    }

    /// End the session: print the recorded diagnostics to the message sink
    /// when enabled, and hand them back to the caller.
    pub fn finish(self, messages: &mut dyn MessageHandler) -> Vec<Diagnostic> {
        if self.settings.print_errors {
            for diagnostic in &self.diagnostics {
                messages.push(Message::error(diagnostic.show()));
            }
        }
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Position;
    use pretty_assertions::assert_eq;

    fn pos(line: u32) -> SrcPos {
        SrcPos::new(Position::new(line, 0), Position::new(line, 1))
    }

    #[test]
    fn emission_is_gated() {
        let symbols = Arc::new(SymbolTable::new());

        let mut ctx = ResolveContext::new(Settings::default(), Arc::clone(&symbols));
        ctx.resolve_error(pos(0), ErrorKind::UnknownSignal, "clk");
        assert!(ctx.diagnostics().is_empty());

        let settings = Settings {
            emit_resolve_errors: true,
            ..Settings::default()
        };
        let mut ctx = ResolveContext::new(settings, symbols);
        ctx.resolve_error(pos(0), ErrorKind::UnknownSignal, "clk");
        assert_eq!(ctx.diagnostics().len(), 1);
    }

    #[test]
    fn finish_prints_when_enabled() {
        let symbols = Arc::new(SymbolTable::new());
        let settings = Settings {
            emit_resolve_errors: true,
            print_errors: true,
            ..Settings::default()
        };

        let mut ctx = ResolveContext::new(settings, Arc::clone(&symbols));
        ctx.resolve_error(pos(2), ErrorKind::UnknownEntity, "work.missing");

        let mut messages = Vec::new();
        let diagnostics = ctx.finish(&mut messages);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            messages,
            vec![Message::error("line 3: unknown entity: work.missing")]
        );
    }

    #[test]
    fn position_annotation_is_gated() {
        let symbols = Arc::new(SymbolTable::new());

        let ctx = ResolveContext::new(Settings::default(), Arc::clone(&symbols));
        let annotated = ctx.with_pos("node", pos(7));
        assert_eq!(annotated.pos, SrcPos::default());

        let settings = Settings {
            add_position_information: true,
            ..Settings::default()
        };
        let ctx = ResolveContext::new(settings, symbols);
        let annotated = ctx.with_pos("node", pos(7));
        assert_eq!(annotated.pos, pos(7));
    }

    #[test]
    fn finish_is_silent_when_disabled() {
        let symbols = Arc::new(SymbolTable::new());
        let settings = Settings {
            emit_resolve_errors: true,
            print_errors: false,
            ..Settings::default()
        };

        let mut ctx = ResolveContext::new(settings, symbols);
        ctx.resolve_error(pos(0), ErrorKind::UnknownType, "t");

        let mut messages = Vec::new();
        let diagnostics = ctx.finish(&mut messages);
        assert_eq!(diagnostics.len(), 1);
        assert!(messages.is_empty());
    }
}
