// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

use super::SrcPos;

/// The closed taxonomy of resolution failures.
///
/// Every resolver entry point maps to exactly one member; the remaining
/// members are reported through the same channel by embedding drivers.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ErrorKind {
    UnknownConfiguration,
    UnknownConstant,
    UnknownComponent,
    UnknownEntity,
    UnknownFile,
    UnknownSignal,
    UnknownSignalAssignmentTarget,
    UnknownLoop,
    UnknownPackage,
    UnknownType,
    UnknownVariable,
    UnknownVariableAssignmentTarget,
    UnknownOther,
}

impl ErrorKind {
    pub fn describe(&self) -> &'static str {
        use ErrorKind::*;
        match self {
            UnknownConfiguration => "configuration",
            UnknownConstant => "constant",
            UnknownComponent => "component",
            UnknownEntity => "entity",
            UnknownFile => "file",
            UnknownSignal => "signal",
            UnknownSignalAssignmentTarget => "signal assignment target",
            UnknownLoop => "loop",
            UnknownPackage => "package",
            UnknownType => "type",
            UnknownVariable => "variable",
            UnknownVariableAssignmentTarget => "variable assignment target",
            UnknownOther => "other",
        }
    }
}

/// A recorded resolution failure.
#[must_use]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Diagnostic {
    pub pos: SrcPos,
    pub kind: ErrorKind,
    /// The flattened dotted name or literal text that failed to resolve.
    pub name: String,
}

impl Diagnostic {
    pub fn new(item: impl AsRef<SrcPos>, kind: ErrorKind, name: impl Into<String>) -> Diagnostic {
        Diagnostic {
            pos: *item.as_ref(),
            kind,
            name: name.into(),
        }
    }

    pub fn show(&self) -> String {
        format!(
            "line {}: unknown {}: {}",
            self.pos.lineno(),
            self.kind.describe(),
            self.name
        )
    }
}

pub trait DiagnosticHandler {
    fn push(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticHandler for Vec<Diagnostic> {
    fn push(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic)
    }
}

pub struct NullDiagnostics;

impl DiagnosticHandler for NullDiagnostics {
    fn push(&mut self, _diagnostic: Diagnostic) {
        // Ignore
    }
}
