// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

//! Configuration of the conversion session.

/// Four independent switches controlling error recovery and reporting.
///
/// The defaults are generous: malformed input still yields a complete AST
/// (placeholders on) without flooding the machine-readable channel
/// (emission off).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Settings {
    /// Synthesize a placeholder declaration when a name does not resolve,
    /// so that conversion always produces a structurally valid node.
    pub create_placeholders: bool,

    /// Record a [Diagnostic](crate::Diagnostic) for every failed resolution.
    pub emit_resolve_errors: bool,

    /// Attach source positions to the produced AST nodes. Consumed by the
    /// embedding driver; diagnostics are positioned regardless.
    pub add_position_information: bool,

    /// Print recorded diagnostics to the message sink when the session
    /// finishes.
    pub print_errors: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            create_placeholders: true,
            emit_resolve_errors: false,
            add_position_information: false,
            print_errors: true,
        }
    }
}
