// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026, Olof Kraigher olof.kraigher@gmail.com

#[derive(Debug, PartialEq, Eq)]
pub enum MessageType {
    Error,
    Warning,
    Log,
}

/// A human-readable message, as opposed to a machine-consumable [Diagnostic](super::Diagnostic).
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub message_type: MessageType,
    pub message: String,
}

impl Message {
    pub fn log(message: impl Into<String>) -> Message {
        Message {
            message_type: MessageType::Log,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Message {
        Message {
            message_type: MessageType::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Message {
        Message {
            message_type: MessageType::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message_type.as_ref(), self.message)
    }
}

impl AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Log => "log",
        }
    }
}

pub trait MessageHandler {
    fn push(&mut self, message: Message);
}

impl MessageHandler for Vec<Message> {
    fn push(&mut self, message: Message) {
        self.push(message)
    }
}

/// Prints each message to stderr.
#[derive(Default)]
pub struct MessagePrinter {}

impl MessageHandler for MessagePrinter {
    fn push(&mut self, message: Message) {
        eprintln!("{message}");
    }
}

#[derive(Default)]
pub struct NullMessages;

impl MessageHandler for NullMessages {
    fn push(&mut self, _message: Message) {
        // Ignore
    }
}
