//! Wire-level events: the `(value, command)` input and the `(done, command)`
//! outcome, serializable as chat-callback JSON payloads.

use serde::{Deserialize, Serialize};

/// Out-of-band signals that bypass normal value routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Back,
    Reset,
    Finish,
    ChangeSource,
    Validate,
}

impl Command {
    pub const ALL: [Self; 5] = [
        Self::Back,
        Self::Reset,
        Self::Finish,
        Self::ChangeSource,
        Self::Validate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Reset => "reset",
            Self::Finish => "finish",
            Self::ChangeSource => "change_source",
            Self::Validate => "validate",
        }
    }
}

/// One input event: a button id or typed text, plus an optional command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

impl Event {
    /// A plain value event (button press or typed input).
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            command: None,
        }
    }

    /// A command event with the given value payload (usually a button id).
    pub fn command(value: impl Into<String>, command: Command) -> Self {
        Self {
            value: value.into(),
            command: Some(command),
        }
    }

    /// Parse a callback payload of the form `{"value": ..., "command": ...}`.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Serialize to a callback payload.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Result of one configurator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// True once the wizard has finished; the config is ready for rendering.
    pub done: bool,
    /// The command that was executed or handed off, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

impl Outcome {
    pub(crate) fn step() -> Self {
        Self {
            done: false,
            command: None,
        }
    }

    pub(crate) fn command(command: Command) -> Self {
        Self {
            done: false,
            command: Some(command),
        }
    }

    pub(crate) fn finished() -> Self {
        Self {
            done: true,
            command: Some(Command::Finish),
        }
    }
}
