//! Reason codes attached to interaction notifications.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::key::CanonicalKey;

/// Why an interaction notification fired.
///
/// Serialized with the same SCREAMING_SNAKE names the rendering layer puts
/// into event details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionTrigger {
    /// No recognized trigger. Carries no meaning for callers.
    Unspecified,
    /// Pointer click.
    Click,
    /// Enter key.
    EnterKey,
    /// Space bar.
    SpacebarKey,
    /// Delete key.
    DeleteKey,
    /// Backspace key.
    BackspaceKey,
}

impl InteractionTrigger {
    /// All triggers in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Unspecified,
        Self::Click,
        Self::EnterKey,
        Self::SpacebarKey,
        Self::DeleteKey,
        Self::BackspaceKey,
    ];

    /// Trigger for a keyboard activation.
    ///
    /// Only Enter, space, Delete and Backspace produce a trigger; every other
    /// key yields [`InteractionTrigger::Unspecified`].
    pub fn from_key(key: CanonicalKey) -> Self {
        match key {
            CanonicalKey::SPACEBAR => Self::SpacebarKey,
            CanonicalKey::ENTER => Self::EnterKey,
            CanonicalKey::DELETE => Self::DeleteKey,
            CanonicalKey::BACKSPACE => Self::BackspaceKey,
            _ => Self::Unspecified,
        }
    }

    /// Stable name used in serialized event details.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Click => "CLICK",
            Self::EnterKey => "ENTER_KEY",
            Self::SpacebarKey => "SPACEBAR_KEY",
            Self::DeleteKey => "DELETE_KEY",
            Self::BackspaceKey => "BACKSPACE_KEY",
        }
    }

    /// Whether the trigger asks for the chip to be removed.
    pub fn is_removal(self) -> bool {
        matches!(self, Self::DeleteKey | Self::BackspaceKey)
    }
}

impl fmt::Display for InteractionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name did not match any trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interaction trigger: {0:?}")]
pub struct ParseTriggerError(pub String);

impl FromStr for InteractionTrigger {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTriggerError(s.to_owned()))
    }
}
