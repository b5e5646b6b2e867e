//! Payloads carried by the custom events the rendering layer dispatches.

use serde::Serialize;

use crate::{
    InteractionTrigger,
    constants::{TRAILING_ACTION_INTERACTION_EVENT, TRAILING_ACTION_NAVIGATION_EVENT},
    key::CanonicalKey,
    navigation::{EventSource, is_jump_key},
};

/// Detail of [`TRAILING_ACTION_INTERACTION_EVENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionDetail {
    /// What activated the trailing action.
    pub trigger: InteractionTrigger,
}

/// Detail of [`TRAILING_ACTION_NAVIGATION_EVENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationDetail {
    /// Canonical navigation key.
    pub key: CanonicalKey,
}

/// Detail of [`crate::constants::CHIP_NAVIGATION_EVENT`], re-emitted by the owning chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipNavigationDetail {
    /// Identifier of the chip that received the key.
    pub chip_id: String,
    /// Canonical navigation key.
    pub key: CanonicalKey,
    /// Action the key came from; [`EventSource::None`] for jump keys.
    pub source: EventSource,
}

impl ChipNavigationDetail {
    /// Chip-level navigation for a key reported by the trailing action.
    pub fn from_trailing(chip_id: impl Into<String>, key: CanonicalKey) -> Self {
        let source = if is_jump_key(key) { EventSource::None } else { EventSource::Trailing };
        Self { chip_id: chip_id.into(), key, source }
    }
}

/// Notification emitted by the trailing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TrailingActionEvent {
    /// Activation.
    Interaction(InteractionDetail),
    /// Focus movement request.
    Navigation(NavigationDetail),
}

impl TrailingActionEvent {
    /// Custom event name to dispatch under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interaction(_) => TRAILING_ACTION_INTERACTION_EVENT,
            Self::Navigation(_) => TRAILING_ACTION_NAVIGATION_EVENT,
        }
    }
}

impl From<InteractionTrigger> for TrailingActionEvent {
    fn from(trigger: InteractionTrigger) -> Self {
        Self::Interaction(InteractionDetail { trigger })
    }
}

impl From<CanonicalKey> for TrailingActionEvent {
    fn from(key: CanonicalKey) -> Self {
        Self::Navigation(NavigationDetail { key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_follow_variant() {
        assert_eq!(
            TrailingActionEvent::from(InteractionTrigger::Click).name(),
            "MDCChipTrailingAction:interaction"
        );
        assert_eq!(
            TrailingActionEvent::from(CanonicalKey::ARROW_UP).name(),
            "MDCChipTrailingAction:navigation"
        );
    }

    #[test]
    fn jump_keys_leave_trailing_action() {
        let jump = ChipNavigationDetail::from_trailing("chip-1", CanonicalKey::HOME);
        assert_eq!(jump.source, EventSource::None);

        let step = ChipNavigationDetail::from_trailing("chip-1", CanonicalKey::ARROW_LEFT);
        assert_eq!(step.source, EventSource::Trailing);
    }
}
