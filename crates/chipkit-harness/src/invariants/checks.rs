//! Standard dispatch invariants.

use chipkit_core::constants::{FOCUSABLE, TAB_INDEX};

use super::{Invariant, InvariantResult, Violation};
use crate::recorder::Call;

/// Propagation is stopped before any notification is issued.
///
/// Otherwise the containing chip could react to the same physical event and
/// start a second notification chain.
pub struct PropagationStoppedFirst;

impl Invariant for PropagationStoppedFirst {
    fn name(&self) -> &'static str {
        "PropagationStoppedFirst"
    }

    fn check(&self, dispatch: &[Call]) -> InvariantResult {
        let Some(first_notification) = dispatch.iter().position(Call::is_notification) else {
            return Ok(());
        };

        let stopped = dispatch[..first_notification].contains(&Call::StopPropagation);
        if stopped {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("{:?} issued before stop_propagation", dispatch[first_notification]),
            })
        }
    }
}

/// One event produces at most one notification.
pub struct SingleNotification;

impl Invariant for SingleNotification {
    fn name(&self) -> &'static str {
        "SingleNotification"
    }

    fn check(&self, dispatch: &[Call]) -> InvariantResult {
        let notifications: Vec<_> = dispatch.iter().filter(|c| c.is_notification()).collect();
        if notifications.len() <= 1 {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("{} notifications: {notifications:?}", notifications.len()),
            })
        }
    }
}

/// Focus is only requested once the element is marked focusable.
pub struct FocusAfterTabIndex;

impl Invariant for FocusAfterTabIndex {
    fn name(&self) -> &'static str {
        "FocusAfterTabIndex"
    }

    fn check(&self, dispatch: &[Call]) -> InvariantResult {
        let mut focusable = false;
        for call in dispatch {
            match call {
                Call::SetAttribute { name, value } if name == TAB_INDEX => {
                    focusable = value == FOCUSABLE;
                },
                Call::Focus if !focusable => {
                    return Err(Violation {
                        invariant: self.name(),
                        message: "focus requested before tabindex=\"0\"".to_owned(),
                    });
                },
                _ => {},
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chipkit_core::{CanonicalKey, InteractionTrigger};

    use super::*;

    #[test]
    fn notification_before_stop_is_violation() {
        let dispatch = [Call::NotifyInteraction(InteractionTrigger::Click), Call::StopPropagation];
        assert!(PropagationStoppedFirst.check(&dispatch).is_err());
    }

    #[test]
    fn two_notifications_is_violation() {
        let dispatch = [
            Call::StopPropagation,
            Call::NotifyInteraction(InteractionTrigger::EnterKey),
            Call::NotifyNavigation(CanonicalKey::ARROW_UP),
        ];
        assert!(SingleNotification.check(&dispatch).is_err());
    }

    #[test]
    fn focus_after_removal_is_violation() {
        let dispatch = [
            Call::SetAttribute { name: TAB_INDEX.to_owned(), value: "-1".to_owned() },
            Call::Focus,
        ];
        assert!(FocusAfterTabIndex.check(&dispatch).is_err());
    }

    #[test]
    fn focus_after_tab_index_holds() {
        let dispatch = [
            Call::SetAttribute { name: TAB_INDEX.to_owned(), value: FOCUSABLE.to_owned() },
            Call::Focus,
        ];
        assert!(FocusAfterTabIndex.check(&dispatch).is_ok());
    }
}
