//! Trailing action foundation.
//!
//! This module defines [`TrailingActionFoundation`], the interaction logic of
//! a chip's trailing action (typically a remove icon) completely decoupled
//! from rendering.
//!
//! The foundation holds no state of its own. Each handler reads the event,
//! classifies it through [`classify_key`], and reports the outcome to its
//! [`TrailingActionAdapter`]. Focus eligibility lives in the element's
//! `tabindex` attribute and is re-read from the adapter on every query.
//!
//! # Ordering
//!
//! Every handler stops propagation before notifying, so the containing chip
//! never reacts to the same physical event a second time.

use crate::{
    InteractionTrigger,
    adapter::TrailingActionAdapter,
    constants::{ARIA_HIDDEN, FOCUSABLE, NOT_FOCUSABLE, TAB_INDEX},
    event::{InputEvent, KeyboardInput},
    key::{CanonicalKey, NAVIGATION_KEYS, resolve_key},
};

/// Outcome of classifying a keydown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Activate or delete; notify interaction.
    Interaction(InteractionTrigger),
    /// Move focus; notify navigation with the canonical key.
    Navigation(CanonicalKey),
}

/// Classify a resolved key.
///
/// Action keys (Enter, space) and delete keys (Backspace, Delete) are checked
/// before navigation keys. The two groups are disjoint, so the order only
/// matters if the tables change. Returns `None` for keys the trailing action
/// ignores, including [`CanonicalKey::UNKNOWN`].
pub fn classify_key(key: CanonicalKey) -> Option<KeyIntent> {
    let is_action_key = key == CanonicalKey::ENTER || key == CanonicalKey::SPACEBAR;
    let is_delete_key = key == CanonicalKey::BACKSPACE || key == CanonicalKey::DELETE;

    if is_action_key || is_delete_key {
        return Some(KeyIntent::Interaction(InteractionTrigger::from_key(key)));
    }

    if NAVIGATION_KEYS.contains(key) {
        return Some(KeyIntent::Navigation(key));
    }

    None
}

/// Interaction logic for a chip's trailing action.
///
/// Owns its adapter. Pass `&mut adapter` to keep ownership with the caller.
#[derive(Debug, Clone, Default)]
pub struct TrailingActionFoundation<A> {
    adapter: A,
}

impl<A: TrailingActionAdapter> TrailingActionFoundation<A> {
    /// Create a foundation driving `adapter`.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// The adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// The adapter, mutably.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Consume the foundation and return its adapter.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Handle a click on the trailing action.
    ///
    /// Always notifies [`InteractionTrigger::Click`], whatever the event says.
    pub fn handle_click<E: InputEvent + ?Sized>(&mut self, event: &mut E) {
        event.stop_propagation();
        tracing::trace!(trigger = %InteractionTrigger::Click, "trailing action clicked");
        self.adapter.notify_interaction(InteractionTrigger::Click);
    }

    /// Handle a keydown on the trailing action.
    ///
    /// Enter, space, Backspace and Delete notify an interaction; navigation
    /// keys notify navigation; anything else is ignored.
    pub fn handle_keydown<E: KeyboardInput + ?Sized>(&mut self, event: &mut E) {
        event.stop_propagation();

        let key = resolve_key(&*event);
        match classify_key(key) {
            Some(KeyIntent::Interaction(trigger)) => {
                tracing::trace!(%key, %trigger, "trailing action key interaction");
                self.adapter.notify_interaction(trigger);
            },
            Some(KeyIntent::Navigation(key)) => {
                tracing::trace!(%key, "trailing action key navigation");
                self.adapter.notify_navigation(key);
            },
            None => {
                tracing::debug!(
                    key = event.key(),
                    key_code = event.key_code(),
                    "ignoring key on trailing action"
                );
            },
        }
    }

    /// Take the element out of tab order without moving focus.
    pub fn remove_focus(&mut self) {
        self.adapter.set_attribute(TAB_INDEX, NOT_FOCUSABLE);
    }

    /// Put the element in tab order and focus it.
    ///
    /// `tabindex` is set first; some platforms refuse to focus an element that
    /// is not yet focusable.
    pub fn focus(&mut self) {
        self.adapter.set_attribute(TAB_INDEX, FOCUSABLE);
        self.adapter.focus();
    }

    /// Whether keyboard navigation may land on the element.
    ///
    /// Only an `aria-hidden` value of exactly `"true"` hides it.
    pub fn is_navigable(&self) -> bool {
        self.adapter.get_attribute(ARIA_HIDDEN).as_deref() != Some("true")
    }
}
