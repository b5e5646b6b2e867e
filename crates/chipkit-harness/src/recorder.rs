//! Recording test doubles.
//!
//! [`RecordingAdapter`], [`ScriptedKeydown`] and [`ScriptedClick`] share one
//! [`CallLog`], so a test can see the exact interleaving of event calls
//! (`stop_propagation`) and adapter calls (`set_attribute`, `notify_*`) within
//! a single dispatch.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use chipkit_core::{
    CanonicalKey, InputEvent, InteractionTrigger, KeyboardInput, TrailingActionAdapter,
};

/// One observed call on an event or adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `InputEvent::stop_propagation`.
    StopPropagation,
    /// `TrailingActionAdapter::focus`.
    Focus,
    /// `TrailingActionAdapter::get_attribute`.
    GetAttribute {
        /// Attribute name.
        name: String,
    },
    /// `TrailingActionAdapter::set_attribute`.
    SetAttribute {
        /// Attribute name.
        name: String,
        /// New value.
        value: String,
    },
    /// `TrailingActionAdapter::notify_interaction`.
    NotifyInteraction(InteractionTrigger),
    /// `TrailingActionAdapter::notify_navigation`.
    NotifyNavigation(CanonicalKey),
}

impl Call {
    /// Whether the call emits an externally observable notification.
    pub fn is_notification(&self) -> bool {
        matches!(self, Self::NotifyInteraction(_) | Self::NotifyNavigation(_))
    }
}

/// Shared, ordered log of calls.
///
/// Cloning yields another handle to the same log.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call.
    pub fn record(&self, call: Call) {
        tracing::trace!(?call, "recorded");
        self.0.borrow_mut().push(call);
    }

    /// Copy of all calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    /// Drain all calls, leaving the log empty.
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// Only the notification calls, in order.
    pub fn notifications(&self) -> Vec<Call> {
        self.0.borrow().iter().filter(|c| c.is_notification()).cloned().collect()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Adapter that records every call and keeps attributes in memory.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    log: CallLog,
    attributes: HashMap<String, String>,
}

impl RecordingAdapter {
    /// Create an adapter writing to `log`.
    pub fn new(log: CallLog) -> Self {
        Self { log, attributes: HashMap::new() }
    }

    /// Seed an attribute without recording a call.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Current attribute value, without recording a call.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The shared log.
    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl TrailingActionAdapter for RecordingAdapter {
    fn focus(&mut self) {
        self.log.record(Call::Focus);
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.log.record(Call::GetAttribute { name: name.to_owned() });
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.log.record(Call::SetAttribute { name: name.to_owned(), value: value.to_owned() });
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn notify_interaction(&mut self, trigger: InteractionTrigger) {
        self.log.record(Call::NotifyInteraction(trigger));
    }

    fn notify_navigation(&mut self, key: CanonicalKey) {
        self.log.record(Call::NotifyNavigation(key));
    }
}

/// Keydown event that records `stop_propagation` into a [`CallLog`].
#[derive(Debug, Clone)]
pub struct ScriptedKeydown {
    key: String,
    key_code: u32,
    log: CallLog,
}

impl ScriptedKeydown {
    /// Event with a named key and legacy code.
    pub fn new(log: &CallLog, key: impl Into<String>, key_code: u32) -> Self {
        Self { key: key.into(), key_code, log: log.clone() }
    }
}

impl InputEvent for ScriptedKeydown {
    fn stop_propagation(&mut self) {
        self.log.record(Call::StopPropagation);
    }
}

impl KeyboardInput for ScriptedKeydown {
    fn key(&self) -> &str {
        &self.key
    }

    fn key_code(&self) -> u32 {
        self.key_code
    }
}

/// Click event that records `stop_propagation` into a [`CallLog`].
#[derive(Debug, Clone)]
pub struct ScriptedClick {
    log: CallLog,
}

impl ScriptedClick {
    /// Click writing to `log`.
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl InputEvent for ScriptedClick {
    fn stop_propagation(&mut self) {
        self.log.record(Call::StopPropagation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_one_log() {
        let log = CallLog::new();
        let mut adapter = RecordingAdapter::new(log.clone());
        let mut event = ScriptedClick::new(&log);

        event.stop_propagation();
        adapter.notify_interaction(InteractionTrigger::Click);

        assert_eq!(log.take(), [
            Call::StopPropagation,
            Call::NotifyInteraction(InteractionTrigger::Click)
        ]);
        assert!(log.is_empty());
    }

    #[test]
    fn calls_copies_without_draining() {
        let log = CallLog::new();
        let mut adapter = RecordingAdapter::new(log.clone());

        adapter.focus();
        adapter.notify_navigation(CanonicalKey::HOME);

        assert_eq!(log.calls(), [Call::Focus, Call::NotifyNavigation(CanonicalKey::HOME)]);
        assert_eq!(log.notifications(), [Call::NotifyNavigation(CanonicalKey::HOME)]);
        assert_eq!(log.len(), 2);
        assert_eq!(adapter.log().take().len(), 2);
        assert!(log.calls().is_empty());
    }

    #[test]
    fn seeded_attributes_are_not_recorded() {
        let log = CallLog::new();
        let adapter = RecordingAdapter::new(log.clone()).with_attribute("aria-hidden", "true");

        assert_eq!(adapter.attribute("aria-hidden"), Some("true"));
        assert!(log.is_empty());
        assert_eq!(adapter.get_attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(log.len(), 1);
    }
}
