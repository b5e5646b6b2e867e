//! Terminal-side adapter and dispatch.
//!
//! [`TerminalAdapter`] backs the adapter contract with an in-memory attribute
//! map and an outbox of emitted events. [`Host`] wires it to a
//! [`TrailingActionFoundation`] and turns each [`HostInput`] into output
//! lines, without touching the terminal itself.

use std::collections::HashMap;

use chipkit_core::{
    CanonicalKey, ChipNavigationDetail, InteractionTrigger, NavigationIntent,
    TrailingActionAdapter, TrailingActionEvent, TrailingActionFoundation,
    constants::{ARIA_HIDDEN, CHIP_NAVIGATION_EVENT, TAB_INDEX},
};

use crate::{config::HostConfig, input::HostInput};

/// Adapter keeping element state in memory.
#[derive(Debug, Default)]
pub struct TerminalAdapter {
    attributes: HashMap<String, String>,
    focused: bool,
    outbox: Vec<TrailingActionEvent>,
}

impl TerminalAdapter {
    /// Whether the element holds input focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drop input focus (focus moved elsewhere).
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Current attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Take every event emitted since the last drain.
    pub fn drain(&mut self) -> Vec<TrailingActionEvent> {
        std::mem::take(&mut self.outbox)
    }
}

impl TrailingActionAdapter for TerminalAdapter {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        tracing::debug!(name, value, "set attribute");
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn notify_interaction(&mut self, trigger: InteractionTrigger) {
        self.outbox.push(trigger.into());
    }

    fn notify_navigation(&mut self, key: CanonicalKey) {
        self.outbox.push(key.into());
    }
}

/// One line of host output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOutput {
    /// Event emitted by the trailing action.
    Event(TrailingActionEvent),
    /// Chip-level navigation re-emitted by the owning chip.
    ChipNavigation {
        /// Event detail.
        detail: ChipNavigationDetail,
        /// Where focus would move.
        intent: NavigationIntent,
    },
    /// Free-form status.
    Status(String),
}

impl HostOutput {
    /// Render as `<event name> <json detail>` or a status line.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        Ok(match self {
            Self::Event(event) => format!("{} {}", event.name(), serde_json::to_string(event)?),
            Self::ChipNavigation { detail, intent } => {
                format!("{CHIP_NAVIGATION_EVENT} {} -> {intent:?}", serde_json::to_string(detail)?)
            },
            Self::Status(message) => format!("-- {message}"),
        })
    }
}

/// Foundation plus host state for one session.
#[derive(Debug)]
pub struct Host {
    config: HostConfig,
    foundation: TrailingActionFoundation<TerminalAdapter>,
}

impl Host {
    /// Create a host. The trailing action starts out of tab order.
    pub fn new(config: HostConfig) -> Self {
        let mut foundation = TrailingActionFoundation::new(TerminalAdapter::default());
        if config.hidden {
            foundation.adapter_mut().set_attribute(ARIA_HIDDEN, "true");
        }
        foundation.remove_focus();
        Self { config, foundation }
    }

    /// The adapter, for inspection.
    pub fn adapter(&self) -> &TerminalAdapter {
        self.foundation.adapter()
    }

    /// Dispatch one input. `None` when the session should end.
    pub fn dispatch(&mut self, input: HostInput) -> Option<Vec<HostOutput>> {
        match input {
            HostInput::Quit => return None,
            HostInput::Key(mut event) => self.foundation.handle_keydown(&mut event),
            HostInput::Click(mut event) => self.foundation.handle_click(&mut event),
            HostInput::ToggleFocus => return Some(vec![self.toggle_focus()]),
        }

        let mut outputs = Vec::new();
        for event in self.foundation.adapter_mut().drain() {
            outputs.push(HostOutput::Event(event));
            if let TrailingActionEvent::Navigation(nav) = event {
                outputs.extend(self.chip_navigation(nav.key));
            }
        }
        Some(outputs)
    }

    /// Status line describing the element.
    pub fn status(&self) -> String {
        let adapter = self.adapter();
        format!(
            "tabindex={} focused={} navigable={} rtl={} legacy={}",
            adapter.attribute(TAB_INDEX).unwrap_or("-"),
            adapter.is_focused(),
            self.foundation.is_navigable(),
            self.config.is_rtl,
            self.config.legacy_keys,
        )
    }

    fn toggle_focus(&mut self) -> HostOutput {
        if self.adapter().is_focused() {
            self.foundation.remove_focus();
            self.foundation.adapter_mut().blur();
            HostOutput::Status("trailing action blurred".to_owned())
        } else if self.foundation.is_navigable() {
            self.foundation.focus();
            HostOutput::Status("trailing action focused".to_owned())
        } else {
            HostOutput::Status("trailing action is aria-hidden; skipped".to_owned())
        }
    }

    fn chip_navigation(&self, key: CanonicalKey) -> Option<HostOutput> {
        let intent = NavigationIntent::for_key(key, self.config.is_rtl)?;
        let detail = ChipNavigationDetail::from_trailing(self.config.chip_id.clone(), key);
        Some(HostOutput::ChipNavigation { detail, intent })
    }
}
