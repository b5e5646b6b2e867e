//! Invariant checking for recorded dispatches.
//!
//! A dispatch is the ordered list of [`Call`]s produced by one foundation
//! operation (a click, a keydown, a focus change). Invariants capture what
//! must hold for every dispatch, whatever the input, and are meant to be
//! checked from property tests.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! foundation.handle_keydown(&mut ScriptedKeydown::new(&log, "Enter", 13));
//! registry.check_all(&log.take())?;
//! ```

mod checks;
mod tables;

pub use checks::{FocusAfterTabIndex, PropagationStoppedFirst, SingleNotification};
pub use tables::check_tables;

use crate::recorder::Call;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property every recorded dispatch must satisfy.
pub trait Invariant {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against one dispatch.
    fn check(&self, dispatch: &[Call]) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the dispatch invariants of the trailing action.
    ///
    /// Includes:
    /// - [`PropagationStoppedFirst`]: no notification before
    ///   `stop_propagation`
    /// - [`SingleNotification`]: at most one notification per dispatch
    /// - [`FocusAfterTabIndex`]: focus only after `tabindex="0"`
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(PropagationStoppedFirst);
        registry.add(SingleNotification);
        registry.add(FocusAfterTabIndex);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against one dispatch.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, dispatch: &[Call]) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(dispatch).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation.
    pub fn assert_all(&self, dispatch: &[Call], context: &str) {
        if let Err(violations) = self.check_all(dispatch) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn empty_dispatch_passes_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(registry.check_all(&[]).is_ok());
    }
}
