//! Host capabilities required by the trailing action foundation.
//!
//! The [`TrailingActionAdapter`] trait decouples the interaction logic from
//! the element it drives. Each host (a DOM binding, a terminal, a test double)
//! implements the trait; [`crate::TrailingActionFoundation`] never touches the
//! element directly.

use crate::{InteractionTrigger, key::CanonicalKey};

/// Element operations the foundation calls into.
///
/// Every method has a no-op default so hosts only implement what they can
/// back. A host with no element at all behaves like [`NoopAdapter`].
///
/// # Implementations
///
/// - **Terminal**: `chipkit-term` keeps attributes in memory and prints the
///   notifications as custom event lines.
/// - **Simulation**: `chipkit-harness` records every call in order.
pub trait TrailingActionAdapter {
    /// Move input focus to the element.
    fn focus(&mut self) {}

    /// Current value of attribute `name`, `None` when absent.
    fn get_attribute(&self, _name: &str) -> Option<String> {
        None
    }

    /// Set attribute `name` to `value`. Must be idempotent.
    fn set_attribute(&mut self, _name: &str, _value: &str) {}

    /// Emit the interaction event carrying `trigger`.
    fn notify_interaction(&mut self, _trigger: InteractionTrigger) {}

    /// Emit the navigation event carrying `key`.
    fn notify_navigation(&mut self, _key: CanonicalKey) {}
}

impl<A: TrailingActionAdapter + ?Sized> TrailingActionAdapter for &mut A {
    fn focus(&mut self) {
        (**self).focus();
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        (**self).get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }

    fn notify_interaction(&mut self, trigger: InteractionTrigger) {
        (**self).notify_interaction(trigger);
    }

    fn notify_navigation(&mut self, key: CanonicalKey) {
        (**self).notify_navigation(key);
    }
}

/// Adapter that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdapter;

impl TrailingActionAdapter for NoopAdapter {}
