//! Deterministic test harness for chipkit.
//!
//! Recording implementations of the adapter and event traits, so tests can
//! observe the exact order of calls a foundation makes within one dispatch.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks recorded dispatches against properties that
//! must hold for every input (propagation before notification, at most one
//! notification, focus only when focusable) and checks the static key tables
//! for consistency. Use [`InvariantRegistry::standard()`] from property
//! tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod recorder;

pub use invariants::{
    FocusAfterTabIndex, Invariant, InvariantRegistry, InvariantResult, PropagationStoppedFirst,
    SingleNotification, Violation, check_tables,
};
pub use recorder::{Call, CallLog, RecordingAdapter, ScriptedClick, ScriptedKeydown};
