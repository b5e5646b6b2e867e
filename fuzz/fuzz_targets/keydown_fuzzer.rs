//! Fuzz target for trailing action keydown handling
//!
//! Feeds arbitrary `key`/`keyCode` pairs (and clicks) through the foundation
//! with recording doubles to find:
//! - Panics in key resolution or classification
//! - Notifications issued before propagation is stopped
//! - More than one notification for a single event
//! - Sentinel values (UNKNOWN_KEY, UNSPECIFIED) leaking into notifications
//!
//! The foundation should NEVER panic and every dispatch must pass the
//! standard invariants.

#![no_main]

use arbitrary::Arbitrary;
use chipkit_core::{CanonicalKey, InteractionTrigger, TrailingActionFoundation};
use chipkit_harness::{
    Call, CallLog, InvariantRegistry, RecordingAdapter, ScriptedClick, ScriptedKeydown,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input {
    Keydown { key: String, key_code: u32 },
    Click,
    Focus,
    RemoveFocus,
}

fuzz_target!(|inputs: Vec<Input>| {
    let log = CallLog::new();
    let mut foundation = TrailingActionFoundation::new(RecordingAdapter::new(log.clone()));
    let registry = InvariantRegistry::standard();

    for input in inputs {
        match input {
            Input::Keydown { key, key_code } => {
                foundation.handle_keydown(&mut ScriptedKeydown::new(&log, key, key_code));
            },
            Input::Click => foundation.handle_click(&mut ScriptedClick::new(&log)),
            Input::Focus => foundation.focus(),
            Input::RemoveFocus => foundation.remove_focus(),
        }

        let dispatch = log.take();
        registry.assert_all(&dispatch, "during fuzzed dispatch");
        assert!(!dispatch.contains(&Call::NotifyNavigation(CanonicalKey::UNKNOWN)));
        assert!(!dispatch.contains(&Call::NotifyInteraction(InteractionTrigger::Unspecified)));
    }
});
