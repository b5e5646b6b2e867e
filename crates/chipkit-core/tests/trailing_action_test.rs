//! Call-order tests for the trailing action foundation.
//!
//! # Oracle Pattern
//!
//! Each test drives one foundation operation through recording doubles and
//! ends with an exact comparison of the call log: which calls happened, how
//! many times, and in which order.

use chipkit_core::{
    ACTIONABLE_KEYS, CanonicalKey, InteractionTrigger, KEY_CODES, TrailingActionAdapter,
    TrailingActionFoundation,
    constants::{ARIA_HIDDEN, TAB_INDEX},
};
use chipkit_harness::{Call, CallLog, RecordingAdapter, ScriptedClick, ScriptedKeydown};

fn foundation(log: &CallLog) -> TrailingActionFoundation<RecordingAdapter> {
    TrailingActionFoundation::new(RecordingAdapter::new(log.clone()))
}

fn keydown(key: &str, key_code: u32) -> Vec<Call> {
    let log = CallLog::new();
    let mut foundation = foundation(&log);
    foundation.handle_keydown(&mut ScriptedKeydown::new(&log, key, key_code));
    log.take()
}

fn set_tab_index(value: &str) -> Call {
    Call::SetAttribute { name: TAB_INDEX.to_owned(), value: value.to_owned() }
}

#[test]
fn enter_stops_propagation_then_notifies_once() {
    assert_eq!(keydown("Enter", 0), [
        Call::StopPropagation,
        Call::NotifyInteraction(InteractionTrigger::EnterKey)
    ]);
}

#[test]
fn delete_stops_propagation_then_notifies_once() {
    assert_eq!(keydown("Delete", 0), [
        Call::StopPropagation,
        Call::NotifyInteraction(InteractionTrigger::DeleteKey)
    ]);
}

#[test]
fn arrow_up_notifies_navigation_with_key() {
    assert_eq!(keydown("ArrowUp", 0), [
        Call::StopPropagation,
        Call::NotifyNavigation(CanonicalKey::ARROW_UP)
    ]);
}

#[test]
fn unrelated_key_only_stops_propagation() {
    assert_eq!(keydown("a", 65), [Call::StopPropagation]);
}

#[test]
fn legacy_codes_drive_the_same_notifications() {
    for (code, key) in KEY_CODES.iter() {
        let calls = keydown("", code);
        assert_eq!(calls.len(), 2, "keyCode {code}");
        assert_eq!(calls[0], Call::StopPropagation);
        match &calls[1] {
            Call::NotifyInteraction(trigger) => {
                assert_eq!(*trigger, InteractionTrigger::from_key(key));
            },
            Call::NotifyNavigation(nav) => assert_eq!(*nav, key),
            other => panic!("unexpected {other:?} for keyCode {code}"),
        }
    }
}

#[test]
fn ie_arrow_name_with_code_navigates_with_canonical_key() {
    assert_eq!(keydown("Left", 37), [
        Call::StopPropagation,
        Call::NotifyNavigation(CanonicalKey::ARROW_LEFT)
    ]);
}

#[test]
fn every_actionable_key_notifies_once() {
    for key in ACTIONABLE_KEYS.iter() {
        let calls = keydown(key.as_str(), 0);
        assert_eq!(calls.iter().filter(|c| c.is_notification()).count(), 1, "{key:?}");
    }
}

#[test]
fn click_notifies_click_after_stopping_propagation() {
    let log = CallLog::new();
    let mut foundation = foundation(&log);

    foundation.handle_click(&mut ScriptedClick::new(&log));

    assert_eq!(log.take(), [
        Call::StopPropagation,
        Call::NotifyInteraction(InteractionTrigger::Click)
    ]);
}

#[test]
fn focus_sets_tab_index_before_focusing() {
    let log = CallLog::new();
    let mut foundation = foundation(&log);

    foundation.focus();

    assert_eq!(log.take(), [set_tab_index("0"), Call::Focus]);
}

#[test]
fn remove_focus_only_sets_tab_index() {
    let log = CallLog::new();
    let mut foundation = foundation(&log);

    foundation.remove_focus();

    assert_eq!(log.take(), [set_tab_index("-1")]);
    assert_eq!(foundation.adapter().attribute(TAB_INDEX), Some("-1"));
}

#[test]
fn navigability_follows_aria_hidden() {
    let cases = [(None, true), (Some("true"), false), (Some("false"), true), (Some("yes"), true)];

    for (value, expected) in cases {
        let log = CallLog::new();
        let mut adapter = RecordingAdapter::new(log.clone());
        if let Some(value) = value {
            adapter = adapter.with_attribute(ARIA_HIDDEN, value);
        }
        let foundation = TrailingActionFoundation::new(adapter);

        assert_eq!(foundation.is_navigable(), expected, "aria-hidden={value:?}");
        assert_eq!(log.take(), [Call::GetAttribute { name: ARIA_HIDDEN.to_owned() }]);
    }
}

#[test]
fn navigability_is_reread_on_every_query() {
    let log = CallLog::new();
    let mut foundation = foundation(&log);

    assert!(foundation.is_navigable());
    foundation.adapter_mut().set_attribute(ARIA_HIDDEN, "true");
    assert!(!foundation.is_navigable());
}
