//! Snapshot tests for the serialized custom event details.
//!
//! The rendering layer forwards these payloads verbatim as `event.detail`, so
//! their JSON shape is part of the public contract.

use chipkit_core::{
    CanonicalKey, ChipNavigationDetail, EventSource, InteractionTrigger, TrailingActionEvent,
};

#[test]
fn interaction_detail_carries_trigger_name() {
    let event = TrailingActionEvent::from(InteractionTrigger::BackspaceKey);

    insta::assert_json_snapshot!(event, @r#"
    {
      "trigger": "BACKSPACE_KEY"
    }
    "#);
}

#[test]
fn navigation_detail_carries_canonical_key() {
    let event = TrailingActionEvent::from(CanonicalKey::ARROW_RIGHT);

    insta::assert_json_snapshot!(event, @r#"
    {
      "key": "ArrowRight"
    }
    "#);
}

#[test]
fn chip_navigation_detail_for_jump_key() {
    let detail = ChipNavigationDetail::from_trailing("chip-7", CanonicalKey::END);

    insta::assert_json_snapshot!(detail, @r#"
    {
      "chipId": "chip-7",
      "key": "End",
      "source": "NONE"
    }
    "#);
}

#[test]
fn chip_navigation_detail_for_step_key() {
    let detail = ChipNavigationDetail::from_trailing("chip-7", CanonicalKey::ARROW_LEFT);

    insta::assert_json_snapshot!(detail, @r#"
    {
      "chipId": "chip-7",
      "key": "ArrowLeft",
      "source": "TRAILING"
    }
    "#);
}

#[test]
fn event_sources_serialize_as_constants() {
    let sources = [EventSource::Primary, EventSource::Trailing, EventSource::None];

    insta::assert_json_snapshot!(sources, @r#"
    [
      "PRIMARY",
      "TRAILING",
      "NONE"
    ]
    "#);
}
