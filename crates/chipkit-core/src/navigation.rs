//! Turning navigation keys into focus movement.
//!
//! The trailing action only reports which key was pressed. The chip set that
//! receives the navigation event decides where focus goes, using the helpers
//! here: vertical and Home/End keys jump between chips, horizontal keys step
//! within the row in a direction that depends on layout direction.

use serde::Serialize;

use crate::key::{CanonicalKey, JUMP_KEYS, NAVIGATION_KEYS};

/// Horizontal direction of a focus step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Toward the start of the row in reading order for LTR.
    Left,
    /// Toward the end of the row in reading order for LTR.
    Right,
}

/// Which part of a chip a navigation event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSource {
    /// The chip's primary action. Reported by the chip itself for keys
    /// pressed on its primary action; the trailing action never produces it.
    Primary,
    /// The chip's trailing action.
    Trailing,
    /// Neither; the event moves focus between chips.
    None,
}

/// Where a navigation key sends focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Move to another chip (Up/Down/Home/End).
    Jump,
    /// Move one action left or right.
    Step(Direction),
}

impl NavigationIntent {
    /// Intent for `key`, or `None` if it is not a navigation key.
    pub fn for_key(key: CanonicalKey, is_rtl: bool) -> Option<Self> {
        if !NAVIGATION_KEYS.contains(key) {
            return None;
        }

        if is_jump_key(key) {
            Some(Self::Jump)
        } else {
            Some(Self::Step(direction_for_key(key, is_rtl)))
        }
    }
}

/// Whether `key` moves focus to another chip rather than within one.
pub fn is_jump_key(key: CanonicalKey) -> bool {
    JUMP_KEYS.contains(key)
}

/// Visual direction for a horizontal key.
///
/// In right-to-left layouts the right arrow moves toward the start of the
/// row. Non-horizontal keys default to [`Direction::Right`].
pub fn direction_for_key(key: CanonicalKey, is_rtl: bool) -> Direction {
    let is_left_key = key == CanonicalKey::ARROW_LEFT || key == CanonicalKey::IE_ARROW_LEFT;
    let is_right_key = key == CanonicalKey::ARROW_RIGHT || key == CanonicalKey::IE_ARROW_RIGHT;

    if (!is_rtl && is_left_key) || (is_rtl && is_right_key) {
        Direction::Left
    } else {
        Direction::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_swaps_horizontal_direction() {
        assert_eq!(direction_for_key(CanonicalKey::ARROW_LEFT, false), Direction::Left);
        assert_eq!(direction_for_key(CanonicalKey::ARROW_LEFT, true), Direction::Right);
        assert_eq!(direction_for_key(CanonicalKey::ARROW_RIGHT, false), Direction::Right);
        assert_eq!(direction_for_key(CanonicalKey::ARROW_RIGHT, true), Direction::Left);
        assert_eq!(direction_for_key(CanonicalKey::IE_ARROW_RIGHT, true), Direction::Left);
    }

    #[test]
    fn vertical_and_boundary_keys_jump() {
        for key in [
            CanonicalKey::ARROW_UP,
            CanonicalKey::ARROW_DOWN,
            CanonicalKey::HOME,
            CanonicalKey::END,
            CanonicalKey::IE_ARROW_UP,
            CanonicalKey::IE_ARROW_DOWN,
        ] {
            assert_eq!(NavigationIntent::for_key(key, false), Some(NavigationIntent::Jump));
        }
    }

    #[test]
    fn horizontal_keys_step() {
        assert_eq!(
            NavigationIntent::for_key(CanonicalKey::IE_ARROW_LEFT, false),
            Some(NavigationIntent::Step(Direction::Left))
        );
    }

    #[test]
    fn action_keys_have_no_navigation_intent() {
        assert_eq!(NavigationIntent::for_key(CanonicalKey::ENTER, false), None);
        assert_eq!(NavigationIntent::for_key(CanonicalKey::UNKNOWN, true), None);
    }
}
