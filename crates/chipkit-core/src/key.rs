//! Canonical key names and the static classification tables.
//!
//! Keyboard events come in two shapes: modern ones carry a named `key`
//! ("ArrowLeft", "Enter"), older environments only populate the numeric
//! `keyCode`. [`CanonicalKey::resolve`] folds both into one canonical name so
//! the rest of the crate only ever compares against the constants defined
//! here.
//!
//! All tables are `static` slices. Nothing is built at runtime and nothing
//! can be mutated after load.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{
    constants::{
        ARROW_DOWN_KEYCODE, ARROW_LEFT_KEYCODE, ARROW_RIGHT_KEYCODE, ARROW_UP_KEYCODE,
        BACKSPACE_KEYCODE, DELETE_KEYCODE, END_KEYCODE, ENTER_KEYCODE, HOME_KEYCODE,
        SPACEBAR_KEYCODE,
    },
    event::KeyboardInput,
};

/// Normalized name of a logical keyboard key.
///
/// Values only come from the associated constants, so comparing two keys is a
/// string comparison against a closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(&'static str);

impl CanonicalKey {
    /// Left arrow.
    pub const ARROW_LEFT: Self = Self("ArrowLeft");
    /// Right arrow.
    pub const ARROW_RIGHT: Self = Self("ArrowRight");
    /// Up arrow.
    pub const ARROW_UP: Self = Self("ArrowUp");
    /// Down arrow.
    pub const ARROW_DOWN: Self = Self("ArrowDown");
    /// Home.
    pub const HOME: Self = Self("Home");
    /// End.
    pub const END: Self = Self("End");
    /// Enter / Return.
    pub const ENTER: Self = Self("Enter");
    /// Space bar. The DOM reports it as a single space.
    pub const SPACEBAR: Self = Self(" ");
    /// Backspace.
    pub const BACKSPACE: Self = Self("Backspace");
    /// Delete.
    pub const DELETE: Self = Self("Delete");

    /// Left arrow as named by legacy IE.
    pub const IE_ARROW_LEFT: Self = Self("Left");
    /// Right arrow as named by legacy IE.
    pub const IE_ARROW_RIGHT: Self = Self("Right");
    /// Up arrow as named by legacy IE.
    pub const IE_ARROW_UP: Self = Self("Up");
    /// Down arrow as named by legacy IE.
    pub const IE_ARROW_DOWN: Self = Self("Down");
    /// Delete as named by legacy IE.
    pub const IE_DELETE: Self = Self("Del");

    /// Sentinel for "nothing recognized". Never a real trigger.
    pub const UNKNOWN: Self = Self("UNKNOWN_KEY");

    /// The key name as the DOM spells it.
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Whether this is the [`CanonicalKey::UNKNOWN`] sentinel.
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// Resolve a raw `key`/`keyCode` pair into a canonical key.
    ///
    /// A `key` already in [`ACTIONABLE_KEYS`] wins. Otherwise the legacy code
    /// is looked up in [`KEY_CODES`]. Anything else is
    /// [`CanonicalKey::UNKNOWN`].
    pub fn resolve(key: &str, key_code: u32) -> Self {
        if let Some(actionable) = ACTIONABLE_KEYS.get(key) {
            return actionable;
        }

        KEY_CODES.get(key_code).unwrap_or(Self::UNKNOWN)
    }

    /// Canonical key for a legacy `keyCode`, if the table knows it.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        KEY_CODES.get(key_code)
    }

    /// Legacy `keyCode` for this key, if it has one.
    pub fn key_code(self) -> Option<u32> {
        KEY_CODES.code_for(self)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Name did not match any known key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name: {0:?}")]
pub struct ParseKeyError(pub String);

/// Every named key, including legacy spellings. The sentinel is excluded.
const NAMED_KEYS: &[CanonicalKey] = &[
    CanonicalKey::ARROW_LEFT,
    CanonicalKey::ARROW_RIGHT,
    CanonicalKey::ARROW_UP,
    CanonicalKey::ARROW_DOWN,
    CanonicalKey::HOME,
    CanonicalKey::END,
    CanonicalKey::ENTER,
    CanonicalKey::SPACEBAR,
    CanonicalKey::BACKSPACE,
    CanonicalKey::DELETE,
    CanonicalKey::IE_ARROW_LEFT,
    CanonicalKey::IE_ARROW_RIGHT,
    CanonicalKey::IE_ARROW_UP,
    CanonicalKey::IE_ARROW_DOWN,
    CanonicalKey::IE_DELETE,
];

impl FromStr for CanonicalKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMED_KEYS.iter().copied().find(|k| k.0 == s).ok_or_else(|| ParseKeyError(s.to_owned()))
    }
}

/// Immutable set of canonical keys, used for membership tests only.
#[derive(Debug, Clone, Copy)]
pub struct KeySet(&'static [CanonicalKey]);

impl KeySet {
    /// Whether `key` names a member of the set.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.get(key.as_ref()).is_some()
    }

    /// The member spelled `key`, if any.
    pub fn get(&self, key: &str) -> Option<CanonicalKey> {
        self.0.iter().copied().find(|k| k.0 == key)
    }

    /// Iterate over the members in table order.
    pub fn iter(&self) -> impl Iterator<Item = CanonicalKey> + '_ {
        self.0.iter().copied()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fixed mapping from legacy `keyCode` values to canonical keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyCodeTable(&'static [(u32, CanonicalKey)]);

impl KeyCodeTable {
    /// Canonical key for `key_code`.
    pub fn get(&self, key_code: u32) -> Option<CanonicalKey> {
        self.0.iter().find(|(code, _)| *code == key_code).map(|(_, key)| *key)
    }

    /// Legacy code mapped to `key`.
    pub fn code_for(&self, key: CanonicalKey) -> Option<u32> {
        self.0.iter().find(|(_, k)| *k == key).map(|(code, _)| *code)
    }

    /// Iterate over `(code, key)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (u32, CanonicalKey)> + '_ {
        self.0.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every key the chip foundations react to.
pub static ACTIONABLE_KEYS: KeySet = KeySet(&[
    CanonicalKey::ARROW_LEFT,
    CanonicalKey::ARROW_RIGHT,
    CanonicalKey::ARROW_DOWN,
    CanonicalKey::ARROW_UP,
    CanonicalKey::END,
    CanonicalKey::HOME,
    CanonicalKey::BACKSPACE,
    CanonicalKey::DELETE,
    CanonicalKey::ENTER,
    CanonicalKey::SPACEBAR,
]);

/// Keys that move focus instead of activating anything.
pub static NAVIGATION_KEYS: KeySet = KeySet(&[
    CanonicalKey::ARROW_LEFT,
    CanonicalKey::ARROW_RIGHT,
    CanonicalKey::ARROW_DOWN,
    CanonicalKey::ARROW_UP,
    CanonicalKey::END,
    CanonicalKey::HOME,
    CanonicalKey::IE_ARROW_LEFT,
    CanonicalKey::IE_ARROW_RIGHT,
    CanonicalKey::IE_ARROW_DOWN,
    CanonicalKey::IE_ARROW_UP,
]);

/// Navigation keys that jump between chips rather than within one.
pub static JUMP_KEYS: KeySet = KeySet(&[
    CanonicalKey::ARROW_UP,
    CanonicalKey::ARROW_DOWN,
    CanonicalKey::HOME,
    CanonicalKey::END,
    CanonicalKey::IE_ARROW_UP,
    CanonicalKey::IE_ARROW_DOWN,
]);

/// Legacy `keyCode` → canonical key.
pub static KEY_CODES: KeyCodeTable = KeyCodeTable(&[
    (ARROW_LEFT_KEYCODE, CanonicalKey::ARROW_LEFT),
    (ARROW_RIGHT_KEYCODE, CanonicalKey::ARROW_RIGHT),
    (ARROW_UP_KEYCODE, CanonicalKey::ARROW_UP),
    (ARROW_DOWN_KEYCODE, CanonicalKey::ARROW_DOWN),
    (HOME_KEYCODE, CanonicalKey::HOME),
    (END_KEYCODE, CanonicalKey::END),
    (ENTER_KEYCODE, CanonicalKey::ENTER),
    (SPACEBAR_KEYCODE, CanonicalKey::SPACEBAR),
    (BACKSPACE_KEYCODE, CanonicalKey::BACKSPACE),
    (DELETE_KEYCODE, CanonicalKey::DELETE),
]);

/// Resolve the canonical key of a keyboard event.
///
/// See [`CanonicalKey::resolve`].
pub fn resolve_key<E: KeyboardInput + ?Sized>(event: &E) -> CanonicalKey {
    CanonicalKey::resolve(event.key(), event.key_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_code_resolves_without_a_key() {
        let expected = [
            (8, "Backspace"),
            (13, "Enter"),
            (32, " "),
            (35, "End"),
            (36, "Home"),
            (37, "ArrowLeft"),
            (38, "ArrowUp"),
            (39, "ArrowRight"),
            (40, "ArrowDown"),
            (46, "Delete"),
        ];

        for (code, name) in expected {
            assert_eq!(CanonicalKey::resolve("", code).as_str(), name, "keyCode {code}");
        }
        assert_eq!(KEY_CODES.len(), expected.len());
    }

    #[test]
    fn actionable_keys_pass_through_without_a_code() {
        for key in ACTIONABLE_KEYS.iter() {
            assert_eq!(CanonicalKey::resolve(key.as_str(), 0), key);
        }
    }

    #[test]
    fn key_wins_over_conflicting_code() {
        let key = CanonicalKey::resolve("Enter", DELETE_KEYCODE);
        assert_eq!(key, CanonicalKey::ENTER);
    }

    #[test]
    fn ie_names_fall_back_to_code() {
        assert_eq!(CanonicalKey::resolve("Left", ARROW_LEFT_KEYCODE), CanonicalKey::ARROW_LEFT);
        assert_eq!(CanonicalKey::resolve("Del", DELETE_KEYCODE), CanonicalKey::DELETE);
        assert_eq!(CanonicalKey::resolve("Spacebar", SPACEBAR_KEYCODE), CanonicalKey::SPACEBAR);
    }

    #[test]
    fn unrecognized_key_and_code_is_unknown() {
        let key = CanonicalKey::resolve("a", 65);
        assert!(key.is_unknown());
        assert_eq!(key.as_str(), "UNKNOWN_KEY");
    }

    #[test]
    fn ie_name_without_code_is_unknown() {
        assert!(CanonicalKey::resolve("Left", 0).is_unknown());
    }

    #[test]
    fn key_code_round_trips_through_table() {
        for (code, key) in KEY_CODES.iter() {
            assert_eq!(key.key_code(), Some(code));
            assert_eq!(CanonicalKey::from_key_code(code), Some(key));
        }
        assert_eq!(CanonicalKey::IE_ARROW_UP.key_code(), None);
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("ArrowUp".parse::<CanonicalKey>(), Ok(CanonicalKey::ARROW_UP));
        assert_eq!(" ".parse::<CanonicalKey>(), Ok(CanonicalKey::SPACEBAR));
        assert_eq!("Down".parse::<CanonicalKey>(), Ok(CanonicalKey::IE_ARROW_DOWN));
        assert_eq!(
            "UNKNOWN_KEY".parse::<CanonicalKey>(),
            Err(ParseKeyError("UNKNOWN_KEY".to_owned()))
        );
        assert!("arrowup".parse::<CanonicalKey>().is_err());
    }

    #[test]
    fn jump_keys_are_navigation_keys() {
        assert!(JUMP_KEYS.iter().all(|k| NAVIGATION_KEYS.contains(k)));
    }
}
