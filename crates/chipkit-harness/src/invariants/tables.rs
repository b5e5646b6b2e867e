//! Consistency of the static key tables.
//!
//! The foundation's fallback branches ([`CanonicalKey::UNKNOWN`],
//! [`InteractionTrigger::Unspecified`]) are only unreachable while the tables
//! agree with each other. These checks pin that down.

use std::collections::HashSet;

use chipkit_core::{
    ACTIONABLE_KEYS, CanonicalKey, InteractionTrigger, JUMP_KEYS, KEY_CODES, KeyIntent,
    NAVIGATION_KEYS, classify_key,
};

use super::Violation;

const ACTION_KEYS: [CanonicalKey; 4] = [
    CanonicalKey::ENTER,
    CanonicalKey::SPACEBAR,
    CanonicalKey::BACKSPACE,
    CanonicalKey::DELETE,
];

/// Check every cross-table property.
///
/// Returns all violations found.
pub fn check_tables() -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    for key in ACTION_KEYS {
        if NAVIGATION_KEYS.contains(key) {
            violations.push(violation("ActionKeysDisjoint", format!("{key:?} is also navigation")));
        }
    }

    for key in JUMP_KEYS.iter() {
        if !NAVIGATION_KEYS.contains(key) {
            violations.push(violation("JumpKeysNavigate", format!("{key:?} is not navigation")));
        }
    }

    let mut codes = HashSet::new();
    for (code, key) in KEY_CODES.iter() {
        if !codes.insert(code) {
            violations.push(violation("KeyCodesUnique", format!("code {code} mapped twice")));
        }
        if !ACTIONABLE_KEYS.contains(key) {
            violations.push(violation(
                "KeyCodesActionable",
                format!("code {code} maps to non-actionable {key:?}"),
            ));
        }
    }

    for key in ACTIONABLE_KEYS.iter() {
        match classify_key(key) {
            Some(KeyIntent::Interaction(InteractionTrigger::Unspecified)) | None => {
                violations.push(violation(
                    "ActionableKeysMeaningful",
                    format!("{key:?} has no trigger and is not navigation"),
                ));
            },
            Some(_) => {},
        }
    }

    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

fn violation(invariant: &'static str, message: String) -> Violation {
    Violation { invariant, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_are_consistent() {
        assert_eq!(check_tables(), Ok(()));
    }
}
