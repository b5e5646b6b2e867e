//! Translation of crossterm events into chip input.
//!
//! Terminal keys are turned into DOM-shaped [`KeyboardEvent`]s. In legacy mode
//! the named key uses the old IE spellings ("Left", "Del", "Spacebar"), which
//! the foundation does not recognize by name, so resolution has to go through
//! the numeric code.

use chipkit_core::{
    CanonicalKey, KeyboardEvent, PointerEvent,
    constants::{
        ARROW_DOWN_KEYCODE, ARROW_LEFT_KEYCODE, ARROW_RIGHT_KEYCODE, ARROW_UP_KEYCODE,
        BACKSPACE_KEYCODE, DELETE_KEYCODE, END_KEYCODE, ENTER_KEYCODE, HOME_KEYCODE,
        SPACEBAR_KEYCODE,
    },
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input for the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostInput {
    /// Keydown on the trailing action.
    Key(KeyboardEvent),
    /// Click on the trailing action.
    Click(PointerEvent),
    /// Move focus onto or off the trailing action (Tab).
    ToggleFocus,
    /// Leave the session (Esc, q, Ctrl-C).
    Quit,
}

/// Translate a terminal event. `None` for events the host ignores.
pub fn translate(event: &Event, legacy_keys: bool) -> Option<HostInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, legacy_keys),
        Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), column, row, .. }) => {
            Some(HostInput::Click(PointerEvent::at(*column, *row)))
        },
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, legacy_keys: bool) -> Option<HostInput> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(HostInput::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostInput::Quit)
        },
        KeyCode::Tab => Some(HostInput::ToggleFocus),
        code => keyboard_event(code, legacy_keys).map(HostInput::Key),
    }
}

/// DOM keyboard event for a terminal key.
fn keyboard_event(code: KeyCode, legacy_keys: bool) -> Option<KeyboardEvent> {
    let (modern, legacy, key_code) = match code {
        KeyCode::Enter => (CanonicalKey::ENTER, "Enter", ENTER_KEYCODE),
        KeyCode::Char(' ') => (CanonicalKey::SPACEBAR, "Spacebar", SPACEBAR_KEYCODE),
        KeyCode::Backspace => (CanonicalKey::BACKSPACE, "Backspace", BACKSPACE_KEYCODE),
        KeyCode::Delete => (CanonicalKey::DELETE, CanonicalKey::IE_DELETE.as_str(), DELETE_KEYCODE),
        KeyCode::Left => {
            (CanonicalKey::ARROW_LEFT, CanonicalKey::IE_ARROW_LEFT.as_str(), ARROW_LEFT_KEYCODE)
        },
        KeyCode::Right => {
            (CanonicalKey::ARROW_RIGHT, CanonicalKey::IE_ARROW_RIGHT.as_str(), ARROW_RIGHT_KEYCODE)
        },
        KeyCode::Up => (CanonicalKey::ARROW_UP, CanonicalKey::IE_ARROW_UP.as_str(), ARROW_UP_KEYCODE),
        KeyCode::Down => {
            (CanonicalKey::ARROW_DOWN, CanonicalKey::IE_ARROW_DOWN.as_str(), ARROW_DOWN_KEYCODE)
        },
        KeyCode::Home => (CanonicalKey::HOME, "Home", HOME_KEYCODE),
        KeyCode::End => (CanonicalKey::END, "End", END_KEYCODE),
        KeyCode::Char(c) => return Some(KeyboardEvent::new(c.to_string(), char_key_code(c))),
        _ => return None,
    };

    let name = if legacy_keys { legacy } else { modern.as_str() };
    Some(KeyboardEvent::new(name, key_code))
}

/// `keyCode` browsers report for printable characters: the uppercase ASCII
/// value for letters and digits, zero otherwise.
fn char_key_code(c: char) -> u32 {
    if c.is_ascii_alphanumeric() { u32::from(c.to_ascii_uppercase()) } else { 0 }
}
