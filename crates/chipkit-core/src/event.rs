//! Input events as seen by the foundations.
//!
//! The host owns the real events. The foundations only need to read the key
//! identifiers and to stop propagation, so both are expressed as traits. The
//! concrete [`KeyboardEvent`] and [`PointerEvent`] types cover hosts that do
//! not have an event object of their own.

/// Any dispatched input event.
pub trait InputEvent {
    /// Prevent ancestors from handling the same event.
    fn stop_propagation(&mut self);
}

/// Keyboard event carrying both modern and legacy key identification.
pub trait KeyboardInput: InputEvent {
    /// Named key (`KeyboardEvent.key`). Empty when the host has none.
    fn key(&self) -> &str;

    /// Legacy numeric code (`KeyboardEvent.keyCode`). Zero when absent.
    fn key_code(&self) -> u32;
}

/// Owned keyboard event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardEvent {
    key: String,
    key_code: u32,
    propagation_stopped: bool,
}

impl KeyboardEvent {
    /// Event with both a named key and a legacy code.
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self { key: key.into(), key_code, propagation_stopped: false }
    }

    /// Event from a modern host that only reports the named key.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self::new(key, 0)
    }

    /// Event from a legacy host that only reports the numeric code.
    pub fn from_key_code(key_code: u32) -> Self {
        Self::new(String::new(), key_code)
    }

    /// Whether a handler stopped propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl InputEvent for KeyboardEvent {
    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

impl KeyboardInput for KeyboardEvent {
    fn key(&self) -> &str {
        &self.key
    }

    fn key_code(&self) -> u32 {
        self.key_code
    }
}

/// Owned pointer (click) event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerEvent {
    /// Pointer position (column, row) if the host reports one.
    pub position: Option<(u16, u16)>,
    propagation_stopped: bool,
}

impl PointerEvent {
    /// Click at a position.
    pub fn at(column: u16, row: u16) -> Self {
        Self { position: Some((column, row)), propagation_stopped: false }
    }

    /// Whether a handler stopped propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl InputEvent for PointerEvent {
    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
