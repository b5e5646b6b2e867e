//! Host configuration.

/// Settings for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Identifier reported in chip-level navigation details.
    pub chip_id: String,
    /// Right-to-left layout; swaps horizontal navigation direction.
    pub is_rtl: bool,
    /// Emulate an old environment: legacy key names plus numeric codes.
    pub legacy_keys: bool,
    /// Start with the trailing action hidden from assistive technology.
    pub hidden: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { chip_id: "chip-1".to_owned(), is_rtl: false, legacy_keys: false, hidden: false }
    }
}
