//! Interaction logic for chips, decoupled from rendering.
//!
//! A chip's trailing action turns raw clicks and keydowns into a small set of
//! semantic notifications. This crate holds that logic and the static key
//! tables it consults; the element itself sits behind an adapter trait.
//!
//! # Components
//!
//! - [`CanonicalKey`] and the static tables ([`ACTIONABLE_KEYS`],
//!   [`NAVIGATION_KEYS`], [`JUMP_KEYS`], [`KEY_CODES`]): key resolution with
//!   legacy `keyCode` fallback
//! - [`InteractionTrigger`]: reason attached to interaction notifications
//! - [`TrailingActionAdapter`]: element operations supplied by the host
//! - [`TrailingActionFoundation`]: click/keydown handling and focus control
//! - [`NavigationIntent`]: how a chip set turns navigation keys into focus
//!   movement
//! - [`TrailingActionEvent`]: serializable custom event details

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constants;

mod adapter;
mod detail;
mod event;
mod foundation;
mod key;
mod navigation;
mod trigger;

pub use adapter::{NoopAdapter, TrailingActionAdapter};
pub use detail::{ChipNavigationDetail, InteractionDetail, NavigationDetail, TrailingActionEvent};
pub use event::{InputEvent, KeyboardEvent, KeyboardInput, PointerEvent};
pub use foundation::{KeyIntent, TrailingActionFoundation, classify_key};
pub use key::{
    ACTIONABLE_KEYS, CanonicalKey, JUMP_KEYS, KEY_CODES, KeyCodeTable, KeySet, NAVIGATION_KEYS,
    ParseKeyError, resolve_key,
};
pub use navigation::{Direction, EventSource, NavigationIntent, direction_for_key, is_jump_key};
pub use trigger::{InteractionTrigger, ParseTriggerError};
