//! Terminal host for the chip trailing action.
//!
//! A thin shell over [`chipkit_core::TrailingActionFoundation`] that backs the
//! adapter with in-memory element state and feeds it real keyboard and mouse
//! input from the terminal. All interaction logic lives in `chipkit-core`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod host;
pub mod input;
pub mod terminal;

pub use config::HostConfig;
pub use host::{Host, HostOutput, TerminalAdapter};
pub use input::{HostInput, translate};
pub use terminal::{TerminalError, TerminalSession};
