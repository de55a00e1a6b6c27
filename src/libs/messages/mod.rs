//! User-facing text.
//!
//! Every string the CLI prints is a [`Message`] variant rendered by its
//! `Display` impl, and printed through the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
