//! Message output macros.
//!
//! Each macro prints a [`Message`](super::Message) with a status prefix. In
//! debug mode the text goes through `tracing` instead of plain stdout/stderr,
//! so it lands in the log file next to the store events:
//!
//! ```text
//! msg_success!(..) ──▶ STUDENTS_DEBUG or RUST_LOG set? ──▶ tracing::info!
//!                                     │
//!                                     └──────── no ─────▶ println!
//! ```
//!
//! | Macro               | Prefix | Normal mode | Debug mode        |
//! |---------------------|--------|-------------|-------------------|
//! | `msg_print!`        |        | stdout      | `tracing::info!`  |
//! | `msg_success!`      | ✅     | stdout      | `tracing::info!`  |
//! | `msg_info!`         | ℹ️     | stdout      | `tracing::info!`  |
//! | `msg_warning!`      | ⚠️     | stdout      | `tracing::warn!`  |
//! | `msg_error!`        | ❌     | stderr      | `tracing::error!` |
//! | `msg_debug!`        | 🔍     | nothing     | `tracing::debug!` |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build an `anyhow::Error` from a
//! message instead of printing it.
//!
//! ```rust,no_run
//! use students::libs::messages::Message;
//! use students::{msg_info, msg_success};
//!
//! msg_success!(Message::StudentDeleted(3));
//! msg_info!(Message::NoStudentsFound, true);
//! ```

use std::sync::OnceLock;

/// Environment variable that switches message output to `tracing`.
pub const DEBUG_ENV: &str = "STUDENTS_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages are routed through `tracing`. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Errors go to stderr so they never mix with table output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Shown only in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` carrying the message text.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// `return Err(msg_error_anyhow!(..))`.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        return Err($crate::msg_error_anyhow!($msg))
    };
}
