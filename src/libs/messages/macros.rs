//! Console output macros.
//!
//! Every user-facing line goes through one of the `msg_*!` macros, which all
//! expand to [`__msg_emit!`](crate::__msg_emit). A line becomes a `tracing`
//! event only when debug output was asked for (`FOCUSWATCH_DEBUG` or
//! `RUST_LOG` set) *and* a global subscriber is installed. Only `watch`
//! installs one, so `intention`, `report`, `export` and `init` always print
//! to the console.
//!
//! | macro | prefix | tracing level | console stream |
//! |---|---|---|---|
//! | `msg_print!` | none | info | stdout |
//! | `msg_success!` | ✅ | info | stdout |
//! | `msg_info!` | ℹ️ | info | stdout |
//! | `msg_warning!` | ⚠️ | warn | stdout |
//! | `msg_error!` | ❌ | error | stderr |
//! | `msg_debug!` | 🔍 | debug | never |
//!
//! Passing `true` as a second argument pads the line with blank lines.
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build or return an
//! `anyhow::Error` from a message instead of printing it.
//!
//! ```rust,no_run
//! use focuswatch::{msg_info, msg_bail_anyhow};
//! use focuswatch::libs::messages::Message;
//!
//! fn check(tags: usize) -> anyhow::Result<()> {
//!     if tags == 0 {
//!         msg_bail_anyhow!(Message::MonitorNoIntentions);
//!     }
//!     msg_info!(Message::MonitorStopHint, true);
//!     Ok(())
//! }
//! ```

use std::fmt::Display;
use std::sync::OnceLock;

static DEBUG_REQUESTED: OnceLock<bool> = OnceLock::new();

/// Whether the environment asks for debug output. Read once per process.
pub fn debug_requested() -> bool {
    *DEBUG_REQUESTED.get_or_init(|| std::env::var_os("FOCUSWATCH_DEBUG").is_some() || std::env::var_os("RUST_LOG").is_some())
}

/// Whether messages currently go to `tracing` instead of the console.
pub fn routes_to_tracing() -> bool {
    debug_requested() && tracing::dispatcher::has_been_set()
}

/// Joins prefix and message, optionally padded with blank lines.
pub fn decorate(prefix: &str, msg: &dyn Display, padded: bool) -> String {
    let line = if prefix.is_empty() { msg.to_string() } else { format!("{} {}", prefix, msg) };
    if padded {
        format!("\n{}\n", line)
    } else {
        line
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:expr, $msg:expr, $padded:expr) => {{
        let line = $crate::libs::messages::macros::decorate($prefix, &$msg, $padded);
        if $crate::libs::messages::macros::routes_to_tracing() {
            tracing::$level!("{}", line);
        } else {
            $print!("{}", line);
        }
    }};
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "⚠️", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌", $msg, true)
    };
}

/// Dropped unless messages go to `tracing`.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::routes_to_tracing() {
            tracing::debug!("{}", $crate::libs::messages::macros::decorate("🔍", &$msg, false));
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
