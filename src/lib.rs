//! # Focuswatch
//!
//! A command-line monitor that samples screen activity on a fixed interval,
//! compares it with the work the user said they would be doing, warns on
//! deviation and reports how the session's time was spent.
//!
//! ## Features
//!
//! - **Intentions**: Free-text plans reduced to activity tags
//! - **Periodic Sampling**: Screenshot, analyse, discard
//! - **Classification**: Work, entertainment or unknown per sample
//! - **Alerts**: Terminal or desktop warnings on deviation
//! - **Reports**: Time per category and a productivity ratio
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use focuswatch::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
