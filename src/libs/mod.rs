//! Core library modules for focuswatch.
//!
//! ## Modules
//!
//! - **Session core**: intention parsing, sampling, classification, the
//!   activity log, reporting and the monitor loop that ties them together
//! - **Collaborators**: screen capture, brightness analysis, alert delivery
//! - **Infrastructure**: configuration, data storage, logging, messages,
//!   signal handling
//! - **Output**: console tables, formatting, export
//!
//! ## Usage
//!
//! ```rust
//! use focuswatch::libs::classifier::{classify, Verdict};
//! use focuswatch::libs::intention::parse;
//! use focuswatch::libs::sampler::Observation;
//!
//! let intentions = parse("writing in vim");
//! let observation = Observation { has_text_editor: true, ..Observation::default() };
//! assert_eq!(classify(&observation, &intentions), Verdict::Work);
//! ```

pub mod activity_log;
pub mod analysis;
pub mod capture;
pub mod classifier;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod intention;
pub mod logging;
pub mod messages;
pub mod monitor;
pub mod notifier;
pub mod report;
pub mod sampler;
pub mod signal;
pub mod view;
