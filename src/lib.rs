//! skillkit - A CLI tool for building and managing voice skill projects
//!
//! This library provides the core functionality behind the `skillkit` binary:
//! profile-aware configuration, models for the project files skillkit owns,
//! a client for the remote skill-management service, and the upgrade pipeline
//! that migrates legacy (v1) projects to the v2 layout.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod paths;
pub mod smapi;
pub mod upgrade;
