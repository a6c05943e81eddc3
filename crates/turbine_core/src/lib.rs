//! Core domain library for the Turbine client (config, models, utilities).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across Turbine crates.
pub mod constants;
/// Editor options passed into language resolution.
pub mod editor;
/// Byte-size and relative-duration formatting.
pub mod humanize;
/// Static language registry and syntax-mode resolution.
pub mod languages;
/// Data models for API requests and responses.
pub mod models;
/// Shared text helpers.
pub mod text;

pub use config::Config;
pub use constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
