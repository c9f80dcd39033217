//! Common types and utilities shared across Pagemood crates.
//!
//! This crate defines the shared error taxonomy and observability helpers
//! used throughout the Pagemood workspace. It is intentionally lightweight
//! and dependency‑minimal so that all crates can depend on it without
//! introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`PagemoodError`] and [`Result`]: Shared error handling
//! - [`observability`]: Centralised tracing/logging initialisation
//!
//! The pipeline is strictly sequential, so errors are never recovered
//! locally: each stage propagates its failure up to the binary untouched.

pub mod observability;

/// Error types used across the Pagemood pipeline.
///
/// One variant per pipeline failure class: configuration problems are
/// surfaced before any network call, page-fetch problems abort before
/// analysis runs, and remote analysis failures abort the rest of the run.
#[derive(thiserror::Error, Debug)]
pub enum PagemoodError {
    /// Configuration was incomplete or invalid (missing `KEYDIR_PATH`,
    /// unreadable or empty key file, malformed config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The page fetch failed (transport error or non-2xx response).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The remote language service rejected or failed the request.
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Convenient alias for results that use [`PagemoodError`].
pub type Result<T> = std::result::Result<T, PagemoodError>;
