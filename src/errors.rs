//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`RoninError`] covers the failure modes of controller
//! construction and profile loading:
//! - Profile validation errors
//! - Clip lookup errors
//! - Profile file I/O and decoding errors
//!
//! The per-frame `update` path does not return errors: everything that can
//! fail is checked at construction time, and a missing clip encountered
//! mid-frame is logged and skipped.
//!
//! # Usage
//!
//! Public APIs that can fail return [`Result<T>`], an alias for
//! `std::result::Result<T, RoninError>`.

use thiserror::Error;

/// The main error type for the Ronin controller crate.
#[derive(Error, Debug)]
pub enum RoninError {
    // ========================================================================
    // Profile & Clip Errors
    // ========================================================================
    /// A requested clip name is not registered in the mixer.
    #[error("Animation clip not found in mixer: {0}")]
    MissingClip(String),

    /// A profile failed validation.
    #[error("Invalid character profile: {0}")]
    InvalidProfile(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// File I/O error while reading a profile.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error while decoding a profile.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, RoninError>`.
pub type Result<T> = std::result::Result<T, RoninError>;
