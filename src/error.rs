//! Error types for certificate bootstrap operations.
//!
//! This module defines all error types used throughout the crate.
//! All errors implement `std::error::Error` and are designed to provide
//! clear, actionable error messages.

use thiserror::Error;

/// The main error type for certificate bootstrap operations.
///
/// This enum covers all possible errors that can occur during key
/// generation, certificate signing, and PEM encoding or decoding.
#[derive(Error, Debug)]
pub enum CertGenError {
    /// RSA key generation failed (entropy or resource exhaustion)
    #[error("Key generation error: {0}")]
    KeyGenerationError(String),

    /// Certificate template construction or signing failed
    #[error("Signing error: {0}")]
    SigningError(String),

    /// PEM encoding/decoding error
    #[error("PEM error: {0}")]
    PemError(String),

    /// Invalid input data
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for certificate bootstrap operations.
pub type Result<T> = std::result::Result<T, CertGenError>;
