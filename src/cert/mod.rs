//! Certificate generation module.
//!
//! This module builds a minimal two-level PKI: one self-signed CA and one
//! CA-signed leaf certificate, returned PEM-encoded.

pub mod builder;
pub mod bundle;
pub mod ca;
pub mod leaf;
pub mod loader;
