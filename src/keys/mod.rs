//! Key material for certificate bootstrap.
//!
//! This module provides RSA key generation and export. Both the CA and the
//! leaf certificate are backed by independent 4096-bit RSA keys.

pub mod rsa;

pub use self::rsa::{generate_rsa_keypair, RsaKeyPair, RSA_KEY_BITS};
