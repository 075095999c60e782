//! Loading bootstrap artifacts back from PEM.
//!
//! Callers that feed the generated bundle into a TLS stack or into a
//! Kubernetes secret need the DER bytes back out of the PEM blocks; this
//! module provides those conversions.

use crate::error::{CertGenError, Result};
use rustls_pemfile::Item;
use std::io::Cursor;

/// Load a single DER-encoded certificate from a PEM string.
///
/// # Example
///
/// ```rust,no_run
/// use webhook_certgen::cert::loader::load_certificate_from_pem;
///
/// # fn example() -> webhook_certgen::error::Result<()> {
/// let pem = std::fs::read_to_string("ca.crt")?;
/// let der = load_certificate_from_pem(&pem)?;
/// # Ok(())
/// # }
/// ```
pub fn load_certificate_from_pem(pem_str: &str) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(pem_str.as_bytes());

    match rustls_pemfile::read_one(&mut cursor)
        .map_err(|e| CertGenError::PemError(format!("Failed to read PEM: {}", e)))?
    {
        Some(Item::X509Certificate(cert_der)) => Ok(cert_der.to_vec()),
        Some(_) => Err(CertGenError::PemError(
            "PEM block does not contain a certificate".to_string(),
        )),
        None => Err(CertGenError::PemError("Empty PEM input".to_string())),
    }
}

/// Load all DER-encoded certificates from a PEM string.
pub fn load_certificates_from_pem(pem_str: &str) -> Result<Vec<Vec<u8>>> {
    let mut cursor = Cursor::new(pem_str.as_bytes());
    let mut certificates = Vec::new();

    loop {
        match rustls_pemfile::read_one(&mut cursor)
            .map_err(|e| CertGenError::PemError(format!("Failed to read PEM: {}", e)))?
        {
            Some(Item::X509Certificate(cert_der)) => {
                certificates.push(cert_der.to_vec());
            }
            Some(_) => continue,
            None => break,
        }
    }

    if certificates.is_empty() {
        return Err(CertGenError::PemError(
            "No certificates found in PEM input".to_string(),
        ));
    }

    Ok(certificates)
}

/// Load a PKCS#1 RSA private key (DER) from a PEM string.
pub fn load_private_key_from_pem(pem_str: &str) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(pem_str.as_bytes());

    match rustls_pemfile::read_one(&mut cursor)
        .map_err(|e| CertGenError::PemError(format!("Failed to read PEM: {}", e)))?
    {
        Some(Item::Pkcs1Key(key_der)) => Ok(key_der.secret_pkcs1_der().to_vec()),
        Some(_) => Err(CertGenError::PemError(
            "PEM block does not contain an RSA private key".to_string(),
        )),
        None => Err(CertGenError::PemError("Empty PEM input".to_string())),
    }
}
