//! Self-signed CA certificate operations.
//!
//! The CA produced here is ephemeral: it exists to sign exactly one leaf
//! certificate and is discarded apart from its PEM export.

use crate::cert::builder::{ca_subject, one_year_window, random_serial};
use crate::error::{CertGenError, Result};
use crate::keys::{generate_rsa_keypair, RsaKeyPair, RSA_KEY_BITS};
use rand::{CryptoRng, RngCore};
use rcgen::{
    BasicConstraints, Certificate, CertificateParams, ExtendedKeyUsagePurpose, IsCa,
    KeyUsagePurpose, SerialNumber,
};
use time::OffsetDateTime;

/// A self-signed CA certificate together with its private key.
///
/// The key never leaves this struct; it is only used to sign leaf
/// certificates issued against this CA.
pub struct SigningCa {
    pub(crate) cert: Certificate,
    pub(crate) key: RsaKeyPair,
}

impl SigningCa {
    /// The CA certificate, PEM-encoded under block type `CERTIFICATE`.
    pub fn cert_pem(&self) -> String {
        self.cert.pem()
    }

    /// The CA certificate as DER bytes.
    pub fn cert_der(&self) -> &[u8] {
        self.cert.der()
    }
}

/// Create a self-signed CA certificate for the given organizations.
///
/// The CA is valid from now until the same calendar date one year later,
/// carries `digitalSignature` and `certSign` key usages, and is backed by
/// a fresh 4096-bit RSA key drawn from `rng`.
///
/// # Example
///
/// ```rust,no_run
/// use webhook_certgen::cert::ca::create_signing_ca;
///
/// # fn example() -> webhook_certgen::error::Result<()> {
/// let orgs = vec!["Acme".to_string()];
/// let ca = create_signing_ca(&mut rand::rngs::OsRng, &orgs)?;
/// assert!(ca.cert_pem().contains("BEGIN CERTIFICATE"));
/// # Ok(())
/// # }
/// ```
pub fn create_signing_ca<R>(rng: &mut R, organizations: &[String]) -> Result<SigningCa>
where
    R: CryptoRng + RngCore,
{
    let serial = random_serial(rng);
    create_signing_ca_with(rng, organizations, serial, RSA_KEY_BITS)
}

pub(crate) fn create_signing_ca_with<R>(
    rng: &mut R,
    organizations: &[String],
    serial: SerialNumber,
    bits: usize,
) -> Result<SigningCa>
where
    R: CryptoRng + RngCore,
{
    let mut params = CertificateParams::new(Vec::<String>::new())
        .map_err(|e| CertGenError::SigningError(format!("Failed to create CA template: {}", e)))?;

    params.distinguished_name = ca_subject(organizations);
    params.serial_number = Some(serial);

    let (not_before, not_after) = one_year_window(OffsetDateTime::now_utc());
    params.not_before = not_before;
    params.not_after = not_after;

    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::KeyCertSign,
    ];
    params.extended_key_usages = vec![
        ExtendedKeyUsagePurpose::ClientAuth,
        ExtendedKeyUsagePurpose::ServerAuth,
    ];

    let key = generate_rsa_keypair(rng, bits)?;

    let cert = params
        .self_signed(&key.signing_key()?)
        .map_err(|e| CertGenError::SigningError(format!("Failed to self-sign CA: {}", e)))?;

    Ok(SigningCa { cert, key })
}
