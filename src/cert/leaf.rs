//! Leaf certificate operations.
//!
//! This module issues the service-facing certificate: signed by the CA,
//! carrying the webhook's DNS names as subject alternative names.

use crate::cert::builder::{leaf_subject, one_year_window, random_serial};
use crate::cert::ca::SigningCa;
use crate::error::{CertGenError, Result};
use crate::keys::{generate_rsa_keypair, RsaKeyPair, RSA_KEY_BITS};
use rand::{CryptoRng, RngCore};
use rcgen::Ia5String;
use rcgen::{
    Certificate, CertificateParams, ExtendedKeyUsagePurpose, IsCa, KeyUsagePurpose, SanType,
    SerialNumber,
};
use time::OffsetDateTime;

/// A CA-signed leaf certificate together with its private key.
pub struct LeafCertificate {
    pub(crate) cert: Certificate,
    pub(crate) key: RsaKeyPair,
}

impl LeafCertificate {
    /// The leaf certificate, PEM-encoded under block type `CERTIFICATE`.
    pub fn cert_pem(&self) -> String {
        self.cert.pem()
    }

    /// The leaf certificate as DER bytes.
    pub fn cert_der(&self) -> &[u8] {
        self.cert.der()
    }

    /// The leaf private key, PEM-encoded under block type `RSA PRIVATE KEY`.
    pub fn key_pem(&self) -> Result<String> {
        self.key.to_pkcs1_pem()
    }
}

/// Issue a leaf certificate signed by the given CA.
///
/// The certificate subject is `{CN: common_name, O: organizations}`, its
/// SANs are `dns_names` verbatim (an empty list produces a certificate
/// with no SANs, which most TLS clients will reject), and it is valid from
/// now until the same calendar date one year later. The leaf is backed by
/// a fresh RSA key, independent of the CA's.
///
/// # Example
///
/// ```rust,no_run
/// use webhook_certgen::cert::ca::create_signing_ca;
/// use webhook_certgen::cert::leaf::issue_leaf;
///
/// # fn example() -> webhook_certgen::error::Result<()> {
/// let orgs = vec!["Acme".to_string()];
/// let dns = vec!["webhook.acme.svc".to_string()];
///
/// let ca = create_signing_ca(&mut rand::rngs::OsRng, &orgs)?;
/// let leaf = issue_leaf(&mut rand::rngs::OsRng, &ca, &orgs, &dns, "webhook.acme.svc")?;
/// assert!(leaf.cert_pem().contains("BEGIN CERTIFICATE"));
/// # Ok(())
/// # }
/// ```
pub fn issue_leaf<R>(
    rng: &mut R,
    ca: &SigningCa,
    organizations: &[String],
    dns_names: &[String],
    common_name: &str,
) -> Result<LeafCertificate>
where
    R: CryptoRng + RngCore,
{
    let serial = random_serial(rng);
    issue_leaf_with(rng, ca, organizations, dns_names, common_name, serial, RSA_KEY_BITS)
}

pub(crate) fn issue_leaf_with<R>(
    rng: &mut R,
    ca: &SigningCa,
    organizations: &[String],
    dns_names: &[String],
    common_name: &str,
    serial: SerialNumber,
    bits: usize,
) -> Result<LeafCertificate>
where
    R: CryptoRng + RngCore,
{
    let mut params = CertificateParams::new(Vec::<String>::new())
        .map_err(|e| CertGenError::SigningError(format!("Failed to create leaf template: {}", e)))?;

    // Every entry is a DNS SAN, verbatim; IP-shaped strings are not
    // reclassified as IPAddress entries.
    params.subject_alt_names = dns_names
        .iter()
        .map(|name| {
            Ia5String::try_from(name.as_str())
                .map(SanType::DnsName)
                .map_err(|e| {
                    CertGenError::ParseError(format!("Invalid DNS name {:?}: {}", name, e))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    params.distinguished_name = leaf_subject(organizations, common_name);
    params.serial_number = Some(serial);

    let (not_before, not_after) = one_year_window(OffsetDateTime::now_utc());
    params.not_before = not_before;
    params.not_after = not_after;

    params.is_ca = IsCa::NoCa;
    params.key_usages = vec![KeyUsagePurpose::DigitalSignature];
    params.extended_key_usages = vec![
        ExtendedKeyUsagePurpose::ClientAuth,
        ExtendedKeyUsagePurpose::ServerAuth,
    ];

    let key = generate_rsa_keypair(rng, bits)?;

    let cert = params
        .signed_by(&key.signing_key()?, &ca.cert, &ca.key.signing_key()?)
        .map_err(|e| CertGenError::SigningError(format!("Failed to sign leaf certificate: {}", e)))?;

    Ok(LeafCertificate { cert, key })
}
