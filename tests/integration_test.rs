//! Integration tests for webhook-certgen.
//!
//! These tests exercise the public bundle API end to end, parsing the
//! generated PEM artifacts back and checking them as a TLS client would.

use std::fs;
use std::sync::OnceLock;
use tempfile::TempDir;
use time::{Duration, OffsetDateTime};
use webhook_certgen::cert::loader::{
    load_certificate_from_pem, load_certificates_from_pem, load_private_key_from_pem,
};
use webhook_certgen::{generate_certificate_bundle, CertificateBundle};
use x509_parser::prelude::{FromDer, GeneralName, X509Certificate};

const ORG: &str = "Acme";
const SERVICE_DNS: &str = "webhook.acme.svc";

static BUNDLE: OnceLock<CertificateBundle> = OnceLock::new();
static SECOND_BUNDLE: OnceLock<CertificateBundle> = OnceLock::new();

fn acme_bundle() -> &'static CertificateBundle {
    BUNDLE.get_or_init(|| {
        generate_certificate_bundle(
            &[ORG.to_string()],
            &[SERVICE_DNS.to_string()],
            SERVICE_DNS,
        )
        .unwrap()
    })
}

// A second bundle from identical inputs, for independence checks.
fn second_bundle() -> &'static CertificateBundle {
    SECOND_BUNDLE.get_or_init(|| {
        generate_certificate_bundle(
            &[ORG.to_string()],
            &[SERVICE_DNS.to_string()],
            SERVICE_DNS,
        )
        .unwrap()
    })
}

fn cert_der(pem_bytes: &[u8]) -> Vec<u8> {
    load_certificate_from_pem(std::str::from_utf8(pem_bytes).unwrap()).unwrap()
}

#[test]
fn test_leaf_verifies_against_ca_as_sole_trust_anchor() {
    let bundle = acme_bundle();
    let ca_der = cert_der(&bundle.ca_cert_pem);
    let leaf_der = cert_der(&bundle.cert_pem);

    let (_, ca) = X509Certificate::from_der(&ca_der).unwrap();
    let (_, leaf) = X509Certificate::from_der(&leaf_der).unwrap();

    assert_eq!(leaf.issuer().to_string(), ca.subject().to_string());
    assert!(leaf.verify_signature(Some(ca.public_key())).is_ok());

    // Not yet expired at verification time
    assert!(leaf.validity().is_valid());
    assert!(ca.validity().is_valid());
}

#[test]
fn test_leaf_does_not_verify_under_unrelated_ca() {
    let bundle = acme_bundle();
    let other = second_bundle();

    let leaf_der = cert_der(&bundle.cert_pem);
    let other_ca_der = cert_der(&other.ca_cert_pem);

    let (_, leaf) = X509Certificate::from_der(&leaf_der).unwrap();
    let (_, other_ca) = X509Certificate::from_der(&other_ca_der).unwrap();

    assert!(leaf.verify_signature(Some(other_ca.public_key())).is_err());
}

#[test]
fn test_tampered_certificate_fails_verification() {
    let bundle = acme_bundle();
    let ca_der = cert_der(&bundle.ca_cert_pem);
    let mut leaf_der = cert_der(&bundle.cert_pem);

    // Flip one bit in the signed portion
    let mid = leaf_der.len() / 2;
    leaf_der[mid] ^= 0x01;

    let (_, ca) = X509Certificate::from_der(&ca_der).unwrap();
    let tampered = match X509Certificate::from_der(&leaf_der) {
        Ok((_, cert)) => cert,
        // Corruption that breaks DER parsing is also a verification failure
        Err(_) => return,
    };
    assert!(tampered.verify_signature(Some(ca.public_key())).is_err());
}

#[test]
fn test_san_and_common_name_round_trip() {
    let bundle = acme_bundle();
    let leaf_der = cert_der(&bundle.cert_pem);
    let (_, leaf) = X509Certificate::from_der(&leaf_der).unwrap();

    let cn: Vec<_> = leaf
        .subject()
        .iter_common_name()
        .map(|attr| attr.as_str().unwrap())
        .collect();
    assert_eq!(cn, vec![SERVICE_DNS]);

    let orgs: Vec<_> = leaf
        .subject()
        .iter_organization()
        .map(|attr| attr.as_str().unwrap())
        .collect();
    assert_eq!(orgs, vec![ORG]);

    let san = leaf.subject_alternative_name().unwrap().unwrap();
    let names: Vec<_> = san
        .value
        .general_names
        .iter()
        .filter_map(|name| match name {
            GeneralName::DNSName(dns) => Some(dns.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec![SERVICE_DNS]);
}

#[test]
fn test_validity_is_one_civil_year() {
    let bundle = acme_bundle();

    for pem in [&bundle.ca_cert_pem, &bundle.cert_pem] {
        let der = cert_der(pem);
        let (_, cert) = X509Certificate::from_der(&der).unwrap();

        let not_before =
            OffsetDateTime::from_unix_timestamp(cert.validity().not_before.timestamp()).unwrap();
        let not_after =
            OffsetDateTime::from_unix_timestamp(cert.validity().not_after.timestamp()).unwrap();

        // Same calendar date one year later; Feb 29 rolls over to Mar 1
        let expected = not_before
            .replace_year(not_before.year() + 1)
            .unwrap_or_else(|_| not_before + Duration::days(366));
        assert_eq!(not_after, expected);

        // NotBefore close to the call's wall-clock time
        let age = OffsetDateTime::now_utc() - not_before;
        assert!(age >= Duration::ZERO);
        assert!(age < Duration::minutes(10));
    }
}

#[test]
fn test_successive_calls_produce_independent_key_material() {
    let first = acme_bundle();
    let second = second_bundle();

    let first_ca_der = cert_der(&first.ca_cert_pem);
    let second_ca_der = cert_der(&second.ca_cert_pem);
    let (_, ca1) = X509Certificate::from_der(&first_ca_der).unwrap();
    let (_, ca2) = X509Certificate::from_der(&second_ca_der).unwrap();

    assert_ne!(ca1.public_key().raw, ca2.public_key().raw);
    assert_ne!(first.key_pem, second.key_pem);
}

#[test]
fn test_key_usage_split_between_ca_and_leaf() {
    let bundle = acme_bundle();

    let ca_der = cert_der(&bundle.ca_cert_pem);
    let (_, ca) = X509Certificate::from_der(&ca_der).unwrap();
    assert!(ca.is_ca());
    let ca_usage = ca.key_usage().unwrap().unwrap();
    assert!(ca_usage.value.key_cert_sign());
    assert!(ca_usage.value.digital_signature());

    let leaf_der = cert_der(&bundle.cert_pem);
    let (_, leaf) = X509Certificate::from_der(&leaf_der).unwrap();
    assert!(!leaf.is_ca());
    let leaf_usage = leaf.key_usage().unwrap().unwrap();
    assert!(!leaf_usage.value.key_cert_sign());
    assert!(leaf_usage.value.digital_signature());
}

#[test]
fn test_file_based_workflow() {
    let bundle = acme_bundle();
    let temp_dir = TempDir::new().unwrap();

    let ca_path = temp_dir.path().join("ca.crt");
    let cert_path = temp_dir.path().join("tls.crt");
    let key_path = temp_dir.path().join("tls.key");

    fs::write(&ca_path, &bundle.ca_cert_pem).unwrap();
    fs::write(&cert_path, &bundle.cert_pem).unwrap();
    fs::write(&key_path, &bundle.key_pem).unwrap();

    // Round-trip through the loaders as a consuming server would
    let ca_pem = fs::read_to_string(&ca_path).unwrap();
    let certs = load_certificates_from_pem(&ca_pem).unwrap();
    assert_eq!(certs.len(), 1);

    let key_pem = fs::read_to_string(&key_path).unwrap();
    let key_der = load_private_key_from_pem(&key_pem).unwrap();
    assert!(!key_der.is_empty());
}
