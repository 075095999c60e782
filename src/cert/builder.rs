//! Certificate template utilities.
//!
//! Shared helpers for building X.509 certificate parameters: subject
//! names, serial numbers, and validity windows.

use rand::{CryptoRng, RngCore};
use rcgen::{DistinguishedName, DnType, SerialNumber};
use time::{Duration, OffsetDateTime};

/// Build the CA subject: Organization entries only.
pub fn ca_subject(organizations: &[String]) -> DistinguishedName {
    let mut dn = DistinguishedName::new();
    for org in organizations {
        dn.push(DnType::OrganizationName, org.as_str());
    }
    dn
}

/// Build the leaf subject: Common Name plus Organization entries.
pub fn leaf_subject(organizations: &[String], common_name: &str) -> DistinguishedName {
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    for org in organizations {
        dn.push(DnType::OrganizationName, org.as_str());
    }
    dn
}

/// Draw a random serial number from the given source.
///
/// Serial values carry no meaning beyond uniqueness; 160 random bits with
/// the sign bit cleared keeps them positive and process-unique.
pub fn random_serial<R>(rng: &mut R) -> SerialNumber
where
    R: CryptoRng + RngCore,
{
    SerialNumber::from_slice(&serial_bytes(rng))
}

/// Draw two distinct random serial numbers from the given source, one for
/// the CA and one for the leaf it signs.
pub fn distinct_serials<R>(rng: &mut R) -> (SerialNumber, SerialNumber)
where
    R: CryptoRng + RngCore,
{
    let first = serial_bytes(rng);
    let mut second = serial_bytes(rng);
    while second == first {
        second = serial_bytes(rng);
    }
    (
        SerialNumber::from_slice(&first),
        SerialNumber::from_slice(&second),
    )
}

fn serial_bytes<R>(rng: &mut R) -> [u8; 20]
where
    R: CryptoRng + RngCore,
{
    let mut bytes = [0u8; 20];
    rng.fill_bytes(&mut bytes);
    bytes[0] &= 0x7F; // Ensure positive
    bytes
}

/// Compute the validity window starting now and ending exactly one civil
/// year later (same calendar date next year).
pub fn one_year_window(now: OffsetDateTime) -> (OffsetDateTime, OffsetDateTime) {
    // February 29 has no counterpart next year; it rolls over to March 1.
    let not_after = now
        .replace_year(now.year() + 1)
        .unwrap_or_else(|_| now + Duration::days(366));
    (now, not_after)
}
