//! webhook-certgen: TLS bootstrap certificates for admission webhooks.
//!
//! This library generates a minimal, ephemeral two-level PKI — one
//! self-signed CA and one CA-signed leaf certificate — suitable for a TLS
//! server identity, entirely in memory. It is intended for bootstrapping
//! TLS on a Kubernetes admission webhook: the leaf certificate and key go
//! to the serving endpoint, the CA certificate into the webhook
//! configuration's CA bundle.
//!
//! # Architecture
//!
//! Operations are composed from small, testable functions. All fallible
//! operations return `Result` types - no `unwrap()` or panic outside
//! tests. The secure random source is passed explicitly to ease testing
//! with a deterministic source.
//!
//! # Example
//!
//! ```rust,no_run
//! use webhook_certgen::generate_certificate_bundle;
//!
//! # fn example() -> webhook_certgen::error::Result<()> {
//! let orgs = vec!["Acme".to_string()];
//! let dns = vec!["webhook.acme.svc".to_string()];
//!
//! let bundle = generate_certificate_bundle(&orgs, &dns, "webhook.acme.svc")?;
//! // bundle.ca_cert_pem -> webhook configuration caBundle
//! // bundle.cert_pem / bundle.key_pem -> serving TLS key pair
//! # Ok(())
//! # }
//! ```

pub mod cert;
pub mod error;
pub mod keys;

// Re-export commonly used types
pub use cert::bundle::{
    generate_certificate_bundle, generate_certificate_bundle_with_rng, CertificateBundle,
};
pub use error::{CertGenError, Result};
