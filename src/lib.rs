//! # certinfo - X.509 Certificate Inspection in Pure Rust
//!
//! certinfo parses an encoded X.509 certificate (and optionally its private key)
//! into a queryable model built on the RustCrypto `x509-cert` stack: validity
//! window, subject and issuer names, key family and strength, signature
//! algorithm, and a text rendering of every extension. A process-wide OID
//! registry lets applications give readable names to private OIDs so they
//! render as names instead of dotted numbers.
//!
//! ## Supported Formats
//!
//! - **Certificates**: PEM (`CERTIFICATE`, `X509 CERTIFICATE`, `TRUSTED CERTIFICATE`) or DER, auto-detected
//! - **Private keys**: PKCS#8, PKCS#1 (RSA), SEC1 (P-256/P-384/P-521) and OpenSSL DSA, in PEM or DER
//!
//! ## Quick Start
//!
//! ### Inspecting a Certificate
//!
//! ```rust,no_run
//! use certinfo::cert::Certificate;
//!
//! # fn main() -> Result<(), certinfo::error::CertError> {
//! let pem = std::fs::read("server.pem").unwrap();
//! let cert = Certificate::new(&pem)?;
//!
//! println!("Subject: {}", cert.subject());
//! println!("CN: {:?}", cert.subject_component("cn"));
//! println!("Valid: {} .. {}", cert.not_before(), cert.not_after());
//! println!("Key: {:?} ({:?} bits)", cert.key_algorithm(), cert.bit_strength());
//! println!("Signed with: {}", cert.signature_algorithm());
//!
//! for (id, entries) in cert.extensions() {
//!     for entry in entries {
//!         println!("{id} (critical: {}): {}", entry.critical, entry.value);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Pairing a Certificate with its Key
//!
//! ```rust,no_run
//! use certinfo::{cert::Certificate, error::CertError};
//!
//! let cert = std::fs::read("server.pem").unwrap();
//! let key = std::fs::read("server.key").unwrap();
//!
//! match Certificate::with_private_key(&cert, &key) {
//!     Ok(cert) => println!("Loaded {}", cert.subject()),
//!     Err(CertError::KeyMismatch) => println!("That key belongs to another certificate"),
//!     Err(e) => println!("Could not parse input: {}", e),
//! }
//! ```
//!
//! ### Naming Custom OIDs
//!
//! ```rust,no_run
//! use certinfo::oid;
//!
//! # fn main() -> Result<(), certinfo::error::CertError> {
//! // Register before parsing certificates that carry these OIDs.
//! oid::register("1.3.6.1.4.1.55555.7", "employeeTier", Some("Employee Tier"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cert`]: The certificate model, names and extension rendering
//! - [`key`]: Public and private key decoding and matching
//! - [`oid`]: The process-wide OID name registry
//! - [`io`]: Output targets for PEM/DER writes
//! - [`error`]: Error types

pub mod cert;
pub mod error;
pub mod io;
pub mod key;
pub mod oid;
pub mod pem_utils;

pub use cert::Certificate;
pub use error::CertError;

pub type Result<T> = std::result::Result<T, CertError>;
