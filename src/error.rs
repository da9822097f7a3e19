//! use certinfo::error::CertError;

use thiserror::Error;

/// Represents errors that can occur in the certinfo library.
///
/// Decoding failures are kept apart from [`CertError::KeyMismatch`] so callers
/// can tell "wrong key" from "unparsable input".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CertError {
    /// Wrong number of construction inputs.
    #[error("Argument error: {0}")]
    ArgumentError(String),

    /// Error during data encoding.
    #[error("Failed to encode data: {0}")]
    EncodingError(String),

    /// Error during data decoding.
    #[error("Failed to decode data: {0}")]
    DecodingError(String),

    /// The private key does not belong to the certificate.
    #[error("Key does not match certificate")]
    KeyMismatch,

    /// The private key uses an algorithm that cannot be decoded.
    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    /// Malformed object identifier or name.
    #[error("Invalid OID: {0}")]
    InvalidOid(String),

    /// The OID or one of its names is already registered with another meaning.
    #[error("OID conflict: {0}")]
    OidConflict(String),

    /// Error while writing output.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Error from RSA operations.
    #[error("RSA error: {0}")]
    RsaError(String),
}

impl From<der::Error> for CertError {
    /// Converts a `der::Error` into a `CertError`.
    fn from(err: der::Error) -> Self {
        CertError::DecodingError(err.to_string())
    }
}

impl From<pem::PemError> for CertError {
    fn from(err: pem::PemError) -> Self {
        CertError::DecodingError(err.to_string())
    }
}

impl From<pkcs8::Error> for CertError {
    fn from(err: pkcs8::Error) -> Self {
        CertError::DecodingError(err.to_string())
    }
}

impl From<pkcs8::spki::Error> for CertError {
    fn from(err: pkcs8::spki::Error) -> Self {
        CertError::DecodingError(err.to_string())
    }
}

impl From<rsa::Error> for CertError {
    fn from(err: rsa::Error) -> Self {
        CertError::RsaError(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for CertError {
    fn from(err: rsa::pkcs1::Error) -> Self {
        CertError::DecodingError(err.to_string())
    }
}

impl From<std::io::Error> for CertError {
    fn from(err: std::io::Error) -> Self {
        CertError::IoError(err.to_string())
    }
}
