pub mod extensions;
pub mod name;

use std::fmt;

use crate::error::CertError;
pub type Result<T> = std::result::Result<T, CertError>;
use der::pem::LineEnding;
use der::{Decode, Encode, EncodePem};
use extensions::Extensions;
use name::Name;
use time::OffsetDateTime;
use tracing::debug;
use x509_cert::certificate::CertificateInner;

use crate::io::{WriteTarget, write_data};
use crate::key::{PrivateKey, PublicKey};
use crate::{oid, pem_utils};

/// Represents a parsed X.509 certificate, optionally paired with its private key.
///
/// A `Certificate` is immutable once constructed. Construction decodes the
/// certificate, decodes and checks the private key if one is given, and
/// extracts the subject alternative names.
///
/// # Example
/// ```rust,no_run
/// use certinfo::cert::Certificate;
///
/// # fn main() -> Result<(), certinfo::error::CertError> {
/// let pem = std::fs::read("server.pem").unwrap();
/// let cert = Certificate::new(&pem)?;
/// println!("{} valid until {}", cert.subject(), cert.not_after());
/// if let Some(names) = cert.subject_alternative_names() {
///     println!("SANs: {}", names.join(", "));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Certificate {
    /// The inner representation of the certificate.
    inner: CertificateInner,
    public_key: PublicKey,
    private_key: Option<PrivateKey>,
    subject_alternative_names: Option<Vec<String>>,
}

impl Certificate {
    /// Constructs a certificate from one or two encoded inputs.
    ///
    /// # Arguments
    /// * `inputs` - `[certificate]` or `[certificate, private_key]`, each in
    ///   PEM or DER form.
    ///
    /// # Errors
    /// * [`CertError::ArgumentError`] for zero inputs or more than two.
    /// * [`CertError::DecodingError`] for malformed certificate or key bytes.
    /// * [`CertError::KeyMismatch`] if the key does not belong to the certificate.
    pub fn from_inputs(inputs: &[&[u8]]) -> Result<Self> {
        match inputs {
            [] => Err(CertError::ArgumentError(
                "too few arguments, expected a certificate and an optional private key"
                    .to_string(),
            )),
            [cert] => Self::new(cert),
            [cert, key] => Self::with_private_key(cert, key),
            _ => Err(CertError::ArgumentError(format!(
                "too many arguments, expected at most 2 (certificate, private key), got {}",
                inputs.len()
            ))),
        }
    }

    /// Parses a PEM or DER certificate.
    pub fn new(cert: impl AsRef<[u8]>) -> Result<Self> {
        let input = cert.as_ref();
        let inner = if pem_utils::is_pem(input) {
            CertificateInner::from_der(&pem_utils::certificate_pem_to_der(input)?)?
        } else {
            CertificateInner::from_der(input)?
        };
        Self::from_inner(inner)
    }

    /// Parses a PEM or DER certificate together with its PEM or DER private key.
    ///
    /// Fails with [`CertError::KeyMismatch`] when the key's public half differs
    /// from the certificate's public key.
    pub fn with_private_key(cert: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<Self> {
        let mut certificate = Self::new(cert)?;
        let private_key = PrivateKey::from_pem_or_der(key.as_ref())?;
        if private_key.public_key()? != certificate.public_key {
            return Err(CertError::KeyMismatch);
        }
        debug!(subject = %certificate.subject(), "private key matches certificate");
        certificate.private_key = Some(private_key);
        Ok(certificate)
    }

    /// Wraps an already decoded `x509_cert` certificate.
    pub fn from_inner(inner: CertificateInner) -> Result<Self> {
        let public_key =
            PublicKey::from_x509spki(&inner.tbs_certificate.subject_public_key_info)?;
        let subject_alternative_names = inner
            .tbs_certificate
            .extensions
            .as_deref()
            .and_then(extensions::subject_alt_names);

        let certificate = Self {
            inner,
            public_key,
            private_key: None,
            subject_alternative_names,
        };
        debug!(
            subject = %certificate.subject(),
            key_algorithm = certificate.key_algorithm().unwrap_or("other"),
            san_count = certificate
                .subject_alternative_names
                .as_ref()
                .map_or(0, Vec::len),
            "parsed certificate"
        );
        Ok(certificate)
    }

    /// Encodes the certificate into DER format.
    ///
    /// # Returns
    /// A byte vector containing the DER-encoded certificate.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| CertError::EncodingError(e.to_string()))
    }

    /// Encodes the certificate into PEM format, without the trailing newline.
    ///
    /// # Returns
    /// A string containing the PEM-encoded certificate.
    pub fn to_pem(&self) -> Result<String> {
        let mut pem = self.pem_with_newline()?;
        while pem.ends_with('\n') {
            pem.pop();
        }
        Ok(pem)
    }

    fn pem_with_newline(&self) -> Result<String> {
        self.inner
            .to_pem(LineEnding::LF)
            .map_err(|e| CertError::EncodingError(e.to_string()))
    }

    /// Start of the validity period.
    pub fn not_before(&self) -> OffsetDateTime {
        to_offset_date_time(self.inner.tbs_certificate.validity.not_before)
    }

    /// End of the validity period.
    pub fn not_after(&self) -> OffsetDateTime {
        to_offset_date_time(self.inner.tbs_certificate.validity.not_after)
    }

    /// The public key embedded in the certificate.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The private key supplied at construction, if any.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }

    pub fn issuer(&self) -> Name {
        Name::from_x509_name(&self.inner.tbs_certificate.issuer)
    }

    pub fn subject(&self) -> Name {
        Name::from_x509_name(&self.inner.tbs_certificate.subject)
    }

    /// Value of the first subject attribute named `short_name` (case-insensitive).
    ///
    /// With repeated attributes (two `OU`s, say) only the first in encoded
    /// order is returned.
    pub fn subject_component(&self, short_name: &str) -> Option<String> {
        self.subject().component(short_name).map(str::to_string)
    }

    /// Bit length of the RSA modulus (or DSA prime); `None` for other keys.
    pub fn bit_strength(&self) -> Option<usize> {
        self.public_key.bit_strength()
    }

    /// Signature algorithm name, e.g. `sha256WithRSAEncryption`.
    pub fn signature_algorithm(&self) -> String {
        oid::display_long(&self.inner.signature_algorithm.oid)
    }

    /// `"RSA"` or `"DSA"`; `None` for any other key type.
    pub fn key_algorithm(&self) -> Option<&'static str> {
        self.public_key.algorithm_name()
    }

    /// Subject alternative names extracted at construction.
    ///
    /// `None` when the certificate has no subjectAltName extension.
    pub fn subject_alternative_names(&self) -> Option<&[String]> {
        self.subject_alternative_names.as_deref()
    }

    /// Extensions grouped by identifier, computed fresh on every call.
    pub fn extensions(&self) -> Extensions {
        extensions::group(
            self.inner
                .tbs_certificate
                .extensions
                .as_deref()
                .unwrap_or_default(),
        )
    }

    /// Writes the PEM encoding (with its final newline) to a path or writer.
    pub fn write_pem<'a>(&self, target: impl Into<WriteTarget<'a>>) -> Result<()> {
        write_data(target.into(), self.pem_with_newline()?.as_bytes())
    }

    /// Writes the DER encoding to a path or writer.
    pub fn write_der<'a>(&self, target: impl Into<WriteTarget<'a>>) -> Result<()> {
        write_data(target.into(), &self.to_der()?)
    }

    /// The underlying `x509_cert` certificate.
    pub fn inner(&self) -> &CertificateInner {
        &self.inner
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pem = self.to_pem().map_err(|_| fmt::Error)?;
        f.write_str(&pem)
    }
}

fn to_offset_date_time(time: x509_cert::time::Time) -> OffsetDateTime {
    match time {
        x509_cert::time::Time::UtcTime(ut) => OffsetDateTime::from(ut.to_system_time()),
        x509_cert::time::Time::GeneralTime(gt) => OffsetDateTime::from(gt.to_system_time()),
    }
}
