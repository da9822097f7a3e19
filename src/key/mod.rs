pub mod dsa;

use const_oid::ObjectIdentifier;
use der::Decode;
use pkcs8::spki::EncodePublicKey;
use pkcs8::{DecodePrivateKey, PrivateKeyInfo};
use rsa::{RsaPrivateKey, RsaPublicKey, traits::PublicKeyParts};
use x509_cert::spki::SubjectPublicKeyInfoOwned;

pub use dsa::{DsaPrivateKey, DsaPublicKey};
use dsa::to_biguint;

use crate::error::CertError;
use crate::pem_utils;

const RSA_ENCRYPTION: ObjectIdentifier = const_oid::db::rfc5912::RSA_ENCRYPTION;
const ID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");
const ID_EC_PUBLIC_KEY: ObjectIdentifier = const_oid::db::rfc5912::ID_EC_PUBLIC_KEY;
const ID_ED_25519: ObjectIdentifier = const_oid::db::rfc8410::ID_ED_25519;
const SECP_256_R_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP_384_R_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP_521_R_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// A certificate's public key, tagged by family when decoded.
///
/// RSA and DSA keys are fully decoded. Every other algorithm keeps its OID and
/// the raw subject public key bits, which is enough to compare keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Dsa(DsaPublicKey),
    Other {
        algorithm: ObjectIdentifier,
        key: Vec<u8>,
    },
}

impl PublicKey {
    /// Decodes a subject public key info structure.
    pub fn from_x509spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self, CertError> {
        match spki.algorithm.oid {
            RSA_ENCRYPTION => Ok(PublicKey::Rsa(rsa_public_from_pkcs1(
                spki.subject_public_key.raw_bytes(),
            )?)),
            ID_DSA => Ok(PublicKey::Dsa(DsaPublicKey::from_x509spki(spki)?)),
            algorithm => Ok(PublicKey::Other {
                algorithm,
                key: spki.subject_public_key.raw_bytes().to_vec(),
            }),
        }
    }

    /// Decodes a DER-encoded `SubjectPublicKeyInfo`.
    pub fn from_public_key_der(der: &[u8]) -> Result<Self, CertError> {
        let spki = SubjectPublicKeyInfoOwned::from_der(der)?;
        Self::from_x509spki(&spki)
    }

    /// `"RSA"` or `"DSA"`; `None` for any other family.
    pub fn algorithm_name(&self) -> Option<&'static str> {
        match self {
            PublicKey::Rsa(_) => Some("RSA"),
            PublicKey::Dsa(_) => Some("DSA"),
            PublicKey::Other { .. } => None,
        }
    }

    /// Bit length of the RSA modulus, or of the DSA prime `p`.
    pub fn bit_strength(&self) -> Option<usize> {
        match self {
            PublicKey::Rsa(key) => Some(key.n().bits()),
            PublicKey::Dsa(key) => Some(key.p().bits()),
            PublicKey::Other { .. } => None,
        }
    }
}

/// Decodes a PKCS#1 `RSAPublicKey`.
///
/// Moduli above 4096 bits and exponents above 2^33 are accepted.
fn rsa_public_from_pkcs1(der: &[u8]) -> Result<RsaPublicKey, CertError> {
    let key = rsa::pkcs1::RsaPublicKey::try_from(der)?;
    Ok(RsaPublicKey::new_unchecked(
        to_biguint(&key.modulus),
        to_biguint(&key.public_exponent),
    ))
}

/// Decodes a two-prime PKCS#1 `RSAPrivateKey`.
fn rsa_private_from_pkcs1(der: &[u8]) -> Result<RsaPrivateKey, CertError> {
    let key = rsa::pkcs1::RsaPrivateKey::try_from(der)?;
    if key.version() != rsa::pkcs1::Version::TwoPrime {
        return Err(CertError::UnsupportedKey(
            "multi-prime RSA private key".to_string(),
        ));
    }
    Ok(RsaPrivateKey::from_components(
        to_biguint(&key.modulus),
        to_biguint(&key.public_exponent),
        to_biguint(&key.private_exponent),
        vec![to_biguint(&key.prime1), to_biguint(&key.prime2)],
    )?)
}

/// A private key supplied alongside a certificate.
#[derive(Clone, Debug)]
pub enum PrivateKey {
    Rsa(Box<RsaPrivateKey>),
    Dsa(Box<DsaPrivateKey>),
    EcP256(p256::SecretKey),
    EcP384(p384::SecretKey),
    EcP521(p521::SecretKey),
    Ed25519(ed25519_dalek::SigningKey),
}

impl PrivateKey {
    /// Decodes a private key in PEM or DER form.
    ///
    /// PEM input is dispatched on its label. DER input is tried as PKCS#8,
    /// PKCS#1 (RSA), SEC1 (EC) and OpenSSL DSA, in that order.
    pub fn from_pem_or_der(input: &[u8]) -> Result<Self, CertError> {
        if pem_utils::is_pem(input) {
            let pem = pem_utils::parse(input)?;
            return match pem.tag() {
                "PRIVATE KEY" => Self::from_pkcs8_der(pem.contents()),
                "RSA PRIVATE KEY" => Ok(PrivateKey::Rsa(Box::new(rsa_private_from_pkcs1(
                    pem.contents(),
                )?))),
                "EC PRIVATE KEY" => Self::from_sec1_der(pem.contents()),
                "DSA PRIVATE KEY" => Ok(PrivateKey::Dsa(Box::new(
                    DsaPrivateKey::from_openssl_der(pem.contents())?,
                ))),
                "ENCRYPTED PRIVATE KEY" => Err(CertError::UnsupportedKey(
                    "encrypted private keys are not supported".to_string(),
                )),
                label => Err(CertError::DecodingError(format!(
                    "unexpected PEM label '{label}' for a private key"
                ))),
            };
        }

        if PrivateKeyInfo::try_from(input).is_ok() {
            return Self::from_pkcs8_der(input);
        }
        if let Ok(key) = rsa_private_from_pkcs1(input) {
            return Ok(PrivateKey::Rsa(Box::new(key)));
        }
        if let Ok(key) = Self::from_sec1_der(input) {
            return Ok(key);
        }
        if let Ok(key) = DsaPrivateKey::from_openssl_der(input) {
            return Ok(PrivateKey::Dsa(Box::new(key)));
        }
        Err(CertError::DecodingError(
            "unrecognized private key encoding".to_string(),
        ))
    }

    /// Decodes a DER-encoded PKCS#8 `PrivateKeyInfo`.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self, CertError> {
        let info = PrivateKeyInfo::try_from(der)?;
        match info.algorithm.oid {
            RSA_ENCRYPTION => Ok(PrivateKey::Rsa(Box::new(rsa_private_from_pkcs1(
                info.private_key,
            )?))),
            ID_DSA => Ok(PrivateKey::Dsa(Box::new(DsaPrivateKey::from_pkcs8(&info)?))),
            ID_EC_PUBLIC_KEY => match info.algorithm.parameters_oid()? {
                SECP_256_R_1 => Ok(PrivateKey::EcP256(p256::SecretKey::from_pkcs8_der(der)?)),
                SECP_384_R_1 => Ok(PrivateKey::EcP384(p384::SecretKey::from_pkcs8_der(der)?)),
                SECP_521_R_1 => Ok(PrivateKey::EcP521(p521::SecretKey::from_pkcs8_der(der)?)),
                curve => Err(CertError::UnsupportedKey(format!(
                    "EC curve {}",
                    crate::oid::display_short(&curve)
                ))),
            },
            ID_ED_25519 => Ok(PrivateKey::Ed25519(
                ed25519_dalek::SigningKey::from_pkcs8_der(der)?,
            )),
            algorithm => Err(CertError::UnsupportedKey(format!(
                "private key algorithm {}",
                crate::oid::display_short(&algorithm)
            ))),
        }
    }

    /// Decodes a SEC1 `ECPrivateKey`, trying each supported curve.
    pub fn from_sec1_der(der: &[u8]) -> Result<Self, CertError> {
        if let Ok(key) = p256::SecretKey::from_sec1_der(der) {
            return Ok(PrivateKey::EcP256(key));
        }
        if let Ok(key) = p384::SecretKey::from_sec1_der(der) {
            return Ok(PrivateKey::EcP384(key));
        }
        p521::SecretKey::from_sec1_der(der)
            .map(PrivateKey::EcP521)
            .map_err(|e| CertError::DecodingError(format!("SEC1 private key: {e}")))
    }

    /// Derives the public key that a matching certificate must carry.
    pub fn public_key(&self) -> Result<PublicKey, CertError> {
        match self {
            PrivateKey::Rsa(key) => Ok(PublicKey::Rsa(key.to_public_key())),
            PrivateKey::Dsa(key) => Ok(PublicKey::Dsa(key.public_key().clone())),
            PrivateKey::EcP256(key) => {
                PublicKey::from_public_key_der(key.public_key().to_public_key_der()?.as_bytes())
            }
            PrivateKey::EcP384(key) => {
                PublicKey::from_public_key_der(key.public_key().to_public_key_der()?.as_bytes())
            }
            PrivateKey::EcP521(key) => {
                PublicKey::from_public_key_der(key.public_key().to_public_key_der()?.as_bytes())
            }
            PrivateKey::Ed25519(key) => Ok(PublicKey::Other {
                algorithm: ID_ED_25519,
                key: key.verifying_key().to_bytes().to_vec(),
            }),
        }
    }
}
