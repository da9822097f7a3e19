//! DSA key material (FIPS 186), decoded directly from its ASN.1 structures.

use std::fmt;

use der::asn1::UintRef;
use der::{Decode, Sequence};
use pkcs8::PrivateKeyInfo;
use rsa::BigUint;
use x509_cert::spki::SubjectPublicKeyInfoOwned;

use crate::error::CertError;

/// `Dss-Parms ::= SEQUENCE { p INTEGER, q INTEGER, g INTEGER }`
#[derive(Sequence)]
struct DssParms<'a> {
    p: UintRef<'a>,
    q: UintRef<'a>,
    g: UintRef<'a>,
}

/// The OpenSSL "traditional" `DSA PRIVATE KEY` layout.
#[derive(Sequence)]
struct OpenSslDsaPrivateKey<'a> {
    version: u8,
    p: UintRef<'a>,
    q: UintRef<'a>,
    g: UintRef<'a>,
    y: UintRef<'a>,
    x: UintRef<'a>,
}

pub(super) fn to_biguint(value: &UintRef<'_>) -> BigUint {
    BigUint::from_bytes_be(value.as_bytes())
}

/// A DSA public key: domain parameters plus the public value `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaPublicKey {
    p: BigUint,
    q: BigUint,
    g: BigUint,
    y: BigUint,
}

impl DsaPublicKey {
    /// Decodes a DSA key from a certificate's subject public key info.
    pub fn from_x509spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self, CertError> {
        let params = spki.algorithm.parameters.as_ref().ok_or_else(|| {
            CertError::DecodingError("DSA public key without domain parameters".to_string())
        })?;
        let params: DssParms<'_> = params.decode_as()?;
        let y = UintRef::from_der(spki.subject_public_key.raw_bytes())?;

        Ok(Self {
            p: to_biguint(&params.p),
            q: to_biguint(&params.q),
            g: to_biguint(&params.g),
            y: to_biguint(&y),
        })
    }

    /// The prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The subgroup order `q`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// The generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// The public value `y = g^x mod p`.
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// A DSA private key. The public half is derived as `g^x mod p` on decode.
#[derive(Clone)]
pub struct DsaPrivateKey {
    public: DsaPublicKey,
    x: BigUint,
}

impl DsaPrivateKey {
    fn new(p: BigUint, q: BigUint, g: BigUint, x: BigUint) -> Result<Self, CertError> {
        if p.bits() == 0 || x.bits() == 0 {
            return Err(CertError::DecodingError(
                "DSA key with zero modulus or private value".to_string(),
            ));
        }
        let y = g.modpow(&x, &p);
        Ok(Self {
            public: DsaPublicKey { p, q, g, y },
            x,
        })
    }

    /// Decodes a PKCS#8 `PrivateKeyInfo` whose algorithm is `id-dsa`.
    pub fn from_pkcs8(info: &PrivateKeyInfo<'_>) -> Result<Self, CertError> {
        let params = info.algorithm.parameters.ok_or_else(|| {
            CertError::DecodingError("DSA private key without domain parameters".to_string())
        })?;
        let params: DssParms<'_> = params.decode_as()?;
        let x = UintRef::from_der(info.private_key)?;

        Self::new(
            to_biguint(&params.p),
            to_biguint(&params.q),
            to_biguint(&params.g),
            to_biguint(&x),
        )
    }

    /// Decodes the OpenSSL `DSA PRIVATE KEY` DER layout.
    pub fn from_openssl_der(der: &[u8]) -> Result<Self, CertError> {
        let key = OpenSslDsaPrivateKey::from_der(der)?;
        if key.version != 0 {
            return Err(CertError::DecodingError(format!(
                "unsupported DSA private key version {}",
                key.version
            )));
        }
        let parsed = Self::new(
            to_biguint(&key.p),
            to_biguint(&key.q),
            to_biguint(&key.g),
            to_biguint(&key.x),
        )?;
        if parsed.public.y != to_biguint(&key.y) {
            return Err(CertError::DecodingError(
                "DSA private key carries an inconsistent public value".to_string(),
            ));
        }
        Ok(parsed)
    }

    /// The matching public key.
    pub fn public_key(&self) -> &DsaPublicKey {
        &self.public
    }

    /// The private value `x`.
    pub fn x(&self) -> &BigUint {
        &self.x
    }
}

impl fmt::Debug for DsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsaPrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
