//! Standard object identifiers and the short/long names OpenSSL prints for them.

use const_oid::ObjectIdentifier;

/// A standard OID with its display names.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinOid {
    pub oid: ObjectIdentifier,
    pub short_name: &'static str,
    pub long_name: &'static str,
}

const fn entry(oid: &str, short_name: &'static str, long_name: &'static str) -> BuiltinOid {
    BuiltinOid {
        oid: ObjectIdentifier::new_unwrap(oid),
        short_name,
        long_name,
    }
}

pub(crate) static BUILTIN_OIDS: &[BuiltinOid] = &[
    // X.520 / PKCS#9 name attributes
    entry("2.5.4.3", "CN", "commonName"),
    entry("2.5.4.4", "SN", "surname"),
    entry("2.5.4.5", "serialNumber", "serialNumber"),
    entry("2.5.4.6", "C", "countryName"),
    entry("2.5.4.7", "L", "localityName"),
    entry("2.5.4.8", "ST", "stateOrProvinceName"),
    entry("2.5.4.9", "street", "streetAddress"),
    entry("2.5.4.10", "O", "organizationName"),
    entry("2.5.4.11", "OU", "organizationalUnitName"),
    entry("2.5.4.12", "title", "title"),
    entry("2.5.4.15", "businessCategory", "businessCategory"),
    entry("2.5.4.17", "postalCode", "postalCode"),
    entry("2.5.4.41", "name", "name"),
    entry("2.5.4.42", "GN", "givenName"),
    entry("2.5.4.43", "initials", "initials"),
    entry("2.5.4.46", "dnQualifier", "dnQualifier"),
    entry("2.5.4.65", "pseudonym", "pseudonym"),
    entry("1.2.840.113549.1.9.1", "emailAddress", "emailAddress"),
    entry("0.9.2342.19200300.100.1.1", "UID", "userId"),
    entry("0.9.2342.19200300.100.1.25", "DC", "domainComponent"),
    entry(
        "1.3.6.1.4.1.311.60.2.1.1",
        "jurisdictionL",
        "jurisdictionLocalityName",
    ),
    entry(
        "1.3.6.1.4.1.311.60.2.1.2",
        "jurisdictionST",
        "jurisdictionStateOrProvinceName",
    ),
    entry(
        "1.3.6.1.4.1.311.60.2.1.3",
        "jurisdictionC",
        "jurisdictionCountryName",
    ),
    // X.509v3 extensions
    entry(
        "2.5.29.14",
        "subjectKeyIdentifier",
        "X509v3 Subject Key Identifier",
    ),
    entry("2.5.29.15", "keyUsage", "X509v3 Key Usage"),
    entry(
        "2.5.29.17",
        "subjectAltName",
        "X509v3 Subject Alternative Name",
    ),
    entry(
        "2.5.29.18",
        "issuerAltName",
        "X509v3 Issuer Alternative Name",
    ),
    entry("2.5.29.19", "basicConstraints", "X509v3 Basic Constraints"),
    entry("2.5.29.30", "nameConstraints", "X509v3 Name Constraints"),
    entry(
        "2.5.29.31",
        "crlDistributionPoints",
        "X509v3 CRL Distribution Points",
    ),
    entry(
        "2.5.29.32",
        "certificatePolicies",
        "X509v3 Certificate Policies",
    ),
    entry("2.5.29.33", "policyMappings", "X509v3 Policy Mappings"),
    entry(
        "2.5.29.35",
        "authorityKeyIdentifier",
        "X509v3 Authority Key Identifier",
    ),
    entry("2.5.29.36", "policyConstraints", "X509v3 Policy Constraints"),
    entry("2.5.29.37", "extendedKeyUsage", "X509v3 Extended Key Usage"),
    entry("2.5.29.46", "freshestCRL", "X509v3 Freshest CRL"),
    entry("2.5.29.54", "inhibitAnyPolicy", "X509v3 Inhibit Any Policy"),
    entry(
        "1.3.6.1.5.5.7.1.1",
        "authorityInfoAccess",
        "Authority Information Access",
    ),
    entry(
        "1.3.6.1.5.5.7.1.11",
        "subjectInfoAccess",
        "Subject Information Access",
    ),
    entry("1.3.6.1.5.5.7.1.24", "tlsfeature", "TLS Feature"),
    entry(
        "1.3.6.1.4.1.11129.2.4.2",
        "ct_precert_scts",
        "CT Precertificate SCTs",
    ),
    entry(
        "1.3.6.1.4.1.11129.2.4.3",
        "ct_precert_poison",
        "CT Precertificate Poison",
    ),
    entry("2.16.840.1.113730.1.1", "nsCertType", "Netscape Cert Type"),
    entry("2.16.840.1.113730.1.13", "nsComment", "Netscape Comment"),
    // Extended key usages
    entry(
        "1.3.6.1.5.5.7.3.1",
        "serverAuth",
        "TLS Web Server Authentication",
    ),
    entry(
        "1.3.6.1.5.5.7.3.2",
        "clientAuth",
        "TLS Web Client Authentication",
    ),
    entry("1.3.6.1.5.5.7.3.3", "codeSigning", "Code Signing"),
    entry("1.3.6.1.5.5.7.3.4", "emailProtection", "E-mail Protection"),
    entry("1.3.6.1.5.5.7.3.8", "timeStamping", "Time Stamping"),
    entry("1.3.6.1.5.5.7.3.9", "OCSPSigning", "OCSP Signing"),
    entry("2.5.29.37.0", "anyExtendedKeyUsage", "Any Extended Key Usage"),
    // Access methods and policies
    entry("1.3.6.1.5.5.7.48.1", "OCSP", "OCSP"),
    entry("1.3.6.1.5.5.7.48.2", "caIssuers", "CA Issuers"),
    entry("2.5.29.32.0", "anyPolicy", "X509v3 Any Policy"),
    entry("1.3.6.1.5.5.7.2.1", "id-qt-cps", "Policy Qualifier CPS"),
    entry(
        "1.3.6.1.5.5.7.2.2",
        "id-qt-unotice",
        "Policy Qualifier User Notice",
    ),
    // Public key algorithms
    entry("1.2.840.113549.1.1.1", "rsaEncryption", "rsaEncryption"),
    entry("1.2.840.10040.4.1", "DSA", "dsaEncryption"),
    entry("1.2.840.10045.2.1", "id-ecPublicKey", "id-ecPublicKey"),
    entry("1.3.101.112", "ED25519", "ED25519"),
    entry("1.3.101.113", "ED448", "ED448"),
    entry("1.2.840.10045.3.1.7", "prime256v1", "prime256v1"),
    entry("1.3.132.0.34", "secp384r1", "secp384r1"),
    entry("1.3.132.0.35", "secp521r1", "secp521r1"),
    // Signature algorithms
    entry("1.2.840.113549.1.1.2", "RSA-MD2", "md2WithRSAEncryption"),
    entry("1.2.840.113549.1.1.4", "RSA-MD5", "md5WithRSAEncryption"),
    entry("1.2.840.113549.1.1.5", "RSA-SHA1", "sha1WithRSAEncryption"),
    entry("1.2.840.113549.1.1.10", "RSASSA-PSS", "rsassaPss"),
    entry("1.2.840.113549.1.1.11", "RSA-SHA256", "sha256WithRSAEncryption"),
    entry("1.2.840.113549.1.1.12", "RSA-SHA384", "sha384WithRSAEncryption"),
    entry("1.2.840.113549.1.1.13", "RSA-SHA512", "sha512WithRSAEncryption"),
    entry("1.2.840.113549.1.1.14", "RSA-SHA224", "sha224WithRSAEncryption"),
    entry("1.2.840.10040.4.3", "DSA-SHA1", "dsaWithSHA1"),
    entry("2.16.840.1.101.3.4.3.1", "dsa_with_SHA224", "dsa_with_SHA224"),
    entry("2.16.840.1.101.3.4.3.2", "dsa_with_SHA256", "dsa_with_SHA256"),
    entry("1.2.840.10045.4.1", "ecdsa-with-SHA1", "ecdsa-with-SHA1"),
    entry("1.2.840.10045.4.3.1", "ecdsa-with-SHA224", "ecdsa-with-SHA224"),
    entry("1.2.840.10045.4.3.2", "ecdsa-with-SHA256", "ecdsa-with-SHA256"),
    entry("1.2.840.10045.4.3.3", "ecdsa-with-SHA384", "ecdsa-with-SHA384"),
    entry("1.2.840.10045.4.3.4", "ecdsa-with-SHA512", "ecdsa-with-SHA512"),
];

pub(crate) fn by_oid(oid: &ObjectIdentifier) -> Option<&'static BuiltinOid> {
    BUILTIN_OIDS.iter().find(|entry| entry.oid == *oid)
}

pub(crate) fn by_name(name: &str) -> Option<&'static BuiltinOid> {
    BUILTIN_OIDS
        .iter()
        .find(|entry| entry.short_name == name || entry.long_name == name)
}
