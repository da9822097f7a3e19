use std::fmt;

use const_oid::ObjectIdentifier;
use der::asn1::Any;
use der::{Tag, Tagged};
use serde::Serialize;

use crate::oid;

/// One attribute of a distinguished name, e.g. `CN=example.com`.
///
/// # Fields
/// * `oid` - The attribute type.
/// * `short_name` - Display name of the type (`CN`, `O`, a registered custom
///   name, or the dotted OID).
/// * `value` - The attribute value as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameEntry {
    #[serde(serialize_with = "serialize_oid")]
    pub oid: ObjectIdentifier,
    pub short_name: String,
    pub value: String,
}

fn serialize_oid<S: serde::Serializer>(oid: &ObjectIdentifier, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(oid)
}

/// A distinguished name as an ordered sequence of attributes.
///
/// Multi-valued RDNs are flattened in encoded order. `Display` renders the
/// OpenSSL one-line form, e.g. `/C=US/O=Example Org/CN=example.com`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Name {
    pub entries: Vec<NameEntry>,
}

impl Name {
    /// Builds a `Name` from an `x509_cert` distinguished name.
    pub fn from_x509_name(x509dn: &x509_cert::name::Name) -> Self {
        let entries = x509dn
            .0
            .iter()
            .flat_map(|rdn| rdn.0.iter())
            .map(|attr| NameEntry {
                oid: attr.oid,
                short_name: oid::display_short(&attr.oid),
                value: attribute_value_to_string(&attr.value),
            })
            .collect();
        Self { entries }
    }

    /// Value of the first attribute whose short name matches `short_name`,
    /// ignoring ASCII case.
    pub fn component(&self, short_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.short_name.eq_ignore_ascii_case(short_name))
            .map(|entry| entry.value.as_str())
    }

    /// All entries as `(short name, value)` pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.short_name.clone(), entry.value.clone()))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a NameEntry;
    type IntoIter = std::slice::Iter<'a, NameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "/{}={}", entry.short_name, entry.value)?;
        }
        Ok(())
    }
}

/// Decodes a directory string value; unknown encodings become colon hex.
pub(crate) fn attribute_value_to_string(value: &Any) -> String {
    directory_string(value).unwrap_or_else(|| colon_hex(value.value()))
}

/// Text of a string-typed value, `None` for any other tag.
pub(crate) fn directory_string(value: &Any) -> Option<String> {
    match value.tag() {
        Tag::Utf8String
        | Tag::PrintableString
        | Tag::Ia5String
        | Tag::TeletexString
        | Tag::VisibleString => Some(String::from_utf8_lossy(value.value()).into_owned()),
        Tag::BmpString => {
            let units: Vec<u16> = value
                .value()
                .chunks(2)
                .map(|pair| u16::from_be_bytes([pair[0], *pair.get(1).unwrap_or(&0)]))
                .collect();
            Some(String::from_utf16_lossy(&units))
        }
        _ => None,
    }
}

/// `AB:CD:EF` rendering used by OpenSSL for opaque bytes.
pub(crate) fn colon_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use x509_cert::name::RdnSequence;

    fn name(rfc4514: &str) -> Name {
        Name::from_x509_name(&RdnSequence::from_str(rfc4514).unwrap())
    }

    #[test]
    fn keeps_encoded_order_and_renders_oneline() {
        // RFC 4514 strings list the last RDN first.
        let parsed = name("CN=example.com,OU=Web,OU=Operations,O=Example Org,C=US");
        assert_eq!(
            parsed.to_string(),
            "/C=US/O=Example Org/OU=Operations/OU=Web/CN=example.com"
        );
    }

    #[test]
    fn component_lookup_is_case_insensitive_first_match() {
        let parsed = name("CN=example.com,OU=Web,OU=Operations,C=US");
        assert_eq!(parsed.component("CN"), Some("example.com"));
        assert_eq!(parsed.component("cn"), Some("example.com"));
        assert_eq!(parsed.component("ou"), Some("Operations"));
        assert_eq!(parsed.component("L"), None);
    }

    #[test]
    fn decodes_bmp_and_opaque_values() {
        let bmp = Any::new(Tag::BmpString, vec![0x00, 0x68, 0x00, 0x69]).unwrap();
        assert_eq!(attribute_value_to_string(&bmp), "hi");
        let opaque = Any::new(Tag::OctetString, vec![0xde, 0xad]).unwrap();
        assert_eq!(attribute_value_to_string(&opaque), "DE:AD");
    }

    #[test]
    fn colon_hex_handles_empty() {
        assert_eq!(colon_hex(&[]), "");
        assert_eq!(colon_hex(&[0x0a]), "0A");
    }
}
