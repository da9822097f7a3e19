use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use const_oid::AssociatedOid;
use der::{Decode, DecodeOwned, oid::ObjectIdentifier};
use serde::Serialize;
use tracing::warn;
use x509_cert::ext::Extension;
use x509_cert::ext::pkix::name::{DistributionPointName, GeneralName};
use x509_cert::ext::pkix::{
    AuthorityInfoAccessSyntax, AuthorityKeyIdentifier, BasicConstraints, CertificatePolicies,
    CrlDistributionPoints, ExtendedKeyUsage, IssuerAltName, KeyUsage, KeyUsages,
    SubjectAltName, SubjectKeyIdentifier,
};

use super::name::{Name, attribute_value_to_string, colon_hex, directory_string};
use crate::error::CertError;
use crate::oid;

/// One occurrence of an extension, rendered as text.
///
/// # Fields
/// * `value` - The extension value in OpenSSL's text form.
/// * `critical` - The criticality flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtensionEntry {
    pub value: String,
    pub critical: bool,
}

/// Extensions grouped by identifier; repeated identifiers keep encounter order.
pub type Extensions = BTreeMap<String, Vec<ExtensionEntry>>;

/// Trait for extensions with a dedicated text rendering.
///
/// Implementors decode themselves from the DER extension value and print the
/// way `openssl x509 -text` does.
pub trait RenderX509Extension: AssociatedOid + DecodeOwned {
    /// Renders the decoded extension value.
    fn render(&self) -> String;

    /// Decodes `der` and renders it.
    fn render_der(der: &[u8]) -> Result<String, CertError>
    where
        Self: Sized,
    {
        Ok(Self::from_der(der)?.render())
    }
}

impl RenderX509Extension for SubjectAltName {
    fn render(&self) -> String {
        render_general_names(&self.0)
    }
}

impl RenderX509Extension for IssuerAltName {
    fn render(&self) -> String {
        render_general_names(&self.0)
    }
}

impl RenderX509Extension for BasicConstraints {
    fn render(&self) -> String {
        let mut text = if self.ca { "CA:TRUE" } else { "CA:FALSE" }.to_string();
        if let Some(path_len) = self.path_len_constraint {
            text.push_str(&format!(", pathlen:{path_len}"));
        }
        text
    }
}

const KEY_USAGE_NAMES: &[(KeyUsages, &str)] = &[
    (KeyUsages::DigitalSignature, "Digital Signature"),
    (KeyUsages::NonRepudiation, "Non Repudiation"),
    (KeyUsages::KeyEncipherment, "Key Encipherment"),
    (KeyUsages::DataEncipherment, "Data Encipherment"),
    (KeyUsages::KeyAgreement, "Key Agreement"),
    (KeyUsages::KeyCertSign, "Certificate Sign"),
    (KeyUsages::CRLSign, "CRL Sign"),
    (KeyUsages::EncipherOnly, "Encipher Only"),
    (KeyUsages::DecipherOnly, "Decipher Only"),
];

impl RenderX509Extension for KeyUsage {
    fn render(&self) -> String {
        KEY_USAGE_NAMES
            .iter()
            .filter(|(flag, _)| self.0.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl RenderX509Extension for ExtendedKeyUsage {
    fn render(&self) -> String {
        self.0
            .iter()
            .map(oid::display_long)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl RenderX509Extension for SubjectKeyIdentifier {
    fn render(&self) -> String {
        colon_hex(self.0.as_bytes())
    }
}

impl RenderX509Extension for AuthorityKeyIdentifier {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(key_id) = &self.key_identifier {
            lines.push(format!("keyid:{}", colon_hex(key_id.as_bytes())));
        }
        if let Some(issuer) = &self.authority_cert_issuer {
            lines.push(render_general_names(issuer));
        }
        if let Some(serial) = &self.authority_cert_serial_number {
            lines.push(format!("serial:{}", colon_hex(serial.as_bytes())));
        }
        lines.join("\n")
    }
}

impl RenderX509Extension for CertificatePolicies {
    fn render(&self) -> String {
        self.0
            .iter()
            .map(|policy| format!("Policy: {}", oid::display_long(&policy.policy_identifier)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderX509Extension for CrlDistributionPoints {
    fn render(&self) -> String {
        self.0
            .iter()
            .filter_map(|point| point.distribution_point.as_ref())
            .map(|name| match name {
                DistributionPointName::FullName(names) => {
                    let indented = names
                        .iter()
                        .map(|name| format!("  {}", render_general_name(name)))
                        .collect::<Vec<_>>()
                        .join("\n");
                    format!("Full Name:\n{indented}")
                }
                DistributionPointName::NameRelativeToCRLIssuer(rdn) => {
                    let relative = rdn
                        .0
                        .iter()
                        .map(|attr| {
                            format!(
                                "{}={}",
                                oid::display_short(&attr.oid),
                                attribute_value_to_string(&attr.value)
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("+");
                    format!("Relative Name:\n  {relative}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderX509Extension for AuthorityInfoAccessSyntax {
    fn render(&self) -> String {
        self.0
            .iter()
            .map(|access| {
                format!(
                    "{} - {}",
                    oid::display_long(&access.access_method),
                    render_general_name(&access.access_location)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

type Renderer = fn(&[u8]) -> Result<String, CertError>;

static RENDERERS: &[(ObjectIdentifier, Renderer)] = &[
    (SubjectAltName::OID, SubjectAltName::render_der),
    (IssuerAltName::OID, IssuerAltName::render_der),
    (BasicConstraints::OID, BasicConstraints::render_der),
    (KeyUsage::OID, KeyUsage::render_der),
    (ExtendedKeyUsage::OID, ExtendedKeyUsage::render_der),
    (SubjectKeyIdentifier::OID, SubjectKeyIdentifier::render_der),
    (AuthorityKeyIdentifier::OID, AuthorityKeyIdentifier::render_der),
    (CertificatePolicies::OID, CertificatePolicies::render_der),
    (CrlDistributionPoints::OID, CrlDistributionPoints::render_der),
    (AuthorityInfoAccessSyntax::OID, AuthorityInfoAccessSyntax::render_der),
];

/// Renders an extension value as text.
///
/// Known extensions use their dedicated rendering. Anything else shows the
/// text of a DER string value, or colon hex. A known extension whose value
/// does not decode also falls back to colon hex.
pub fn render_value(extension: &Extension) -> String {
    let der = extension.extn_value.as_bytes();
    let renderer = RENDERERS
        .iter()
        .find(|(oid, _)| *oid == extension.extn_id)
        .map(|(_, renderer)| renderer);

    match renderer {
        Some(render) => render(der).unwrap_or_else(|err| {
            warn!(
                extension = %extension.extn_id,
                error = %err,
                "extension value does not decode, rendering as hex"
            );
            colon_hex(der)
        }),
        None => der::asn1::Any::from_der(der)
            .ok()
            .and_then(|any| directory_string(&any))
            .unwrap_or_else(|| colon_hex(der)),
    }
}

/// Display identifier of an extension: short name, registered name, or dotted OID.
pub fn identifier(extension: &Extension) -> String {
    oid::display_short(&extension.extn_id)
}

/// Groups extensions by identifier, preserving encounter order within a group.
pub fn group(extensions: &[Extension]) -> Extensions {
    let mut grouped = Extensions::new();
    for extension in extensions {
        grouped
            .entry(identifier(extension))
            .or_default()
            .push(ExtensionEntry {
                value: render_value(extension),
                critical: extension.critical,
            });
    }
    grouped
}

/// Splits a rendered subjectAltName value into names.
///
/// Each comma-separated fragment loses its `DNS:` prefix and surrounding
/// whitespace; other name kinds keep their prefix (`IP Address:1.2.3.4`).
/// Empty fragments are dropped, so an empty value yields no names.
pub fn split_subject_alt_names(rendered: &str) -> Vec<String> {
    rendered
        .split(',')
        .map(|name| name.replace("DNS:", "").trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Finds the subjectAltName extension and extracts its names.
pub fn subject_alt_names(extensions: &[Extension]) -> Option<Vec<String>> {
    extensions
        .iter()
        .find(|extension| extension.extn_id == SubjectAltName::OID)
        .map(|extension| split_subject_alt_names(&render_value(extension)))
}

fn render_general_names(names: &[GeneralName]) -> String {
    names
        .iter()
        .map(render_general_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_general_name(name: &GeneralName) -> String {
    match name {
        GeneralName::DnsName(dns) => format!("DNS:{dns}"),
        GeneralName::Rfc822Name(email) => format!("email:{email}"),
        GeneralName::UniformResourceIdentifier(uri) => format!("URI:{uri}"),
        GeneralName::IpAddress(ip) => format!("IP Address:{}", render_ip(ip.as_bytes())),
        GeneralName::DirectoryName(dn) => format!("DirName:{}", Name::from_x509_name(dn)),
        GeneralName::RegisteredId(id) => format!("Registered ID:{}", oid::display_long(id)),
        GeneralName::OtherName(_) => "othername:<unsupported>".to_string(),
        GeneralName::EdiPartyName(_) => "EdiPartyName:<unsupported>".to_string(),
    }
}

fn render_ip(bytes: &[u8]) -> String {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return IpAddr::from(Ipv4Addr::from(octets)).to_string();
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return IpAddr::from(Ipv6Addr::from(octets)).to_string();
    }
    format!("<invalid length={}>", bytes.len())
}
