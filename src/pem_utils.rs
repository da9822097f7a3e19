use crate::error::CertError;

/// Labels accepted for certificate armor.
pub(crate) const CERTIFICATE_LABELS: &[&str] =
    &["CERTIFICATE", "X509 CERTIFICATE", "TRUSTED CERTIFICATE"];

/// Returns true when the input starts (after whitespace) with PEM armor.
pub fn is_pem(input: &[u8]) -> bool {
    let start = input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(input.len());
    input[start..].starts_with(b"-----BEGIN ")
}

/// Parse the first PEM block of the input.
pub fn parse(input: &[u8]) -> Result<pem::Pem, CertError> {
    Ok(pem::parse(input)?)
}

/// Convert a PEM‑encoded certificate into DER‑encoded bytes, checking its label.
pub fn certificate_pem_to_der(input: &[u8]) -> Result<Vec<u8>, CertError> {
    let pem = parse(input)?;
    if !CERTIFICATE_LABELS.contains(&pem.tag()) {
        return Err(CertError::DecodingError(format!(
            "unexpected PEM label '{}', expected CERTIFICATE",
            pem.tag()
        )));
    }
    Ok(pem.contents().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_armor_after_whitespace() {
        assert!(is_pem(b"\n  -----BEGIN CERTIFICATE-----\n"));
        assert!(!is_pem(&[0x30, 0x82, 0x01, 0x0a]));
        assert!(!is_pem(b""));
    }

    #[test]
    fn rejects_non_certificate_label() {
        let armored = pem::encode(&pem::Pem::new("PRIVATE KEY", vec![1, 2, 3]));
        let err = certificate_pem_to_der(armored.as_bytes()).unwrap_err();
        assert!(matches!(err, CertError::DecodingError(_)));
    }

    #[test]
    fn accepts_x509_certificate_label() {
        let armored = pem::encode(&pem::Pem::new("X509 CERTIFICATE", vec![1, 2, 3]));
        assert_eq!(certificate_pem_to_der(armored.as_bytes()).unwrap(), vec![1, 2, 3]);
    }
}
