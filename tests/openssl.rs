mod util;

use openssl::nid::Nid;
use openssl::x509::X509;
use pretty_assertions::assert_eq;

const FIXTURES: [&str; 7] = [
    "rsa2048.pem",
    "rsa1024-nosan.pem",
    "dsa.pem",
    "ec.pem",
    "custom-oid.pem",
    "rsa8192.pem",
    "rsa-bigexp.pem",
];

fn openssl_cert(name: &str) -> X509 {
    X509::from_pem(&util::fixture(name)).expect("OpenSSL failed to parse fixture")
}

#[test]
fn test_openssl_agrees_on_encoding() {
    for name in FIXTURES {
        let ours = util::load_cert(name);
        let theirs = openssl_cert(name);
        assert_eq!(ours.to_der().unwrap(), theirs.to_der().unwrap(), "{name}");

        // Our PEM parses back in OpenSSL to the same certificate.
        let reparsed = X509::from_pem(ours.to_pem().unwrap().as_bytes()).unwrap();
        assert_eq!(reparsed.to_der().unwrap(), theirs.to_der().unwrap(), "{name}");
    }
}

#[test]
fn test_openssl_agrees_on_common_name() {
    for name in FIXTURES {
        let ours = util::load_cert(name);
        let theirs = openssl_cert(name);
        let expected = theirs
            .subject_name()
            .entries_by_nid(Nid::COMMONNAME)
            .next()
            .map(|entry| entry.data().as_utf8().unwrap().to_string());
        assert_eq!(ours.subject_component("CN"), expected, "{name}");
    }
}

#[test]
fn test_openssl_agrees_on_signature_algorithm() {
    for name in FIXTURES {
        let ours = util::load_cert(name);
        let theirs = openssl_cert(name);
        let expected = theirs.signature_algorithm().object().nid().long_name().unwrap();
        assert_eq!(ours.signature_algorithm(), expected, "{name}");
    }
}

#[test]
fn test_openssl_agrees_on_key_size() {
    for name in FIXTURES {
        let ours = util::load_cert(name);
        let key = openssl_cert(name).public_key().unwrap();
        let expected = if key.rsa().is_ok() || key.dsa().is_ok() {
            Some(key.bits() as usize)
        } else {
            None
        };
        assert_eq!(ours.bit_strength(), expected, "{name}");
    }
}

#[test]
fn test_openssl_agrees_on_subject_alt_names() {
    for name in FIXTURES {
        let ours = util::load_cert(name);
        let expected = openssl_cert(name).subject_alt_names().map(|names| {
            names
                .iter()
                .filter_map(|general_name| general_name.dnsname().map(str::to_string))
                .collect::<Vec<_>>()
        });
        assert_eq!(
            ours.subject_alternative_names().map(<[String]>::to_vec),
            expected,
            "{name}"
        );
    }
}

#[test]
fn test_openssl_agrees_on_validity() {
    for name in FIXTURES {
        let ours = util::load_cert(name);
        let theirs = openssl_cert(name);
        let epoch = openssl::asn1::Asn1Time::from_unix(0).unwrap();

        let diff = epoch.diff(theirs.not_before()).unwrap();
        let expected = i64::from(diff.days) * 86_400 + i64::from(diff.secs);
        assert_eq!(ours.not_before().unix_timestamp(), expected, "{name}");

        let diff = epoch.diff(theirs.not_after()).unwrap();
        let expected = i64::from(diff.days) * 86_400 + i64::from(diff.secs);
        assert_eq!(ours.not_after().unix_timestamp(), expected, "{name}");
    }
}
