mod util;

use std::thread;

use certinfo::cert::extensions::ExtensionEntry;
use certinfo::error::CertError;
use certinfo::oid::{self, OidEntry};
use pretty_assertions::assert_eq;

// The registry is process-wide and tests run concurrently, so every test
// uses its own OID arc.

#[test]
fn registered_names_replace_dotted_oids() {
    let before = util::load_cert("custom-oid.pem");
    assert_eq!(
        before.subject().to_string(),
        "/CN=custom.example.com/1.2.3.4.5=custom value"
    );
    assert_eq!(before.subject_component("fooBar"), None);
    assert!(before.extensions().contains_key("1.2.3.4.6"));

    oid::register("1.2.3.4.5", "fooBar", None).unwrap();
    oid::register("1.2.3.4.6", "fooExt", Some("Foo Extension")).unwrap();

    let after = util::load_cert("custom-oid.pem");
    assert_eq!(
        after.subject().to_string(),
        "/CN=custom.example.com/fooBar=custom value"
    );
    assert_eq!(
        after.subject_component("foobar"),
        Some("custom value".to_string())
    );

    let extensions = after.extensions();
    assert!(!extensions.contains_key("1.2.3.4.6"));
    assert_eq!(
        extensions["fooExt"],
        vec![ExtensionEntry {
            value: "custom extension payload".to_string(),
            critical: false,
        }]
    );
    assert_eq!(
        extensions["1.2.3.4.7"],
        vec![ExtensionEntry {
            value: "unregistered payload".to_string(),
            critical: true,
        }]
    );

    // Names are resolved when queried, so an already-built certificate
    // picks up the registration too.
    assert_eq!(before.subject(), after.subject());
}

#[test]
fn register_rejects_malformed_oids_and_empty_names() {
    let err = oid::register("not.an.oid", "bogus", None).unwrap_err();
    assert!(matches!(err, CertError::InvalidOid(_)));

    let err = oid::register("1", "tooShort", None).unwrap_err();
    assert!(matches!(err, CertError::InvalidOid(_)));

    let err = oid::register("1.3.6.1.4.1.77701.1", "", None).unwrap_err();
    assert!(matches!(err, CertError::InvalidOid(_)));
}

#[test]
fn register_conflicts() {
    // Standard OIDs and names cannot be taken over.
    let err = oid::register("2.5.4.3", "myCommonName", None).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));
    let err = oid::register("1.3.6.1.4.1.77702.1", "CN", None).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));

    oid::register("1.3.6.1.4.1.77702.2", "tierLevel", Some("Tier Level")).unwrap();
    // Same entry again is fine.
    oid::register("1.3.6.1.4.1.77702.2", "tierLevel", Some("Tier Level")).unwrap();

    let err = oid::register("1.3.6.1.4.1.77702.2", "otherName", None).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));
    let err = oid::register("1.3.6.1.4.1.77702.3", "tierLevel", None).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));
    let err = oid::register("1.3.6.1.4.1.77702.4", "tier", Some("Tier Level")).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));
}

#[test]
fn batch_register_stops_at_first_failure() {
    let entries = vec![
        OidEntry::builder()
            .oid("1.3.6.1.4.1.77703.1".to_string())
            .short_name("batchFirst".to_string())
            .build(),
        OidEntry::builder()
            .oid("1.3.6.1.4.1.77703.x".to_string())
            .short_name("batchBroken".to_string())
            .build(),
        OidEntry::builder()
            .oid("1.3.6.1.4.1.77703.3".to_string())
            .short_name("batchThird".to_string())
            .build(),
    ];

    let err = oid::batch_register(&entries).unwrap_err();
    assert!(matches!(err, CertError::InvalidOid(_)));

    // The first entry went in; re-registering it under another name conflicts.
    let err = oid::register("1.3.6.1.4.1.77703.1", "renamed", None).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));

    // The entry after the failure was never attempted, so it is still free.
    oid::register("1.3.6.1.4.1.77703.3", "batchThird", None).unwrap();
}

#[test]
fn entries_load_from_json_configuration() {
    let config = r#"[
        {"oid": "1.3.6.1.4.1.77704.1", "short_name": "cfgShort"},
        {"oid": "1.3.6.1.4.1.77704.2", "short_name": "cfgLong", "long_name": "Configured Long"}
    ]"#;
    let entries: Vec<OidEntry> = serde_json::from_str(config).unwrap();
    assert_eq!(entries[0].long_name, None);
    assert_eq!(entries[1].long_name.as_deref(), Some("Configured Long"));

    oid::batch_register(&entries).unwrap();

    let err = oid::register("1.3.6.1.4.1.77704.3", "Configured Long", None).unwrap_err();
    assert!(matches!(err, CertError::OidConflict(_)));

    let round_trip = serde_json::to_value(&entries[0]).unwrap();
    assert_eq!(
        round_trip,
        serde_json::json!({"oid": "1.3.6.1.4.1.77704.1", "short_name": "cfgShort"})
    );
}

#[test]
fn concurrent_registration_is_consistent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let dotted = format!("1.3.6.1.4.1.77705.{i}");
                let name = format!("threaded{i}");
                oid::register(&dotted, &name, None)
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    // Every thread racing for the same name: exactly one wins.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let dotted = format!("1.3.6.1.4.1.77706.{i}");
                oid::register(&dotted, "contested", None)
            })
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(Result::is_ok)
        .count();
    assert_eq!(winners, 1);
}
