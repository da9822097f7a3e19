//! Process-wide OID name registry.
//!
//! Certificates routinely carry object identifiers that no standard table
//! knows about: private-enterprise subject attributes, vendor extensions,
//! policy OIDs. Registering a short and long name for such an OID makes every
//! later rendering in this crate (subject/issuer names, extension identifiers,
//! extended key usages, policies, signature algorithms) print the name
//! instead of the dotted-decimal form.
//!
//! Registration is add-only. Names are looked up in the built-in table
//! first, then in the custom entries registered here.
//!
//! ```rust
//! use certinfo::oid::{self, OidEntry};
//!
//! # fn main() -> Result<(), certinfo::error::CertError> {
//! oid::register("1.3.6.1.4.1.55555.1.1", "exampleTier", None)?;
//!
//! oid::batch_register(&[
//!     OidEntry::builder()
//!         .oid("1.3.6.1.4.1.55555.1.2".to_string())
//!         .short_name("exampleRegion".to_string())
//!         .long_name("Example Region".to_string())
//!         .build(),
//! ])?;
//! # Ok(())
//! # }
//! ```

mod builtin;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use bon::Builder;
use const_oid::ObjectIdentifier;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CertError;

/// One custom OID mapping, as passed to [`batch_register`].
///
/// `long_name` defaults to `short_name` when omitted. The type deserializes
/// from configuration such as
/// `{"oid": "1.2.3.4.5", "short_name": "fooBar"}`.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct OidEntry {
    pub oid: String,
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Names {
    short_name: String,
    long_name: String,
}

static CUSTOM_OIDS: Lazy<RwLock<HashMap<ObjectIdentifier, Names>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers a short and long display name for `oid`.
///
/// # Arguments
/// * `oid` - The dotted-decimal identifier, e.g. `"1.2.3.4.5"`.
/// * `short_name` - The short name, e.g. `"fooBar"`.
/// * `long_name` - Optional long name; defaults to `short_name`.
///
/// # Errors
/// * [`CertError::InvalidOid`] if `oid` is not a valid dotted-decimal OID or
///   `short_name` is empty.
/// * [`CertError::OidConflict`] if the OID is a standard one, is already
///   registered under different names, or one of the names is already taken
///   by another OID.
///
/// Registering the exact same entry twice succeeds.
pub fn register(oid: &str, short_name: &str, long_name: Option<&str>) -> Result<(), CertError> {
    let long_name = long_name.unwrap_or(short_name);
    let parsed = ObjectIdentifier::new(oid)
        .map_err(|e| CertError::InvalidOid(format!("'{oid}': {e}")))?;
    if short_name.is_empty() || long_name.is_empty() {
        return Err(CertError::InvalidOid(format!("'{oid}': empty name")));
    }

    if let Some(existing) = builtin::by_oid(&parsed) {
        return Err(CertError::OidConflict(format!(
            "{oid} is the standard OID {}",
            existing.short_name
        )));
    }
    for name in [short_name, long_name] {
        if let Some(existing) = builtin::by_name(name) {
            return Err(CertError::OidConflict(format!(
                "name '{name}' is already used by {}",
                existing.oid
            )));
        }
    }

    let names = Names {
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
    };

    let mut table = CUSTOM_OIDS.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = table.get(&parsed) {
        if *existing == names {
            return Ok(());
        }
        return Err(CertError::OidConflict(format!(
            "{oid} is already registered as {}",
            existing.short_name
        )));
    }
    for (other, existing) in table.iter() {
        for name in [short_name, long_name] {
            if existing.short_name == name || existing.long_name == name {
                return Err(CertError::OidConflict(format!(
                    "name '{name}' is already used by {other}"
                )));
            }
        }
    }

    debug!(%parsed, short_name, long_name, "registered custom OID");
    table.insert(parsed, names);
    Ok(())
}

/// Registers each entry in order.
///
/// Stops at the first failing entry and returns its error. Entries before it
/// stay registered; entries after it are not attempted.
pub fn batch_register<'a, I>(entries: I) -> Result<(), CertError>
where
    I: IntoIterator<Item = &'a OidEntry>,
{
    for entry in entries {
        register(&entry.oid, &entry.short_name, entry.long_name.as_deref())?;
    }
    Ok(())
}

/// Short display name for `oid`, if one is known.
pub(crate) fn short_name(oid: &ObjectIdentifier) -> Option<Cow<'static, str>> {
    if let Some(entry) = builtin::by_oid(oid) {
        return Some(Cow::Borrowed(entry.short_name));
    }
    let table = CUSTOM_OIDS.read().unwrap_or_else(PoisonError::into_inner);
    table
        .get(oid)
        .map(|names| Cow::Owned(names.short_name.clone()))
}

/// Long display name for `oid`, if one is known.
pub(crate) fn long_name(oid: &ObjectIdentifier) -> Option<Cow<'static, str>> {
    if let Some(entry) = builtin::by_oid(oid) {
        return Some(Cow::Borrowed(entry.long_name));
    }
    let table = CUSTOM_OIDS.read().unwrap_or_else(PoisonError::into_inner);
    table
        .get(oid)
        .map(|names| Cow::Owned(names.long_name.clone()))
}

/// Short name, or the dotted form when the OID is unknown.
pub(crate) fn display_short(oid: &ObjectIdentifier) -> String {
    short_name(oid).map_or_else(|| oid.to_string(), Cow::into_owned)
}

/// Long name, or the dotted form when the OID is unknown.
pub(crate) fn display_long(oid: &ObjectIdentifier) -> String {
    long_name(oid).map_or_else(|| oid.to_string(), Cow::into_owned)
}
