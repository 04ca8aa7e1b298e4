use encoder::EncodePolicy;

use crate::error::UnknownEncodingError;
use crate::profiles;
use crate::trace::{trace_lookup, trace_rule_list};

/// Every accepted name, aliases included, paired with its profile.
static REGISTRY: [(&str, EncodePolicy); 19] = [
    ("base", profiles::BASE),
    ("display", profiles::DISPLAY),
    ("amazonclouddrive", profiles::AMAZON_CLOUD_DRIVE),
    ("b2", profiles::B2),
    ("box", profiles::BOX),
    ("drive", profiles::DRIVE),
    ("dropbox", profiles::DROPBOX),
    ("googlecloudstorage", profiles::GOOGLE_CLOUD_STORAGE),
    ("jottacloud", profiles::JOTTACLOUD),
    ("koofr", profiles::KOOFR),
    ("local", profiles::LOCAL),
    ("local-windows", profiles::LOCAL_WINDOWS),
    ("windows", profiles::LOCAL_WINDOWS),
    ("local-unix", profiles::LOCAL_UNIX),
    ("unix", profiles::LOCAL_UNIX),
    ("mega", profiles::MEGA),
    ("onedrive", profiles::ONEDRIVE),
    ("opendrive", profiles::OPENDRIVE),
    ("pcloud", profiles::PCLOUD),
];

/// Primary names in display order. Aliases are accepted by [`lookup`] but
/// not listed.
const NAMES: &[&str] = &[
    "base",
    "display",
    "amazonclouddrive",
    "b2",
    "box",
    "drive",
    "dropbox",
    "googlecloudstorage",
    "jottacloud",
    "koofr",
    "local-unix",
    "local-windows",
    "local",
    "mega",
    "onedrive",
    "opendrive",
    "pcloud",
];

/// Returns the profile registered under `name`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// assert_eq!(encodings::lookup("OneDrive"), Some(encodings::ONEDRIVE));
/// assert_eq!(encodings::lookup("s3"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<EncodePolicy> {
    let policy = REGISTRY
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, policy)| policy);
    trace_lookup(name, policy);
    policy
}

/// Returns the primary profile names accepted by [`lookup`], in display order.
#[must_use]
pub fn names() -> &'static [&'static str] {
    NAMES
}

/// Returns the local filesystem profile for the current platform.
#[must_use]
pub const fn local() -> EncodePolicy {
    profiles::LOCAL
}

/// Resolves a configuration value to a policy.
///
/// Profile names are tried first. Anything else is parsed as a
/// comma-separated rule list such as `Slash,InvalidUtf8`, which lets users
/// describe backends that have no profile.
///
/// # Errors
///
/// Returns [`UnknownEncodingError`] when `name` is neither a profile name nor
/// a valid rule list. A rule list that names no rule at all, such as `""` or
/// `" , "`, is rejected too; disabling encoding must be spelled `None`.
pub fn resolve(name: &str) -> Result<EncodePolicy, UnknownEncodingError> {
    if let Some(policy) = lookup(name) {
        return Ok(policy);
    }

    match name.parse::<EncodePolicy>() {
        Ok(policy) if policy.is_empty() && !name.trim().eq_ignore_ascii_case("None") => {
            Err(UnknownEncodingError::new(name, None))
        }
        Ok(policy) => {
            trace_rule_list(name, policy);
            Ok(policy)
        }
        Err(err) => Err(UnknownEncodingError::new(name, Some(err))),
    }
}
