use super::*;
use encoder::RuleFlag;

#[test]
fn every_listed_name_resolves() {
    for name in names() {
        assert!(lookup(name).is_some(), "{name} is listed but not registered");
    }
}

#[test]
fn listed_names_are_lowercase_and_unique() {
    let listed = names();
    for (index, name) in listed.iter().enumerate() {
        assert_eq!(*name, name.to_ascii_lowercase());
        assert!(!listed[index + 1..].contains(name), "{name} listed twice");
    }
}

#[test]
fn lookup_ignores_ascii_case() {
    assert_eq!(lookup("DROPBOX"), Some(DROPBOX));
    assert_eq!(lookup("DropBox"), lookup("dropbox"));
    assert_eq!(lookup("Local-Windows"), Some(LOCAL_WINDOWS));
}

#[test]
fn lookup_rejects_unknown_and_padded_names() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("s3"), None);
    assert_eq!(lookup(" dropbox"), None);
}

#[test]
fn aliases_point_at_local_profiles() {
    assert_eq!(lookup("unix"), Some(LOCAL_UNIX));
    assert_eq!(lookup("windows"), Some(LOCAL_WINDOWS));
    assert_eq!(lookup("local"), Some(local()));
    assert!(!names().contains(&"unix"));
    assert!(!names().contains(&"windows"));
}

#[test]
fn local_matches_target_platform() {
    if cfg!(windows) {
        assert_eq!(local(), LOCAL_WINDOWS);
    } else {
        assert_eq!(local(), LOCAL_UNIX);
    }
}

#[test]
fn base_profile_covers_nul_and_slash_only() {
    assert_eq!(BASE, EncodePolicy::ZERO | EncodePolicy::SLASH);
    assert_eq!(BASE.iter().count(), 2);
}

#[test]
fn byte_rule_is_set_on_remote_profiles() {
    for profile in [
        AMAZON_CLOUD_DRIVE,
        B2,
        BOX,
        DRIVE,
        DROPBOX,
        GOOGLE_CLOUD_STORAGE,
        JOTTACLOUD,
        KOOFR,
        MEGA,
        ONEDRIVE,
        OPENDRIVE,
        PCLOUD,
    ] {
        assert!(profile.has(RuleFlag::InvalidUtf8), "{profile}");
    }
    assert!(!LOCAL_UNIX.has(RuleFlag::InvalidUtf8));
    assert!(!DISPLAY.has(RuleFlag::InvalidUtf8));
}

#[test]
fn drive_keeps_slash() {
    assert!(!DRIVE.has(RuleFlag::Slash));
    assert_eq!(&*DRIVE.encode_str("a/b"), "a/b");
}

#[test]
fn resolve_prefers_profile_names() {
    assert_eq!(resolve("OneDrive"), Ok(ONEDRIVE));
    assert_eq!(resolve("b2"), Ok(B2));
}

#[test]
fn resolve_accepts_rule_lists() {
    assert_eq!(
        resolve("slash, invalidutf8"),
        Ok(EncodePolicy::SLASH | EncodePolicy::INVALID_UTF8)
    );
    assert_eq!(resolve("None"), Ok(EncodePolicy::EMPTY));
}

#[test]
fn resolve_reports_unknown_names() {
    let err = resolve("s3").unwrap_err();
    assert_eq!(err.name(), "s3");
    let message = err.to_string();
    assert!(message.contains("\"s3\""), "{message}");
    assert!(message.contains("dropbox"), "{message}");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn resolve_rejects_empty_input_without_source() {
    let err = resolve("  ").unwrap_err();
    assert_eq!(err.name(), "  ");
    assert!(std::error::Error::source(&err).is_none());
}

#[test]
fn resolve_rejects_rule_lists_without_rules() {
    for input in ["", ",", " , ", "None,", "none, none"] {
        let err = resolve(input).unwrap_err();
        assert_eq!(err.name(), input);
        assert!(std::error::Error::source(&err).is_none(), "{input:?}");
    }
    assert_eq!(resolve(" none "), Ok(EncodePolicy::EMPTY));
}
