//! Name resolution through the public registry API.

use encodings::{EncodePolicy, names, resolve};

#[test]
fn names_are_listed_in_display_order() {
    assert_eq!(
        names(),
        &[
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
        ]
    );
}

#[test]
fn resolve_matches_lookup_for_every_case_variant() {
    for name in names() {
        let upper = name.to_ascii_uppercase();
        assert_eq!(resolve(name), resolve(&upper), "{name}");
        assert_eq!(resolve(name).ok(), encodings::lookup(name));
    }
}

#[test]
fn rule_lists_combine_flags() {
    let policy = resolve("Slash,BackSlash,RightSpace").unwrap();
    assert_eq!(
        policy,
        EncodePolicy::SLASH | EncodePolicy::BACK_SLASH | EncodePolicy::RIGHT_SPACE
    );
    assert_eq!(&*policy.encode_str("a\\b "), "a＼b␠");
}

#[test]
fn partially_valid_rule_list_is_rejected() {
    let err = resolve("Slash,Colon").unwrap_err();
    assert_eq!(err.name(), "Slash,Colon");
    let source = std::error::Error::source(&err).expect("rule parse error is the source");
    assert!(source.to_string().contains("Colon"), "{source}");
}
