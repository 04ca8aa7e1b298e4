//! Policies embedded in configuration structs.

#![cfg(feature = "serde")]

use safename::EncodePolicy;
use safename::registry::{self, ONEDRIVE};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct RemoteConfig {
    name: String,
    encoding: EncodePolicy,
}

#[test]
fn policy_serialises_as_rule_list() {
    let config = RemoteConfig {
        name: "docs".to_owned(),
        encoding: EncodePolicy::SLASH | EncodePolicy::INVALID_UTF8,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"name":"docs","encoding":"Slash,InvalidUtf8"}"#);

    let back: RemoteConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn profile_survives_config_round_trip() {
    let config = RemoteConfig {
        name: "onedrive".to_owned(),
        encoding: ONEDRIVE,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: RemoteConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.encoding, ONEDRIVE);
    assert_eq!(registry::lookup(&back.name), Some(back.encoding));
}

#[test]
fn empty_policy_serialises_as_none() {
    let json = serde_json::to_string(&EncodePolicy::EMPTY).unwrap();
    assert_eq!(json, r#""None""#);
    let back: EncodePolicy = serde_json::from_str(&json).unwrap();
    assert!(back.is_empty());
}

#[test]
fn unknown_rule_is_a_deserialisation_error() {
    let err = serde_json::from_str::<RemoteConfig>(r#"{"name":"x","encoding":"Slash,Colon"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Colon"), "{err}");
}
