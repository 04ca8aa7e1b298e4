#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `safename` maps arbitrary file names onto the alphabet a storage backend
//! accepts and maps them back without loss. It re-exports the two workspace
//! crates:
//!
//! - [`encoder`]: rule flags, [`EncodePolicy`] and the encode/decode engine.
//! - [`encodings`]: per-backend profiles and the name registry.
//!
//! # Features
//!
//! - `tracing` (default): `trace!` events under `safename::encode` for every
//!   rewritten name and `debug!` events under `safename::registry` for lookups.
//! - `serde` (default): [`EncodePolicy`] serialises as its flag-list string.
//!
//! # Examples
//!
//! ```
//! use safename::{EncodePolicy, registry};
//!
//! let policy = registry::resolve("local-windows").unwrap();
//! let stored = policy.encode_str("report?.txt ");
//! assert_eq!(&*stored, "report？.txt␠");
//! assert_eq!(&*policy.decode(stored.as_bytes()), b"report?.txt ");
//!
//! assert_eq!(registry::lookup("DROPBOX"), registry::lookup("dropbox"));
//! assert!(EncodePolicy::STANDARD.contains(EncodePolicy::SLASH));
//! ```

pub use encoder;
pub use encodings;

pub use encoder::{
    EncodePolicy, ParseRuleFlagError, QUOTE, RuleFlag, RuleFlagsIter, RuleScope, is_substitute,
    original_for, substitute_for,
};
pub use encodings::UnknownEncodingError;

/// Backend profiles and name resolution.
pub mod registry {
    pub use encodings::{
        AMAZON_CLOUD_DRIVE, B2, BASE, BOX, DISPLAY, DRIVE, DROPBOX, GOOGLE_CLOUD_STORAGE,
        JOTTACLOUD, KOOFR, LOCAL, LOCAL_UNIX, LOCAL_WINDOWS, MEGA, ONEDRIVE, OPENDRIVE, PCLOUD,
        local, lookup, names, resolve,
    };
}
