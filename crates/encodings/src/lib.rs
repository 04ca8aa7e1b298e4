#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `encodings` names the [`EncodePolicy`] each storage backend needs and
//! resolves configuration values to policies. Profiles are plain constants
//! built from `encoder` rule flags, so they can be combined or narrowed with
//! the usual bit operators.
//!
//! # Design
//!
//! - Profiles such as [`LOCAL_WINDOWS`] and [`ONEDRIVE`] are `const` values.
//!   [`LOCAL`] selects the profile for the compilation target.
//! - [`lookup`] finds a profile by name, ignoring ASCII case. A few aliases
//!   (`unix`, `windows`) are accepted but not listed by [`names`].
//! - [`resolve`] falls back to parsing a comma-separated rule list and reports
//!   [`UnknownEncodingError`] when neither applies.
//!
//! # Examples
//!
//! ```
//! use encodings::{ONEDRIVE, resolve};
//!
//! let policy = resolve("onedrive").unwrap();
//! assert_eq!(policy, ONEDRIVE);
//! assert_eq!(&*policy.encode_str("~notes "), "～notes␠");
//!
//! let custom = resolve("Slash,InvalidUtf8").unwrap();
//! assert_eq!(&*custom.encode(b"a/b\xFE"), "a／b‛FE".as_bytes());
//! ```

mod error;
mod profiles;
mod registry;
mod trace;

pub use encoder::EncodePolicy;
pub use error::UnknownEncodingError;
pub use profiles::{
    AMAZON_CLOUD_DRIVE, B2, BASE, BOX, DISPLAY, DRIVE, DROPBOX, GOOGLE_CLOUD_STORAGE, JOTTACLOUD,
    KOOFR, LOCAL, LOCAL_UNIX, LOCAL_WINDOWS, MEGA, ONEDRIVE, OPENDRIVE, PCLOUD,
};
pub use registry::{local, lookup, names, resolve};

#[cfg(test)]
mod tests;
