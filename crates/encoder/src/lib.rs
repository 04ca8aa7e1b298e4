#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `encoder` rewrites file names so they can be stored on backends that forbid
//! some characters, and rewrites them back exactly. Each backend declares an
//! [`EncodePolicy`]: a bitfield of independent [`RuleFlag`]s such as "no `/`",
//! "no trailing space" or "no invalid UTF-8". Encoding under a policy is
//! lossless for any byte string, including names that are not valid UTF-8.
//!
//! # Design
//!
//! - [`RuleFlag`] names one restriction and knows its triggers and its
//!   [`RuleScope`]: anywhere in the name, the first unit, the last unit, or
//!   invalid bytes.
//! - Every trigger maps to one fixed substitute ([`substitute_for`]): control
//!   characters to the "SYMBOL FOR" pictures (`␀`, `␉`, `␠`, `␡`), ASCII
//!   punctuation to its fullwidth form (`／`, `＜`, `．`, `～`).
//! - A substitute that occurs literally in a position where it would be decoded
//!   is prefixed with [`QUOTE`] (`‛`). The quote itself is always doubled, and
//!   invalid bytes become `‛` followed by two uppercase hex digits.
//!
//! # Invariants
//!
//! - `policy.decode(&policy.encode(name)) == name` for every policy and name.
//! - Names containing no active trigger, no quote and no substitute in a
//!   decodable position are returned unchanged without allocating.
//! - Leading and trailing rules look at exactly one unit. Path helpers apply
//!   them to every `/`-separated segment.
//! - Trigger and substitute sets are disjoint, so any combination of rules
//!   stays injective.
//!
//! # Examples
//!
//! ```
//! use encoder::EncodePolicy;
//!
//! let policy = EncodePolicy::STANDARD | EncodePolicy::INVALID_UTF8;
//! let encoded = policy.encode(b"a/b\0c\xFF");
//! assert_eq!(&*encoded, "a／b␀c‛FF".as_bytes());
//! assert_eq!(&*policy.decode(&encoded), b"a/b\0c\xFF");
//! ```
//!
//! Policies can be written as flag lists, which is how custom profiles are
//! configured:
//!
//! ```
//! use encoder::EncodePolicy;
//!
//! let policy: EncodePolicy = "Slash, BackSlash, RightSpace".parse().unwrap();
//! assert_eq!(
//!     policy,
//!     EncodePolicy::SLASH | EncodePolicy::BACK_SLASH | EncodePolicy::RIGHT_SPACE
//! );
//! assert_eq!(policy.to_string(), "Slash,BackSlash,RightSpace");
//! ```

mod codec;
mod error;
mod iter;
mod path;
mod policy;
mod rule;
mod table;
mod trace;
mod unit;

pub use error::ParseRuleFlagError;
pub use iter::RuleFlagsIter;
pub use policy::EncodePolicy;
pub use rule::{RuleFlag, RuleScope};
pub use table::{QUOTE, is_substitute, original_for, substitute_for};
