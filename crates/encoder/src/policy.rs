use std::fmt;
use std::iter::{Extend, FromIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

use crate::error::ParseRuleFlagError;
use crate::iter::RuleFlagsIter;
use crate::rule::{RuleFlag, RuleScope};

/// Bitfield describing one backend's naming restrictions.
///
/// A policy is a set of [`RuleFlag`]s. It is `Copy`, immutable and carries no
/// state besides the bits, so profiles are declared as `const` items and
/// shared freely across threads. The encode/decode engine lives in the
/// `codec` module and is exposed as inherent methods on this type.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct EncodePolicy {
    bits: u32,
}

impl EncodePolicy {
    const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// No restrictions; encoding and decoding are the identity.
    pub const EMPTY: Self = Self::new(0);
    /// NUL (0x00).
    pub const ZERO: Self = Self::new(1 << 0);
    /// `/`.
    pub const SLASH: Self = Self::new(1 << 1);
    /// `<>:"?*|`.
    pub const WIN: Self = Self::new(1 << 2);
    /// `\`.
    pub const BACK_SLASH: Self = Self::new(1 << 3);
    /// `#` and `%`.
    pub const HASH_PERCENT: Self = Self::new(1 << 4);
    /// DEL (0x7F).
    pub const DEL: Self = Self::new(1 << 5);
    /// Control characters 0x01-0x1F. NUL is covered only by
    /// [`EncodePolicy::ZERO`].
    pub const CTL: Self = Self::new(1 << 6);
    /// Leading space.
    pub const LEFT_SPACE: Self = Self::new(1 << 7);
    /// Leading `.`.
    pub const LEFT_PERIOD: Self = Self::new(1 << 8);
    /// Leading `~`.
    pub const LEFT_TILDE: Self = Self::new(1 << 9);
    /// Leading CR, LF, HT or VT.
    pub const LEFT_CR_LF_HT_VT: Self = Self::new(1 << 10);
    /// Trailing space.
    pub const RIGHT_SPACE: Self = Self::new(1 << 11);
    /// Trailing `.`.
    pub const RIGHT_PERIOD: Self = Self::new(1 << 12);
    /// Trailing CR, LF, HT or VT.
    pub const RIGHT_CR_LF_HT_VT: Self = Self::new(1 << 13);
    /// Invalid UTF-8 bytes.
    pub const INVALID_UTF8: Self = Self::new(1 << 14);

    /// The encoding used for names shown to users and written to logs.
    pub const STANDARD: Self = Self::ZERO.union(Self::SLASH).union(Self::CTL).union(Self::DEL);

    /// Every rule known to this crate.
    pub const ALL_KNOWN: Self = Self::new(Self::KNOWN_MASK);

    pub(crate) const KNOWN_MASK: u32 = (1 << RuleFlag::ALL.len()) - 1;

    const CONTENT_MASK: u32 = Self::ZERO.bits
        | Self::SLASH.bits
        | Self::WIN.bits
        | Self::BACK_SLASH.bits
        | Self::HASH_PERCENT.bits
        | Self::DEL.bits
        | Self::CTL.bits;

    const LEADING_MASK: u32 = Self::LEFT_SPACE.bits
        | Self::LEFT_PERIOD.bits
        | Self::LEFT_TILDE.bits
        | Self::LEFT_CR_LF_HT_VT.bits;

    const TRAILING_MASK: u32 =
        Self::RIGHT_SPACE.bits | Self::RIGHT_PERIOD.bits | Self::RIGHT_CR_LF_HT_VT.bits;

    /// Returns a policy constructed from raw `bits` without masking.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` when no rule is active.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits & Self::KNOWN_MASK == 0
    }

    /// Reports the bits that do not correspond to any [`RuleFlag`].
    #[must_use]
    pub const fn unknown_bits(self) -> u32 {
        self.bits & !Self::KNOWN_MASK
    }

    /// Checks whether all rules in `other` are set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Returns `true` when `flag` is active.
    #[must_use]
    pub const fn has(self, flag: RuleFlag) -> bool {
        self.contains(flag.as_policy())
    }

    /// Returns the union of both policies.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Returns the rules common to both policies.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Returns the rules present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Returns the subset of rules with the given scope.
    #[must_use]
    pub const fn with_scope(self, scope: RuleScope) -> Self {
        let mask = match scope {
            RuleScope::Content => Self::CONTENT_MASK,
            RuleScope::Leading => Self::LEADING_MASK,
            RuleScope::Trailing => Self::TRAILING_MASK,
            RuleScope::Bytes => Self::INVALID_UTF8.bits,
        };
        Self::new(self.bits & mask)
    }

    /// Iterates over the active rules in ascending bit order.
    #[must_use]
    pub fn iter(self) -> RuleFlagsIter {
        RuleFlagsIter::new(self)
    }

    /// Returns `true` when an active rule substitutes `ch` at a position that
    /// is first and/or last in its name.
    ///
    /// Content rules are consulted first, then leading rules for the first
    /// unit and trailing rules for the last one.
    pub(crate) fn triggers(self, ch: char, first: bool, last: bool) -> bool {
        let content = self.with_scope(RuleScope::Content);
        if content.iter().any(|flag| flag.is_trigger(ch)) {
            return true;
        }
        if first
            && self
                .with_scope(RuleScope::Leading)
                .iter()
                .any(|flag| flag.is_trigger(ch))
        {
            return true;
        }
        last && self
            .with_scope(RuleScope::Trailing)
            .iter()
            .any(|flag| flag.is_trigger(ch))
    }
}

impl FromIterator<RuleFlag> for EncodePolicy {
    fn from_iter<I: IntoIterator<Item = RuleFlag>>(iter: I) -> Self {
        let mut policy = Self::EMPTY;
        policy.extend(iter);
        policy
    }
}

impl Extend<RuleFlag> for EncodePolicy {
    fn extend<I: IntoIterator<Item = RuleFlag>>(&mut self, iter: I) {
        for flag in iter {
            *self |= flag.as_policy();
        }
    }
}

impl IntoIterator for EncodePolicy {
    type Item = RuleFlag;
    type IntoIter = RuleFlagsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &EncodePolicy {
    type Item = RuleFlag;
    type IntoIter = RuleFlagsIter;

    fn into_iter(self) -> Self::IntoIter {
        (*self).iter()
    }
}

impl fmt::Debug for EncodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodePolicy")
            .field("bits", &format_args!("0x{:x}", self.bits))
            .field("rules", &format_args!("{self}"))
            .finish()
    }
}

/// Renders the active rules as a comma-separated list, e.g. `Slash,InvalidUtf8`.
///
/// The empty policy renders as `None`. Unknown bits are not rendered.
impl fmt::Display for EncodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        let mut first = true;
        for flag in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

impl FromStr for EncodePolicy {
    type Err = ParseRuleFlagError;

    /// Parses a comma-separated list of rule names.
    ///
    /// Names are matched ignoring ASCII case and surrounding whitespace. `None`
    /// and the empty string yield [`EncodePolicy::EMPTY`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut policy = Self::EMPTY;
        for part in s.split(',') {
            let name = part.trim();
            if name.is_empty() || name.eq_ignore_ascii_case("None") {
                continue;
            }
            policy |= name.parse::<RuleFlag>()?.as_policy();
        }
        Ok(policy)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EncodePolicy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EncodePolicy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl Not for EncodePolicy {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bits)
    }
}

impl BitOr for EncodePolicy {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for EncodePolicy {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for EncodePolicy {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for EncodePolicy {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitXor for EncodePolicy {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.bits ^ rhs.bits)
    }
}

impl BitXorAssign for EncodePolicy {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl From<EncodePolicy> for u32 {
    fn from(policy: EncodePolicy) -> Self {
        policy.bits
    }
}

impl From<u32> for EncodePolicy {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}
