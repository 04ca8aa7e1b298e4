use std::fmt;
use std::str::FromStr;

use crate::error::ParseRuleFlagError;
use crate::policy::EncodePolicy;

/// Where in a name a rule looks for its triggers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RuleScope {
    /// Every occurrence of a trigger character is substituted.
    Content,
    /// Only the first unit of a name is considered.
    Leading,
    /// Only the last unit of a name is considered.
    Trailing,
    /// Applies to bytes that do not start a valid UTF-8 scalar value.
    Bytes,
}

/// A single restriction rule.
///
/// The variants are listed in ascending bit order, which is also the order in
/// which [`EncodePolicy`] evaluates them: content rules, then leading and
/// trailing rules, then byte escaping. Each rule maps its triggers through the
/// shared substitute table, so rules never disagree about how a character is
/// rewritten.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum RuleFlag {
    /// NUL (0x00).
    Zero,
    /// `/`, the path separator.
    Slash,
    /// Characters reserved by Windows: `<>:"?*|`.
    Win,
    /// `\`.
    BackSlash,
    /// `#` and `%`.
    HashPercent,
    /// DEL (0x7F).
    Del,
    /// Control characters 0x01-0x1F.
    ///
    /// NUL is not included; only [`RuleFlag::Zero`] substitutes it, so a
    /// `Ctl`-only policy lets NUL through.
    Ctl,
    /// Leading space.
    LeftSpace,
    /// Leading `.`.
    LeftPeriod,
    /// Leading `~`.
    LeftTilde,
    /// Leading CR, LF, HT or VT.
    LeftCrLfHtVt,
    /// Trailing space.
    RightSpace,
    /// Trailing `.`.
    RightPeriod,
    /// Trailing CR, LF, HT or VT.
    RightCrLfHtVt,
    /// Bytes that are not part of valid UTF-8, escaped as `‛XX`.
    InvalidUtf8,
}

const WIN_TRIGGERS: &[char] = &['<', '>', ':', '"', '?', '*', '|'];
const CR_LF_HT_VT: &[char] = &['\r', '\n', '\t', '\u{0B}'];
const CTL_TRIGGERS: &[char] = &[
    '\u{01}', '\u{02}', '\u{03}', '\u{04}', '\u{05}', '\u{06}', '\u{07}', '\u{08}', '\u{09}',
    '\u{0A}', '\u{0B}', '\u{0C}', '\u{0D}', '\u{0E}', '\u{0F}', '\u{10}', '\u{11}', '\u{12}',
    '\u{13}', '\u{14}', '\u{15}', '\u{16}', '\u{17}', '\u{18}', '\u{19}', '\u{1A}', '\u{1B}',
    '\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}',
];

impl RuleFlag {
    /// Every rule, in ascending bit order.
    pub const ALL: [Self; 15] = [
        Self::Zero,
        Self::Slash,
        Self::Win,
        Self::BackSlash,
        Self::HashPercent,
        Self::Del,
        Self::Ctl,
        Self::LeftSpace,
        Self::LeftPeriod,
        Self::LeftTilde,
        Self::LeftCrLfHtVt,
        Self::RightSpace,
        Self::RightPeriod,
        Self::RightCrLfHtVt,
        Self::InvalidUtf8,
    ];

    /// Returns the single-bit policy for this rule.
    #[must_use]
    pub const fn as_policy(self) -> EncodePolicy {
        EncodePolicy::from_bits(1 << self as u32)
    }

    /// Returns the canonical name used by [`EncodePolicy`]'s `Display` and
    /// `FromStr` implementations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "Zero",
            Self::Slash => "Slash",
            Self::Win => "Win",
            Self::BackSlash => "BackSlash",
            Self::HashPercent => "HashPercent",
            Self::Del => "Del",
            Self::Ctl => "Ctl",
            Self::LeftSpace => "LeftSpace",
            Self::LeftPeriod => "LeftPeriod",
            Self::LeftTilde => "LeftTilde",
            Self::LeftCrLfHtVt => "LeftCrLfHtVt",
            Self::RightSpace => "RightSpace",
            Self::RightPeriod => "RightPeriod",
            Self::RightCrLfHtVt => "RightCrLfHtVt",
            Self::InvalidUtf8 => "InvalidUtf8",
        }
    }

    /// Returns where in a name the rule applies.
    #[must_use]
    pub const fn scope(self) -> RuleScope {
        match self {
            Self::Zero
            | Self::Slash
            | Self::Win
            | Self::BackSlash
            | Self::HashPercent
            | Self::Del
            | Self::Ctl => RuleScope::Content,
            Self::LeftSpace | Self::LeftPeriod | Self::LeftTilde | Self::LeftCrLfHtVt => {
                RuleScope::Leading
            }
            Self::RightSpace | Self::RightPeriod | Self::RightCrLfHtVt => RuleScope::Trailing,
            Self::InvalidUtf8 => RuleScope::Bytes,
        }
    }

    /// Returns the characters the rule substitutes.
    ///
    /// [`RuleFlag::InvalidUtf8`] works on bytes rather than characters and
    /// returns an empty slice.
    #[must_use]
    pub const fn triggers(self) -> &'static [char] {
        match self {
            Self::Zero => &['\0'],
            Self::Slash => &['/'],
            Self::Win => WIN_TRIGGERS,
            Self::BackSlash => &['\\'],
            Self::HashPercent => &['#', '%'],
            Self::Del => &['\u{7F}'],
            Self::Ctl => CTL_TRIGGERS,
            Self::LeftSpace | Self::RightSpace => &[' '],
            Self::LeftPeriod | Self::RightPeriod => &['.'],
            Self::LeftTilde => &['~'],
            Self::LeftCrLfHtVt | Self::RightCrLfHtVt => CR_LF_HT_VT,
            Self::InvalidUtf8 => &[],
        }
    }

    /// Returns `true` when `ch` is one of the rule's triggers.
    #[must_use]
    pub fn is_trigger(self, ch: char) -> bool {
        match self {
            Self::Ctl => matches!(ch, '\u{01}'..='\u{1F}'),
            _ => self.triggers().contains(&ch),
        }
    }

    pub(crate) const fn from_bit(bit: u32) -> Option<Self> {
        if bit < Self::ALL.len() as u32 {
            Some(Self::ALL[bit as usize])
        } else {
            None
        }
    }
}

impl FromStr for RuleFlag {
    type Err = ParseRuleFlagError;

    /// Parses a canonical rule name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseRuleFlagError::new(name))
    }
}

impl fmt::Display for RuleFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RuleFlag> for EncodePolicy {
    fn from(flag: RuleFlag) -> Self {
        flag.as_policy()
    }
}
