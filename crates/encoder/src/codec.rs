//! The encode/decode engine.
//!
//! Encoding walks the units of a name once. For each unit the active rules are
//! consulted in bit order: content rules first, then the leading rules for the
//! first unit and the trailing rules for the last one, then byte escaping.
//! Because every trigger has one fixed substitute, the order only decides which
//! rule reports the hit, never what is written.
//!
//! Decoding tokenises the encoded name and maps each bare substitute back to its
//! trigger when that trigger is active at the token's position. The encoder
//! quotes any substitute that appears literally in such a position, so a bare
//! substitute is never ambiguous.
//!
//! Decoding text that was not produced by [`EncodePolicy::encode`] is undefined:
//! it never panics, but the result carries no guarantee.

use std::borrow::Cow;

use crate::policy::EncodePolicy;
use crate::rule::RuleFlag;
use crate::table::{self, QUOTE};
use crate::trace;
use crate::unit::{Token, Tokens, Unit, Units};

/// How one unit of a plain name is written to the encoded output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Escape {
    Keep,
    Substitute(char),
    Quote(char),
    Byte(u8),
}

impl Escape {
    fn write_to(self, unit: Unit, out: &mut Vec<u8>) {
        match self {
            Self::Keep => unit.write_to(out),
            Self::Substitute(ch) => table::push_char(out, ch),
            Self::Quote(ch) => {
                table::push_char(out, QUOTE);
                table::push_char(out, ch);
            }
            Self::Byte(byte) => table::push_escaped_byte(out, byte),
        }
    }
}

impl EncodePolicy {
    /// Encodes a single name so that it satisfies this policy.
    ///
    /// The name is treated as one segment: `/` is an ordinary character here
    /// and is substituted only when [`EncodePolicy::SLASH`] is active. Use
    /// [`EncodePolicy::encode_path`] for `/`-separated paths.
    ///
    /// Returns the input unchanged (borrowed) when nothing needed rewriting.
    ///
    /// # Examples
    ///
    /// ```
    /// use encoder::EncodePolicy;
    ///
    /// let windows = EncodePolicy::WIN | EncodePolicy::RIGHT_SPACE;
    /// assert_eq!(&*windows.encode(b"what? "), "what？␠".as_bytes());
    /// assert_eq!(&*windows.decode("what？␠".as_bytes()), b"what? ");
    /// ```
    #[must_use]
    pub fn encode(self, name: &[u8]) -> Cow<'_, [u8]> {
        if self.is_empty() || name.is_empty() {
            return Cow::Borrowed(name);
        }

        let units = Units::new(name);
        let count = units.clone().count();
        let mut encoded: Option<Vec<u8>> = None;

        for (index, (offset, unit)) in units.enumerate() {
            let escape = self.escape(unit, index == 0, index + 1 == count);
            if let Some(out) = encoded.as_mut() {
                escape.write_to(unit, out);
            } else if escape != Escape::Keep {
                let mut out = Vec::with_capacity(name.len() + 16);
                out.extend_from_slice(&name[..offset]);
                escape.write_to(unit, &mut out);
                encoded = Some(out);
            }
        }

        match encoded {
            Some(out) => {
                trace::trace_encoded(self, name.len(), out.len());
                Cow::Owned(out)
            }
            None => Cow::Borrowed(name),
        }
    }

    /// Encodes a UTF-8 name.
    ///
    /// Valid UTF-8 input always encodes to valid UTF-8 output, so this is a
    /// typed convenience around [`EncodePolicy::encode`].
    #[must_use]
    pub fn encode_str(self, name: &str) -> Cow<'_, str> {
        match self.encode(name.as_bytes()) {
            Cow::Borrowed(_) => Cow::Borrowed(name),
            Cow::Owned(bytes) => Cow::Owned(
                String::from_utf8(bytes)
                    .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
            ),
        }
    }

    /// Reverses [`EncodePolicy::encode`] for a single name.
    ///
    /// For every byte string `name`, `decode(encode(name)) == name` under the
    /// same policy. The result may contain invalid UTF-8 when the original name
    /// did.
    #[must_use]
    pub fn decode(self, name: &[u8]) -> Cow<'_, [u8]> {
        if self.is_empty() || name.is_empty() {
            return Cow::Borrowed(name);
        }

        let mut tokens = Tokens::new(name, self.has(RuleFlag::InvalidUtf8));
        let mut decoded: Option<Vec<u8>> = None;
        let mut first = true;

        while let Some((offset, token)) = tokens.next() {
            let last = tokens.is_finished();
            let replacement = self.unescape(token, first, last);
            first = false;

            if let Some(out) = decoded.as_mut() {
                match replacement {
                    Some(unit) => unit.write_to(out),
                    None => out.extend_from_slice(&name[offset..tokens.offset()]),
                }
            } else if let Some(unit) = replacement {
                let mut out = Vec::with_capacity(name.len());
                out.extend_from_slice(&name[..offset]);
                unit.write_to(&mut out);
                decoded = Some(out);
            }
        }

        match decoded {
            Some(out) => {
                trace::trace_decoded(self, name.len(), out.len());
                Cow::Owned(out)
            }
            None => Cow::Borrowed(name),
        }
    }

    /// Converts a name from the [`EncodePolicy::STANDARD`] display form into
    /// this policy's stored form.
    #[must_use]
    pub fn from_standard_name(self, name: &[u8]) -> Cow<'_, [u8]> {
        match Self::STANDARD.decode(name) {
            Cow::Borrowed(plain) => self.encode(plain),
            Cow::Owned(plain) => Cow::Owned(self.encode(&plain).into_owned()),
        }
    }

    /// Converts a name from this policy's stored form into the
    /// [`EncodePolicy::STANDARD`] display form.
    #[must_use]
    pub fn to_standard_name(self, name: &[u8]) -> Cow<'_, [u8]> {
        match self.decode(name) {
            Cow::Borrowed(plain) => Self::STANDARD.encode(plain),
            Cow::Owned(plain) => Cow::Owned(Self::STANDARD.encode(&plain).into_owned()),
        }
    }

    fn escape(self, unit: Unit, first: bool, last: bool) -> Escape {
        match unit {
            Unit::Byte(byte) if self.has(RuleFlag::InvalidUtf8) => Escape::Byte(byte),
            Unit::Byte(_) => Escape::Keep,
            Unit::Char(QUOTE) => Escape::Quote(QUOTE),
            Unit::Char(ch) if self.triggers(ch, first, last) => {
                table::substitute_for(ch).map_or(Escape::Keep, Escape::Substitute)
            }
            Unit::Char(ch)
                if table::original_for(ch)
                    .is_some_and(|original| self.triggers(original, first, last)) =>
            {
                Escape::Quote(ch)
            }
            Unit::Char(_) => Escape::Keep,
        }
    }

    /// Returns the unit a token stands for, or `None` when the token's bytes
    /// are copied to the output verbatim.
    fn unescape(self, token: Token, first: bool, last: bool) -> Option<Unit> {
        match token {
            Token::Bare(Unit::Char(ch)) => table::original_for(ch)
                .filter(|&original| self.triggers(original, first, last))
                .map(Unit::Char),
            Token::Bare(Unit::Byte(_)) | Token::DanglingQuote => None,
            Token::Quoted(unit) => Some(unit),
            Token::Escaped(byte) => Some(Unit::Byte(byte)),
        }
    }
}
