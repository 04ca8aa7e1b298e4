//! Splits a byte name into units: one Unicode scalar or one invalid byte each.
//!
//! Leading and trailing rules are defined over units, so the encoder and the
//! decoder must agree on how a byte string is divided. A byte that does not
//! start a valid UTF-8 sequence is always its own unit, even when it is the
//! lead byte of a truncated sequence.

use crate::table::{self, QUOTE};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Unit {
    Char(char),
    Byte(u8),
}

impl Unit {
    pub(crate) fn write_to(self, out: &mut Vec<u8>) {
        match self {
            Self::Char(ch) => table::push_char(out, ch),
            Self::Byte(byte) => out.push(byte),
        }
    }
}

/// Iterator yielding `(byte offset, unit)` pairs.
#[derive(Clone, Debug)]
pub(crate) struct Units<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Units<'a> {
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub(crate) const fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    pub(crate) fn advance(&mut self, count: usize) {
        self.offset = (self.offset + count).min(self.bytes.len());
    }
}

impl Iterator for Units<'_> {
    type Item = (usize, Unit);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }
        let (unit, len) = split_first_unit(rest);
        let offset = self.offset;
        self.offset += len;
        Some((offset, unit))
    }
}

/// Decodes the first unit of a non-empty slice and returns its byte length.
fn split_first_unit(bytes: &[u8]) -> (Unit, usize) {
    let window = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&window[..err.valid_up_to()]).unwrap_or_default(),
    };
    match valid.chars().next() {
        Some(ch) => (Unit::Char(ch), ch.len_utf8()),
        None => (Unit::Byte(bytes[0]), 1),
    }
}

/// A lexical element of an encoded name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Token {
    /// A unit written without a quote; may be a substitute.
    Bare(Unit),
    /// `‛` followed by a unit that is meant literally.
    Quoted(Unit),
    /// `‛XX`, an escaped byte.
    Escaped(u8),
    /// A quote with nothing after it. Never produced by the encoder.
    DanglingQuote,
}

/// Tokenises an encoded name from left to right.
///
/// Every unit of the original name becomes exactly one token, so the first
/// and last token sit at the same positions as the first and last original
/// units.
#[derive(Clone, Debug)]
pub(crate) struct Tokens<'a> {
    units: Units<'a>,
    escaped_bytes: bool,
}

impl<'a> Tokens<'a> {
    pub(crate) const fn new(bytes: &'a [u8], escaped_bytes: bool) -> Self {
        Self {
            units: Units::new(bytes),
            escaped_bytes,
        }
    }

    pub(crate) const fn offset(&self) -> usize {
        self.units.offset()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.units.remaining().is_empty()
    }
}

impl Iterator for Tokens<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, unit) = self.units.next()?;
        if unit != Unit::Char(QUOTE) {
            return Some((offset, Token::Bare(unit)));
        }

        if self.escaped_bytes
            && let Some(byte) = table::parse_escaped_byte(self.units.remaining())
        {
            self.units.advance(2);
            return Some((offset, Token::Escaped(byte)));
        }

        let token = match self.units.next() {
            Some((_, quoted)) => Token::Quoted(quoted),
            None => Token::DanglingQuote,
        };
        Some((offset, token))
    }
}
