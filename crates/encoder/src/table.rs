//! Fixed substitute table shared by every rule.
//!
//! Each trigger character owns exactly one substitute, no matter which rule
//! fires it. Control characters map into the Unicode "Control Pictures" block
//! (`␀`..`␡`), printable ASCII punctuation maps to its fullwidth form. The
//! table is a bijection between ASCII triggers and non-ASCII substitutes.

/// Marks the following unit as literal text or as an escaped byte.
///
/// `‛` (SINGLE HIGH-REVERSED-9 QUOTATION MARK) is emitted before any substitute
/// character that appears literally in a name, before a literal quote, and
/// before the two uppercase hex digits of an escaped invalid byte.
pub const QUOTE: char = '\u{201B}';

/// First codepoint of the "SYMBOL FOR" control pictures (`␀`).
const SYMBOL_OFFSET: u32 = 0x2400;

/// Distance between printable ASCII and its fullwidth variant.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

const SYMBOL_FOR_SPACE: char = '\u{2420}';
const SYMBOL_FOR_DELETE: char = '\u{2421}';

/// ASCII punctuation that has a fullwidth substitute.
const FULLWIDTH_TRIGGERS: &[char] = &[
    '/', '\\', '<', '>', ':', '"', '?', '*', '|', '#', '%', '~', '.',
];

/// Returns the substitute for `ch`, or `None` when `ch` is not a trigger of
/// any rule.
///
/// # Examples
///
/// ```
/// assert_eq!(encoder::substitute_for('/'), Some('／'));
/// assert_eq!(encoder::substitute_for('\0'), Some('␀'));
/// assert_eq!(encoder::substitute_for('a'), None);
/// ```
#[must_use]
pub const fn substitute_for(ch: char) -> Option<char> {
    let code = ch as u32;
    match ch {
        '\0'..='\u{1F}' => char::from_u32(SYMBOL_OFFSET + code),
        ' ' => Some(SYMBOL_FOR_SPACE),
        '\u{7F}' => Some(SYMBOL_FOR_DELETE),
        '/' | '\\' | '<' | '>' | ':' | '"' | '?' | '*' | '|' | '#' | '%' | '~' | '.' => {
            char::from_u32(code + FULLWIDTH_OFFSET)
        }
        _ => None,
    }
}

/// Returns the trigger character that `ch` substitutes, or `None` when `ch`
/// is not a substitute.
///
/// This is the exact inverse of [`substitute_for`].
#[must_use]
pub fn original_for(ch: char) -> Option<char> {
    let code = ch as u32;
    match ch {
        '\u{2400}'..='\u{241F}' => char::from_u32(code - SYMBOL_OFFSET),
        SYMBOL_FOR_SPACE => Some(' '),
        SYMBOL_FOR_DELETE => Some('\u{7F}'),
        _ if code > FULLWIDTH_OFFSET => char::from_u32(code - FULLWIDTH_OFFSET)
            .filter(|original| FULLWIDTH_TRIGGERS.contains(original)),
        _ => None,
    }
}

/// Returns `true` when `ch` appears in the right-hand column of the table.
#[must_use]
pub fn is_substitute(ch: char) -> bool {
    original_for(ch).is_some()
}

/// Appends `‛XX` for `byte` using uppercase hex digits.
pub(crate) fn push_escaped_byte(out: &mut Vec<u8>, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    push_char(out, QUOTE);
    out.push(HEX[usize::from(byte >> 4)]);
    out.push(HEX[usize::from(byte & 0x0F)]);
}

/// Parses the two uppercase hex digits produced by [`push_escaped_byte`].
pub(crate) fn parse_escaped_byte(digits: &[u8]) -> Option<u8> {
    match digits {
        [high, low, ..] => Some((hex_value(*high)? << 4) | hex_value(*low)?),
        _ => None,
    }
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

pub(crate) fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}
