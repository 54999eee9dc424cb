//! Encoding capability consumed by [`crate::Tag`] when reading attribute
//! values, plus the entity-decoding implementation shipped with this crate.

use memchr::memchr;

/// Converts attribute value text between character representations.
///
/// Injected via [`crate::Tag::set_encoding`] and shared across many tags; the
/// tag model treats it as a pure function of the input string. Absence of a
/// converter is the default and means values are returned as stored.
pub trait Encoding {
    fn convert(&self, value: &str) -> String;
}

/// Decodes a minimal, explicitly limited subset of HTML entities.
///
/// Contract:
/// - Named entities decoded: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`,
///   `&nbsp;`.
/// - Numeric entities decoded only when well-formed and semicolon-terminated:
///   `&#123;` (decimal) and `&#x1F4A9;` (hex).
/// - Only valid Unicode scalar values decode; everything else, including
///   missing semicolons, unknown names, and overlong digit runs, passes
///   through unchanged.
///
/// This is intentionally not HTML5-spec-complete. Keep the behavior narrow
/// and stable.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntityDecoder;

impl Encoding for EntityDecoder {
    fn convert(&self, value: &str) -> String {
        decode_entities(value)
    }
}

const MAX_DEC_DIGITS: usize = 7; // 1114111
const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF

fn decode_entities(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        // '&' is ASCII and cannot appear inside a UTF-8 continuation byte, so
        // every match is a char boundary.
        let Some(rel) = memchr(b'&', &bytes[i..]) else {
            out.push_str(&s[i..]);
            break;
        };
        let amp = i + rel;
        out.push_str(&s[i..amp]);
        match decode_one(bytes, amp) {
            Some((ch, next)) => {
                out.push(ch);
                i = next;
            }
            None => {
                // Malformed or unknown entity: emit the '&' literally and
                // rescan from the next byte.
                out.push('&');
                i = amp + 1;
            }
        }
    }
    out
}

/// Attempts to decode a single entity starting at the `&` at `bytes[amp]`.
/// Returns the decoded char and the index just past the terminating `;`.
fn decode_one(bytes: &[u8], amp: usize) -> Option<(char, usize)> {
    const NAMED: [(&[u8], char); 6] = [
        (b"amp;", '&'),
        (b"lt;", '<'),
        (b"gt;", '>'),
        (b"quot;", '"'),
        (b"apos;", '\''),
        (b"nbsp;", '\u{a0}'),
    ];

    let rest = &bytes[amp + 1..];
    for (name, ch) in NAMED {
        if rest.starts_with(name) {
            return Some((ch, amp + 1 + name.len()));
        }
    }

    if rest.first() != Some(&b'#') {
        return None;
    }
    let is_hex = matches!(rest.get(1).copied(), Some(b'x' | b'X'));
    let digits_at = if is_hex { 2 } else { 1 };
    let max_digits = if is_hex { MAX_HEX_DIGITS } else { MAX_DEC_DIGITS };

    // Bounded scan to avoid quadratic behavior on adversarial input.
    let mut digits = 0;
    let mut j = digits_at;
    while j < rest.len() {
        let b = rest[j];
        if b == b';' {
            if digits == 0 {
                return None;
            }
            let radix = if is_hex { 16 } else { 10 };
            let text = std::str::from_utf8(&rest[digits_at..j]).ok()?;
            let code = u32::from_str_radix(text, radix).ok()?;
            let ch = char::from_u32(code)?;
            return Some((ch, amp + 1 + j + 1));
        }
        if digits == max_digits {
            return None;
        }
        let ok = if is_hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return None;
        }
        digits += 1;
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&quot;x&quot; &apos;y&apos;"), "\"x\" 'y'");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{a0}b");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(decode_entities("&#65;"), "A");
        assert_eq!(decode_entities("&#x41;"), "A");
        assert_eq!(decode_entities("&#x1F4A9;"), "\u{1F4A9}");
    }

    #[test]
    fn malformed_entities_pass_through() {
        assert_eq!(decode_entities("&amp"), "&amp");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#x;"), "&#x;");
        assert_eq!(decode_entities("&#99999999;"), "&#99999999;");
        assert_eq!(decode_entities("100% &"), "100% &");
    }

    #[test]
    fn invalid_scalar_values_pass_through() {
        // Surrogate range is not a valid char.
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }

    #[test]
    fn preserves_surrounding_utf8() {
        assert_eq!(decode_entities("héllo &amp; wörld"), "héllo & wörld");
    }
}
