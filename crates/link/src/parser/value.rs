//! Decoding of a single parameter value: quoted-string unescaping and
//! percent-decoding of extended values.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Removes one layer of double quotes and unescapes quoted-pairs.
///
/// Returns `None` if `value` does not start with `"` or has no closing quote.
/// Anything following the closing quote is ignored.
pub(crate) fn unquote(value: &str) -> Option<String> {
    let mut chars = value.strip_prefix('"')?.chars();
    let mut unquoted = String::with_capacity(value.len());

    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(unquoted),
            // a trailing backslash has nothing to escape
            '\\' => unquoted.push(chars.next()?),
            c => unquoted.push(c),
        }
    }

    None
}

/// Percent-decodes an extended value payload into UTF-8 text.
///
/// `+` decodes to a space. Returns `None` if any `%` is not followed by two hex
/// digits or if the decoded bytes are not valid UTF-8.
pub(crate) fn percent_decode(payload: &str) -> Option<String> {
    if !has_valid_escapes(payload) {
        return None;
    }

    let payload: Cow<'_, str> = if payload.contains('+') { Cow::Owned(payload.replace('+', " ")) } else { Cow::Borrowed(payload) };

    percent_decode_str(&payload).decode_utf8().ok().map(Cow::into_owned)
}

fn has_valid_escapes(payload: &str) -> bool {
    let bytes = payload.as_bytes();
    bytes.iter().enumerate().filter(|(_, b)| **b == b'%').all(|(i, _)| {
        matches!(bytes.get(i + 1..i + 3), Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_plain() {
        assert_eq!(unquote(r#""previous chapter""#).as_deref(), Some("previous chapter"));
        assert_eq!(unquote(r#""""#).as_deref(), Some(""));
    }

    #[test]
    fn unquote_escapes() {
        assert_eq!(unquote(r#""say \"hi\"""#).as_deref(), Some(r#"say "hi""#));
        assert_eq!(unquote(r#""back\\slash""#).as_deref(), Some(r"back\slash"));
        assert_eq!(unquote(r#""\a\b""#).as_deref(), Some("ab"));
    }

    #[test]
    fn unquote_escapes_are_quoted_pairs() {
        assert_eq!(unquote(r#""a\nb""#).as_deref(), Some("anb"));
        assert_eq!(unquote(r#""\u00e4""#).as_deref(), Some("u00e4"));
        assert_eq!(unquote(r#""\q""#).as_deref(), Some("q"));
    }

    #[test]
    fn unquote_ignores_trailing_text() {
        assert_eq!(unquote(r#""next" junk"#).as_deref(), Some("next"));
    }

    #[test]
    fn unquote_rejects_invalid() {
        assert_eq!(unquote("next"), None);
        assert_eq!(unquote(r#""unterminated"#), None);
        assert_eq!(unquote(r#""dangling\"#), None);
        assert_eq!(unquote(r#"next""#), None);
    }

    #[test]
    fn unquote_keeps_non_ascii() {
        assert_eq!(unquote("\"nächstes\"").as_deref(), Some("nächstes"));
    }

    #[test]
    fn percent_decode_ascii() {
        assert_eq!(percent_decode("letztes%20Kapitel").as_deref(), Some("letztes Kapitel"));
        assert_eq!(percent_decode("plain").as_deref(), Some("plain"));
        assert_eq!(percent_decode("").as_deref(), Some(""));
    }

    #[test]
    fn percent_decode_multi_byte() {
        assert_eq!(percent_decode("n%c3%a4chstes%20Kapitel").as_deref(), Some("nächstes Kapitel"));
        assert_eq!(percent_decode("%E2%82%AC%20rates").as_deref(), Some("€ rates"));
    }

    #[test]
    fn percent_decode_plus_is_space() {
        assert_eq!(percent_decode("a+b%2Bc").as_deref(), Some("a b+c"));
    }

    #[test]
    fn percent_decode_rejects_malformed_escapes() {
        assert_eq!(percent_decode("100%"), None);
        assert_eq!(percent_decode("%2"), None);
        assert_eq!(percent_decode("%zz"), None);
        assert_eq!(percent_decode("%%41"), None);
    }

    #[test]
    fn percent_decode_rejects_non_utf8() {
        assert_eq!(percent_decode("%A3%20rates"), None);
    }
}
