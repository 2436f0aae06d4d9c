//! Parameter decoder: turns one `name=value` string into a named [`Param`].

use tracing::trace;

use crate::link::{DEFAULT_ENCODING, DEFAULT_LANGUAGE, Param};
use crate::parser::OWS;
use crate::parser::value::{percent_decode, unquote};

/// Decodes a single link parameter.
///
/// The value is handled in one of three ways:
///
/// - `name*=encoding'language'payload` is an extended value: the `*` is removed
///   from the name and the payload is percent-decoded. If the value does not
///   have exactly three `'`-separated parts the whole value is the payload.
/// - `name="quoted"` has one layer of quotes removed and quoted-pairs unescaped.
/// - anything else is kept verbatim.
///
/// Malformed input never fails. A parameter without `=` is returned as a name
/// with an empty value, an undecodable payload is kept percent-encoded and a
/// value that is not properly quoted is kept as written.
///
/// # Example
///
/// ```
/// use micro_link::parser::decode_param;
///
/// let (name, title) = decode_param(" title*=UTF-8'de'n%c3%a4chstes%20Kapitel");
/// assert_eq!(name, "title");
/// assert_eq!(title.value(), "nächstes Kapitel");
/// assert_eq!(title.encoding(), "UTF-8");
/// assert_eq!(title.language(), "de");
/// ```
pub fn decode_param(raw: &str) -> (String, Param) {
    let raw = raw.trim_matches(OWS);

    let Some((name, value)) = raw.split_once('=') else {
        trace!(param = raw, "link param has no value, keep name only");
        return (raw.to_string(), Param::default());
    };

    let value = value.trim_matches(OWS);
    match name.trim_matches(OWS).strip_suffix('*') {
        Some(name) => (name.to_string(), decode_extended(value)),
        None => (name.trim_matches(OWS).to_string(), decode_quoted(value)),
    }
}

fn decode_extended(value: &str) -> Param {
    let mut parts = value.split('\'');
    let (encoding, language, payload) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(encoding), Some(language), Some(payload), None) => (encoding, language, payload),
        _ => (DEFAULT_ENCODING, DEFAULT_LANGUAGE, value),
    };

    // an empty segment declares nothing, e.g. `UTF-8''payload`
    let encoding = if encoding.is_empty() { DEFAULT_ENCODING } else { encoding };
    let language = if language.is_empty() { DEFAULT_LANGUAGE } else { language };

    let decoded = percent_decode(payload).unwrap_or_else(|| {
        trace!(payload, encoding, "can't decode extended link param, keep it encoded");
        payload.to_string()
    });

    Param::with_charset(decoded, encoding, language)
}

fn decode_quoted(value: &str) -> Param {
    let unquoted = unquote(value).unwrap_or_else(|| {
        trace!(value, "link param is not a quoted-string, keep it verbatim");
        value.to_string()
    });

    Param::new(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_param(raw: &str, expected_name: &str, expected: Param) {
        let (name, param) = decode_param(raw);
        assert_eq!(name, expected_name, "name of {raw:?}");
        assert_eq!(param, expected, "param of {raw:?}");
    }

    #[test]
    fn quoted_value() {
        assert_param(r#"rel="previous""#, "rel", Param::new("previous"));
        assert_param(r#" title="previous chapter" "#, "title", Param::new("previous chapter"));
        assert_param(r#"rel="http://example.net/foo""#, "rel", Param::new("http://example.net/foo"));
    }

    #[test]
    fn quoted_value_with_escapes() {
        assert_param(r#"title="say \"hi\" \\o/""#, "title", Param::new(r#"say "hi" \o/"#));
    }

    #[test]
    fn extended_value() {
        assert_param("title*=UTF-8'de'letztes%20Kapitel", "title", Param::with_charset("letztes Kapitel", "UTF-8", "de"));
    }

    #[test]
    fn extended_value_multi_byte() {
        assert_param("title*=UTF-8'de'n%c3%a4chstes%20Kapitel", "title", Param::with_charset("nächstes Kapitel", "UTF-8", "de"));
    }

    #[test]
    fn extended_value_without_charset() {
        assert_param("title*=letztes%20Kapitel", "title", Param::new("letztes Kapitel"));
    }

    #[test]
    fn extended_value_with_two_parts_is_all_payload() {
        assert_param("title*=UTF-8'letztes%20Kapitel", "title", Param::new("UTF-8'letztes Kapitel"));
    }

    #[test]
    fn extended_value_with_empty_language() {
        assert_param("title*=UTF-8''%e2%82%ac%20rates", "title", Param::with_charset("€ rates", "UTF-8", "en-us"));
    }

    #[test]
    fn extended_value_undecodable_escape_is_kept() {
        assert_param("title*=UTF-8'en'100%", "title", Param::with_charset("100%", "UTF-8", "en"));
    }

    #[test]
    fn extended_value_other_encoding_is_kept() {
        assert_param(
            "title*=iso-8859-1'en'%A3%20rates",
            "title",
            Param::with_charset("%A3%20rates", "iso-8859-1", "en"),
        );
    }

    #[test]
    fn missing_equals() {
        assert_param("crossorigin", "crossorigin", Param::default());
        assert_param("  hreflang  ", "hreflang", Param::default());
    }

    #[test]
    fn bare_value_kept_verbatim() {
        assert_param("rel=next", "rel", Param::new("next"));
        assert_param(r#"title="unterminated"#, "title", Param::new(r#""unterminated"#));
    }

    #[test]
    fn empty_value() {
        assert_param("rel=", "rel", Param::default());
    }

    #[test]
    fn whitespace_around_equals() {
        assert_param(r#"rel = "next""#, "rel", Param::new("next"));
        assert_param("title* = UTF-8'de'Kapitel", "title", Param::with_charset("Kapitel", "UTF-8", "de"));
    }

    #[test]
    fn only_first_equals_splits() {
        assert_param(r#"anchor="?a=1&b=2""#, "anchor", Param::new("?a=1&b=2"));
    }
}
