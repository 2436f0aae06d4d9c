//! Entry splitter: walks a header value one `<uri>; params...` entry at a time.

use std::collections::HashMap;
use std::iter::FusedIterator;

use tracing::trace;

use crate::link::Link;
use crate::parser::OWS;
use crate::parser::params::split_params;

/// Parses a `Link` header value into its link-entries, in order of appearance.
///
/// Only the value portion of the header is accepted, not the `Link:` name.
/// Parsing never fails; see [`LinkParser`] for how malformed entries degrade.
///
/// # Example
///
/// ```
/// let links = micro_link::parse(r#"<http://example.com/TheBook/chapter2>; rel="previous"; title="previous chapter""#);
///
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].uri(), "http://example.com/TheBook/chapter2");
/// assert_eq!(links[0].rel(), Some("previous"));
/// ```
pub fn parse(value: &str) -> Vec<Link> {
    LinkParser::new(value).collect()
}

/// A single pass iterator over the link-entries of a header value.
///
/// The parser keeps a cursor into the original text and moves it forward past
/// each entry and its separating comma, so the remaining text is never copied.
///
/// Malformed entries still produce a [`Link`]:
///
/// - a segment that does not start with `<` takes its URI from the first
///   character of the segment
/// - when no `>` follows at all, everything up to the next `,` is the URI and
///   the entry has no parameters
/// - empty segments (`,,`) and a trailing `,` produce nothing
#[derive(Debug, Clone)]
pub struct LinkParser<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> LinkParser<'a> {
    /// Creates a parser over a header value, ignoring surrounding whitespace.
    pub fn new(value: &'a str) -> Self {
        Self { input: value.trim_matches(OWS), cursor: 0 }
    }

    /// Returns the text that has not been parsed yet.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }
}

impl Iterator for LinkParser<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let segment = self.remaining().trim_start_matches(OWS);
            let start = self.input.len() - segment.len();

            if segment.is_empty() {
                self.cursor = self.input.len();
                return None;
            }

            if segment.starts_with(',') {
                self.cursor = start + 1;
                continue;
            }

            let (link, consumed) = parse_entry(segment);
            self.cursor = start + consumed;
            return Some(link);
        }
    }
}

impl FusedIterator for LinkParser<'_> {}

/// Parses the entry at the front of `segment`.
///
/// Returns the link and the number of bytes consumed, including the comma that
/// separates it from the next entry.
fn parse_entry(segment: &str) -> (Link, usize) {
    let body = segment.strip_prefix('<').unwrap_or_else(|| {
        trace!(segment, "link entry doesn't start with '<'");
        segment
    });
    let body_start = segment.len() - body.len();

    let Some(uri_end) = body.find('>') else {
        let end = body.find(',').unwrap_or(body.len());
        trace!(segment, "link entry has no closing '>', take uri up to next entry");
        return (Link::new(&body[..end], HashMap::new()), skip_comma(segment, body_start + end));
    };

    let uri = &body[..uri_end];
    let after_uri = body_start + uri_end + 1;
    let tail = &segment[after_uri..];

    match tail.find([';', ',']) {
        Some(index) if tail.as_bytes()[index] == b';' => {
            let block_start = after_uri + index + 1;
            let (params, block_len) = split_params(&segment[block_start..]);
            (Link::new(uri, params), skip_comma(segment, block_start + block_len))
        }
        Some(index) => (Link::new(uri, HashMap::new()), after_uri + index + 1),
        None => (Link::new(uri, HashMap::new()), segment.len()),
    }
}

/// Moves past the comma at `end`, if there is one.
fn skip_comma(segment: &str, end: usize) -> usize {
    if segment[end..].starts_with(',') { end + 1 } else { end }
}
