//! A best-effort parser for HTTP `Link` header values
//!
//! This crate turns the value of a `Link` header
//! ([RFC 8288](https://www.rfc-editor.org/rfc/rfc8288), formerly RFC 5988) into an
//! ordered list of links, each with a target URI and its named parameters.
//! Parameters may be quoted-strings or RFC 2231 extended values that carry their
//! own character encoding and language tag.
//!
//! # Features
//!
//! - Multiple link-entries per header value, returned in order of appearance
//! - Quoted-string parameters with backslash escapes
//! - Extended parameters (`title*=UTF-8'de'letztes%20Kapitel`) with percent-decoding
//!   of multi-byte UTF-8 sequences
//! - Lazy, single pass iteration through [`LinkParser`]
//! - Never fails: malformed input degrades to a best-effort result
//!
//! # Example
//!
//! ```
//! use micro_link::{parse, Param};
//!
//! let value = "</TheBook/chapter2>; rel=\"previous\"; title*=UTF-8'de'letztes%20Kapitel, \
//!              </TheBook/chapter4>; rel=\"next\"; title*=UTF-8'de'n%c3%a4chstes%20Kapitel";
//!
//! let links = parse(value);
//! assert_eq!(links.len(), 2);
//!
//! assert_eq!(links[0].uri(), "/TheBook/chapter2");
//! assert_eq!(links[0].rel(), Some("previous"));
//!
//! let title = links[1].param("title").unwrap();
//! assert_eq!(title, &Param::with_charset("nächstes Kapitel", "UTF-8", "de"));
//! ```
//!
//! # Architecture
//!
//! - [`parser`]: the three parsing stages (entries, parameter blocks, parameters)
//! - [`Link`] and [`Param`]: the parsed data model
//!
//! Parameters that are not extended values, or that declare no encoding or
//! language, carry the explicit defaults [`DEFAULT_ENCODING`] (`us-ascii`) and
//! [`DEFAULT_LANGUAGE`] (`en-us`).
//!
//! # Limitations
//!
//! - A `,` inside a quoted parameter value ends the link-entry early
//! - A `;` inside a quoted parameter value ends the parameter early
//! - Only percent-encoded UTF-8 is decoded. Payloads in other encodings are kept
//!   percent-encoded, next to their declared encoding label
//! - URIs are returned exactly as written, never resolved or normalized
//!
//! Extracting the header from an HTTP response and looking links up by relation
//! are left to callers, e.g. the `micro-link-http` crate.

mod link;
pub mod parser;

pub use link::DEFAULT_ENCODING;
pub use link::DEFAULT_LANGUAGE;
pub use link::Link;
pub use link::Param;

pub use parser::LinkParser;
pub use parser::parse;
