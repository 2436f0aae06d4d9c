//! The `Link` header value parser.
//!
//! Parsing runs in three nested stages, each scanning forward over the text it
//! is given and reporting where it stopped so the enclosing stage can resume:
//!
//! - **Entry splitter** ([`LinkParser`], [`parse`]): finds the `<uri>` of each
//!   link-entry and hands the text after it to the parameter-block splitter.
//! - **Parameter-block splitter** ([`split_params`]): cuts the parameters of one
//!   entry at the next `,` and splits them on `;`.
//! - **Parameter decoder** ([`decode_param`]): decodes one `name=value` pair,
//!   handling quoted-strings and RFC 2231 extended values.
//!
//! This is not a full RFC 8288 tokenizer. Delimiters are located by plain
//! character search, so a `,` or `;` inside a quoted value still acts as a
//! delimiter. In exchange the parser never fails: every malformed construct
//! degrades to a best-effort value instead of an error.

mod entry;
mod param;
mod params;
mod value;

pub use entry::LinkParser;
pub use entry::parse;
pub use param::decode_param;
pub use params::split_params;

/// Optional whitespace around entries, parameters and values.
pub(crate) const OWS: &[char] = &[' ', '\t'];
