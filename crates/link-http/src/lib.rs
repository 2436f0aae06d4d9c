//! `Link` header support for `http` types
//!
//! This crate connects the [`micro_link`] parser to the [`http`] crate. It reads
//! `Link` fields out of a [`HeaderMap`](http::HeaderMap) and offers a lookup of
//! the parsed links by relation type.
//!
//! # Example
//!
//! ```
//! use http::header::LINK;
//! use http::{HeaderMap, HeaderValue};
//! use micro_link_http::{links_from_headers, LinksExt};
//!
//! let mut headers = HeaderMap::new();
//! headers.append(LINK, HeaderValue::from_static(r#"<https://api.example.com/items?page=2>; rel="next""#));
//! headers.append(LINK, HeaderValue::from_static(r#"<https://api.example.com/items?page=9>; rel="last""#));
//!
//! let links = links_from_headers(&headers)?;
//! let relations = links.by_rel();
//!
//! assert_eq!(relations.uri("next"), Some("https://api.example.com/items?page=2"));
//! assert_eq!(relations.uri("last"), Some("https://api.example.com/items?page=9"));
//! # Ok::<(), micro_link_http::LinkHeaderError>(())
//! ```
//!
//! # Error Handling
//!
//! Parsing itself never fails. [`LinkHeaderError`] is returned only when a
//! header field can't be read as text or is larger than
//! [`MAX_LINK_HEADER_BYTES`].

mod error;
pub use error::LinkHeaderError;

mod extract;
pub use extract::MAX_LINK_HEADER_BYTES;
pub use extract::links_from_headers;
pub use extract::links_from_value;

mod relation;
pub use relation::LinksExt;
pub use relation::RelationMap;

mod utils;
pub(crate) use utils::ensure;
