//! Extraction of links from `http` header types.

use http::header::LINK;
use http::{HeaderMap, HeaderValue};
use micro_link::Link;
use tracing::{debug, trace};

use crate::LinkHeaderError;
use crate::ensure;

/// Maximum combined size in bytes of all `Link` header fields of a message
pub const MAX_LINK_HEADER_BYTES: usize = 8 * 1024;

/// Parses every `Link` field of `headers` into links, in order.
///
/// Multiple `Link` fields form a single comma-separated list, so their links are
/// returned as if the values had been joined with `", "`. A message without a
/// `Link` field yields no links.
///
/// # Errors
///
/// Returns [`LinkHeaderError`] if:
/// - a field value contains characters that are not visible ASCII
/// - the combined values exceed [`MAX_LINK_HEADER_BYTES`]
pub fn links_from_headers(headers: &HeaderMap) -> Result<Vec<Link>, LinkHeaderError> {
    let mut combined = String::new();
    for value in headers.get_all(LINK) {
        let value = value.to_str().map_err(LinkHeaderError::invalid_value)?;

        if !combined.is_empty() {
            combined.push_str(", ");
        }
        combined.push_str(value);

        ensure!(combined.len() <= MAX_LINK_HEADER_BYTES, LinkHeaderError::too_large(combined.len(), MAX_LINK_HEADER_BYTES));
    }

    if combined.is_empty() {
        trace!("no link header present");
        return Ok(Vec::new());
    }

    let links = micro_link::parse(&combined);
    debug!(link_count = links.len(), header_size = combined.len(), "parsed link header");
    Ok(links)
}

/// Parses a single `Link` field value into links, in order.
///
/// # Errors
///
/// Returns [`LinkHeaderError`] if the value is not visible ASCII or is larger
/// than [`MAX_LINK_HEADER_BYTES`].
pub fn links_from_value(value: &HeaderValue) -> Result<Vec<Link>, LinkHeaderError> {
    ensure!(value.len() <= MAX_LINK_HEADER_BYTES, LinkHeaderError::too_large(value.len(), MAX_LINK_HEADER_BYTES));

    let value = value.to_str().map_err(LinkHeaderError::invalid_value)?;
    let links = micro_link::parse(value);
    trace!(link_count = links.len(), "parsed link header value");
    Ok(links)
}
