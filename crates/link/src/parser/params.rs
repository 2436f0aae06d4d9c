//! Parameter-block splitter: the `; name=value; ...` part following a link's URI.

use std::collections::HashMap;

use crate::link::Param;
use crate::parser::OWS;
use crate::parser::param::decode_param;

/// Splits a parameter block into decoded parameters.
///
/// The block ends at the first `,` (which separates the next link-entry) or at
/// the end of `block`. Commas inside quoted values are not exempted, so such a
/// comma ends the block early. The text before it is split on `;` and every
/// non-empty piece is decoded with [`decode_param`]; a repeated name replaces the
/// earlier value.
///
/// Returns the parameters together with the offset in `block` where the block
/// stopped: the index of the separating comma, or `block.len()`.
pub fn split_params(block: &str) -> (HashMap<String, Param>, usize) {
    let end = block.find(',').unwrap_or(block.len());

    let mut params = HashMap::new();
    for piece in block[..end].split(';').filter(|piece| !piece.trim_matches(OWS).is_empty()) {
        let (name, param) = decode_param(piece);
        params.insert(name, param);
    }

    (params, end)
}
