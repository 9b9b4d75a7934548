use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::error::TokenError;

/// Encode bytes as unpadded base64url, the compact-token segment encoding.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
///
/// Segments travel without padding, so the input is re-padded to a multiple
/// of four before decoding. Already-padded input needs zero pad characters
/// and decodes as well.
pub fn decode(input: &str) -> Result<Vec<u8>, TokenError> {
    let pad = (4 - input.len() % 4) % 4;
    let mut padded = String::with_capacity(input.len() + pad);
    padded.push_str(input);
    for _ in 0..pad {
        padded.push('=');
    }
    URL_SAFE
        .decode(padded)
        .map_err(|e| TokenError::format("invalid base64url segment", e))
}
