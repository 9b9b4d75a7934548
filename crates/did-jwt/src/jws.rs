use serde_json::{Map, Value};

use crate::canonical::canonicalize;
use crate::capability::Signer;
use crate::encoding;
use crate::error::TokenError;

/// A compact token split into its parts, payload still transport-encoded.
#[derive(Debug, Clone)]
pub struct DecodedJws {
    /// Parsed header object.
    pub header: Map<String, Value>,
    /// Payload segment exactly as transmitted.
    pub payload_b64: String,
    /// Signature segment exactly as transmitted.
    pub signature: String,
    /// The bytes the signature covers: `<header segment>.<payload segment>`,
    /// never re-encoded from the parsed values.
    pub signing_input: String,
}

/// A fully decoded compact token.
#[derive(Debug, Clone)]
pub struct DecodedJwt {
    pub header: Map<String, Value>,
    pub payload: Map<String, Value>,
    pub signature: String,
    pub signing_input: String,
}

/// Build a signed compact token over an arbitrary payload.
///
/// Header and payload are canonicalized independently, transport-encoded
/// and joined with `.` to form the signing input. The signer is invoked
/// exactly once; padding in its output is stripped so the token stays
/// unpadded end to end.
pub async fn create_jws(
    payload: &Value,
    signer: &dyn Signer,
    header: &Value,
) -> Result<String, TokenError> {
    let encoded_header = encoding::encode(&canonicalize(header));
    let encoded_payload = encoding::encode(&canonicalize(payload));
    let signing_input = format!("{encoded_header}.{encoded_payload}");

    let signature = signer.sign(&signing_input).await?;
    let signature = signature.replace('=', "");

    Ok(format!("{signing_input}.{signature}"))
}

/// Split a compact token and decode its header, leaving the payload
/// segment untouched.
pub fn decode_jws(token: &str) -> Result<DecodedJws, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Format(format!(
            "expected 3 segments, got {}",
            parts.len()
        )));
    }

    let header_bytes = encoding::decode(parts[0])?;
    let header: Map<String, Value> = serde_json::from_slice(&header_bytes)
        .map_err(|e| TokenError::format("invalid header JSON", e))?;

    Ok(DecodedJws {
        header,
        payload_b64: parts[1].to_string(),
        signature: parts[2].to_string(),
        signing_input: format!("{}.{}", parts[0], parts[1]),
    })
}

/// Fully decode a compact token, including the payload object.
pub fn decode_jwt(token: &str) -> Result<DecodedJwt, TokenError> {
    let jws = decode_jws(token)?;

    let payload_bytes = encoding::decode(&jws.payload_b64)?;
    let payload: Map<String, Value> = serde_json::from_slice(&payload_bytes)
        .map_err(|e| TokenError::format("invalid payload JSON", e))?;

    Ok(DecodedJwt {
        header: jws.header,
        payload,
        signature: jws.signature,
        signing_input: jws.signing_input,
    })
}
