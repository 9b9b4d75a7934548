use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::capability::{DidResolver, SignatureVerifier};
use crate::did::{DidResolutionResult, VerificationMethod};
use crate::error::TokenError;
use crate::jws::{decode_jwt, DecodedJwt};

/// Issuer value marking a self-issued token (subject is its own issuer).
pub const SELF_ISSUED_V2: &str = "https://self-issued.me/v2";

/// Tolerance applied to `iat`/`exp` checks, in seconds.
pub const CLOCK_SKEW_SECS: i64 = 300;

/// Expected audience for incoming tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    /// `aud` must equal this value exactly.
    Single(String),
    /// `aud` must be a member of this set.
    Any(Vec<String>),
}

impl Audience {
    fn matches(&self, aud: &str) -> bool {
        match self {
            Self::Single(expected) => expected == aud,
            Self::Any(expected) => expected.iter().any(|a| a == aud),
        }
    }
}

/// Verification configuration. Everything flows through here; the verifier
/// keeps no state of its own between calls.
#[derive(Clone)]
pub struct VerifyConfig {
    /// When set, a token carrying `aud` must match it. When unset, `aud`
    /// is ignored entirely.
    pub audience: Option<Audience>,
    /// Capability resolving DIDs to documents.
    pub resolver: Arc<dyn DidResolver>,
    /// Capability checking signatures against a verification method.
    pub verifier: Arc<dyn SignatureVerifier>,
}

/// Successful verification result.
#[derive(Debug, Clone)]
pub struct VerifiedJwt {
    /// The accepted claims.
    pub payload: Map<String, Value>,
    /// Full resolver output for the subject DID.
    pub resolution: DidResolutionResult,
    /// The DID the token was authenticated against.
    pub did: String,
    /// The verification method that validated the signature.
    pub authenticator: VerificationMethod,
    /// The original compact token.
    pub token: String,
}

/// Verify a compact token end to end: parse, resolve the subject DID,
/// check the signature, then validate temporal and audience claims.
///
/// Fails fast at the first violation; capability failures propagate
/// without retries. Only the first verification method of the resolved
/// document is tried; there is no fallback to later keys.
pub async fn verify_jwt(token: &str, config: &VerifyConfig) -> Result<VerifiedJwt, TokenError> {
    let decoded = decode_jwt(token)?;

    let did = subject_did(&decoded)?;
    tracing::debug!(did = %did, "resolving subject DID");

    let resolution = config.resolver.resolve(&did).await?;

    let authenticator = resolution
        .did_document
        .verification_method
        .first()
        .cloned()
        .ok_or(TokenError::NoVerificationMethod)?;

    let verified = match config
        .verifier
        .verify(&decoded.signing_input, &decoded.signature, &authenticator)
        .await
    {
        Ok(ok) => ok,
        Err(e) => {
            tracing::debug!(did = %did, error = %e, "signature verifier failed");
            false
        }
    };
    if !verified {
        return Err(TokenError::SignatureInvalid);
    }

    validate_time_claims(&decoded.payload)?;
    validate_audience(&decoded.payload, config.audience.as_ref())?;

    tracing::debug!(did = %did, "token accepted");
    Ok(VerifiedJwt {
        payload: decoded.payload,
        resolution,
        did,
        authenticator,
        token: token.to_string(),
    })
}

/// Determine which DID authenticates the token.
///
/// Normally the issuer. For self-issued tokens the subject authenticates
/// itself: via its `sub` DID, or, when an embedded key (`sub_jwk`) is
/// present, via the DID part of the header `kid`.
fn subject_did(decoded: &DecodedJwt) -> Result<String, TokenError> {
    let iss = decoded
        .payload
        .get("iss")
        .and_then(Value::as_str)
        .ok_or(TokenError::MissingClaim("iss"))?;

    if iss != SELF_ISSUED_V2 {
        return Ok(iss.to_string());
    }

    let sub = decoded
        .payload
        .get("sub")
        .and_then(Value::as_str)
        .ok_or(TokenError::MissingClaim("sub"))?;

    if decoded.payload.get("sub_jwk").is_none() {
        return Ok(sub.to_string());
    }

    let kid = decoded
        .header
        .get("kid")
        .and_then(Value::as_str)
        .ok_or(TokenError::MissingClaim("kid"))?;
    Ok(kid.split('#').next().unwrap_or(kid).to_string())
}

fn validate_time_claims(payload: &Map<String, Value>) -> Result<(), TokenError> {
    let now = Utc::now().timestamp();

    let exp = payload
        .get("exp")
        .and_then(Value::as_i64)
        .ok_or(TokenError::MissingClaim("exp"))?;
    let iat = payload
        .get("iat")
        .and_then(Value::as_i64)
        .ok_or(TokenError::MissingClaim("iat"))?;

    if iat > now + CLOCK_SKEW_SECS {
        return Err(TokenError::IssuedInFuture { iat, now });
    }
    // Equality at the skewed boundary counts as expired.
    if exp <= now - CLOCK_SKEW_SECS {
        return Err(TokenError::Expired { exp, now });
    }
    Ok(())
}

fn validate_audience(
    payload: &Map<String, Value>,
    audience: Option<&Audience>,
) -> Result<(), TokenError> {
    let aud = payload.get("aud").and_then(Value::as_str);
    if let (Some(aud), Some(expected)) = (aud, audience) {
        if !expected.matches(aud) {
            return Err(TokenError::AudienceMismatch {
                aud: aud.to_string(),
            });
        }
    }
    Ok(())
}
