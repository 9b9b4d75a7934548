use async_trait::async_trait;

use crate::did::{DidResolutionResult, VerificationMethod};
use crate::error::TokenError;

/// Capability that produces a signature over a signing input.
///
/// The returned string is the transport-encoded signature segment; any
/// padding it carries is stripped by the serializer. Implementations may
/// perform I/O (remote KMS, hardware keys); failures propagate unchanged
/// and abort token creation.
#[async_trait]
pub trait Signer: Send + Sync {
    async fn sign(&self, signing_input: &str) -> Result<String, TokenError>;
}

/// Capability that checks a signature against a verification method.
///
/// Returns `Ok(false)` for a well-formed but non-matching signature;
/// errors are treated the same as a failed check by the verifier pipeline.
#[async_trait]
pub trait SignatureVerifier: Send + Sync {
    async fn verify(
        &self,
        signing_input: &str,
        signature: &str,
        method: &VerificationMethod,
    ) -> Result<bool, TokenError>;
}

/// Capability that resolves a DID to its resolution result.
///
/// Backend-specific settings (registry endpoints, caching) belong to the
/// implementation; the pipeline calls this once per verification and
/// propagates failures without retrying.
#[async_trait]
pub trait DidResolver: Send + Sync {
    async fn resolve(&self, did: &str) -> Result<DidResolutionResult, TokenError>;
}
