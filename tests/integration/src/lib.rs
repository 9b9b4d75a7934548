//! Shared capability implementations for the integration tests: a real
//! Ed25519 signer/verifier pair and a helper building the matching DID
//! resolution result.

use async_trait::async_trait;
use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use serde_json::{json, Value};

use did_jwt::{
    encoding, DidDocument, DidResolutionResult, SignatureVerifier, Signer, TokenError,
    VerificationMethod,
};

/// Ed25519 signer capability backed by an in-memory key.
pub struct Ed25519Signer {
    key: SigningKey,
}

impl Ed25519Signer {
    pub fn generate() -> Self {
        Self {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }
}

#[async_trait]
impl Signer for Ed25519Signer {
    async fn sign(&self, signing_input: &str) -> Result<String, TokenError> {
        let signature = self.key.sign(signing_input.as_bytes());
        Ok(encoding::encode(&signature.to_bytes()))
    }
}

/// Ed25519 verifier capability reading the public key from the
/// verification method's JWK (`x` member, base64url).
pub struct Ed25519Verifier;

#[async_trait]
impl SignatureVerifier for Ed25519Verifier {
    async fn verify(
        &self,
        signing_input: &str,
        signature: &str,
        method: &VerificationMethod,
    ) -> Result<bool, TokenError> {
        let key_b64 = method
            .public_key_jwk
            .as_ref()
            .and_then(|jwk| jwk.get("x"))
            .and_then(Value::as_str)
            .ok_or_else(|| TokenError::Format("verification method carries no key".into()))?;

        let key_bytes: [u8; 32] = encoding::decode(key_b64)?
            .try_into()
            .map_err(|_| TokenError::Format("ed25519 public key must be 32 bytes".into()))?;
        let key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| TokenError::Format(format!("invalid ed25519 public key: {e}")))?;

        let sig_bytes: [u8; 64] = encoding::decode(signature)?
            .try_into()
            .map_err(|_| TokenError::Format("ed25519 signature must be 64 bytes".into()))?;
        let sig = Signature::from_bytes(&sig_bytes);

        Ok(key.verify(signing_input.as_bytes(), &sig).is_ok())
    }
}

/// Build a resolution result whose first verification method carries the
/// given Ed25519 public key as a JWK.
pub fn resolution_for(did: &str, key: &VerifyingKey) -> DidResolutionResult {
    DidResolutionResult {
        did_document: DidDocument {
            id: did.to_string(),
            verification_method: vec![VerificationMethod {
                id: format!("{did}#keys-1"),
                method_type: "JsonWebKey2020".to_string(),
                controller: Some(did.to_string()),
                public_key_jwk: Some(json!({
                    "kty": "OKP",
                    "crv": "Ed25519",
                    "x": encoding::encode(key.as_bytes()),
                })),
            }],
        },
    }
}
