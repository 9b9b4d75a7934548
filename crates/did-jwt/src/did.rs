use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::DidResolver;
use crate::error::TokenError;

/// A verification method (key material) within a DID Document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// Verification method identifier (e.g., "did:example:abc#keys-1").
    pub id: String,
    /// Type of the verification method (e.g., "JsonWebKey2020").
    #[serde(rename = "type")]
    pub method_type: String,
    /// The DID that controls this verification method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    /// Public key material as a JWK, when the method carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<Value>,
}

/// W3C-shaped DID Document, reduced to what signature verification needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    /// The DID subject.
    pub id: String,
    /// Verification methods usable to authenticate the subject, in the
    /// order the resolver returned them.
    #[serde(default)]
    pub verification_method: Vec<VerificationMethod>,
}

/// Result of resolving a DID, as returned by a [`DidResolver`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionResult {
    pub did_document: DidDocument,
}

/// Resolver backed by a fixed in-memory map of DIDs to resolution results.
///
/// Useful for tests and for deployments where the full set of trusted DIDs
/// is known up front.
#[derive(Debug, Clone, Default)]
pub struct StaticDidResolver {
    documents: HashMap<String, DidResolutionResult>,
}

impl StaticDidResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolution result for a DID.
    pub fn register(&mut self, did: impl Into<String>, result: DidResolutionResult) {
        self.documents.insert(did.into(), result);
    }

    /// Number of registered DIDs.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DidResolver for StaticDidResolver {
    async fn resolve(&self, did: &str) -> Result<DidResolutionResult, TokenError> {
        self.documents
            .get(did)
            .cloned()
            .ok_or_else(|| TokenError::Resolution(format!("DID not found: {did}")))
    }
}
