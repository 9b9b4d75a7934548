//! DID-bound JWT creation and verification.
//!
//! Implements the compact three-segment token pipeline:
//! - Canonical (key-sorted) JSON encoding of header and payload
//! - Unpadded base64url transport encoding
//! - Compact serialization and parsing (`create_jws` / `decode_jwt`)
//! - Standard claim injection on creation (`iat`, `exp`, forced `iss`)
//! - Verification driven by DID resolution: the issuer (or, for
//!   self-issued tokens, the subject) is resolved to a DID Document and
//!   its first verification method authenticates the signature
//!
//! Cryptographic signing/verification and DID resolution backends are
//! pluggable capabilities ([`Signer`], [`SignatureVerifier`],
//! [`DidResolver`]) injected through [`CreateOptions`] and
//! [`VerifyConfig`]. The core holds no state between calls and performs
//! no retries: capability failures surface immediately.

pub mod canonical;
pub mod capability;
pub mod did;
pub mod encoding;
pub mod error;
pub mod jws;
pub mod jwt;
pub mod verify;

pub use capability::{DidResolver, SignatureVerifier, Signer};
pub use did::{DidDocument, DidResolutionResult, StaticDidResolver, VerificationMethod};
pub use error::TokenError;
pub use jws::{create_jws, decode_jws, decode_jwt, DecodedJws, DecodedJwt};
pub use jwt::{create_jwt, CreateOptions, DEFAULT_EXPIRATION_SECS};
pub use verify::{verify_jwt, Audience, VerifiedJwt, VerifyConfig, CLOCK_SKEW_SECS, SELF_ISSUED_V2};
