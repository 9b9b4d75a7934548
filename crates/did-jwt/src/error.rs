/// Token creation and verification errors.
///
/// Verification is all-or-nothing: the first violated check surfaces as one
/// of these variants and no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Format(String),

    #[error("missing required claim: {0}")]
    MissingClaim(&'static str),

    #[error("DID resolution failed: {0}")]
    Resolution(String),

    #[error("DID document contains no verification method")]
    NoVerificationMethod,

    #[error("signature verification failed")]
    SignatureInvalid,

    #[error("token issued in the future (iat {iat}, now {now})")]
    IssuedInFuture { iat: i64, now: i64 },

    #[error("token expired (exp {exp}, now {now})")]
    Expired { exp: i64, now: i64 },

    #[error("audience mismatch: {aud}")]
    AudienceMismatch { aud: String },

    #[error("signer error: {0}")]
    Signer(String),
}

impl TokenError {
    /// Wrap a transport-decode or JSON-parse failure.
    pub(crate) fn format(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Format(format!("{context}: {err}"))
    }
}
