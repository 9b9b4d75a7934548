use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::capability::Signer;
use crate::error::TokenError;
use crate::jws::create_jws;

/// Lifetime of a freshly created token, in seconds.
pub const DEFAULT_EXPIRATION_SECS: i64 = 300;

/// Options for [`create_jwt`].
#[derive(Clone)]
pub struct CreateOptions {
    /// Value forced into the `iss` claim; callers cannot override it.
    pub issuer: String,
    /// Capability used to sign the token.
    pub signer: Arc<dyn Signer>,
}

/// Create a signed token with standard timing claims injected.
///
/// The payload is merged over `{iat: now, exp: now + 300}`, so a caller
/// supplying its own `iat` or `exp` wins over the injected values. `iss`
/// is set last from `options.issuer` and always wins.
pub async fn create_jwt(
    payload: &Map<String, Value>,
    options: &CreateOptions,
    header: &Value,
) -> Result<String, TokenError> {
    let iat = Utc::now().timestamp();

    let mut full_payload = Map::new();
    full_payload.insert("iat".to_string(), json!(iat));
    full_payload.insert("exp".to_string(), json!(iat + DEFAULT_EXPIRATION_SECS));
    for (key, value) in payload {
        full_payload.insert(key.clone(), value.clone());
    }
    full_payload.insert("iss".to_string(), Value::String(options.issuer.clone()));

    create_jws(&Value::Object(full_payload), options.signer.as_ref(), header).await
}
