use serde::{Deserialize, Serialize};

/// The credential for the portfolio API.
///
/// **Read-only** from this library's perspective: it is created from
/// whatever token the host's `SessionStore` hands out and is never
/// mutated or persisted here. The external auth flow owns the token's
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Raw bearer token (sent as `Authorization: Bearer <token>`).
    pub token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}
