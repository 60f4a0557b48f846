use thiserror::Error;

/// Unified error type for the entire stockdeck-core library.
/// Every fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Auth ────────────────────────────────────────────────────────
    /// No stored token, or the server rejected the one we sent.
    /// Recovery is a redirect to the login flow, never a retry.
    #[error("Session expired or missing — login required")]
    AuthExpired,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    /// The server refused a buy/sell (insufficient shares, unknown
    /// ticker, …). Carries the server-provided message verbatim.
    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl CoreError {
    /// True for the errors that must trigger the login redirect.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, CoreError::AuthExpired)
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to
        // prevent token leakage. reqwest errors often contain full URLs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
