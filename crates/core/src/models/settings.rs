use serde::{Deserialize, Serialize};

/// Client configuration supplied by the embedding frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the portfolio backend (no trailing slash).
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}
