use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Direction of a portfolio transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Buying shares — routed to `POST /portfolio/add`
    Buy,
    /// Selling shares — routed to `POST /portfolio/remove`
    Sell,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Buy => write!(f, "Buy"),
            TransactionKind::Sell => write!(f, "Sell"),
        }
    }
}

/// In-progress, unsaved transaction form data.
///
/// `quantity` and `price` are kept as **raw strings**: the form accepts
/// whatever the user types without intermediate rejection, and coercion
/// to numeric types happens exactly once at submit time. A coercion
/// failure lands in `error`, never in a panic.
///
/// Exists only while the modal is open; mutating it never touches the
/// portfolio snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub ticker: String,
    pub kind: TransactionKind,

    /// Raw quantity input. Must coerce to an integer ≥ 1 at submit.
    pub quantity: String,

    /// Raw price-per-share input. Must coerce to a float ≥ 0 at submit.
    pub price: String,

    /// Purchase date. Only meaningful for `Buy`; clamped to today at
    /// edit time (the server remains the authority on validity).
    pub date: NaiveDate,

    /// Coercion failure or server-rejection message, shown inline in
    /// the modal. `None` while the draft is clean.
    pub error: Option<String>,
}

impl TransactionDraft {
    /// Fresh draft with the standard reset values.
    pub fn new(ticker: impl Into<String>, kind: TransactionKind, today: NaiveDate) -> Self {
        Self {
            ticker: ticker.into(),
            kind,
            quantity: "1".to_string(),
            price: "0".to_string(),
            date: today,
            error: None,
        }
    }

    /// Coerce the raw fields into a wire request. This is the single
    /// point where string input becomes numeric.
    pub fn to_request(&self) -> Result<TransactionRequest, CoreError> {
        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation("Quantity must be a whole number".into()))?;
        if quantity < 1 {
            return Err(CoreError::Validation(
                "Quantity must be at least 1".into(),
            ));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation("Price must be a number".into()))?;
        if price < 0.0 {
            return Err(CoreError::Validation(
                "Price must not be negative".into(),
            ));
        }

        Ok(TransactionRequest {
            ticker: self.ticker.clone(),
            quantity,
            price,
            date: self.date,
        })
    }
}

/// Wire body for `POST /portfolio/add` and `POST /portfolio/remove`.
///
/// Field names and types match the backend exactly: `quantity` is an
/// integer, `price` a float, `date` an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub ticker: String,
    pub quantity: u32,
    pub price: f64,
    pub date: NaiveDate,
}
