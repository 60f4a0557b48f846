use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The server-computed portfolio state at one point in time.
///
/// Immutable once received: every refresh replaces the whole snapshot,
/// there is no field-by-field merge. All valuation fields (market
/// values, gain/loss) are computed server-side — the client never
/// derives them locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub total_value: f64,
    pub total_cost: f64,
    pub overall_gain_loss: f64,
    pub overall_gain_loss_percent: f64,

    /// Holdings in server-provided order (preserved for display).
    /// Exactly one entry per ticker.
    pub holdings: Vec<Holding>,
}

impl Default for PortfolioSnapshot {
    fn default() -> Self {
        Self {
            total_value: 0.0,
            total_cost: 0.0,
            overall_gain_loss: 0.0,
            overall_gain_loss_percent: 0.0,
            holdings: Vec::new(),
        }
    }
}

impl PortfolioSnapshot {
    /// Look up a holding by ticker (tickers are unique per snapshot).
    #[must_use]
    pub fn holding(&self, ticker: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.ticker == ticker)
    }
}

/// A ticker's net open position within the portfolio.
///
/// `name` and `purchase_date` are optional on the wire — older backend
/// builds omit them — so they deserialize to defaults instead of
/// failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "AAPL"). Unique key within a snapshot.
    pub ticker: String,

    /// Company name for display (may be absent on the wire).
    #[serde(default)]
    pub name: String,

    /// Net open position. Always positive: a sell that would drive it
    /// below zero is rejected server-side and never reaches a snapshot.
    pub quantity: f64,

    pub market_value: f64,
    pub avg_price: f64,

    /// Latest per-share price the server used for valuation.
    #[serde(default)]
    pub current_price: f64,

    pub gain_loss: f64,
    pub gain_loss_percent: f64,

    /// First purchase date (may be absent on the wire).
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}
