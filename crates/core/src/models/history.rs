use serde::{Deserialize, Serialize};

/// A single point on a value-over-time chart.
///
/// `timestamp` is an opaque axis label, not a parsed date: the backend
/// returns intraday labels like `"11-28 16:55"` for per-ticker series
/// and plain dates for the overall series. The core passes them through
/// untouched — the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub value: f64,
}

/// Raw wire row from `GET /stock/{ticker}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockHistoryRow {
    pub date: String,
    pub price: f64,
}

/// Raw wire row from `GET /portfolio/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHistoryRow {
    pub date: String,
    pub value: f64,
}

// Pure renames: `date` → `timestamp`, `price` → `value`.

impl From<StockHistoryRow> for HistoryPoint {
    fn from(row: StockHistoryRow) -> Self {
        Self {
            timestamp: row.date,
            value: row.price,
        }
    }
}

impl From<PortfolioHistoryRow> for HistoryPoint {
    fn from(row: PortfolioHistoryRow) -> Self {
        Self {
            timestamp: row.date,
            value: row.value,
        }
    }
}
