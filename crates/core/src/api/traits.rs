use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::history::{PortfolioHistoryRow, StockHistoryRow};
use crate::models::session::Session;
use crate::models::snapshot::PortfolioSnapshot;
use crate::models::transaction::TransactionRequest;

/// Trait abstraction over the portfolio backend.
///
/// The dashboard controller only ever talks to this seam, so tests can
/// substitute a scripted mock and the HTTP transport can change without
/// touching any state logic.
///
/// Every authorized call maps a 401-equivalent response to
/// [`CoreError::AuthExpired`]; the caller decides what a redirect means.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioApi: Send + Sync {
    /// `GET /portfolio` — the full server-computed snapshot.
    async fn fetch_snapshot(&self, session: &Session) -> Result<PortfolioSnapshot, CoreError>;

    /// `GET /portfolio/history` — overall portfolio value series.
    async fn fetch_portfolio_history(
        &self,
        session: &Session,
    ) -> Result<Vec<PortfolioHistoryRow>, CoreError>;

    /// `GET /stock/{ticker}/history` — per-ticker price series.
    /// Unauthenticated on the wire.
    async fn fetch_stock_history(&self, ticker: &str) -> Result<Vec<StockHistoryRow>, CoreError>;

    /// `POST /portfolio/add` — record a buy.
    async fn add_stock(
        &self,
        session: &Session,
        request: &TransactionRequest,
    ) -> Result<(), CoreError>;

    /// `POST /portfolio/remove` — record a sell.
    async fn remove_stock(
        &self,
        session: &Session,
        request: &TransactionRequest,
    ) -> Result<(), CoreError>;
}
