use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::PortfolioApi;
use crate::errors::CoreError;
use crate::models::history::{PortfolioHistoryRow, StockHistoryRow};
use crate::models::session::Session;
use crate::models::settings::Settings;
use crate::models::snapshot::PortfolioSnapshot;
use crate::models::transaction::TransactionRequest;

/// reqwest-backed client for the StockDeck backend.
///
/// Responsibilities end at the wire: status/shape mapping into
/// [`CoreError`]. All state decisions (redirects, retries, caching)
/// belong to the dashboard controller.
pub struct HttpPortfolioApi {
    client: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        // The browser owns request timeouts under WASM.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpPortfolioApi {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

// ── Backend error body ──────────────────────────────────────────────

/// Error responses are `{"message": "..."}`; tolerate other shapes.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extract the server's error message from a failed response, if any.
async fn error_message(resp: Response) -> Option<String> {
    resp.json::<ErrorBody>().await.ok().and_then(|b| b.message)
}

/// Map a GET response's status: 401 → `AuthExpired`, other failures →
/// `Api` with the server message when present.
async fn check_get(endpoint: &str, resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(CoreError::AuthExpired);
    }
    if !status.is_success() {
        let message = error_message(resp)
            .await
            .unwrap_or_else(|| format!("HTTP {status}"));
        return Err(CoreError::Api {
            endpoint: endpoint.to_string(),
            message,
        });
    }
    Ok(resp)
}

/// Map a mutation response's status: 401 → `AuthExpired`, other
/// failures → `TransactionRejected` carrying the server message.
async fn check_mutation(resp: Response) -> Result<(), CoreError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(CoreError::AuthExpired);
    }
    if !status.is_success() {
        let message = error_message(resp)
            .await
            .unwrap_or_else(|| "Transaction failed".to_string());
        return Err(CoreError::TransactionRejected(message));
    }
    Ok(())
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_snapshot(&self, session: &Session) -> Result<PortfolioSnapshot, CoreError> {
        let resp = self
            .client
            .get(self.url("/portfolio"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let resp = check_get("/portfolio", resp).await?;
        resp.json().await.map_err(|e| CoreError::Api {
            endpoint: "/portfolio".to_string(),
            message: format!("Failed to parse snapshot: {e}"),
        })
    }

    async fn fetch_portfolio_history(
        &self,
        session: &Session,
    ) -> Result<Vec<PortfolioHistoryRow>, CoreError> {
        let resp = self
            .client
            .get(self.url("/portfolio/history"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let resp = check_get("/portfolio/history", resp).await?;
        resp.json().await.map_err(|e| CoreError::Api {
            endpoint: "/portfolio/history".to_string(),
            message: format!("Failed to parse history: {e}"),
        })
    }

    async fn fetch_stock_history(&self, ticker: &str) -> Result<Vec<StockHistoryRow>, CoreError> {
        let endpoint = format!("/stock/{ticker}/history");
        let resp = self.client.get(self.url(&endpoint)).send().await?;
        let resp = check_get(&endpoint, resp).await?;
        resp.json().await.map_err(|e| CoreError::Api {
            endpoint,
            message: format!("Failed to parse history: {e}"),
        })
    }

    async fn add_stock(
        &self,
        session: &Session,
        request: &TransactionRequest,
    ) -> Result<(), CoreError> {
        let resp = self
            .client
            .post(self.url("/portfolio/add"))
            .bearer_auth(&session.token)
            .json(request)
            .send()
            .await?;
        check_mutation(resp).await
    }

    async fn remove_stock(
        &self,
        session: &Session,
        request: &TransactionRequest,
    ) -> Result<(), CoreError> {
        let resp = self
            .client
            .post(self.url("/portfolio/remove"))
            .bearer_auth(&session.token)
            .json(request)
            .send()
            .await?;
        check_mutation(resp).await
    }
}
