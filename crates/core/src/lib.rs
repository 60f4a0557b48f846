pub mod api;
pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;

use api::traits::PortfolioApi;
use errors::CoreError;
use models::history::HistoryPoint;
use models::session::Session;
use models::snapshot::PortfolioSnapshot;
use models::transaction::TransactionKind;
use services::history_cache::{HistoryCache, Selection, ToggleAction};
use services::session_gate::{AuthNavigator, SessionGate, SessionStore};
use services::transaction_form::TransactionForm;

/// Top-level dashboard tab. `SearchHistory` and `Watchlist` are
/// placeholder pages upstream; the tab state itself is controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Portfolio,
    SearchHistory,
    Watchlist,
}

/// Main entry point for the StockDeck core library: the portfolio view
/// model the frontend renders from.
///
/// Owns the snapshot, the overall history series, the per-ticker
/// [`HistoryCache`], the [`TransactionForm`], and the session gate —
/// the single source of truth for rendering. All state mutation flows
/// through the methods below on one event loop; network failures are
/// absorbed here and surfaced as degraded state, never as panics or
/// errors bubbling into the rendering layer.
#[must_use]
pub struct Dashboard {
    api: Box<dyn PortfolioApi>,
    gate: SessionGate,
    snapshot: PortfolioSnapshot,
    portfolio_history: Vec<HistoryPoint>,
    history: HistoryCache,
    form: TransactionForm,
    search: String,
    active_page: Page,
    /// True until the very first snapshot fetch succeeds. Subsequent
    /// refreshes and history loads never re-enter the loading state.
    loading: bool,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("holdings", &self.snapshot.holdings.len())
            .field("history_points", &self.portfolio_history.len())
            .field("selection", self.history.selection())
            .field("form_open", &self.form.is_open())
            .field("loading", &self.loading)
            .finish()
    }
}

impl Dashboard {
    pub fn new(
        api: Box<dyn PortfolioApi>,
        store: Box<dyn SessionStore>,
        navigator: Box<dyn AuthNavigator>,
    ) -> Self {
        Self {
            api,
            gate: SessionGate::new(store, navigator),
            snapshot: PortfolioSnapshot::default(),
            portfolio_history: Vec::new(),
            history: HistoryCache::new(),
            form: TransactionForm::new(),
            search: String::new(),
            active_page: Page::default(),
            loading: true,
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// First load. Gate first: with no stored token this performs zero
    /// fetches and triggers the login redirect exactly once. Otherwise
    /// fetches the snapshot and the overall history; the view leaves
    /// the loading state only once the snapshot has arrived.
    pub async fn initialize(&mut self) {
        let Some(session) = self.gate.ensure_session() else {
            return;
        };
        self.refresh_with(&session).await;
    }

    /// Re-fetch snapshot + overall history, replacing state wholesale.
    /// Called at init and after a successful transaction — a single
    /// deliberate edge, never a reactive dependency.
    pub async fn refresh(&mut self) {
        let Some(session) = self.gate.ensure_session() else {
            return;
        };
        self.refresh_with(&session).await;
    }

    async fn refresh_with(&mut self, session: &Session) {
        let mut snapshot_ok = !self.loading;

        match self.api.fetch_snapshot(session).await {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                snapshot_ok = true;
            }
            Err(CoreError::AuthExpired) => {
                self.gate.handle_rejection();
                return;
            }
            // Keep the prior snapshot (or stay loading on first fetch).
            Err(e) => log::error!("Snapshot fetch failed: {e}"),
        }

        match self.api.fetch_portfolio_history(session).await {
            Ok(rows) => {
                self.portfolio_history = rows.into_iter().map(HistoryPoint::from).collect();
            }
            Err(CoreError::AuthExpired) => {
                self.gate.handle_rejection();
                return;
            }
            // Fail open: the snapshot is primary, history supplementary.
            Err(e) => log::warn!("Portfolio history fetch failed: {e}"),
        }

        if snapshot_ok {
            self.loading = false;
        }
    }

    // ── Search ──────────────────────────────────────────────────────

    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.to_string();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Submit the ticker search: normalizes (trim + uppercase) and, if
    /// non-empty, opens a buy form pre-filled with the ticker. No
    /// network call — the user enters the price manually in the modal.
    pub fn submit_search(&mut self) {
        let ticker = self.search.trim().to_uppercase();
        if ticker.is_empty() {
            return;
        }
        self.form.open(&ticker, TransactionKind::Buy, Self::today());
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Open the buy/sell modal for a ticker (a holding card's "buy
    /// more" / "sell" actions). Always resets the draft.
    pub fn open_transaction(&mut self, ticker: &str, kind: TransactionKind) {
        self.form.open(ticker, kind, Self::today());
    }

    pub fn cancel_transaction(&mut self) {
        self.form.cancel();
    }

    pub fn set_quantity(&mut self, raw: &str) {
        self.form.set_quantity(raw);
    }

    pub fn set_price(&mut self, raw: &str) {
        self.form.set_price(raw);
    }

    pub fn set_purchase_date(&mut self, date: NaiveDate) {
        self.form.set_date(date, Self::today());
    }

    /// Submit the open draft. Coercion happens exactly once here; a
    /// coercion failure stays in the modal as an inline error.
    ///
    /// On success the modal closes, the search field clears, and the
    /// snapshot is re-fetched — the draft is discarded, never merged
    /// locally, so the view stays a faithful mirror of the server.
    /// On rejection the modal stays open with the server's message and
    /// the draft preserved for correction.
    pub async fn submit_transaction(&mut self) {
        let Some((kind, request)) = self.form.prepare_request() else {
            return;
        };
        let Some(session) = self.gate.ensure_session() else {
            return;
        };

        let result = match kind {
            TransactionKind::Buy => self.api.add_stock(&session, &request).await,
            TransactionKind::Sell => self.api.remove_stock(&session, &request).await,
        };

        match result {
            Ok(()) => {
                self.form.complete_success();
                self.search.clear();
                self.refresh_with(&session).await;
            }
            Err(CoreError::AuthExpired) => self.gate.handle_rejection(),
            Err(CoreError::TransactionRejected(message)) => self.form.complete_failure(message),
            Err(e) => {
                log::warn!("Transaction submit failed: {e}");
                self.form.complete_failure("Transaction failed");
            }
        }
    }

    // ── Per-ticker history ──────────────────────────────────────────

    /// Select or deselect a ticker's history panel. Selection is
    /// exclusive; a result arriving for a ticker that is no longer
    /// selected is discarded by the cache's membership check.
    pub async fn toggle_selection(&mut self, ticker: &str) {
        match self.history.toggle(ticker) {
            ToggleAction::Deselected => {}
            ToggleAction::Fetch(ticker) => {
                match self.api.fetch_stock_history(&ticker).await {
                    Ok(rows) => {
                        let points = rows.into_iter().map(HistoryPoint::from).collect();
                        self.history.resolve(&ticker, points);
                    }
                    Err(e) => {
                        log::warn!("History fetch failed for {ticker}: {e}");
                        self.history.resolve_failed(&ticker);
                    }
                }
            }
        }
    }

    // ── Read accessors for rendering ────────────────────────────────

    #[must_use]
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn portfolio_history(&self) -> &[HistoryPoint] {
        &self.portfolio_history
    }

    #[must_use]
    pub fn history_selection(&self) -> &Selection {
        self.history.selection()
    }

    #[must_use]
    pub fn selected_ticker(&self) -> Option<&str> {
        self.history.selected_ticker()
    }

    /// The visible per-ticker series (empty unless loaded).
    #[must_use]
    pub fn stock_history(&self) -> &[HistoryPoint] {
        self.history.visible_series()
    }

    #[must_use]
    pub fn form(&self) -> &TransactionForm {
        &self.form
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn set_active_page(&mut self, page: Page) {
        self.active_page = page;
    }

    // ── Internal ────────────────────────────────────────────────────

    fn today() -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}
