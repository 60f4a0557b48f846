use crate::models::history::HistoryPoint;

/// State of the per-ticker history panel.
///
/// Selection is exclusive: at most one ticker's series is resident (or
/// in flight) at any time. Selecting a ticker evicts whatever was there
/// before; deselecting destroys the entry outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// No ticker selected, no series resident.
    None,
    /// Ticker selected, fetch in flight.
    Pending(String),
    /// Ticker selected, series resident (possibly empty).
    Loaded(String, Vec<HistoryPoint>),
}

/// What the caller must do after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAction {
    /// The ticker was deselected (or an in-flight selection dropped);
    /// nothing to fetch.
    Deselected,
    /// New selection — issue exactly one history fetch for this ticker.
    Fetch(String),
}

/// Lazy, deduplicated, per-ticker history store with toggle semantics.
///
/// The cache itself is a synchronous state machine; the async fetch is
/// driven by the caller, which reports completion via [`resolve`] /
/// [`resolve_failed`]. Both apply only if the ticker is still the
/// pending selection — a result arriving for a ticker the user has
/// toggled away from is discarded silently, which is the only ordering
/// safeguard needed (last-selected-wins by membership, no cancellation).
///
/// [`resolve`]: HistoryCache::resolve
/// [`resolve_failed`]: HistoryCache::resolve_failed
#[derive(Debug, Default)]
pub struct HistoryCache {
    selection: Selection,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::None
    }
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The currently selected ticker, pending or loaded.
    #[must_use]
    pub fn selected_ticker(&self) -> Option<&str> {
        match &self.selection {
            Selection::None => None,
            Selection::Pending(t) | Selection::Loaded(t, _) => Some(t),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.selection, Selection::Pending(_))
    }

    /// The visible series: empty unless a ticker's history is loaded.
    #[must_use]
    pub fn visible_series(&self) -> &[HistoryPoint] {
        match &self.selection {
            Selection::Loaded(_, points) => points,
            _ => &[],
        }
    }

    /// Select or deselect a ticker.
    ///
    /// - Toggling the current selection (pending included) deselects it
    ///   and evicts its entry — no fetch is issued, so a repeated toggle
    ///   while a fetch is in flight never double-fetches.
    /// - Toggling a different ticker evicts the previous selection and
    ///   marks the new one pending; the caller must issue exactly one
    ///   fetch and report back.
    pub fn toggle(&mut self, ticker: &str) -> ToggleAction {
        if self.selected_ticker() == Some(ticker) {
            self.selection = Selection::None;
            return ToggleAction::Deselected;
        }
        self.selection = Selection::Pending(ticker.to_string());
        ToggleAction::Fetch(ticker.to_string())
    }

    /// Fetch completed. Stores the series if `ticker` is still the
    /// pending selection, otherwise drops the result silently — never
    /// resurrects an evicted entry.
    pub fn resolve(&mut self, ticker: &str, points: Vec<HistoryPoint>) {
        if matches!(&self.selection, Selection::Pending(t) if t == ticker) {
            self.selection = Selection::Loaded(ticker.to_string(), points);
        }
    }

    /// Fetch failed. History is supplementary, not critical-path: the
    /// entry resolves to an empty series instead of surfacing an error.
    pub fn resolve_failed(&mut self, ticker: &str) {
        self.resolve(ticker, Vec::new());
    }
}
