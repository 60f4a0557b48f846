use chrono::NaiveDate;

use crate::models::transaction::{TransactionDraft, TransactionKind, TransactionRequest};

/// State of the buy/sell entry modal.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Closed,
    Open(TransactionDraft),
}

/// The transaction-entry state machine: `Closed → Open(draft) → Closed`
/// on success, or back to `Open(draft, error)` on failure.
///
/// The draft is write-isolated: nothing here touches the portfolio
/// snapshot. A successful submission is followed by a full refresh
/// instead of a local merge, because all valuation is server-computed.
#[derive(Debug, Default)]
pub struct TransactionForm {
    state: FormState,
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Closed
    }
}

impl TransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open(_))
    }

    #[must_use]
    pub fn draft(&self) -> Option<&TransactionDraft> {
        match &self.state {
            FormState::Open(draft) => Some(draft),
            FormState::Closed => None,
        }
    }

    fn draft_mut(&mut self) -> Option<&mut TransactionDraft> {
        match &mut self.state {
            FormState::Open(draft) => Some(draft),
            FormState::Closed => None,
        }
    }

    /// Open the modal for `ticker`. Valid from `Closed` or `Open`;
    /// always resets the draft (`quantity = 1`, `price = 0`,
    /// `date = today`, no error), regardless of prior state.
    pub fn open(&mut self, ticker: &str, kind: TransactionKind, today: NaiveDate) {
        self.state = FormState::Open(TransactionDraft::new(ticker, kind, today));
    }

    /// Discard the draft unconditionally.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    // ── Field edits (no validation until submit) ────────────────────

    pub fn set_quantity(&mut self, raw: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.quantity = raw.to_string();
        }
    }

    pub fn set_price(&mut self, raw: &str) {
        if let Some(draft) = self.draft_mut() {
            draft.price = raw.to_string();
        }
    }

    /// Set the purchase date, clamped to `today` — the date input never
    /// accepts a future date, mirroring the form's `max` constraint.
    pub fn set_date(&mut self, date: NaiveDate, today: NaiveDate) {
        if let Some(draft) = self.draft_mut() {
            draft.date = date.min(today);
        }
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Coerce the draft into a wire request. On a coercion failure the
    /// message is recorded on the draft and `None` is returned; the
    /// modal stays open for correction. Returns `None` when closed.
    pub fn prepare_request(&mut self) -> Option<(TransactionKind, TransactionRequest)> {
        let draft = self.draft_mut()?;
        match draft.to_request() {
            Ok(request) => {
                draft.error = None;
                Some((draft.kind, request))
            }
            Err(crate::errors::CoreError::Validation(msg)) => {
                draft.error = Some(msg);
                None
            }
            Err(e) => {
                draft.error = Some(e.to_string());
                None
            }
        }
    }

    /// Server accepted the transaction: close and discard the draft.
    pub fn complete_success(&mut self) {
        self.state = FormState::Closed;
    }

    /// Server rejected the transaction: stay open, surface the message,
    /// preserve the draft values so the user can correct and resubmit.
    pub fn complete_failure(&mut self, message: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.error = Some(message.into());
        }
    }
}
