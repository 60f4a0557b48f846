pub mod format;
pub mod history_cache;
pub mod session_gate;
pub mod transaction_form;
