pub mod history;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod transaction;
