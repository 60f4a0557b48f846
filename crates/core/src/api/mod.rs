pub mod traits;

// Backend client implementation
pub mod http;
