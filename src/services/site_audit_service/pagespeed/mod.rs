pub mod client;

pub use client::{classify_http_error, parse_response, Auditor, StrategyOutcomes};
