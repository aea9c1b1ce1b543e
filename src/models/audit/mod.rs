pub mod request;
pub mod result;

pub use request::{AuditRequest, Strategy};
pub use result::{AuditResult, CombinedResults, MetricValue, Scores, TechStack};
