// src/models/mod.rs

pub mod api;
pub mod app;
pub mod audit;
pub mod pagespeed;

pub use api::ParamsRunAudit;
pub use app::AppState;
pub use audit::{
    AuditRequest, AuditResult, CombinedResults, MetricValue, Scores, Strategy, TechStack,
};
pub use pagespeed::PagespeedResponse;
