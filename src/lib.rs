//! Website performance audits backed by the Google PageSpeed Insights v5 API.
//!
//! An [`AuditRequest`] goes to the upstream service through an [`Auditor`],
//! the nested Lighthouse payload is projected into an [`AuditResult`], and
//! the result is printed as a console report or written out as JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{AuditorConfig, DEFAULT_TIMEOUT_SECS, PAGESPEED_API_URL};
pub use error::{AuditError, Result};
pub use models::{
    AuditRequest, AuditResult, CombinedResults, MetricValue, Scores, Strategy, TechStack,
};
pub use services::{classify_metric, classify_score, Auditor, StrategyOutcomes, Tier};
